//! # OWRT Bot
//!
//! Telegram bot for remote control of an OpenWrt router.
//!
//! This is the main binary crate. It wires the command router from
//! `owrt-commands` to the Telegram Bot API through `teloxide` and delivers
//! the replies together with the command keyboard.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod reply;

pub use bot::*;
pub use error::*;
pub use reply::*;
