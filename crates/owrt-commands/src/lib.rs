//! # OWRT Commands
//!
//! Chat command routing for OWRT Bot.
//!
//! Incoming messages are turned into a [`Request`], checked against the
//! allow-list, and dispatched through a fixed command table. Handlers run
//! router shell commands through a [`CommandRunner`] and return the reply
//! text. Nothing here knows about Telegram.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod clients;
pub mod framework;
pub mod interfaces;
pub mod messages;
pub mod openvpn;
pub mod request;
pub mod ruantiblock;
pub mod runner;
pub mod start;
pub mod unknown;

pub use auth::*;
pub use framework::*;
pub use messages::KEYBOARD_LAYOUT;
pub use request::*;
pub use runner::*;
