//! # OWRT Config
//!
//! Environment-driven configuration for OWRT Bot.
//!
//! The configuration is read once at startup, validated, and then shared
//! read-only for the lifetime of the process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
