//! Artist Management System console
//!
//! Terminal front end over the gateway client and view state. The process is
//! the session scope: tokens live in memory until `logout` or exit.

pub mod config;
pub mod error;
pub mod render;
pub mod shell;

pub use crate::config::ConsoleConfig;
pub use error::{ConsoleError, Result};
pub use shell::{Outcome, Shell};
