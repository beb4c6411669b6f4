//! # hello-core
//!
//! The [`Greeting`] value object: a title and a message, set once at
//! construction and read back unchanged. Also carries the repo-level
//! config that supplies default greeting text.

mod config;
mod error;
mod greeting;

pub use config::{GreetingDefaults, HelloConfig};
pub use error::{HelloError, Result};
pub use greeting::Greeting;
