// lib.rs

//! A terminal-style personal portfolio: typed commands print canned
//! sections into a scrolling transcript.

pub mod clock;
pub mod config;
pub mod console;
pub mod content;
pub mod error;
pub mod fragment;
pub mod history;
pub mod input;
pub mod registry;
pub mod repl;

pub use config::Settings;
pub use console::{Change, Console, Key};
pub use error::{ConfigError, LookupError};
pub use fragment::Fragment;
pub use registry::{Command, CommandRegistry, Produced};
