//! Console front end for the inventory store.
//!
//! Everything here is generic over `BufRead`/`Write`, so the binary wires it to
//! stdin/stdout and the tests drive it with in-memory buffers.

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod prompt;

pub use config::{Config, InputMode};
pub use console::{Console, ConsoleState};
pub use error::CliError;
pub use menu::{MenuChoice, ProductType};
pub use prompt::Prompter;
