#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use core::menu::MenuLoop;
pub use domain::model::{Command, EofPolicy, MenuState, SessionEnd, SessionSummary};
pub use utils::error::{ConsoleError, Result};
