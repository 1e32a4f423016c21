pub mod menu;

pub use crate::domain::model::{Command, EofPolicy, MenuState, SessionEnd, SessionSummary};
pub use crate::utils::error::Result;
