//! ReadWalk - vim-style word and paragraph navigation over rendered documents

pub mod clipboard;
pub mod constants;
pub mod dom;
pub mod engine;
pub mod error;
pub mod key;
pub mod key_handler;
pub mod memory;
pub mod mode;
pub mod movement;
pub mod scroll;
pub mod selection;
pub mod settings;
pub mod term;

#[cfg(test)]
pub(crate) mod test_utils;

pub use engine::{Engine, Host};
pub use error::{Result, WalkError};
pub use key::{EventOutcome, HostMessage, KeyInput, MouseInput};
pub use mode::Mode;
pub use movement::Motion;
pub use settings::Settings;
