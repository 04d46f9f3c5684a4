#![doc = include_str!("../Readme.md")]

pub mod actions;
pub mod arguments;
pub mod canonical;
pub mod effect;
pub mod keyword;
pub mod reply;
pub mod version;

mod error;
mod grammar;

#[cfg(feature = "_fuzzing")]
pub mod fuzzing;

pub use actions::ActionKind;
pub use canonical::Canonical;
pub use error::{Reason, ValidationError};
pub use grammar::{validate, ParsedAction};
