#![doc = include_str!("../Readme.md")]

pub use postfix_access_common as common;
pub use postfix_access_form as form;

pub use postfix_access_common::{validate, ParsedAction, Reason, ValidationError};
pub use postfix_access_form::{submit, AccessActionForm, AccessActionStore, FormOptions};
