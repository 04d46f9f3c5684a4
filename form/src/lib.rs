#![doc = include_str!("../Readme.md")]

mod form;
mod options;
mod store;

pub use form::{AccessActionForm, CleanedAccessAction, FormError};
pub use options::FormOptions;
pub use store::{submit, AccessActionStore, SubmitError};
