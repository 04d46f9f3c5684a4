use thiserror::Error;

use postfix_access_common::version::{Availability, PostfixVersion};
use postfix_access_common::{validate, ParsedAction, ValidationError};
use postfix_access_utils::debug;
#[cfg(feature = "tracing")]
use tracing::{instrument, Level};

use crate::options::FormOptions;

const ACTION_FIELD: &str = "action";

/// An access map entry as submitted by an administration front end
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessActionForm {
    /// The raw action text
    pub action: String,
    /// Free form notes, stored as given
    pub notes: String,
}

impl AccessActionForm {
    /// Create a form from the submitted fields
    #[must_use]
    pub fn new(action: &str, notes: &str) -> Self {
        Self {
            action: action.to_owned(),
            notes: notes.to_owned(),
        }
    }

    /// Validate the submitted action and normalize it for storage.
    ///
    /// # Errors
    /// Returns a [`FormError`] if the action is too long, does not follow the
    /// `access(5)` grammar or is not understood by the configured Postfix.
    #[cfg_attr(feature = "tracing", instrument(level = Level::DEBUG, skip_all, fields(action = %self.action)))]
    pub fn clean(&self, options: &FormOptions) -> Result<CleanedAccessAction, FormError> {
        let leading = self.action.chars().take_while(|c| c.is_whitespace()).count();
        let length = self.action.trim().chars().count();
        if length > options.max_length {
            return Err(FormError::TooLong {
                length,
                max: options.max_length,
                offset: leading + options.max_length,
            });
        }

        let action = validate(&self.action)?;
        check_availability(&action, options)?;
        debug!("Cleaned action '{}'", action);

        Ok(CleanedAccessAction {
            action,
            notes: self.notes.clone(),
        })
    }
}

fn check_availability(action: &ParsedAction, options: &FormOptions) -> Result<(), FormError> {
    let availability = action.availability();
    if availability == Availability::Unstable && !options.allow_unstable {
        return Err(FormError::Unstable {
            action: action.normalized().to_owned(),
        });
    }

    let (Some(configured), Some(required)) = (options.postfix_version, availability.required())
    else {
        return Ok(());
    };
    if availability.is_supported_by(configured) {
        return Ok(());
    }

    Err(FormError::Unsupported {
        action: action.normalized().to_owned(),
        required,
        configured,
    })
}

/// A validated entry, ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedAccessAction {
    action: ParsedAction,
    notes: String,
}

impl CleanedAccessAction {
    /// The validated action
    #[must_use]
    pub fn action(&self) -> &ParsedAction {
        &self.action
    }

    /// The action text to store in place of the submitted one
    #[must_use]
    pub fn normalized(&self) -> &str {
        self.action.normalized()
    }

    /// The notes, untouched
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Why a submitted form was refused
#[derive(Debug, Error)]
pub enum FormError {
    /// The action exceeds the stored column length
    #[error("Ensure this value has at most {max} characters (it has {length})")]
    TooLong {
        /// Characters submitted, after trimming
        length: usize,
        /// Characters allowed
        max: usize,
        /// Position of the first character past the limit in the raw input
        offset: usize,
    },

    /// The action does not follow the `access(5)` grammar
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The configured Postfix release is too old for this action
    #[error("'{action}' requires Postfix {required} or later, configured is {configured}")]
    Unsupported {
        /// The normalized action
        action: String,
        /// The first release understanding it
        required: PostfixVersion,
        /// The release the form was configured for
        configured: PostfixVersion,
    },

    /// The action is not part of a stable Postfix release
    #[error("'{action}' is not available in a stable Postfix release")]
    Unstable {
        /// The normalized action
        action: String,
    },
}

impl FormError {
    /// The name of the form field this error belongs to
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::TooLong { .. }
            | Self::Invalid(_)
            | Self::Unsupported { .. }
            | Self::Unstable { .. } => ACTION_FIELD,
        }
    }

    /// Character position of the problem inside the field, if known
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::TooLong { offset, .. } => Some(*offset),
            Self::Invalid(error) => Some(error.offset),
            Self::Unsupported { .. } | Self::Unstable { .. } => None,
        }
    }
}
