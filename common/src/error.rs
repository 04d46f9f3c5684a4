use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// Why an action string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum Reason {
    /// Nothing but whitespace was given
    EmptyInput,
    /// The first word is neither a keyword, a reply code nor a restriction name
    UnknownKeyword,
    /// A numeric first word that is not a valid `4NN`/`5NN` reply code
    MalformedReplyCode,
    /// A required argument is missing, or an argument was given to an action
    /// that takes none (`OK`, `DUNNO`)
    MissingArgument,
    /// `BCC`/`REDIRECT` argument is not `user@domain`
    MalformedAddress,
    /// `FILTER` argument is not `transport:destination`
    MalformedTransportDestination,
    /// `PREPEND` argument is not `headername: headervalue`
    MalformedHeaderPair,
}

/// Error for an action string not following the `access(5)` grammar
///
/// This is rejected user input, never a system fault: retrying the same
/// input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// What kind of problem was detected
    pub reason: Reason,
    /// Character (not byte) position in the raw input where detection failed
    pub offset: usize,
    /// A human readable message
    pub message: String,
    /// The part of the input that was found to be invalid, possibly empty
    pub offending: String,
}

impl ValidationError {
    /// Create a new `ValidationError`
    #[must_use]
    pub fn new(reason: Reason, offset: usize, message: String, offending: String) -> Self {
        Self {
            reason,
            offset,
            message,
            offending,
        }
    }
}
