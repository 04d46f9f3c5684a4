use postfix_access_common::version::PostfixVersion;

/// The length limit of the stored `action` column
pub const DEFAULT_MAX_LENGTH: usize = 256;

/// How strict [`AccessActionForm::clean`](crate::AccessActionForm::clean)
/// should be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOptions {
    /// The most characters an action may have, after trimming
    pub max_length: usize,
    /// Refuse actions the configured Postfix release does not understand
    pub postfix_version: Option<PostfixVersion>,
    /// Accept actions not part of any stable release (e.g. `BCC`)
    pub allow_unstable: bool,
}

impl FormOptions {
    /// Create options from the individual limits
    #[must_use]
    pub fn new(
        max_length: usize,
        postfix_version: Option<PostfixVersion>,
        allow_unstable: bool,
    ) -> Self {
        Self {
            max_length,
            postfix_version,
            allow_unstable,
        }
    }

    /// Options matching the plain model field: 256 characters and grammar
    /// validation only.
    #[must_use]
    pub fn default_postfix() -> Self {
        Self::new(DEFAULT_MAX_LENGTH, None, true)
    }

    /// Only accept what the given stable Postfix release understands
    #[must_use]
    pub fn for_postfix(version: PostfixVersion) -> Self {
        Self::new(DEFAULT_MAX_LENGTH, Some(version), false)
    }
}

impl Default for FormOptions {
    fn default() -> Self {
        Self::default_postfix()
    }
}
