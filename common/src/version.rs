//! Postfix releases, used to tell which actions a given installation knows

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// A Postfix release, compared by `major.minor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostfixVersion {
    /// Major release number
    pub major: u16,
    /// Minor release number
    pub minor: u16,
}

impl PostfixVersion {
    /// Postfix 2.0, introducing `DISCARD`, `DUNNO`, `FILTER` and `HOLD`
    pub const V2_0: Self = Self::new(2, 0);
    /// Postfix 2.1
    pub const V2_1: Self = Self::new(2, 1);
    /// Postfix 2.3, introducing `421 text`
    pub const V2_3: Self = Self::new(2, 3);
    /// Postfix 2.6, introducing `DEFER` and `521 text`
    pub const V2_6: Self = Self::new(2, 6);

    /// Create a version from its parts
    #[must_use]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl Display for PostfixVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Error parsing a [`PostfixVersion`] from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid postfix version '{input}', expected 'major.minor'")]
pub struct ParseVersionError {
    /// The text that could not be parsed
    pub input: String,
}

impl FromStr for PostfixVersion {
    type Err = ParseVersionError;

    /// Parse `major.minor`, ignoring a trailing patch level (`3.7.11`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseVersionError {
            input: s.to_owned(),
        };

        let mut parts = s.trim().splitn(3, '.');
        let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(error)?;
        let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(error)?;
        if let Some(patch) = parts.next() {
            patch.parse::<u16>().map_err(|_| error())?;
        }

        Ok(Self::new(major, minor))
    }
}

/// When an action became available in Postfix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    /// Understood by every release
    Always,
    /// Understood starting with the given release
    Since(PostfixVersion),
    /// Not part of any stable release
    Unstable,
}

impl Availability {
    /// Whether an installation running `version` understands the action.
    ///
    /// Unstable actions are never considered supported.
    #[must_use]
    pub fn is_supported_by(self, version: PostfixVersion) -> bool {
        match self {
            Self::Always => true,
            Self::Since(required) => required <= version,
            Self::Unstable => false,
        }
    }

    /// The first release supporting the action, if it is in a stable release
    /// with a known starting point
    #[must_use]
    pub fn required(self) -> Option<PostfixVersion> {
        match self {
            Self::Since(required) => Some(required),
            Self::Always | Self::Unstable => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("2.6", Ok(PostfixVersion::V2_6))]
    #[case(" 3.7.11 ", Ok(PostfixVersion::new(3, 7)))]
    #[case("3", Err(()))]
    #[case("3.x", Err(()))]
    #[case("3.7.x", Err(()))]
    fn test_parse(#[case] input: &str, #[case] expected: Result<PostfixVersion, ()>) {
        assert_eq!(input.parse::<PostfixVersion>().map_err(|_| ()), expected);
    }

    #[test]
    fn test_ordering() {
        assert!(PostfixVersion::V2_1 < PostfixVersion::V2_3);
        assert!(PostfixVersion::new(3, 0) > PostfixVersion::V2_6);
    }

    #[test]
    fn test_availability() {
        let since = Availability::Since(PostfixVersion::V2_6);

        assert!(since.is_supported_by(PostfixVersion::new(3, 4)));
        assert!(!since.is_supported_by(PostfixVersion::V2_3));
        assert!(Availability::Always.is_supported_by(PostfixVersion::new(1, 1)));
        assert!(!Availability::Unstable.is_supported_by(PostfixVersion::new(99, 0)));
    }
}
