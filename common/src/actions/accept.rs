use std::borrow::Cow;

use itertools::Itertools;

use crate::canonical::Canonical;
use crate::effect::Effect;
use crate::grammar::{Input, Parsable};
use crate::keyword::Keyword;
use crate::version::Availability;
use crate::ValidationError;

// Shorter all-numerical words are malformed reply codes, not results.
const NUMERIC_OK_MIN_DIGITS: usize = 3;

/// Accept the address etc. that matches the pattern
///
/// An all-numerical result, as generated by address-based relay
/// authorization schemes such as pop-before-smtp, is treated the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accept {
    numeric: Option<String>,
}

impl Accept {
    pub(crate) fn numeric(digits: &str) -> Self {
        Self {
            numeric: Some(digits.to_owned()),
        }
    }

    pub(crate) fn is_numeric_result(token: &str) -> bool {
        token.len() >= NUMERIC_OK_MIN_DIGITS && token.bytes().all(|b| b.is_ascii_digit())
    }

    /// The digits of an all-numerical result, `None` for a plain `OK`
    #[must_use]
    pub fn numeric_result(&self) -> Option<&str> {
        self.numeric.as_deref()
    }
}

impl Parsable for Accept {
    const KEYWORD: Keyword = Keyword::Ok;

    fn parse(input: &Input<'_>, argument: &str) -> Result<Self, ValidationError> {
        input.reject_argument(Self::KEYWORD, argument)?;
        Ok(Self::default())
    }
}

impl Canonical for Accept {
    fn keyword(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.numeric.as_deref().unwrap_or(Self::KEYWORD.as_str()))
    }

    fn argument(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn availability(&self) -> Availability {
        Self::KEYWORD.availability()
    }

    fn effects(&self) -> Effect {
        Self::KEYWORD.effects()
    }
}

/// Pretend that the lookup key was not found
///
/// This prevents Postfix from trying substrings of the lookup key (such as
/// a subdomain name, or a network address subnetwork).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dunno;

impl Parsable for Dunno {
    const KEYWORD: Keyword = Keyword::Dunno;

    fn parse(input: &Input<'_>, argument: &str) -> Result<Self, ValidationError> {
        input.reject_argument(Self::KEYWORD, argument)?;
        Ok(Self)
    }
}

keyword_canonical!(Dunno, |_this| None);

/// Apply the named UCE restrictions, e.g. `permit_mynetworks`
///
/// Restriction names come from the Postfix configuration and are not
/// checked further; each word is kept as written, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionList {
    restrictions: Vec<String>,
}

impl RestrictionList {
    /// Whether `token` may start a restriction list
    pub(crate) fn is_restriction_name(token: &str) -> bool {
        let mut chars = token.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    }

    pub(crate) fn from_words(text: &str) -> Self {
        Self {
            restrictions: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// The restriction names, in the order they were given
    #[must_use]
    pub fn restrictions(&self) -> &[String] {
        &self.restrictions
    }
}

impl Canonical for RestrictionList {
    fn keyword(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.restrictions.first().map_or("", String::as_str))
    }

    fn argument(&self) -> Option<Cow<'_, str>> {
        let rest = self.restrictions.get(1..).unwrap_or_default();
        (!rest.is_empty()).then(|| Cow::Owned(rest.iter().join(" ")))
    }

    fn availability(&self) -> Availability {
        Availability::Always
    }

    fn effects(&self) -> Effect {
        Effect::DELEGATES
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("permit_mynetworks", true)]
    #[case("check_client_access", true)]
    #[case("smtpd-restriction.class2", true)]
    #[case("2fa_restriction", false)]
    #[case("_private", false)]
    #[case("hash:/etc/postfix/access", false)]
    #[case("%%%", false)]
    fn test_restriction_name(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(RestrictionList::is_restriction_name(token), expected);
    }

    #[test]
    fn test_restriction_canonical() {
        let list =
            RestrictionList::from_words("check_sender_access   hash:/etc/postfix/senders\treject");

        assert_eq!(list.restrictions().len(), 3);
        assert_eq!(
            list.to_canonical(),
            "check_sender_access hash:/etc/postfix/senders reject"
        );
    }

    #[test]
    fn test_numeric_result() {
        assert!(Accept::is_numeric_result("450"));
        assert!(Accept::is_numeric_result("1697462400"));
        assert!(!Accept::is_numeric_result("45"));
        assert!(!Accept::is_numeric_result("45x"));

        let accept = Accept::numeric("1697462400");
        assert_eq!(accept.to_canonical(), "1697462400");
        assert_eq!(accept.numeric_result(), Some("1697462400"));
        assert_eq!(Accept::default().numeric_result(), None);
    }
}
