//! Parse action strings against the `access(5)` grammar

use std::fmt::{self, Display};
use std::str::FromStr;

use postfix_access_utils::{char_offset, debug, TextParsing};

use crate::actions::{
    Accept, ActionKind, Bcc, Defer, DeferIfPermit, DeferIfReject, Discard, Dunno, Filter, Hold,
    NumericReply, Prepend, Redirect, Reject, RestrictionList, Warn,
};
use crate::canonical::Canonical;
use crate::effect::Effect;
use crate::keyword::Keyword;
use crate::reply::ReplyCode;
use crate::version::Availability;
use crate::{Reason, ValidationError};

/// Parse an action introduced by a keyword.
pub(crate) trait Parsable: Sized {
    /// The keyword this action starts with
    const KEYWORD: Keyword;

    /// Parse a `Self` from the argument following the keyword.
    ///
    /// `argument` is trimmed, possibly empty, and always a sub-slice of the
    /// raw input held by `input`.
    ///
    /// # Errors
    /// This can fail to parse, returning a [`ValidationError`].
    fn parse(input: &Input<'_>, argument: &str) -> Result<Self, ValidationError>;
}

/// The raw text being validated, used to locate errors
pub(crate) struct Input<'a> {
    raw: &'a str,
}

impl<'a> Input<'a> {
    fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Build an error pointing at `at`, a sub-slice of the raw input
    pub(crate) fn error(
        &self,
        reason: Reason,
        at: &str,
        message: impl Into<String>,
    ) -> ValidationError {
        let offset = char_offset(self.raw, at.byte_offset_in(self.raw));
        ValidationError::new(reason, offset, message.into(), at.to_owned())
    }

    /// Fail unless something follows the keyword
    pub(crate) fn require_argument(
        &self,
        keyword: Keyword,
        argument: &str,
        expected: &str,
    ) -> Result<(), ValidationError> {
        if argument.is_empty() {
            return Err(self.error(
                Reason::MissingArgument,
                argument,
                format!("{keyword} requires {expected}"),
            ));
        }
        Ok(())
    }

    /// Fail if anything follows the keyword
    pub(crate) fn reject_argument(
        &self,
        keyword: Keyword,
        argument: &str,
    ) -> Result<(), ValidationError> {
        if !argument.is_empty() {
            return Err(self.error(
                Reason::MissingArgument,
                argument,
                format!("{keyword} does not take an argument"),
            ));
        }
        Ok(())
    }

    fn parse(&self) -> Result<ActionKind, ValidationError> {
        let trimmed = self.raw.trim();
        if trimmed.is_empty() {
            return Err(self.error(Reason::EmptyInput, &self.raw[..0], "action is empty"));
        }

        let (token, argument) = trimmed.split_token();

        // Reply codes and all-numerical results
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            return self.parse_numeric(token, argument);
        }

        // Keywords match whole tokens only, before falling back to restrictions
        if let Some(keyword) = Keyword::lookup(token) {
            return match keyword {
                Keyword::Ok => self.parse_as::<Accept>(argument),
                Keyword::Reject => self.parse_as::<Reject>(argument),
                Keyword::Defer => self.parse_as::<Defer>(argument),
                Keyword::DeferIfReject => self.parse_as::<DeferIfReject>(argument),
                Keyword::DeferIfPermit => self.parse_as::<DeferIfPermit>(argument),
                Keyword::Bcc => self.parse_as::<Bcc>(argument),
                Keyword::Discard => self.parse_as::<Discard>(argument),
                Keyword::Dunno => self.parse_as::<Dunno>(argument),
                Keyword::Filter => self.parse_as::<Filter>(argument),
                Keyword::Hold => self.parse_as::<Hold>(argument),
                Keyword::Prepend => self.parse_as::<Prepend>(argument),
                Keyword::Redirect => self.parse_as::<Redirect>(argument),
                Keyword::Warn => self.parse_as::<Warn>(argument),
            };
        }

        if RestrictionList::is_restriction_name(token) {
            return Ok(RestrictionList::from_words(trimmed).into());
        }

        Err(self.error(
            Reason::UnknownKeyword,
            token,
            format!("'{token}' is neither an action keyword nor a restriction name"),
        ))
    }

    fn parse_as<P>(&self, argument: &str) -> Result<ActionKind, ValidationError>
    where
        P: Parsable + Into<ActionKind>,
    {
        P::parse(self, argument).map(Into::into)
    }

    fn parse_numeric(&self, token: &str, argument: &str) -> Result<ActionKind, ValidationError> {
        if argument.is_empty() && Accept::is_numeric_result(token) {
            return Ok(Accept::numeric(token).into());
        }

        let code = ReplyCode::parse(token)
            .map_err(|msg| self.error(Reason::MalformedReplyCode, token, msg))?;
        if argument.is_empty() {
            return Err(self.error(
                Reason::MissingArgument,
                argument,
                format!("reply code {code} requires a text"),
            ));
        }

        Ok(NumericReply::new(code, argument).into())
    }
}

/// A successfully validated action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAction {
    kind: ActionKind,
    raw: String,
    normalized: String,
}

impl ParsedAction {
    /// The structured action
    #[must_use]
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Take the structured action out
    #[must_use]
    pub fn into_kind(self) -> ActionKind {
        self.kind
    }

    /// The text as it was given
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The canonical form, to be stored in place of [`Self::raw`]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Since when Postfix understands this action
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.kind.availability()
    }

    /// What executing this action does
    #[must_use]
    pub fn effects(&self) -> Effect {
        self.kind.effects()
    }
}

impl Display for ParsedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for ParsedAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

/// Validate and normalize a raw access map action.
///
/// Leading and trailing whitespace is ignored. The first word selects the
/// action: a keyword (any case), a reply code, an all-numerical result or
/// else the first of a list of restriction names.
///
/// # Errors
/// Returns a [`ValidationError`] describing the first problem found if the
/// text does not follow the `access(5)` action grammar.
pub fn validate(raw: &str) -> Result<ParsedAction, ValidationError> {
    let kind = Input::new(raw).parse()?;
    let normalized = kind.to_canonical();
    debug!("Validated access action '{}' as '{}'", raw, normalized);

    Ok(ParsedAction {
        kind,
        raw: raw.to_owned(),
        normalized,
    })
}
