//! SMTP reply codes as used by `4NN text` and `5NN text` actions

use std::fmt::{self, Display};

use itertools::Itertools;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::effect::Effect;
use crate::version::{Availability, PostfixVersion};

const REPLY_CODE_LENGTH: usize = 3;

/// The first digit of a reply code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ReplyClass {
    /// `4NN`: try again later
    Transient = 4,
    /// `5NN`: do not try again
    Permanent = 5,
}

/// A three digit SMTP reply code starting with 4 or 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyCode {
    class: ReplyClass,
    code: u16,
}

impl ReplyCode {
    /// Parse a reply code token such as `550`.
    ///
    /// # Errors
    /// Returns a human readable reason if the token is not exactly three
    /// digits starting with 4 or 5.
    pub fn parse(token: &str) -> Result<Self, &'static str> {
        if token.len() != REPLY_CODE_LENGTH || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err("reply code must be exactly three digits");
        }
        let Ok(code) = token.parse::<u16>() else {
            return Err("reply code must be exactly three digits");
        };
        let Ok(class) = ReplyClass::try_from((code / 100) as u8) else {
            return Err("reply code must start with 4 or 5");
        };

        Ok(Self { class, code })
    }

    /// The numeric code, e.g. `550`
    #[must_use]
    pub fn code(self) -> u16 {
        self.code
    }

    /// Whether this is a temporary or permanent failure
    #[must_use]
    pub fn class(self) -> ReplyClass {
        self.class
    }

    /// `421` and `521` make the SMTP server disconnect right after replying
    #[must_use]
    pub fn is_disconnect(self) -> bool {
        matches!(self.code, 421 | 521)
    }

    /// Since when Postfix honours this code
    #[must_use]
    pub fn availability(self) -> Availability {
        match self.code {
            421 => Availability::Since(PostfixVersion::V2_3),
            521 => Availability::Since(PostfixVersion::V2_6),
            _ => Availability::Always,
        }
    }

    /// What replying with this code does
    #[must_use]
    pub fn effects(self) -> Effect {
        let effects = match self.class {
            ReplyClass::Transient => Effect::TEMPFAIL,
            ReplyClass::Permanent => Effect::REJECT,
        };
        if self.is_disconnect() {
            effects | Effect::DISCONNECT
        } else {
            effects
        }
    }
}

impl Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// An RFC 3463 enhanced status code (`5.7.1`) leading a reply text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnhancedStatus {
    code: [u16; REPLY_CODE_LENGTH],
}

impl EnhancedStatus {
    /// Recognise an enhanced status code at the start of `text`.
    ///
    /// Returns `None` if the first word is not `class.subject.detail` with a
    /// class of 2, 4 or 5 and one to three digits per part. Reply text is
    /// free form, so this is informational and never an error.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        let word = text.split_whitespace().next()?;
        let (class, subject, detail) = word.split('.').collect_tuple()?;

        let part = |raw: &str| -> Option<u16> {
            if raw.is_empty() || raw.len() > 3 || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            raw.parse().ok()
        };
        let code = [part(class)?, part(subject)?, part(detail)?];
        if !matches!(code[0], 2 | 4 | 5) || class.len() != 1 {
            return None;
        }

        Some(Self { code })
    }

    /// The three parts of the code
    #[must_use]
    pub fn code(self) -> [u16; REPLY_CODE_LENGTH] {
        self.code
    }

    /// Whether the class digit agrees with the reply code's class.
    ///
    /// Postfix rewrites a disagreeing class, e.g. `550 4.7.1` is sent as
    /// `550 5.7.1`.
    #[must_use]
    pub fn agrees_with(self, reply: ReplyCode) -> bool {
        self.code[0] == u16::from(u8::from(reply.class()))
    }
}

impl Display for EnhancedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code.iter().join("."))
    }
}
