use std::borrow::Cow;

use crate::canonical::Canonical;
use crate::effect::Effect;
use crate::reply::{EnhancedStatus, ReplyCode};
use crate::version::Availability;

/// Reject with the numerical three-digit code and text
///
/// `4NN` means "try again later", `5NN` means "do not try again". `421` and
/// `521` additionally disconnect the SMTP client right away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericReply {
    code: ReplyCode,
    text: String,
    enhanced: Option<EnhancedStatus>,
}

impl NumericReply {
    pub(crate) fn new(code: ReplyCode, text: &str) -> Self {
        let text = text.trim();

        Self {
            code,
            text: text.to_owned(),
            enhanced: EnhancedStatus::detect(text),
        }
    }

    /// The reply code
    #[must_use]
    pub fn code(&self) -> ReplyCode {
        self.code
    }

    /// The reply text, always present
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The enhanced status code the text starts with, if any
    #[must_use]
    pub fn enhanced_status(&self) -> Option<EnhancedStatus> {
        self.enhanced
    }

    /// Whether the SMTP server disconnects after replying
    #[must_use]
    pub fn is_disconnect(&self) -> bool {
        self.code.is_disconnect()
    }
}

impl Canonical for NumericReply {
    fn keyword(&self) -> Cow<'_, str> {
        Cow::Owned(self.code.to_string())
    }

    fn argument(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.text))
    }

    fn availability(&self) -> Availability {
        self.code.availability()
    }

    fn effects(&self) -> Effect {
        self.code.effects()
    }
}

optional_text_action!(
    /// Reject with `$access_map_reject_code` and the optional text,
    /// otherwise with a generic error response
    Reject,
    Reject
);

optional_text_action!(
    /// Reject with `$access_map_defer_code` and the optional text,
    /// otherwise with a generic error response
    Defer,
    Defer
);

optional_text_action!(
    /// Defer the request if some later restriction would result in a
    /// `REJECT` action
    DeferIfReject,
    DeferIfReject
);

optional_text_action!(
    /// Defer the request if some later restriction would result in an
    /// explicit or implicit `PERMIT` action
    DeferIfPermit,
    DeferIfPermit
);

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numeric_reply() {
        let code = ReplyCode::parse("421").expect("Failed parsing 421");
        let reply = NumericReply::new(code, " 4.7.0 Too many connections ");

        assert!(reply.is_disconnect());
        assert_eq!(reply.text(), "4.7.0 Too many connections");
        assert_eq!(reply.enhanced_status().map(EnhancedStatus::code), Some([4, 7, 0]));
        assert_eq!(reply.to_canonical(), "421 4.7.0 Too many connections");
        assert_eq!(reply.effects(), Effect::TEMPFAIL | Effect::DISCONNECT);
    }

    #[test]
    fn test_defer_keeps_text_verbatim() {
        let defer = Defer::new("Mailbox  FULL, come back later");

        assert_eq!(defer.text(), "Mailbox  FULL, come back later");
        assert_eq!(defer.to_canonical(), "DEFER Mailbox  FULL, come back later");
    }
}
