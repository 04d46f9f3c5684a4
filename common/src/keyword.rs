//! The fixed keyword set of `access(5)` actions and what each one accepts

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::effect::Effect;
use crate::version::{Availability, PostfixVersion};

/// An action keyword.
///
/// Keywords match case-insensitively and only as a whole token, so
/// `reject_unauth_destination` is a restriction name, not `REJECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum Keyword {
    // Accept actions
    Ok,
    // Reject actions
    Reject,
    Defer,
    DeferIfReject,
    DeferIfPermit,
    // Other actions
    Bcc,
    Discard,
    Dunno,
    Filter,
    Hold,
    Prepend,
    Redirect,
    Warn,
}

/// The shape of the argument following a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentShape {
    /// Nothing may follow the keyword
    None,
    /// Free text, possibly empty
    OptionalText,
    /// `user@domain`
    Address,
    /// `transport:destination`, see `transport(5)`
    TransportDestination,
    /// `headername: headervalue`
    HeaderPair,
}

impl ArgumentShape {
    /// Whether the keyword is incomplete without an argument
    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::Address | Self::TransportDestination | Self::HeaderPair
        )
    }
}

impl Keyword {
    /// Look up a single token, ignoring ASCII case
    #[must_use]
    pub fn lookup(token: &str) -> Option<Self> {
        token.parse().ok()
    }

    /// The canonical (upper case) spelling
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// What may follow the keyword
    #[must_use]
    pub fn argument_shape(self) -> ArgumentShape {
        match self {
            Self::Ok | Self::Dunno => ArgumentShape::None,
            Self::Reject
            | Self::Defer
            | Self::DeferIfReject
            | Self::DeferIfPermit
            | Self::Discard
            | Self::Hold
            | Self::Warn => ArgumentShape::OptionalText,
            Self::Bcc | Self::Redirect => ArgumentShape::Address,
            Self::Filter => ArgumentShape::TransportDestination,
            Self::Prepend => ArgumentShape::HeaderPair,
        }
    }

    /// The first Postfix release understanding the keyword
    #[must_use]
    pub fn availability(self) -> Availability {
        match self {
            Self::Ok | Self::Reject => Availability::Always,
            Self::Discard | Self::Dunno | Self::Filter | Self::Hold => {
                Availability::Since(PostfixVersion::V2_0)
            }
            Self::DeferIfReject
            | Self::DeferIfPermit
            | Self::Prepend
            | Self::Redirect
            | Self::Warn => Availability::Since(PostfixVersion::V2_1),
            Self::Defer => Availability::Since(PostfixVersion::V2_6),
            Self::Bcc => Availability::Unstable,
        }
    }

    /// What executing the action does
    #[must_use]
    pub fn effects(self) -> Effect {
        match self {
            Self::Ok => Effect::ACCEPT,
            Self::Reject => Effect::REJECT,
            Self::Defer => Effect::TEMPFAIL,
            Self::DeferIfReject | Self::DeferIfPermit => Effect::TEMPFAIL | Effect::CONDITIONAL,
            Self::Bcc => Effect::ADDS_RECIPIENT,
            Self::Discard => Effect::DISCARDS | Effect::LOGS | Effect::ALL_RECIPIENTS,
            Self::Dunno => Effect::empty(),
            Self::Filter | Self::Redirect => {
                Effect::REROUTES | Effect::ALL_RECIPIENTS | Effect::AFTER_QUEUE
            }
            Self::Hold => Effect::HOLDS | Effect::LOGS | Effect::ALL_RECIPIENTS,
            Self::Prepend => Effect::MODIFIES_HEADERS,
            Self::Warn => Effect::LOGS,
        }
    }

    /// A one line description, suitable as help text next to an input field
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Ok => "Accept the address etc. that matches the pattern.",
            Self::Reject => "Reject with $access_map_reject_code and the optional text.",
            Self::Defer => "Reject with $access_map_defer_code and the optional text.",
            Self::DeferIfReject => "Defer the request if a later restriction would REJECT it.",
            Self::DeferIfPermit => "Defer the request if a later restriction would PERMIT it.",
            Self::Bcc => "Send one copy of the message to the specified recipient.",
            Self::Discard => "Claim successful delivery and silently discard the message.",
            Self::Dunno => "Pretend that the lookup key was not found.",
            Self::Filter => "Send the queued message through the given content filter.",
            Self::Hold => "Place the message on the hold queue.",
            Self::Prepend => "Prepend the specified header to the message.",
            Self::Redirect => "Send the queued message to the given address instead.",
            Self::Warn => "Log a warning with the optional text and client information.",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("OK", Some(Keyword::Ok))]
    #[case("ok", Some(Keyword::Ok))]
    #[case("defer_if_permit", Some(Keyword::DeferIfPermit))]
    #[case("Defer_If_Reject", Some(Keyword::DeferIfReject))]
    #[case("REJECT", Some(Keyword::Reject))]
    #[case("reject_unauth_destination", None)]
    #[case("okay", None)]
    #[case("DEFERIFPERMIT", None)]
    #[case("", None)]
    fn test_lookup(#[case] token: &str, #[case] expected: Option<Keyword>) {
        assert_eq!(Keyword::lookup(token), expected);
    }

    #[test]
    fn test_spelling_round_trips() {
        for keyword in Keyword::iter() {
            assert_eq!(Keyword::lookup(keyword.as_str()), Some(keyword));
            assert_eq!(keyword.to_string(), keyword.as_str());
        }
        assert_eq!(Keyword::DeferIfReject.as_str(), "DEFER_IF_REJECT");
    }

    #[test]
    fn test_required_arguments() {
        let required: Vec<Keyword> = Keyword::iter()
            .filter(|k| k.argument_shape().is_required())
            .collect();

        assert_eq!(
            required,
            vec![
                Keyword::Bcc,
                Keyword::Filter,
                Keyword::Prepend,
                Keyword::Redirect
            ]
        );
    }

    #[test]
    fn test_availability() {
        assert_eq!(Keyword::Bcc.availability(), Availability::Unstable);
        assert_eq!(
            Keyword::Defer.availability().required(),
            Some(PostfixVersion::V2_6)
        );
        assert!(Keyword::Warn
            .availability()
            .is_supported_by(PostfixVersion::V2_1));
    }

    #[test]
    fn test_summary() {
        for keyword in Keyword::iter() {
            assert!(!keyword.summary().is_empty(), "{keyword} has no summary");
        }
        assert_eq!(
            Keyword::Dunno.summary(),
            "Pretend that the lookup key was not found."
        );
    }

    #[cfg(feature = "count-allocations")]
    #[test]
    fn test_lookup_allocations() {
        let info = allocation_counter::measure(|| {
            let res = Keyword::lookup("Defer_If_Permit");

            allocation_counter::opt_out(|| {
                assert_eq!(res, Some(Keyword::DeferIfPermit));
            });
        });
        assert_eq!(info.count_total, 0);
    }
}
