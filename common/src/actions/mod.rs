//! The actions an access map entry can hold.
//!
//! Every alternative of the `access(5)` grammar is its own type, grouped the
//! way the manual groups them: accepting, rejecting and everything else.
//! [`ActionKind`] combines them.

/// Implement [`Canonical`](crate::canonical::Canonical) for an action that is
/// introduced by a fixed keyword, taking metadata from the keyword table.
macro_rules! keyword_canonical {
    ($action:ty, |$this:ident| $argument:expr) => {
        impl $crate::canonical::Canonical for $action {
            fn keyword(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(
                    <Self as $crate::grammar::Parsable>::KEYWORD.as_str(),
                )
            }

            fn argument(&self) -> Option<::std::borrow::Cow<'_, str>> {
                let $this = self;
                $argument
            }

            fn availability(&self) -> $crate::version::Availability {
                <Self as $crate::grammar::Parsable>::KEYWORD.availability()
            }

            fn effects(&self) -> $crate::effect::Effect {
                <Self as $crate::grammar::Parsable>::KEYWORD.effects()
            }
        }
    };
}

/// An action whose argument is free, possibly empty, text.
macro_rules! optional_text_action {
    ($(#[$doc:meta])* $name:ident, $keyword:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $name {
            text: String,
        }

        impl $name {
            /// Create the action, an empty text meaning none was given
            #[must_use]
            pub fn new(text: &str) -> Self {
                Self {
                    text: text.trim().to_owned(),
                }
            }

            /// The optional text, empty if none was given
            #[must_use]
            pub fn text(&self) -> &str {
                &self.text
            }
        }

        impl $crate::grammar::Parsable for $name {
            const KEYWORD: $crate::keyword::Keyword = $crate::keyword::Keyword::$keyword;

            fn parse(
                _input: &$crate::grammar::Input<'_>,
                argument: &str,
            ) -> Result<Self, $crate::ValidationError> {
                Ok(Self::new(argument))
            }
        }

        keyword_canonical!($name, |this| (!this.text.is_empty())
            .then_some(::std::borrow::Cow::Borrowed(this.text.as_str())));
    };
}

mod accept;
mod delivery;
mod reject;

use enum_dispatch::enum_dispatch;

pub use self::accept::{Accept, Dunno, RestrictionList};
pub use self::delivery::{Bcc, Discard, Filter, Hold, Prepend, Redirect, Warn};
pub use self::reject::{Defer, DeferIfPermit, DeferIfReject, NumericReply, Reject};

/// All actions combined
///
/// See the contained variants for more.
#[enum_dispatch]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// `OK` or an all-numerical result
    Ok(Accept),
    /// `4NN text` or `5NN text`
    NumericReply,
    /// `REJECT optional text...`
    Reject,
    /// `DEFER optional text...`
    Defer,
    /// `DEFER_IF_REJECT optional text...`
    DeferIfReject,
    /// `DEFER_IF_PERMIT optional text...`
    DeferIfPermit,
    /// `restriction...`
    RestrictionList,
    /// `BCC user@domain`
    Bcc,
    /// `DISCARD optional text...`
    Discard,
    /// `DUNNO`
    Dunno,
    /// `FILTER transport:destination`
    Filter,
    /// `HOLD optional text...`
    Hold,
    /// `PREPEND headername: headervalue`
    Prepend,
    /// `REDIRECT user@domain`
    Redirect,
    /// `WARN optional text...`
    Warn,
}

impl ActionKind {
    /// Whether this accepts the matching address etc.
    #[must_use]
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Whether replying makes the SMTP server hang up (`421`/`521`)
    #[must_use]
    pub fn is_disconnect(&self) -> bool {
        matches!(self, Self::NumericReply(reply) if reply.is_disconnect())
    }
}
