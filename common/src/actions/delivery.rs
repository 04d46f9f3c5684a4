use std::borrow::Cow;

use crate::arguments::{Address, HeaderPair, TransportDestination};
use crate::error::Reason;
use crate::grammar::{Input, Parsable};
use crate::keyword::Keyword;
use crate::ValidationError;

/// An action taking a mandatory `user@domain` argument.
macro_rules! address_action {
    ($(#[$doc:meta])* $name:ident, $keyword:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            address: Address,
        }

        impl $name {
            /// Create the action for the given address
            #[must_use]
            pub fn new(address: Address) -> Self {
                Self { address }
            }

            /// The recipient address
            #[must_use]
            pub fn address(&self) -> &Address {
                &self.address
            }
        }

        impl Parsable for $name {
            const KEYWORD: Keyword = Keyword::$keyword;

            fn parse(input: &Input<'_>, argument: &str) -> Result<Self, ValidationError> {
                input.require_argument(Self::KEYWORD, argument, "an address (user@domain)")?;
                let address = Address::parse(argument).map_err(|msg| {
                    input.error(
                        Reason::MalformedAddress,
                        argument,
                        format!("{}: {msg}", Self::KEYWORD),
                    )
                })?;

                Ok(Self { address })
            }
        }

        keyword_canonical!($name, |this| Some(Cow::Owned(this.address.to_string())));
    };
}

address_action!(
    /// Send one copy of the message to the specified recipient
    ///
    /// If multiple `BCC` actions are specified within the same SMTP MAIL
    /// transaction, only the last action will be used. Not part of a stable
    /// Postfix release.
    Bcc,
    Bcc
);

address_action!(
    /// After the message is queued, send it to the specified address
    /// instead of the intended recipients
    ///
    /// Overrides `FILTER` and affects all recipients of the message.
    Redirect,
    Redirect
);

optional_text_action!(
    /// Claim successful delivery and silently discard the message, logging
    /// the optional text
    ///
    /// Affects all recipients of the message.
    Discard,
    Discard
);

optional_text_action!(
    /// Place the message on the hold queue, logging the optional text
    Hold,
    Hold
);

optional_text_action!(
    /// Log a warning with the optional text, together with client, helo,
    /// sender, recipient and protocol information
    Warn,
    Warn
);

/// After the message is queued, send it through the given content filter
///
/// Overrides the `content_filter` setting and affects all recipients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    target: TransportDestination,
}

impl Filter {
    /// Create the action for the given content filter
    #[must_use]
    pub fn new(target: TransportDestination) -> Self {
        Self { target }
    }

    /// Where the message is sent
    #[must_use]
    pub fn target(&self) -> &TransportDestination {
        &self.target
    }
}

impl Parsable for Filter {
    const KEYWORD: Keyword = Keyword::Filter;

    fn parse(input: &Input<'_>, argument: &str) -> Result<Self, ValidationError> {
        input.require_argument(Self::KEYWORD, argument, "transport:destination")?;
        let target = TransportDestination::parse(argument).map_err(|msg| {
            input.error(
                Reason::MalformedTransportDestination,
                argument,
                format!("{}: {msg}", Self::KEYWORD),
            )
        })?;

        Ok(Self { target })
    }
}

keyword_canonical!(Filter, |this| Some(Cow::Owned(this.target.to_string())));

/// Prepend the specified header to the message
///
/// When more than one `PREPEND` action executes, the first prepended header
/// appears before the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepend {
    header: HeaderPair,
}

impl Prepend {
    /// Create the action for the given header
    #[must_use]
    pub fn new(header: HeaderPair) -> Self {
        Self { header }
    }

    /// The header to prepend
    #[must_use]
    pub fn header(&self) -> &HeaderPair {
        &self.header
    }
}

impl Parsable for Prepend {
    const KEYWORD: Keyword = Keyword::Prepend;

    fn parse(input: &Input<'_>, argument: &str) -> Result<Self, ValidationError> {
        input.require_argument(Self::KEYWORD, argument, "headername: headervalue")?;
        let header = HeaderPair::parse(argument).map_err(|msg| {
            input.error(
                Reason::MalformedHeaderPair,
                argument,
                format!("{}: {msg}", Self::KEYWORD),
            )
        })?;

        Ok(Self { header })
    }
}

keyword_canonical!(Prepend, |this| Some(Cow::Borrowed(this.header.as_str())));

#[cfg(test)]
mod test {
    use super::*;
    use crate::canonical::Canonical;
    use crate::effect::Effect;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_redirect_canonical() {
        let address = Address::parse("abuse@example.org").expect("Failed parsing address");
        let redirect = Redirect::new(address);

        assert_eq!(redirect.to_canonical(), "REDIRECT abuse@example.org");
        assert!(redirect.effects().contains(Effect::AFTER_QUEUE));
    }

    #[test]
    fn test_hold_without_text() {
        let hold = Hold::default();

        assert_eq!(hold.to_canonical(), "HOLD");
        assert_eq!(hold.effects(), Effect::HOLDS | Effect::LOGS | Effect::ALL_RECIPIENTS);
    }

    #[test]
    fn test_prepend_keeps_header_line() {
        let header = HeaderPair::parse("X-Relay-Checked:yes").expect("Failed parsing header");
        let prepend = Prepend::new(header);

        assert_eq!(prepend.header().value(), "yes");
        assert_eq!(prepend.to_canonical(), "PREPEND X-Relay-Checked:yes");
    }
}
