//! Structured action arguments: addresses, content filters and headers

use std::fmt::{self, Display, Formatter};

use postfix_access_utils::TextParsing;

/// `user@domain`, as taken by `BCC` and `REDIRECT`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    local_part: String,
    domain: String,
}

impl Address {
    /// Parse an address argument.
    ///
    /// # Errors
    /// Returns a human readable reason unless the text is a single word with
    /// exactly one `@` between a non-empty local part and domain.
    pub fn parse(text: &str) -> Result<Self, &'static str> {
        if text.contains(char::is_whitespace) {
            return Err("address must not contain whitespace");
        }
        let Some((local_part, domain)) = text.delimited('@') else {
            return Err("address must contain an '@'");
        };
        if domain.contains('@') {
            return Err("address must contain exactly one '@'");
        }
        if local_part.is_empty() {
            return Err("address has an empty local part");
        }
        if domain.is_empty() {
            return Err("address has an empty domain");
        }

        Ok(Self {
            local_part: local_part.to_owned(),
            domain: domain.to_owned(),
        })
    }

    /// The part before the `@`
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// The part after the `@`
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

/// `transport:destination` as described in `transport(5)`, taken by `FILTER`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportDestination {
    transport: String,
    destination: String,
}

impl TransportDestination {
    /// Parse a content filter argument.
    ///
    /// The text is split at the first `:`; the destination may contain more
    /// colons, e.g. `smtp:[127.0.0.1]:10025`.
    ///
    /// # Errors
    /// Returns a human readable reason unless the text is a single word with
    /// a non-empty transport and destination.
    pub fn parse(text: &str) -> Result<Self, &'static str> {
        if text.contains(char::is_whitespace) {
            return Err("transport:destination must not contain whitespace");
        }
        let Some((transport, destination)) = text.delimited(':') else {
            return Err("expected transport:destination");
        };
        if transport.is_empty() {
            return Err("transport:destination has an empty transport");
        }
        if destination.is_empty() {
            return Err("transport:destination has an empty destination");
        }

        Ok(Self {
            transport: transport.to_owned(),
            destination: destination.to_owned(),
        })
    }

    /// The `master.cf` service to deliver through
    #[must_use]
    pub fn transport(&self) -> &str {
        &self.transport
    }

    /// Next hop for the transport
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl Display for TransportDestination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.transport, self.destination)
    }
}

/// `headername: headervalue`, taken by `PREPEND`
///
/// The header line is kept as written; only name and value are split out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderPair {
    line: String,
    colon: usize,
}

impl HeaderPair {
    /// Parse a header line.
    ///
    /// # Errors
    /// Returns a human readable reason unless the text is a header name of
    /// printable ASCII, a colon right after it and a non-empty value.
    pub fn parse(text: &str) -> Result<Self, &'static str> {
        let Some((name, value)) = text.delimited(':') else {
            return Err("expected headername: headervalue");
        };
        if name.is_empty() {
            return Err("header name is empty");
        }
        if !name.bytes().all(|b| b.is_ascii_graphic()) {
            return Err("header name must be printable ASCII without spaces");
        }
        if value.trim().is_empty() {
            return Err("header value is empty");
        }

        Ok(Self {
            line: text.to_owned(),
            colon: name.len(),
        })
    }

    /// The header field name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.line[..self.colon]
    }

    /// The header field value, without surrounding whitespace
    #[must_use]
    pub fn value(&self) -> &str {
        self.line[self.colon + 1..].trim()
    }

    /// The header line as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.line
    }
}

impl Display for HeaderPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("archive@example.com", Ok(("archive", "example.com")))]
    #[case("user+tag@[192.0.2.1]", Ok(("user+tag", "[192.0.2.1]")))]
    #[case("not-an-address", Err("address must contain an '@'"))]
    #[case("a@b@c", Err("address must contain exactly one '@'"))]
    #[case("@example.com", Err("address has an empty local part"))]
    #[case("archive@", Err("address has an empty domain"))]
    #[case("archive @example.com", Err("address must not contain whitespace"))]
    fn test_address(#[case] text: &str, #[case] expected: Result<(&str, &str), &'static str>) {
        let parsed = Address::parse(text);

        assert_eq!(
            parsed
                .as_ref()
                .map(|a| (a.local_part(), a.domain()))
                .map_err(|e| *e),
            expected
        );
        if let Ok(address) = parsed {
            assert_eq!(address.to_string(), text);
        }
    }

    #[rstest]
    #[case("smtp:[127.0.0.1]:10025", Ok(("smtp", "[127.0.0.1]:10025")))]
    #[case("scan:localhost", Ok(("scan", "localhost")))]
    #[case("badformat", Err("expected transport:destination"))]
    #[case(":localhost", Err("transport:destination has an empty transport"))]
    #[case("smtp:", Err("transport:destination has an empty destination"))]
    #[case("smtp: host", Err("transport:destination must not contain whitespace"))]
    fn test_transport_destination(
        #[case] text: &str,
        #[case] expected: Result<(&str, &str), &'static str>,
    ) {
        let parsed = TransportDestination::parse(text);

        assert_eq!(
            parsed
                .as_ref()
                .map(|t| (t.transport(), t.destination()))
                .map_err(|e| *e),
            expected
        );
    }

    #[rstest]
    #[case("X-Spam-Flag: YES", Ok(("X-Spam-Flag", "YES")))]
    #[case("X-Checked:by us", Ok(("X-Checked", "by us")))]
    #[case("X-Note: a: b", Ok(("X-Note", "a: b")))]
    #[case("no colon here", Err("expected headername: headervalue"))]
    #[case(": value", Err("header name is empty"))]
    #[case("X Bad: value", Err("header name must be printable ASCII without spaces"))]
    #[case("X-Empty:   ", Err("header value is empty"))]
    fn test_header_pair(#[case] text: &str, #[case] expected: Result<(&str, &str), &'static str>) {
        let parsed = HeaderPair::parse(text);

        assert_eq!(
            parsed
                .as_ref()
                .map(|h| (h.name(), h.value()))
                .map_err(|e| *e),
            expected
        );
        if let Ok(header) = parsed {
            assert_eq!(header.as_str(), text);
        }
    }
}
