//! Text scanning helpers shared by the postfix-access crates.
//!
//! Everything here works on sub-slices of one input string, so positions
//! can always be traced back to the text the user typed.

/// Emit a `tracing` debug event if the calling crate enables its `tracing`
/// feature, otherwise expand to nothing.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    };
}

/// Token level scanning on string slices
pub trait TextParsing {
    /// Split off the first whitespace delimited token.
    ///
    /// Returns the token and the remainder with surrounding whitespace
    /// removed. Both are sub-slices of `self`; an absent remainder is the
    /// empty slice at the end of the token.
    fn split_token(&self) -> (&str, &str);

    /// Split at the first `delimiter`, dropping the delimiter itself.
    fn delimited(&self, delimiter: char) -> Option<(&str, &str)>;

    /// Byte position of `self` inside `outer`, which must contain it.
    fn byte_offset_in(&self, outer: &str) -> usize;
}

impl TextParsing for str {
    fn split_token(&self) -> (&str, &str) {
        let trimmed = self.trim_start();
        match trimmed.find(char::is_whitespace) {
            Some(index) => {
                let (token, rest) = trimmed.split_at(index);
                (token, rest.trim())
            }
            None => (trimmed, &trimmed[trimmed.len()..]),
        }
    }

    fn delimited(&self, delimiter: char) -> Option<(&str, &str)> {
        let index = self.find(delimiter)?;

        Some((&self[..index], &self[index + delimiter.len_utf8()..]))
    }

    fn byte_offset_in(&self, outer: &str) -> usize {
        let start = outer.as_ptr() as usize;
        let inner = self.as_ptr() as usize;

        inner.saturating_sub(start).min(outer.len())
    }
}

/// Convert a byte position inside `input` into a character position.
#[must_use]
pub fn char_offset(input: &str, byte: usize) -> usize {
    let mut byte = byte.min(input.len());
    while !input.is_char_boundary(byte) {
        byte -= 1;
    }
    input[..byte].chars().count()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_token() {
        let input = "  REJECT   go away  ";
        let (token, rest) = input.split_token();

        assert_eq!(token, "REJECT");
        assert_eq!(rest, "go away");
        assert_eq!(rest.byte_offset_in(input), 11);
    }

    #[test]
    fn test_split_single_token() {
        let input = "DUNNO";
        let (token, rest) = input.split_token();

        assert_eq!(token, "DUNNO");
        assert!(rest.is_empty());
        assert_eq!(rest.byte_offset_in(input), input.len());
    }

    #[test]
    fn test_delimited() {
        assert_eq!(
            "smtp:[127.0.0.1]:10025".delimited(':'),
            Some(("smtp", "[127.0.0.1]:10025"))
        );
        assert_eq!("badformat".delimited(':'), None);
    }

    #[test]
    fn test_char_offset() {
        let input = "HOLD größer";
        let (_, rest) = input.split_token();
        let byte = rest.byte_offset_in(input) + "grö".len();

        assert_eq!(char_offset(input, byte), 8);
        // Positions inside a multi-byte char round down
        assert_eq!(char_offset(input, byte - 1), 7);
    }
}
