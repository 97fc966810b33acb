// src/common/token.rs

use core::fmt;

/// Reasons a received line cannot be used as a command token.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TokenError {
    /// The line held a byte outside printable ASCII.
    #[error("Invalid character in token: {0:#04x}")]
    InvalidCharacter(u8),

    /// The line did not fit in the token buffer.
    #[error("Token too long: limit is {max} bytes")]
    TooLong { max: usize },
}

impl TokenError {
    /// The line sent to the host after the error banner.
    pub const fn reason(&self) -> &'static str {
        match self {
            TokenError::InvalidCharacter(_) => "Invalid character in request",
            TokenError::TooLong { .. } => "Request too long",
        }
    }
}

/// A command token received from the host, e.g. `"T"` or `"hPa"`.
///
/// Always non-empty, printable ASCII, with surrounding whitespace removed.
/// Sensors match codes by substring, so one token may name several
/// quantities (`"CRH"` contains both `"C"` and `"RH"`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'a>(&'a str);

impl<'a> Token<'a> {
    /// Validates a raw request line.
    ///
    /// Returns `Ok(None)` for a blank line, which the protocol treats as
    /// "no request this cycle".
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Option<Self>, TokenError> {
        if let Some(&bad) = bytes
            .iter()
            .find(|b| !(b.is_ascii_graphic() || **b == b' ' || **b == b'\t'))
        {
            return Err(TokenError::InvalidCharacter(bad));
        }
        // Printable ASCII is always valid UTF-8, so the fallback is unreachable
        let text = core::str::from_utf8(bytes).unwrap_or_default();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Token(trimmed)))
        }
    }

    /// Validates a token from a string slice.
    pub fn parse(text: &'a str) -> Result<Option<Self>, TokenError> {
        Self::from_bytes(text.as_bytes())
    }

    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// True if `code` appears anywhere in the token.
    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    /// Returns the first of `codes` contained in the token, in slice order.
    pub fn first_match<'c>(&self, codes: &[&'c str]) -> Option<&'c str> {
        codes.iter().copied().find(|code| self.contains(code))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Token<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> Token<'_> {
        Token::parse(s).unwrap().unwrap()
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(token("  T \t").as_str(), "T");
        assert_eq!(token("hPa").as_str(), "hPa");
    }

    #[test]
    fn test_blank_lines_are_absent() {
        assert_eq!(Token::parse(""), Ok(None));
        assert_eq!(Token::parse("   "), Ok(None));
    }

    #[test]
    fn test_rejects_control_and_non_ascii() {
        assert_eq!(Token::from_bytes(b"T\x07"), Err(TokenError::InvalidCharacter(0x07)));
        assert_eq!(Token::from_bytes(b"\xc3\xa9"), Err(TokenError::InvalidCharacter(0xc3)));
        assert_eq!(Token::parse("T\r"), Err(TokenError::InvalidCharacter(b'\r')));
        assert_eq!(Token::from_bytes(b"\xffT"), Err(TokenError::InvalidCharacter(0xff)));
    }

    #[test]
    fn test_tabs_and_spaces_are_accepted_then_trimmed() {
        assert_eq!(Token::from_bytes(b"\tR H "), Ok(Some(Token("R H"))));
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(TokenError::TooLong { max: 32 }.reason(), "Request too long");
        assert_eq!(TokenError::InvalidCharacter(0x07).reason(), "Invalid character in request");
    }

    #[test]
    fn test_substring_matching() {
        let t = token("CRH");
        assert!(t.contains("C"));
        assert!(t.contains("RH"));
        assert!(t.contains("R"));
        assert!(!t.contains("hPa"));
        // Matching is case sensitive
        assert!(!token("c").contains("C"));
    }

    #[test]
    fn test_first_match_follows_code_order() {
        let codes = ["C", "hPa", "m", "RH"];
        assert_eq!(token("RH").first_match(&codes), Some("RH"));
        assert_eq!(token("mRH").first_match(&codes), Some("m"));
        assert_eq!(token("RHC").first_match(&codes), Some("C"));
        assert_eq!(token("X").first_match(&codes), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(token(" V ").to_string(), "V");
    }
}
