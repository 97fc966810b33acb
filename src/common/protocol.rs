// src/common/protocol.rs

// Fixed wire text of the request/response protocol.

/// Line terminator appended to every response line.
pub const EOL: &str = "\r\n";

/// First line of the response when no sensor accepts a token.
pub const USAGE_BANNER: &str = "Usage:";

/// First line of the response when every accepting sensor failed to measure.
pub const ERROR_BANNER: &str = "Error:";

/// Default number of sensors a communicator can hold.
pub const DEFAULT_CAPACITY: usize = 10;

/// Default size of the token line buffer, in bytes.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 32;

/// Bytes that end a request line.
#[inline]
pub const fn is_line_terminator(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}
