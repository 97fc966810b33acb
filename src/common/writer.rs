// src/common/writer.rs

use super::{error::MonSensError, hal_traits::MonSensSerial, protocol};
use arrayvec::ArrayString;
use core::fmt::Write as _;

/// Longest decimal form of an `i16` (`-32768`).
const INT_BUF_LEN: usize = 6;

/// Serializes responses onto a transport.
///
/// Three tiers: `write_char` is the only call that reaches the transport,
/// `write_text`/`write_int` build on it, and `write_line`/`finish` frame a
/// response.
pub struct ResponseWriter<'t, IF: MonSensSerial> {
    interface: &'t mut IF,
    bytes_written: usize,
}

impl<'t, IF: MonSensSerial> ResponseWriter<'t, IF> {
    pub fn new(interface: &'t mut IF) -> Self {
        ResponseWriter {
            interface,
            bytes_written: 0,
        }
    }

    /// Writes one byte, spinning while the transmit buffer is full.
    pub fn write_char(&mut self, byte: u8) -> Result<(), MonSensError<IF::Error>> {
        nb::block!(self.interface.write_byte(byte)).map_err(MonSensError::Io)?;
        self.bytes_written += 1;
        Ok(())
    }

    /// Writes fixed text verbatim.
    pub fn write_text(&mut self, text: &str) -> Result<(), MonSensError<IF::Error>> {
        for byte in text.bytes() {
            self.write_char(byte)?;
        }
        Ok(())
    }

    /// Writes the decimal form of a reading.
    pub fn write_int(&mut self, value: i16) -> Result<(), MonSensError<IF::Error>> {
        let mut digits = ArrayString::<INT_BUF_LEN>::new();
        // Cannot fail: every i16 fits in INT_BUF_LEN
        let _ = write!(digits, "{}", value);
        self.write_text(&digits)
    }

    /// Writes text followed by the line terminator.
    pub fn write_line(&mut self, text: &str) -> Result<(), MonSensError<IF::Error>> {
        self.write_text(text)?;
        self.write_text(protocol::EOL)
    }

    /// Terminates the current line and flushes the transport.
    pub fn finish(mut self) -> Result<usize, MonSensError<IF::Error>> {
        self.write_text(protocol::EOL)?;
        nb::block!(self.interface.flush()).map_err(MonSensError::Io)?;
        Ok(self.bytes_written)
    }

    /// Flushes without writing a terminator, for responses that already end
    /// in one.
    pub fn flush(self) -> Result<usize, MonSensError<IF::Error>> {
        nb::block!(self.interface.flush()).map_err(MonSensError::Io)?;
        Ok(self.bytes_written)
    }
}
