// src/communicator/reader.rs

use crate::common::{error::MonSensError, hal_traits::MonSensSerial, protocol};
use arrayvec::ArrayVec;

/// How a request line ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LineStatus {
    /// The terminator arrived and the whole line is buffered.
    Complete,
    /// The terminator arrived but the line did not fit; only its first `L`
    /// bytes are buffered.
    Overflowed,
}

/// Accumulates request bytes until a line terminator.
///
/// A partial line survives between polls, so a non-blocking transport can
/// deliver a token over several cycles. The finished line stays readable
/// through `line()` until the next `poll`.
#[derive(Debug, Default)]
pub struct LineReader<const L: usize> {
    buffer: ArrayVec<u8, L>,
    overflowed: bool,
    finished: bool,
}

impl<const L: usize> LineReader<L> {
    pub fn new() -> Self {
        LineReader {
            buffer: ArrayVec::new(),
            overflowed: false,
            finished: false,
        }
    }

    /// Reads available bytes until a terminator or `WouldBlock`.
    ///
    /// Returns `Ok(None)` while the line is still incomplete. A transport
    /// error discards the partial line.
    pub fn poll<IF: MonSensSerial>(
        &mut self,
        interface: &mut IF,
    ) -> Result<Option<LineStatus>, MonSensError<IF::Error>> {
        if self.finished {
            self.clear();
        }

        loop {
            let byte = match interface.read_byte() {
                Ok(byte) => byte,
                Err(nb::Error::WouldBlock) => return Ok(None),
                Err(nb::Error::Other(e)) => {
                    self.clear();
                    return Err(MonSensError::Io(e));
                }
            };

            if protocol::is_line_terminator(byte) {
                self.finished = true;
                let status = if self.overflowed {
                    LineStatus::Overflowed
                } else {
                    LineStatus::Complete
                };
                return Ok(Some(status));
            }

            // Keep draining an over-long line up to its terminator
            if self.buffer.try_push(byte).is_err() {
                self.overflowed = true;
            }
        }
    }

    /// The buffered line, without its terminator.
    #[inline]
    pub fn line(&self) -> &[u8] {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
        self.finished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::mock::MockInterface;

    #[test]
    fn test_reads_line_up_to_terminator() {
        let mut mock_if = MockInterface::new();
        mock_if.stage_read_data(b"hPa\nT");
        let mut reader = LineReader::<8>::new();
        assert_eq!(reader.poll(&mut mock_if).unwrap(), Some(LineStatus::Complete));
        assert_eq!(reader.line(), b"hPa");
        // The rest stays queued until the next line completes
        assert_eq!(reader.poll(&mut mock_if).unwrap(), None);
        assert_eq!(reader.line(), b"T");
    }

    #[test]
    fn test_crlf_yields_an_empty_second_line() {
        let mut mock_if = MockInterface::new();
        mock_if.stage_read_data(b"RH\r\n");
        let mut reader = LineReader::<8>::new();
        assert_eq!(reader.poll(&mut mock_if).unwrap(), Some(LineStatus::Complete));
        assert_eq!(reader.line(), b"RH");
        assert_eq!(reader.poll(&mut mock_if).unwrap(), Some(LineStatus::Complete));
        assert_eq!(reader.line(), b"");
    }

    #[test]
    fn test_partial_line_survives_gaps() {
        let mut mock_if = MockInterface::new();
        mock_if.stage_read_data(b"h");
        mock_if.stage_gap();
        mock_if.stage_read_data(b"Pa");
        mock_if.stage_gap();
        mock_if.stage_read_data(b"\n");
        let mut reader = LineReader::<8>::new();
        assert_eq!(reader.poll(&mut mock_if).unwrap(), None);
        assert_eq!(reader.poll(&mut mock_if).unwrap(), None);
        assert_eq!(reader.poll(&mut mock_if).unwrap(), Some(LineStatus::Complete));
        assert_eq!(reader.line(), b"hPa");
    }

    #[test]
    fn test_overflow_drains_to_terminator() {
        let mut mock_if = MockInterface::new();
        mock_if.stage_read_data(b"ABCDEFGHIJ\nT\n");
        let mut reader = LineReader::<4>::new();
        assert_eq!(reader.poll(&mut mock_if).unwrap(), Some(LineStatus::Overflowed));
        assert_eq!(reader.line(), b"ABCD");
        assert_eq!(reader.poll(&mut mock_if).unwrap(), Some(LineStatus::Complete));
        assert_eq!(reader.line(), b"T");
    }

    #[test]
    fn test_read_error_discards_partial_line() {
        let mut mock_if = MockInterface::new();
        mock_if.stage_read_data(b"C");
        let mut reader = LineReader::<8>::new();
        assert_eq!(reader.poll(&mut mock_if).unwrap(), None);
        mock_if.fail_next_read = true;
        assert!(matches!(reader.poll(&mut mock_if), Err(MonSensError::Io(_))));
        assert_eq!(reader.line(), b"");
    }
}
