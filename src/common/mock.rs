// src/common/mock.rs
//
// Test-only transport shared by the writer, reader and communicator tests.

use super::hal_traits::MonSensSerial;
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockCommError;

/// Scripted transport. `None` entries in the read queue stand for moments
/// when no byte has arrived yet.
#[derive(Debug, Default)]
pub struct MockInterface {
    read_queue: VecDeque<Option<u8>>,
    pub write_log: Vec<u8>,
    pub busy_writes: u32,
    pub fail_writes: bool,
    pub fail_next_read: bool,
    pub flush_count: u32,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_read_data(&mut self, data: &[u8]) {
        self.read_queue.extend(data.iter().copied().map(Some));
    }

    /// Inserts a gap: the next read returns `WouldBlock`.
    pub fn stage_gap(&mut self) {
        self.read_queue.push_back(None);
    }

    pub fn written_str(&self) -> String {
        String::from_utf8(self.write_log.clone()).unwrap()
    }

    pub fn take_written(&mut self) -> String {
        let out = self.written_str();
        self.write_log.clear();
        out
    }
}

impl MonSensSerial for MockInterface {
    type Error = MockCommError;

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(nb::Error::Other(MockCommError));
        }
        match self.read_queue.pop_front() {
            Some(Some(byte)) => Ok(byte),
            Some(None) | None => Err(nb::Error::WouldBlock),
        }
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        if self.fail_writes {
            return Err(nb::Error::Other(MockCommError));
        }
        if self.busy_writes > 0 {
            self.busy_writes -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.write_log.push(byte);
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.flush_count += 1;
        Ok(())
    }
}
