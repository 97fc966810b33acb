// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the serial-like channel between host and device.
///
/// Implement this for the MCU's UART, USB CDC class or similar. The
/// communicator only ever needs single bytes, so the transport stays free to
/// buffer however the hardware prefers.
pub trait MonSensSerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Attempts to read a single byte from the host.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if no byte is available yet. A
    /// blocking transport simply never returns `WouldBlock`.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;

    /// Attempts to write a single byte to the host.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if the transmit buffer is full.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer once a response is complete.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;
}

impl<T: MonSensSerial + ?Sized> MonSensSerial for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        (**self).flush()
    }
}
