// src/lib.rs

//! Expose a microcontroller's sensors over a simple text command protocol.
//!
//! The host sends a short token such as `T` or `hPa` terminated by a newline.
//! The device answers with the reading of the first registered sensor that
//! accepts the token (`235\r\n`), or with a usage listing of every sensor's
//! codes when none does.
//!
//! ```
//! use monsens::{Communicator, Cycle, Measurement, MonSensSerial, Sensor, Token};
//!
//! struct Thermometer(i16);
//!
//! impl Sensor for Thermometer {
//!     fn measure(&mut self, token: &Token<'_>) -> Measurement {
//!         if token.contains("T") { Measurement::Updated } else { Measurement::Unsupported }
//!     }
//!     fn reading(&self) -> i16 { self.0 }
//!     fn usage(&self) -> &'static str { "T   - temperature" }
//! }
//!
//! // Host-side loopback standing in for a UART
//! struct Loopback { rx: &'static [u8], tx: Vec<u8> }
//!
//! impl MonSensSerial for Loopback {
//!     type Error = ();
//!     fn read_byte(&mut self) -> nb::Result<u8, ()> {
//!         let (&byte, rest) = self.rx.split_first().ok_or(nb::Error::<()>::WouldBlock)?;
//!         self.rx = rest;
//!         Ok(byte)
//!     }
//!     fn write_byte(&mut self, byte: u8) -> nb::Result<(), ()> {
//!         self.tx.push(byte);
//!         Ok(())
//!     }
//!     fn flush(&mut self) -> nb::Result<(), ()> { Ok(()) }
//! }
//!
//! let mut thermometer = Thermometer(235);
//! let mut comm: Communicator<'_, _> = Communicator::new(Loopback { rx: b"T\n", tx: Vec::new() });
//! comm.add_sensor(&mut thermometer)?;
//! comm.init()?;
//! assert_eq!(comm.communicate()?, Cycle::Answered { sensor: 0, reading: 235 });
//! assert_eq!(comm.release().tx, b"235\r\n");
//! # Ok::<(), monsens::MonSensError<()>>(())
//! ```

#![cfg_attr(not(test), no_std)]

pub mod common;
pub mod communicator;
pub mod sensor;

// Re-export key types for convenience
pub use common::{MonSensError, MonSensSerial, Token, TokenError};
pub use communicator::{Communicator, Cycle};
pub use sensor::{Measurement, Sensor, SensorFault};
