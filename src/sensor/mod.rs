// src/sensor/mod.rs

// The sensor side of the protocol: the capability contract every sensor
// implements, plus a few hardware-independent adapters.

mod measurement;

// Bundled adapters, generic over small source traits the board code implements
pub mod environmental;
pub mod photoresistor;
pub mod supply_voltage;

pub use measurement::{to_reading, Measurement, SensorFault};

pub use environmental::{Environmental, EnvironmentSource};
pub use photoresistor::{AnalogSource, Photoresistor};
pub use supply_voltage::{SupplyVoltage, VoltageSource};

use crate::common::Token;

/// Capability contract for one measurement source.
///
/// The communicator holds sensors as `&mut dyn Sensor`, so this trait must
/// stay object safe.
///
/// # Example
///
/// ```
/// use monsens::{Measurement, Sensor, Token};
///
/// struct Counter {
///     reading: i16,
/// }
///
/// impl Sensor for Counter {
///     fn measure(&mut self, token: &Token<'_>) -> Measurement {
///         if !token.contains("N") {
///             return Measurement::Unsupported;
///         }
///         self.reading = self.reading.wrapping_add(1);
///         Measurement::Updated
///     }
///
///     fn reading(&self) -> i16 {
///         self.reading
///     }
///
///     fn usage(&self) -> &'static str {
///         "N   - number of requests served"
///     }
/// }
/// ```
pub trait Sensor {
    /// Prepares the measurement hardware.
    ///
    /// Called exactly once by `Communicator::init`, before any `measure`, in
    /// registration order. An error aborts setup.
    fn init(&mut self) -> Result<(), SensorFault> {
        Ok(())
    }

    /// Takes a reading if the token names a code this sensor supports.
    ///
    /// Codes are matched by substring (`Token::contains`). On anything but
    /// `Measurement::Updated` the stored reading must stay unchanged.
    fn measure(&mut self, token: &Token<'_>) -> Measurement;

    /// Returns the last stored reading, 0 before the first measurement.
    fn reading(&self) -> i16;

    /// Usage line(s) listing the codes this sensor answers to, without the
    /// trailing line terminator.
    fn usage(&self) -> &'static str;
}
