// src/sensor/photoresistor.rs

//! Light-dependent resistor on an analog input.
//!
//! Photoresistors change their conductivity with the ambient light, which is
//! enough to tell whether a room is lit or in use. The reading is the raw
//! converter value; interpreting it is left to the host.

use super::{to_reading, Measurement, Sensor, SensorFault};
use crate::common::Token;
use core::fmt::Debug;

/// Code this sensor answers to.
pub const CODE: &str = "R";

pub const USAGE: &str = "R   - resistance relative to light level";

/// One analog input channel, already bound to its pin.
pub trait AnalogSource {
    type Error: Debug;

    /// Reads the current converter value.
    fn read_analog(&mut self) -> Result<u16, Self::Error>;
}

#[derive(Debug)]
pub struct Photoresistor<P> {
    pin: P,
    reading: i16,
}

impl<P: AnalogSource> Photoresistor<P> {
    pub fn new(pin: P) -> Self {
        Photoresistor { pin, reading: 0 }
    }

    /// Releases the analog input.
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: AnalogSource> Sensor for Photoresistor<P> {
    fn measure(&mut self, token: &Token<'_>) -> Measurement {
        if !token.contains(CODE) {
            return Measurement::Unsupported;
        }
        let raw = match self.pin.read_analog() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("photoresistor read failed: {:?}", e);
                return Measurement::Failed(SensorFault::Hardware);
            }
        };
        match to_reading(raw) {
            Ok(value) => {
                self.reading = value;
                Measurement::Updated
            }
            Err(fault) => Measurement::Failed(fault),
        }
    }

    fn reading(&self) -> i16 {
        self.reading
    }

    fn usage(&self) -> &'static str {
        USAGE
    }
}
