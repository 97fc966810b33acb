// src/sensor/supply_voltage.rs

//! The MCU's own supply voltage, read from its internal reference.
//!
//! Most boards can measure their supply rail without external parts (an
//! ESP8266 with A0 left floating, the ATtiny85 bandgap). The usage line names
//! the chip, so it is chosen at construction.

use super::{to_reading, Measurement, Sensor, SensorFault};
use crate::common::Token;
use core::fmt::Debug;

/// Code this sensor answers to.
pub const CODE: &str = "V";

pub const ESP8266_USAGE: &str = "V   - voltage at the ESP8266 chip";
pub const ATTINY85_USAGE: &str = "V   - voltage at the ATtiny85 MCU";

/// Access to the internal voltage reference.
pub trait VoltageSource {
    type Error: Debug;

    /// Supply voltage in millivolts.
    fn read_millivolts(&mut self) -> Result<u32, Self::Error>;
}

#[derive(Debug)]
pub struct SupplyVoltage<V> {
    source: V,
    usage: &'static str,
    reading: i16,
}

impl<V: VoltageSource> SupplyVoltage<V> {
    pub fn new(source: V, usage: &'static str) -> Self {
        SupplyVoltage {
            source,
            usage,
            reading: 0,
        }
    }

    pub fn esp8266(source: V) -> Self {
        Self::new(source, ESP8266_USAGE)
    }

    pub fn attiny85(source: V) -> Self {
        Self::new(source, ATTINY85_USAGE)
    }
}

impl<V: VoltageSource> Sensor for SupplyVoltage<V> {
    fn measure(&mut self, token: &Token<'_>) -> Measurement {
        if !token.contains(CODE) {
            return Measurement::Unsupported;
        }
        let result = self
            .source
            .read_millivolts()
            .map_err(|e| {
                log::warn!("supply voltage read failed: {:?}", e);
                SensorFault::Hardware
            })
            .and_then(to_reading);
        match result {
            Ok(millivolts) => {
                self.reading = millivolts;
                Measurement::Updated
            }
            Err(fault) => Measurement::Failed(fault),
        }
    }

    fn reading(&self) -> i16 {
        self.reading
    }

    fn usage(&self) -> &'static str {
        self.usage
    }
}
