// src/sensor/environmental.rs

//! Combined temperature / pressure / humidity sensor (BME280 class).
//!
//! One physical chip answers four codes. The driver behind
//! [`EnvironmentSource`] owns the bus (I²C or SPI) and its compensation
//! math; this adapter only picks the quantity and narrows it to a reading.

use super::{Measurement, Sensor, SensorFault};
use crate::common::Token;
use core::fmt::Debug;

/// Default sea-level reference pressure for altitude, in hPa.
pub const SEA_LEVEL_PRESSURE_HPA: f32 = 1013.25;

/// Codes in the order they are checked against a token.
pub const CODES: [&str; 4] = ["C", "hPa", "m", "RH"];

pub const USAGE: &str = "C   - temperature in Celsius\r\n\
                         hPa - barometric pressure in hekto Pascal\r\n\
                         m   - altitude in meters above sealevel\r\n\
                         RH  - relative humidity in percents";

/// Quantity selected by a token.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    Temperature,
    Pressure,
    Altitude,
    Humidity,
}

impl Quantity {
    /// Maps a token to the first quantity whose code it contains.
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        match token.first_match(&CODES)? {
            "C" => Some(Quantity::Temperature),
            "hPa" => Some(Quantity::Pressure),
            "m" => Some(Quantity::Altitude),
            "RH" => Some(Quantity::Humidity),
            _ => None,
        }
    }
}

/// Driver for a compensated environmental sensor.
pub trait EnvironmentSource {
    type Error: Debug;

    /// Probes and configures the chip.
    fn begin(&mut self) -> Result<(), Self::Error>;

    fn temperature_celsius(&mut self) -> Result<f32, Self::Error>;

    fn pressure_hpa(&mut self) -> Result<f32, Self::Error>;

    /// Altitude in meters for the given sea-level pressure.
    fn altitude_m(&mut self, sea_level_hpa: f32) -> Result<f32, Self::Error>;

    fn humidity_percent(&mut self) -> Result<f32, Self::Error>;
}

#[derive(Debug)]
pub struct Environmental<S> {
    source: S,
    sea_level_hpa: f32,
    initialized: bool,
    reading: i16,
}

impl<S: EnvironmentSource> Environmental<S> {
    pub fn new(source: S) -> Self {
        Self::with_sea_level(source, SEA_LEVEL_PRESSURE_HPA)
    }

    pub fn with_sea_level(source: S, sea_level_hpa: f32) -> Self {
        Environmental {
            source,
            sea_level_hpa,
            initialized: false,
            reading: 0,
        }
    }

    pub fn free(self) -> S {
        self.source
    }

    fn sample(&mut self, quantity: Quantity) -> Result<f32, SensorFault> {
        let value = match quantity {
            Quantity::Temperature => self.source.temperature_celsius(),
            Quantity::Pressure => self.source.pressure_hpa(),
            Quantity::Altitude => self.source.altitude_m(self.sea_level_hpa),
            Quantity::Humidity => self.source.humidity_percent(),
        };
        value.map_err(|e| {
            log::warn!("environmental {:?} read failed: {:?}", quantity, e);
            SensorFault::Hardware
        })
    }
}

/// Truncates toward zero, rejecting NaN and values outside `i16`.
fn float_to_reading(value: f32) -> Result<i16, SensorFault> {
    if !value.is_finite() || value <= (i16::MIN as f32) - 1.0 || value >= (i16::MAX as f32) + 1.0 {
        return Err(SensorFault::OutOfRange);
    }
    Ok(value as i16)
}

impl<S: EnvironmentSource> Sensor for Environmental<S> {
    fn init(&mut self) -> Result<(), SensorFault> {
        self.source.begin().map_err(|e| {
            log::warn!("environmental sensor not found: {:?}", e);
            SensorFault::Hardware
        })?;
        self.initialized = true;
        Ok(())
    }

    fn measure(&mut self, token: &Token<'_>) -> Measurement {
        let Some(quantity) = Quantity::from_token(token) else {
            return Measurement::Unsupported;
        };
        if !self.initialized {
            return Measurement::Failed(SensorFault::NotInitialized);
        }
        match self.sample(quantity).and_then(float_to_reading) {
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
