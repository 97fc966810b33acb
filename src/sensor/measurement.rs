// src/sensor/measurement.rs

/// Why a sensor that accepted a token could not produce a reading.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorFault {
    /// The bus or peripheral reported an error.
    #[error("Sensor hardware error")]
    Hardware,

    /// The peripheral did not answer in time.
    #[error("Sensor timed out")]
    Timeout,

    /// The measured value does not fit in a 16-bit reading.
    #[error("Reading out of range")]
    OutOfRange,

    /// `measure` was called before a successful `init`.
    #[error("Sensor not initialized")]
    NotInitialized,
}

/// Outcome of asking one sensor about one token.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Measurement {
    /// The token names nothing this sensor measures.
    Unsupported,
    /// A new reading was stored and can be fetched with `reading()`.
    Updated,
    /// The token was accepted but the measurement failed. The stored reading
    /// is unchanged.
    Failed(SensorFault),
}

impl Measurement {
    #[inline]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Measurement::Updated)
    }
}

/// Narrows a wide measurement to a protocol reading.
pub fn to_reading<T>(value: T) -> Result<i16, SensorFault>
where
    T: TryInto<i16>,
{
    value.try_into().map_err(|_| SensorFault::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        assert!(Measurement::Updated.is_updated());
        assert!(!Measurement::Unsupported.is_updated());
        assert!(!Measurement::Failed(SensorFault::Timeout).is_updated());
    }

    #[test]
    fn test_to_reading_range() {
        assert_eq!(to_reading(1013_i32), Ok(1013));
        assert_eq!(to_reading(-32768_i32), Ok(i16::MIN));
        assert_eq!(to_reading(40_000_u16), Err(SensorFault::OutOfRange));
        assert_eq!(to_reading(-40_000_i32), Err(SensorFault::OutOfRange));
    }
}
