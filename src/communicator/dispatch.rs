// src/communicator/dispatch.rs

use super::registry::SensorRegistry;
use crate::common::{
    error::MonSensError, hal_traits::MonSensSerial, protocol, writer::ResponseWriter, Token,
    TokenError,
};
use crate::sensor::Measurement;
use heapless::Vec;

/// What to send back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<const N: usize> {
    /// A sensor produced a fresh reading.
    Reading { sensor: usize, value: i16 },
    /// No sensor accepted the token.
    Usage,
    /// Every sensor that accepted the token failed to measure.
    Failed { sensors: Vec<usize, N> },
    /// The request line was unusable and no sensor was asked.
    Rejected(TokenError),
}

/// Offers the token to each sensor in registration order.
///
/// The first sensor reporting `Updated` answers and later sensors are never
/// asked. A sensor that fails is skipped so the next one gets its chance.
pub fn dispatch<const N: usize>(registry: &mut SensorRegistry<'_, N>, token: &Token<'_>) -> Response<N> {
    let mut failed: Vec<usize, N> = Vec::new();

    for (index, sensor) in registry.iter_mut().enumerate() {
        match sensor.measure(token) {
            Measurement::Updated => {
                let value = sensor.reading();
                log::debug!("token {} answered by sensor {}: {}", token.as_str(), index, value);
                return Response::Reading { sensor: index, value };
            }
            Measurement::Unsupported => {}
            Measurement::Failed(fault) => {
                log::warn!("sensor {} failed on token {}: {}", index, token.as_str(), fault);
                // Cannot overflow: at most one entry per registered sensor
                let _ = failed.push(index);
            }
        }
    }

    if failed.is_empty() {
        log::debug!("token {} matched no sensor", token.as_str());
        Response::Usage
    } else {
        Response::Failed { sensors: failed }
    }
}

impl<const N: usize> Response<N> {
    /// Serializes the response and flushes the transport.
    ///
    /// Returns the number of bytes written.
    pub fn write_to<IF: MonSensSerial>(
        &self,
        interface: &mut IF,
        registry: &SensorRegistry<'_, N>,
    ) -> Result<usize, MonSensError<IF::Error>> {
        let mut writer = ResponseWriter::new(interface);
        match self {
            Response::Reading { value, .. } => {
                writer.write_int(*value)?;
                writer.finish()
            }
            Response::Usage => {
                writer.write_line(protocol::USAGE_BANNER)?;
                for sensor in registry.iter() {
                    writer.write_line(sensor.usage())?;
                }
                writer.flush()
            }
            Response::Failed { sensors } => {
                writer.write_line(protocol::ERROR_BANNER)?;
                for sensor in sensors.iter().filter_map(|&index| registry.get(index)) {
                    writer.write_line(sensor.usage())?;
                }
                writer.flush()
            }
            Response::Rejected(error) => {
                writer.write_line(protocol::ERROR_BANNER)?;
                writer.write_line(error.reason())?;
                writer.flush()
            }
        }
    }
}
