// src/common/error.rs

use crate::sensor::SensorFault;

/// Errors raised by the registry, the dispatcher and the transport.
///
/// Setup variants (`CapacityExceeded`, `RegistrySealed`, `SensorInit`) are
/// fatal: the firmware must not enter its polling loop after seeing one.
#[derive(Debug, thiserror::Error)]
pub enum MonSensError<E = ()>
where
    E: core::fmt::Debug, // Required for the generic Io message
{
    /// Underlying I/O error from the transport implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// More sensors were registered than the registry can hold.
    #[error("Sensor registry full: capacity is {capacity}")]
    CapacityExceeded { capacity: usize },

    /// A sensor was registered after `init()` sealed the registry.
    #[error("Sensor registry is sealed after init")]
    RegistrySealed,

    /// `communicate()` was called before `init()`.
    #[error("Communicator used before init")]
    NotInitialized,

    /// A sensor failed to initialize during setup.
    #[error("Sensor {index} failed to initialize: {fault}")]
    SensorInit { index: usize, fault: SensorFault },
}

impl<E: core::fmt::Debug> MonSensError<E> {
    /// Returns true for errors that must halt the device before polling.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MonSensError::Io(_))
    }
}

// Lets `?` lift a bare transport error
impl<E: core::fmt::Debug> From<E> for MonSensError<E> {
    fn from(e: E) -> Self {
        MonSensError::Io(e)
    }
}
