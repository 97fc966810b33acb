// src/communicator/mod.rs

// The device side of the protocol: registry, request reading, dispatch and
// response writing, driven by `Communicator::communicate` from the main loop.

pub mod dispatch;
pub mod reader;
pub mod registry;

pub use dispatch::{dispatch, Response};
pub use reader::{LineReader, LineStatus};
pub use registry::SensorRegistry;

use crate::common::{
    error::MonSensError,
    hal_traits::MonSensSerial,
    protocol::{DEFAULT_CAPACITY, DEFAULT_MAX_TOKEN_LEN},
    Token, TokenError,
};
use crate::sensor::Sensor;

/// Result of one `communicate()` call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cycle {
    /// No complete, non-blank request was available. Nothing was written.
    Idle,
    /// A sensor answered with a reading.
    Answered { sensor: usize, reading: i16 },
    /// The usage banner was sent.
    Usage,
    /// The error banner was sent for this many failing sensors.
    Failed { failures: usize },
    /// The request line was unusable. The error banner and the reason were
    /// sent.
    Rejected(TokenError),
}

impl<const N: usize> From<&Response<N>> for Cycle {
    fn from(response: &Response<N>) -> Self {
        match response {
            Response::Reading { sensor, value } => Cycle::Answered {
                sensor: *sensor,
                reading: *value,
            },
            Response::Usage => Cycle::Usage,
            Response::Failed { sensors } => Cycle::Failed {
                failures: sensors.len(),
            },
            Response::Rejected(error) => Cycle::Rejected(*error),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum State {
    Setup,
    Running,
}

/// Mediates between the host transport and the registered sensors.
///
/// `N` is the registry capacity and `L` the longest accepted request line.
/// Sensors are borrowed for `'a`, so they must outlive the communicator;
/// the borrow checker enforces this.
///
/// Lifecycle: [`add_sensor`](Self::add_sensor) during setup, one
/// [`init`](Self::init), then [`communicate`](Self::communicate) from the
/// main loop forever.
pub struct Communicator<'a, IF, const N: usize = DEFAULT_CAPACITY, const L: usize = DEFAULT_MAX_TOKEN_LEN>
where
    IF: MonSensSerial,
{
    interface: IF,
    registry: SensorRegistry<'a, N>,
    reader: LineReader<L>,
    state: State,
}

impl<'a, IF, const N: usize, const L: usize> Communicator<'a, IF, N, L>
where
    IF: MonSensSerial,
{
    pub fn new(interface: IF) -> Self {
        Communicator {
            interface,
            registry: SensorRegistry::new(),
            reader: LineReader::new(),
            state: State::Setup,
        }
    }

    /// Registers a sensor. Must be called before [`init`](Self::init).
    ///
    /// Fails with `CapacityExceeded` when `N` sensors are already registered
    /// and with `RegistrySealed` once `init` has been called, whether or not
    /// it succeeded.
    pub fn add_sensor(&mut self, sensor: &'a mut dyn Sensor) -> Result<(), MonSensError<IF::Error>> {
        let index = self.registry.add::<IF::Error>(sensor)?;
        log::debug!("registered sensor {} of {}", index, N);
        Ok(())
    }

    /// Initializes every sensor in registration order and starts the
    /// protocol.
    ///
    /// Any error is fatal: the firmware must not enter its polling loop.
    /// Only the first call does anything; later calls return `RegistrySealed`.
    pub fn init(&mut self) -> Result<(), MonSensError<IF::Error>> {
        if let Err(e) = self.registry.init_all::<IF::Error>() {
            log::error!("setup failed: {}", e);
            return Err(e);
        }
        self.state = State::Running;
        log::info!("monsens ready with {} sensor(s)", self.registry.len());
        Ok(())
    }

    /// Runs one protocol step: read a request, dispatch it, respond.
    ///
    /// Returns `Cycle::Idle` without writing anything while no complete
    /// request line is available or the line is blank.
    pub fn communicate(&mut self) -> Result<Cycle, MonSensError<IF::Error>> {
        if self.state != State::Running {
            return Err(MonSensError::NotInitialized);
        }

        let Some(status) = self.reader.poll(&mut self.interface)? else {
            return Ok(Cycle::Idle);
        };

        let response = match status {
            LineStatus::Overflowed => {
                let error = TokenError::TooLong { max: L };
                log::warn!("request rejected: {}", error);
                Response::Rejected(error)
            }
            LineStatus::Complete => match Token::from_bytes(self.reader.line()) {
                Ok(None) => return Ok(Cycle::Idle),
                Ok(Some(token)) => dispatch(&mut self.registry, &token),
                Err(error) => {
                    log::warn!("request rejected: {}", error);
                    Response::Rejected(error)
                }
            },
        };

        response.write_to(&mut self.interface, &self.registry)?;
        Ok(Cycle::from(&response))
    }

    #[inline]
    pub fn sensor_count(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn interface(&self) -> &IF {
        &self.interface
    }

    pub fn interface_mut(&mut self) -> &mut IF {
        &mut self.interface
    }

    /// Releases the transport, ending the borrow of every sensor.
    pub fn release(self) -> IF {
        self.interface
    }
}
