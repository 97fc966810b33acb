// src/communicator/registry.rs

use crate::common::error::MonSensError;
use crate::sensor::Sensor;
use core::fmt::Debug;
use heapless::Vec;

/// Fixed-capacity, append-only list of borrowed sensors.
///
/// Registration order is dispatch order: the first sensor added is the first
/// one asked and wins ties. Once sealed, nothing more can be added.
pub struct SensorRegistry<'a, const N: usize> {
    sensors: Vec<&'a mut dyn Sensor, N>,
    sealed: bool,
}

impl<'a, const N: usize> SensorRegistry<'a, N> {
    pub const fn new() -> Self {
        SensorRegistry {
            sensors: Vec::new(),
            sealed: false,
        }
    }

    /// Appends a sensor and returns its index.
    ///
    /// A full registry is rejected without touching existing entries.
    pub fn add<E: Debug>(&mut self, sensor: &'a mut dyn Sensor) -> Result<usize, MonSensError<E>> {
        if self.sealed {
            return Err(MonSensError::RegistrySealed);
        }
        let index = self.sensors.len();
        self.sensors
            .push(sensor)
            .map_err(|_| MonSensError::CapacityExceeded { capacity: N })?;
        Ok(index)
    }

    /// Seals the registry, then runs every sensor's `init` in registration
    /// order.
    ///
    /// Stops at the first failure. Sensors already initialized stay that way,
    /// and the registry stays sealed, so no sensor is ever initialized twice.
    pub fn init_all<E: Debug>(&mut self) -> Result<(), MonSensError<E>> {
        if self.sealed {
            return Err(MonSensError::RegistrySealed);
        }
        self.sealed = true;
        for (index, sensor) in self.sensors.iter_mut().enumerate() {
            sensor
                .init()
                .map_err(|fault| MonSensError::SensorInit { index, fault })?;
            log::debug!("sensor {} initialized", index);
        }
        Ok(())
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn get(&self, index: usize) -> Option<&(dyn Sensor + 'a)> {
        self.sensors.get(index).map(|s| &**s)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Sensor + 'a)> + '_ {
        self.sensors.iter().map(|s| &**s)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn Sensor + 'a)> + '_ {
        self.sensors.iter_mut().map(|s| &mut **s)
    }
}

impl<const N: usize> Default for SensorRegistry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
