use anyhow::{Result, anyhow};
use indexmap::IndexMap;

use crate::homematic::{Datapoint, DeviceType};

pub const ACTUAL_TEMPERATURE: &str = "ACTUAL_TEMPERATURE";
pub const SET_TEMPERATURE: &str = "SET_TEMPERATURE";
pub const ACTUAL_HUMIDITY: &str = "ACTUAL_HUMIDITY";
pub const VALVE_STATE: &str = "VALVE_STATE";
pub const CONTROL_MODE: &str = "CONTROL_MODE";
pub const FAULT_REPORTING: &str = "FAULT_REPORTING";
pub const PARTY_STOP_YEAR: &str = "PARTY_STOP_YEAR";
pub const PARTY_STOP_MONTH: &str = "PARTY_STOP_MONTH";
pub const PARTY_STOP_DAY: &str = "PARTY_STOP_DAY";

/// Datapoints of one device as read from the hub during a single poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDeviceSnapshot {
    pub device_name: String,

    pub datapoints: IndexMap<String, Datapoint>,
}

/// One element of a poll response: device id mapped to its snapshots.
///
/// The hub answers with exactly one snapshot per requested device.
pub type DeviceResponse = IndexMap<String, Vec<RawDeviceSnapshot>>;

impl RawDeviceSnapshot {
    pub fn new(device_name: impl Into<String>) -> Self {
        Self {
            device_name: device_name.into(),
            datapoints: IndexMap::new(),
        }
    }

    pub fn with(mut self, name: &str, datapoint: Datapoint) -> Self {
        self.datapoints.insert(name.to_owned(), datapoint);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Datapoint> {
        self.datapoints.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&Datapoint> {
        self.get(name)
            .ok_or_else(|| anyhow!("datapoint {name} missing on device {:?}", self.device_name))
    }

    pub fn device_type(&self) -> DeviceType {
        if self.datapoints.contains_key(VALVE_STATE) {
            DeviceType::RadiatorThermostat
        } else {
            DeviceType::WallThermostat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valve_state_marks_radiator_thermostat() {
        let radiator = RawDeviceSnapshot::new("Bad").with(VALVE_STATE, Datapoint::new("0", "%"));
        let wall = RawDeviceSnapshot::new("Flur");

        assert_eq!(radiator.device_type(), DeviceType::RadiatorThermostat);
        assert_eq!(wall.device_type(), DeviceType::WallThermostat);
    }

    #[test]
    fn require_reports_missing_datapoint() {
        let snapshot = RawDeviceSnapshot::new("Bad");

        let err = snapshot.require(SET_TEMPERATURE).unwrap_err();

        assert_eq!(
            err.to_string(),
            "datapoint SET_TEMPERATURE missing on device \"Bad\""
        );
    }
}
