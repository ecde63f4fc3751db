#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    /// Radiator thermostat (HM-CC-RT-DN), reports a valve position.
    RadiatorThermostat,

    /// Wall thermostat (HM-TC-IT-WM-W-EU), reports humidity but no valve.
    WallThermostat,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::RadiatorThermostat => "RT",
            DeviceType::WallThermostat => "WT",
        }
    }
}
