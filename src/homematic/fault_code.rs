/// Fault reported in the `FAULT_REPORTING` datapoint of a radiator thermostat.
///
/// Code 5 is not assigned by the device firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    NoFault,
    ValveTight,
    AdjustingRangeTooLarge,
    AdjustingRangeTooSmall,
    CommunicationError,
    LowBattery,
    ValveErrorPosition,
}

impl FaultCode {
    pub fn from_code(code: f64) -> Option<Self> {
        if code.fract() != 0.0 {
            return None;
        }

        match code as i64 {
            0 => Some(FaultCode::NoFault),
            1 => Some(FaultCode::ValveTight),
            2 => Some(FaultCode::AdjustingRangeTooLarge),
            3 => Some(FaultCode::AdjustingRangeTooSmall),
            4 => Some(FaultCode::CommunicationError),
            6 => Some(FaultCode::LowBattery),
            7 => Some(FaultCode::ValveErrorPosition),
            _ => None,
        }
    }

    /// Text lookup key of the fault message, `None` when there is nothing to report.
    pub fn translation_key(&self) -> Option<&'static str> {
        match self {
            FaultCode::NoFault => None,
            FaultCode::ValveTight => Some("VALVE_TIGHT"),
            FaultCode::AdjustingRangeTooLarge => Some("ADJUSTING_RANGE_TOO_LARGE"),
            FaultCode::AdjustingRangeTooSmall => Some("ADJUSTING_RANGE_TOO_SMALL"),
            FaultCode::CommunicationError => Some("COMMUNICATION_ERROR"),
            FaultCode::LowBattery => Some("LOWBAT"),
            FaultCode::ValveErrorPosition => Some("VALVE_ERROR_POSITION"),
        }
    }
}
