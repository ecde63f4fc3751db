/// Operating mode reported in the `CONTROL_MODE` datapoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Auto,
    Manual,
    Party,
    Boost,
}

impl ControlMode {
    /// Returns `None` for codes outside 0-3, including non-integral values.
    pub fn from_code(code: f64) -> Option<Self> {
        if code.fract() != 0.0 {
            return None;
        }

        match code as i64 {
            0 => Some(ControlMode::Auto),
            1 => Some(ControlMode::Manual),
            2 => Some(ControlMode::Party),
            3 => Some(ControlMode::Boost),
            _ => None,
        }
    }

    /// Text lookup key naming this mode.
    pub fn translation_key(&self) -> &'static str {
        match self {
            ControlMode::Auto => "RADIATOR_MODE_AUTO",
            ControlMode::Manual => "RADIATOR_MODE_MANUAL",
            ControlMode::Party => "RADIATOR_MODE_PARTY",
            ControlMode::Boost => "RADIATOR_MODE_BOOST",
        }
    }
}
