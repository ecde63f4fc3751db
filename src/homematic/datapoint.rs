use anyhow::{Context as _, Result};

/// A single `<datapoint>` of the XML-API: the raw value and its unit suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Datapoint {
    pub value: String,

    pub unit: String,
}

impl Datapoint {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }

    pub fn as_f64(&self) -> Result<f64> {
        self.value
            .trim()
            .parse()
            .with_context(|| format!("failed to parse numeric value: {:?}", self.value))
    }
}
