use anyhow::Result;

use crate::{
    homematic::{
        ACTUAL_HUMIDITY, ACTUAL_TEMPERATURE, RawDeviceSnapshot, SET_TEMPERATURE, VALVE_STATE,
    },
    i18n::Locale,
    render::format_number,
};

/// Formats a measurement datapoint as a localized number directly followed by its unit.
///
/// Names other than the measurement datapoints yield an empty string.
pub fn format_attribute(
    name: &str,
    snapshot: &RawDeviceSnapshot,
    precision: usize,
    locale: Locale,
) -> Result<String> {
    match name {
        ACTUAL_TEMPERATURE | SET_TEMPERATURE | VALVE_STATE | ACTUAL_HUMIDITY => {
            let datapoint = snapshot.require(name)?;
            let value = datapoint.as_f64()?;
            Ok(format_number(value, precision, locale) + &datapoint.unit)
        }
        _ => Ok(String::new()),
    }
}
