use anyhow::{Context as _, Result, anyhow};
use chrono::NaiveDate;

use crate::{
    homematic::{
        CONTROL_MODE, ControlMode, PARTY_STOP_DAY, PARTY_STOP_MONTH, PARTY_STOP_YEAR,
        RawDeviceSnapshot, VALVE_STATE,
    },
    i18n::{Locale, Translate},
};

/// Valve position assumed for wall thermostats, which have no valve.
const NO_VALVE: f64 = -1.0;

/// Describes the operating mode of a thermostat.
///
/// AUTO reports heating only for a valve opening above zero, while MANUAL
/// reports it for any non-zero value, so a wall thermostat in MANUAL mode
/// reads "manual, heats with -".
pub fn describe_control_mode(
    snapshot: &RawDeviceSnapshot,
    translations: &impl Translate,
    locale: Locale,
) -> Result<String> {
    let code = snapshot.require(CONTROL_MODE)?.as_f64()?;

    let (valve_state, valve_state_display) = match snapshot.get(VALVE_STATE) {
        Some(datapoint) => {
            let valve_state = datapoint.as_f64()?;
            (valve_state, format!("{valve_state}{}", datapoint.unit))
        }
        None => (NO_VALVE, "-".to_owned()),
    };

    let t = |key: &'static str| translations.translate(key);
    let radiator_off = t("RADIATOR_OFF").to_owned();

    let description = match ControlMode::from_code(code) {
        Some(mode @ ControlMode::Auto) => {
            if valve_state > 0.0 {
                format!("{} {valve_state_display}", t("HEATS_WITH"))
            } else if valve_state < 0.0 {
                format!("{} {}", t("RADIATOR_MODE"), t(mode.translation_key()))
            } else {
                radiator_off
            }
        }
        Some(mode @ ControlMode::Manual) => {
            if valve_state != 0.0 {
                format!(
                    "{}, {} {valve_state_display}",
                    t(mode.translation_key()),
                    t("HEATS_WITH")
                )
            } else if valve_state < 0.0 {
                // Never taken: negative positions already match the branch above.
                format!("{} {}", t("RADIATOR_MODE"), t(mode.translation_key()))
            } else {
                radiator_off
            }
        }
        Some(mode @ ControlMode::Party) => {
            let until = party_end_date(snapshot).context("failed to read party end date")?;
            format!(
                "{} {} {}",
                t(mode.translation_key()),
                t("HOLIDAY_MODE_UNTIL"),
                locale.format_date(until)
            )
        }
        Some(mode @ ControlMode::Boost) => t(mode.translation_key()).to_owned(),
        None => radiator_off,
    };

    Ok(description)
}

/// End of party mode. `PARTY_STOP_MONTH` is 1-based, as is `NaiveDate`.
pub fn party_end_date(snapshot: &RawDeviceSnapshot) -> Result<NaiveDate> {
    let year = snapshot.require(PARTY_STOP_YEAR)?.as_f64()?;
    let month = snapshot.require(PARTY_STOP_MONTH)?.as_f64()?;
    let day = snapshot.require(PARTY_STOP_DAY)?.as_f64()?;

    if [year, month, day].iter().any(|v| v.fract() != 0.0 || *v < 0.0) {
        return Err(anyhow!("invalid date: {year}-{month}-{day}"));
    }

    NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
        .ok_or_else(|| anyhow!("invalid date: {year}-{month}-{day}"))
}
