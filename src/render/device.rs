use anyhow::{Result, anyhow};
use tracing::debug;

use crate::{
    homematic::{
        ACTUAL_HUMIDITY, ACTUAL_TEMPERATURE, DeviceType, FAULT_REPORTING, RawDeviceSnapshot,
        SET_TEMPERATURE,
    },
    i18n::Translate,
    render::{Renderer, describe_control_mode, describe_fault, format_attribute},
};

impl<T: Translate> Renderer<T> {
    /// Renders the status fragment of one device.
    ///
    /// Every datapoint the device type provides is read up front, so a missing
    /// one fails the device even when its column is hidden.
    pub fn render_device(&self, device_id: &str, device: &RawDeviceSnapshot) -> Result<String> {
        let config = self
            .config
            .device(device_id)
            .ok_or_else(|| anyhow!("device {device_id} is not configured"))?;
        let device_type = device.device_type();

        let label = if config.label.is_empty() {
            &device.device_name
        } else {
            &config.label
        };

        let actual_temperature = device.require(ACTUAL_TEMPERATURE)?.as_f64()?;
        let actual_temperature_str =
            format_attribute(ACTUAL_TEMPERATURE, device, config.precision_temp, self.locale)?;
        let set_temperature =
            format_attribute(SET_TEMPERATURE, device, config.precision_temp, self.locale)?;
        let current_mode = describe_control_mode(device, &self.translations, self.locale)?;
        let humidity = match device_type {
            DeviceType::WallThermostat => Some((
                device.require(ACTUAL_HUMIDITY)?.as_f64()?,
                format_attribute(ACTUAL_HUMIDITY, device, config.precision_hum, self.locale)?,
            )),
            DeviceType::RadiatorThermostat => None,
        };
        let fault = describe_fault(device.get(FAULT_REPORTING), &self.translations)?;

        debug!(
            device_id,
            device_type = device_type.as_str(),
            actual_temperature,
            current_mode = %current_mode,
            "rendering device"
        );

        let mut entry = String::from("<span class='deviceContainer'>");
        entry.push_str(&format!("<span class='deviceLabel'>{label}:&nbsp;</span>"));

        let mut class_name = String::from("deviceActualTemperature");
        if config.temperature.is_breached(actual_temperature) {
            class_name.push_str(&format!(" bright {}", self.warn_color));
        }
        entry.push_str(&format!(
            "<span class='{class_name}'>{actual_temperature_str}</span>"
        ));

        if config.show_set_temperature {
            entry.push_str(&format!(
                "<span class='deviceLabel'>&nbsp;/&nbsp;</span><span class='deviceSetTemperature'>{set_temperature}</span>"
            ));
        }

        if config.show_humidity
            && let Some((actual_humidity, actual_humidity_str)) = humidity
        {
            let class_attr = if config.humidity.is_breached(actual_humidity) {
                format!(" class='bright {}'", self.warn_color)
            } else {
                String::new()
            };
            entry.push_str(&format!(
                "<span class='deviceHumidity'>&nbsp;({}:&nbsp;<span{class_attr}>{actual_humidity_str}</span>)&nbsp;</span>",
                self.translations.translate("UNIT_HUM")
            ));
        }

        if config.show_current_mode {
            entry.push_str(&format!(
                "<span class='deviceMode'>&nbsp;({current_mode})</span>"
            ));
        }

        entry.push_str("</span>");

        if config.show_fault_report {
            entry.push_str(&fault);
        }

        Ok(entry)
    }
}
