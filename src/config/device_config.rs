use indexmap::IndexMap;

use crate::config::{DeviceOverrides, DisplayDefaults, Truthy as _, override_or};

/// Warning thresholds for one measurement. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warn_high: bool,
    pub warn_low: bool,
    pub high: f64,
    pub low: f64,
}

impl Thresholds {
    pub fn is_breached(&self, value: f64) -> bool {
        (self.warn_low && value <= self.low) || (self.warn_high && value >= self.high)
    }
}

/// Display settings of one device after merging its overrides with the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfig {
    pub id: String,

    /// Empty when the hub-reported device name should be shown.
    pub label: String,

    pub show_set_temperature: bool,
    pub show_fault_report: bool,
    pub show_current_mode: bool,
    pub show_humidity: bool,

    pub precision_temp: usize,
    pub precision_hum: usize,

    pub temperature: Thresholds,
    pub humidity: Thresholds,
}

impl DeviceConfig {
    pub fn resolve(defaults: &DisplayDefaults, device: &DeviceOverrides) -> Self {
        Self {
            id: device.id.clone(),
            label: device.label.clone().unwrap_or_default(),
            show_set_temperature: override_or(
                device.show_set_temperature,
                defaults.show_set_temperature,
            ),
            show_fault_report: override_or(
                device.show_fault_reporting,
                defaults.show_fault_reporting,
            ),
            show_current_mode: override_or(device.show_current_mode, defaults.show_current_mode),
            show_humidity: override_or(device.show_humidity, defaults.show_humidity),
            precision_temp: override_or(device.precision_temp, defaults.precision_temp) as usize,
            precision_hum: override_or(device.precision_hum, defaults.precision_hum) as usize,
            temperature: Thresholds {
                warn_high: override_or(device.warn_temp_high, defaults.warn_temp_high),
                warn_low: override_or(device.warn_temp_low, defaults.warn_temp_low),
                high: override_or(device.temp_threshold_high, defaults.temp_threshold_high),
                low: override_or(device.temp_threshold_low, defaults.temp_threshold_low),
            },
            humidity: Thresholds {
                warn_high: override_or(device.warn_hum_high, defaults.warn_hum_high),
                warn_low: override_or(device.warn_hum_low, defaults.warn_hum_low),
                high: override_or(device.hum_threshold_high, defaults.hum_threshold_high),
                low: override_or(device.hum_threshold_low, defaults.hum_threshold_low),
            },
        }
    }
}

/// Which columns any configured device asks for. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSummary {
    pub actual_temperature: bool,
    pub set_temperature: bool,
    pub humidity: bool,
    pub mode: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Keyed by device id, in configuration order.
    pub devices: IndexMap<String, DeviceConfig>,

    pub columns: ColumnSummary,
}

impl ResolvedConfig {
    pub fn resolve(defaults: &DisplayDefaults, overrides: &[DeviceOverrides]) -> Self {
        let mut devices = IndexMap::with_capacity(overrides.len());
        for device in overrides {
            // A repeated id keeps its first position but takes the last settings.
            devices.insert(device.id.clone(), DeviceConfig::resolve(defaults, device));
        }

        let any_device = |flag: fn(&DeviceOverrides) -> Option<bool>| {
            overrides
                .iter()
                .any(|device| flag(device).is_some_and(|v| v.is_truthy()))
        };

        let columns = ColumnSummary {
            actual_temperature: true,
            set_temperature: any_device(|d| d.show_set_temperature)
                || defaults.show_set_temperature,
            humidity: false,
            mode: any_device(|d| d.show_current_mode) || defaults.show_current_mode,
        };

        Self { devices, columns }
    }

    pub fn device(&self, id: &str) -> Option<&DeviceConfig> {
        self.devices.get(id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn device(id: &str) -> DeviceOverrides {
        DeviceOverrides {
            id: id.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn device_without_overrides_uses_defaults() {
        let config = DeviceConfig::resolve(&DisplayDefaults::default(), &device("1234"));

        assert_eq!(
            config,
            DeviceConfig {
                id: "1234".to_owned(),
                label: String::new(),
                show_set_temperature: false,
                show_fault_report: false,
                show_current_mode: false,
                show_humidity: false,
                precision_temp: 2,
                precision_hum: 0,
                temperature: Thresholds {
                    warn_high: false,
                    warn_low: false,
                    high: 24.0,
                    low: 5.0,
                },
                humidity: Thresholds {
                    warn_high: false,
                    warn_low: false,
                    high: 60.0,
                    low: 35.0,
                },
            }
        );
    }

    #[test]
    fn truthy_overrides_replace_defaults() {
        let overrides = DeviceOverrides {
            label: Some("Bad".to_owned()),
            show_humidity: Some(true),
            precision_temp: Some(1),
            warn_temp_low: Some(true),
            temp_threshold_low: Some(17.5),
            ..device("1234")
        };

        let config = DeviceConfig::resolve(&DisplayDefaults::default(), &overrides);

        assert_eq!(config.label, "Bad");
        assert!(config.show_humidity);
        assert_eq!(config.precision_temp, 1);
        assert!(config.temperature.warn_low);
        assert_eq!(config.temperature.low, 17.5);
    }

    #[test]
    fn zero_override_falls_back_to_non_zero_default() {
        let overrides = DeviceOverrides {
            precision_temp: Some(0),
            temp_threshold_high: Some(0.0),
            ..device("1234")
        };

        let config = DeviceConfig::resolve(&DisplayDefaults::default(), &overrides);

        assert_eq!(config.precision_temp, 2);
        assert_eq!(config.temperature.high, 24.0);
    }

    #[test]
    fn false_override_cannot_disable_an_enabled_default() {
        let defaults = DisplayDefaults {
            show_current_mode: true,
            ..Default::default()
        };
        let overrides = DeviceOverrides {
            show_current_mode: Some(false),
            ..device("1234")
        };

        let config = DeviceConfig::resolve(&defaults, &overrides);

        assert!(config.show_current_mode);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let thresholds = Thresholds {
            warn_high: true,
            warn_low: true,
            high: 24.0,
            low: 5.0,
        };

        assert!(thresholds.is_breached(5.0));
        assert!(thresholds.is_breached(24.0));
        assert!(!thresholds.is_breached(5.1));
        assert!(!thresholds.is_breached(23.9));
    }

    #[test]
    fn disabled_thresholds_never_warn() {
        let thresholds = Thresholds {
            warn_high: false,
            warn_low: false,
            high: 24.0,
            low: 5.0,
        };

        assert!(!thresholds.is_breached(-20.0));
        assert!(!thresholds.is_breached(40.0));
    }

    #[test]
    fn resolves_every_device_in_order() {
        let resolved = ResolvedConfig::resolve(
            &DisplayDefaults::default(),
            &[device("b"), device("a"), device("c")],
        );

        let ids: Vec<&str> = resolved.devices.keys().map(String::as_str).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert!(resolved.device("a").is_some());
        assert!(resolved.device("d").is_none());
    }

    #[test]
    fn column_summary_reflects_any_device() {
        let overrides = [
            device("1"),
            DeviceOverrides {
                show_set_temperature: Some(true),
                ..device("2")
            },
        ];

        let resolved = ResolvedConfig::resolve(&DisplayDefaults::default(), &overrides);

        assert_eq!(
            resolved.columns,
            ColumnSummary {
                actual_temperature: true,
                set_temperature: true,
                humidity: false,
                mode: false,
            }
        );
    }
}
