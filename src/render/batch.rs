use anyhow::{Context as _, Result, anyhow};

use crate::{homematic::DeviceResponse, i18n::Translate, render::Renderer};

impl<T: Translate> Renderer<T> {
    /// Renders every device of a poll response in arrival order.
    ///
    /// The first device that cannot be rendered aborts the whole batch.
    pub fn render_batch(&self, batch: &[DeviceResponse]) -> Result<String> {
        let mut output = String::new();

        for response in batch {
            for (device_id, snapshots) in response {
                let snapshot = snapshots
                    .first()
                    .ok_or_else(|| anyhow!("no data received for device {device_id}"))?;
                let entry = self
                    .render_device(device_id, snapshot)
                    .with_context(|| format!("failed to render device {device_id}"))?;
                output.push_str(&entry);
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    use crate::{
        config::{DeviceOverrides, DisplayDefaults, ResolvedConfig},
        homematic::{
            ACTUAL_TEMPERATURE, CONTROL_MODE, Datapoint, RawDeviceSnapshot, SET_TEMPERATURE,
            VALVE_STATE,
        },
        i18n::{Locale, Translations},
    };

    use super::*;

    fn renderer(ids: &[&str]) -> Renderer<Translations> {
        let overrides: Vec<DeviceOverrides> = ids
            .iter()
            .map(|id| DeviceOverrides {
                id: (*id).to_owned(),
                label: Some(format!("Room {id}")),
                ..Default::default()
            })
            .collect();
        let config = ResolvedConfig::resolve(&DisplayDefaults::default(), &overrides);
        Renderer::new(config, Translations::for_locale(Locale::En), Locale::En, "red")
    }

    fn response(id: &str, snapshots: Vec<RawDeviceSnapshot>) -> DeviceResponse {
        IndexMap::from([(id.to_owned(), snapshots)])
    }

    fn radiator(temperature: &str) -> RawDeviceSnapshot {
        RawDeviceSnapshot::new("RT")
            .with(ACTUAL_TEMPERATURE, Datapoint::new(temperature, "°C"))
            .with(SET_TEMPERATURE, Datapoint::new("21", "°C"))
            .with(VALVE_STATE, Datapoint::new("0", "%"))
            .with(CONTROL_MODE, Datapoint::new("0", ""))
    }

    #[test]
    fn empty_batch_renders_nothing() {
        assert_eq!(renderer(&["a"]).render_batch(&[]).unwrap(), "");
    }

    #[test]
    fn keeps_arrival_order() {
        let renderer = renderer(&["a", "b"]);
        let batch = [
            response("b", vec![radiator("20")]),
            response("a", vec![radiator("21")]),
        ];

        let output = renderer.render_batch(&batch).unwrap();

        let expected = renderer.render_device("b", &radiator("20")).unwrap()
            + &renderer.render_device("a", &radiator("21")).unwrap();
        assert_eq!(output, expected);
        assert!(output.find("Room b").unwrap() < output.find("Room a").unwrap());
    }

    #[test]
    fn one_broken_device_aborts_the_batch() {
        let renderer = renderer(&["a", "b"]);
        let broken = RawDeviceSnapshot::new("RT").with(VALVE_STATE, Datapoint::new("0", "%"));
        let batch = [
            response("a", vec![radiator("21")]),
            response("b", vec![broken]),
        ];

        let err = renderer.render_batch(&batch).unwrap_err();

        assert_eq!(err.to_string(), "failed to render device b");
    }

    #[test]
    fn empty_snapshot_list_aborts_the_batch() {
        let renderer = renderer(&["a"]);

        let err = renderer
            .render_batch(&[response("a", Vec::new())])
            .unwrap_err();

        assert_eq!(err.to_string(), "no data received for device a");
    }
}
