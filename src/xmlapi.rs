use std::time::Duration;

use anyhow::{Context as _, Result, bail};
use indexmap::IndexMap;
use tracing::debug;

use crate::homematic::{Datapoint, DeviceResponse, RawDeviceSnapshot};

/// The XML-API add-on answers in Latin-1 unless the response says otherwise.
const DEFAULT_CHARSET: &str = "ISO-8859-1";

/// Read-only client for the XML-API add-on of a Homematic CCU2.
#[derive(Debug, Clone)]
pub struct XmlApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl XmlApiClient {
    /// `ccu2_ip` may be a bare host name or include a scheme.
    pub fn new(ccu2_ip: &str, xmlapi_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self::with_client(client, base_url(ccu2_ip, xmlapi_url)))
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_device(&self, device_id: &str) -> Result<RawDeviceSnapshot> {
        let url = format!("{}/state.cgi", self.base_url);
        debug!(device_id, %url, "requesting device state");

        let body = self
            .client
            .get(&url)
            .query(&[("device_id", device_id)])
            .send()
            .await
            .with_context(|| format!("failed to request state of device {device_id}"))?
            .error_for_status()
            .with_context(|| format!("CCU2 rejected state request for device {device_id}"))?
            .text_with_charset(DEFAULT_CHARSET)
            .await
            .with_context(|| format!("failed to read state of device {device_id}"))?;

        parse_state(&body).with_context(|| format!("failed to parse state of device {device_id}"))
    }

    /// Polls every device in order. One poll response element per device.
    pub async fn fetch_batch<'a>(
        &self,
        device_ids: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<DeviceResponse>> {
        let mut batch = Vec::new();
        for device_id in device_ids {
            let snapshot = self.fetch_device(device_id).await?;
            batch.push(IndexMap::from([(device_id.to_owned(), vec![snapshot])]));
        }

        Ok(batch)
    }
}

fn base_url(ccu2_ip: &str, xmlapi_url: &str) -> String {
    let host = ccu2_ip.trim_end_matches('/');
    let path = xmlapi_url.trim_matches('/');

    if host.contains("://") {
        format!("{host}/{path}")
    } else {
        format!("http://{host}/{path}")
    }
}

/// Parses a `state.cgi` response into the datapoints of its device.
///
/// Datapoints are keyed by their `type`; when several channels report the
/// same type, the first one wins.
pub fn parse_state(xml: &str) -> Result<RawDeviceSnapshot> {
    let document = roxmltree::Document::parse(xml).context("invalid XML")?;
    let root = document.root_element();

    if root.children().any(|node| is_element_named(node, "not_found")) {
        bail!("device not found on CCU2");
    }

    let Some(device) = root
        .descendants()
        .find(|node| is_element_named(*node, "device"))
    else {
        bail!("no <device> element in response");
    };

    let mut snapshot = RawDeviceSnapshot::new(device.attribute("name").unwrap_or_default());
    for datapoint in device
        .descendants()
        .filter(|node| is_element_named(*node, "datapoint"))
    {
        let Some(kind) = datapoint.attribute("type") else {
            continue;
        };
        if snapshot.datapoints.contains_key(kind) {
            continue;
        }

        snapshot.datapoints.insert(
            kind.to_owned(),
            Datapoint::new(
                datapoint.attribute("value").unwrap_or_default(),
                datapoint.attribute("valueunit").unwrap_or_default(),
            ),
        );
    }

    Ok(snapshot)
}

fn is_element_named(node: roxmltree::Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}
