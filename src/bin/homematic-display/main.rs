mod args;
mod display;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use args::Args;
use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser as _;
use homematic_thermostats::{
    config::{ResolvedConfig, Settings},
    i18n::Translations,
    render::Renderer,
    xmlapi::XmlApiClient,
};
use tokio::time::{Duration, MissedTickBehavior, interval};
use tokio_stream::{StreamExt as _, wrappers::IntervalStream};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::display::Display;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

/// `RUST_LOG` directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

struct Poller {
    client: XmlApiClient,
    renderer: Renderer<Translations>,
    display: Display,
    device_ids: Vec<String>,
    timezone: Tz,
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(&args.config)
        .with_context(|| format!("failed to load settings: {:?}", args.config))?;

    let config = ResolvedConfig::resolve(&settings.defaults, &settings.devices);
    debug!(columns = ?config.columns, "resolved device settings");

    let client = XmlApiClient::new(
        &settings.ccu2_ip,
        &settings.xmlapi_url,
        Duration::from_millis(settings.request_timeout),
    )
    .context("failed to create XML-API client")?;

    let renderer = Renderer::new(
        config,
        Translations::for_locale(settings.locale),
        settings.locale,
        settings.warn_color,
    );

    let poller = Poller {
        device_ids: renderer.config().devices.keys().cloned().collect(),
        renderer,
        client,
        display: Display::new(args.output),
        timezone: args.timezone,
    };

    info!(
        url = poller.client.base_url(),
        devices = poller.device_ids.len(),
        "starting homematic thermostat display"
    );

    if args.once {
        return poller.poll().await;
    }

    let mut ticker = interval(Duration::from_millis(settings.update_interval));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks = IntervalStream::new(ticker);

    while ticks.next().await.is_some() {
        // A failed cycle leaves the previous output on display.
        if let Err(err) = poller.poll().await {
            error!("poll cycle failed: {err:#}");
        }
    }

    Ok(())
}

impl Poller {
    async fn poll(&self) -> Result<()> {
        let batch = self
            .client
            .fetch_batch(self.device_ids.iter().map(String::as_str))
            .await
            .context("failed to poll CCU2")?;

        let payload = self
            .renderer
            .render_batch(&batch)
            .context("failed to render devices")?;

        self.display
            .update(&payload)
            .await
            .context("failed to update display")?;

        info!(
            devices = batch.len(),
            rendered_at = %Utc::now().with_timezone(&self.timezone),
            "display updated"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn logs_at_info_by_default() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_can_raise_the_level() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            log_filter("homematic_thermostats=trace").max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn rust_log_can_lower_the_level() {
        assert_eq!(log_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }
}
