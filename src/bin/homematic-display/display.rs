use std::path::PathBuf;

use anyhow::{Context as _, Result};

/// Hands a rendered payload to whatever shows it.
#[derive(Debug)]
pub struct Display {
    output: Option<PathBuf>,
}

impl Display {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    /// Replaces the displayed markup. The output file is swapped in one rename
    /// so readers never see a partial payload.
    pub async fn update(&self, payload: &str) -> Result<()> {
        let Some(output) = &self.output else {
            println!("{payload}");
            return Ok(());
        };

        let staging = output.with_extension("tmp");
        tokio::fs::write(&staging, payload)
            .await
            .with_context(|| format!("failed to write file: {staging:?}"))?;
        tokio::fs::rename(&staging, output)
            .await
            .with_context(|| format!("failed to replace file: {output:?}"))?;

        Ok(())
    }
}
