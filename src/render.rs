mod attribute;
mod batch;
mod device;
mod fault;
mod mode;
mod number;

pub use attribute::*;
pub use fault::*;
pub use mode::*;
pub use number::*;

use crate::{
    config::ResolvedConfig,
    i18n::{Locale, Translate},
};

/// Turns polled snapshots into display markup using the resolved device settings.
#[derive(Debug, Clone)]
pub struct Renderer<T> {
    config: ResolvedConfig,
    translations: T,
    locale: Locale,
    warn_color: String,
}

impl<T: Translate> Renderer<T> {
    pub fn new(
        config: ResolvedConfig,
        translations: T,
        locale: Locale,
        warn_color: impl Into<String>,
    ) -> Self {
        Self {
            config,
            translations,
            locale,
            warn_color: warn_color.into(),
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }
}
