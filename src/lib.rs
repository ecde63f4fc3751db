pub mod config;
pub mod homematic;
pub mod i18n;
pub mod render;
pub mod xmlapi;
