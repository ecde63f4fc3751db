mod device_config;
mod settings;
mod truthy;

pub use device_config::*;
pub use settings::*;
pub use truthy::*;
