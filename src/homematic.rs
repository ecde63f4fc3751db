mod control_mode;
mod datapoint;
mod device_type;
mod fault_code;
mod snapshot;

pub use control_mode::*;
pub use datapoint::*;
pub use device_type::*;
pub use fault_code::*;
pub use snapshot::*;
