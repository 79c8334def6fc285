pub mod errors;
pub mod logging;
pub mod neighbors;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use neighbors::NeighborsConfig;
pub use root::{CliOverrides, Config, MAX_DURATION_SECS};
