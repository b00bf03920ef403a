mod configuration;
mod filesystem;
mod loader;
mod model;

pub use configuration::{Configuration, DEFAULT_SCORE_THRESHOLD, DEFAULT_TIMEOUT};
pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{CheckConfig, Config, ToolConfig};
