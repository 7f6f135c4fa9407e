pub mod config;
pub mod dir;
pub mod logger;
pub mod settings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
