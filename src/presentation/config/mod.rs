mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, DatabaseSettings, GenerationSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError,
};
