use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] mp_config::ConfigError),

    #[error("Identity provider setup failed: {message}")]
    Provider { message: String },

    #[error("Logger setup failed: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
