#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing required attribute {0}")]
    MissingAttr(&'static str),

    #[error("orbit number is not numeric: {0:?}")]
    InvalidOrbitNumber(String),

    #[error("invalid band: {0}")]
    InvalidBand(String),

    #[error("Config invalid: {0}")]
    ConfigInvalid(String),
    #[error("Failed to load config: {}", .source)]
    ConfigLoad {
        #[from]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
