use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Login failed: {0}")]
    Login(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Update rejected: {0}")]
    UpdateRejected(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn parse(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }
}
