use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Human-readable failure reported by (or on behalf of) the service.
    #[error("{0}")]
    Api(String),

    #[error("Both a bank transactions file and a rules file are required")]
    MissingFiles,

    #[error("Company ID must not be blank")]
    BlankCompanyId,

    #[error("Cannot tell whether {0} is CSV or JSON; pass --kind")]
    UnknownFileKind(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
