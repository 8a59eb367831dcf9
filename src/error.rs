use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Date parse error: {0}")]
    DateParse(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Json(_) => "JSON_ERROR",
            Error::DateParse(_) => "DATE_PARSE_ERROR",
            Error::Other(_) => "ERROR",
        }
    }
}
