use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Source returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
}

impl SheetError {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        SheetError::Status { status }
    }
}
