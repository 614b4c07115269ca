use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpyglassError {
    #[error("Unparsable publication date: {0}")]
    InvalidPublicationDate(String),

    #[error("Missing required catalog column: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}
