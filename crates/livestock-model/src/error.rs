use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown GWP factor set: {name} (expected AR4, AR5, AR6_NOCCF or AR6_CCF)")]
    UnknownGwpSet { name: String },
    #[error("unknown metric: {name}")]
    UnknownMetric { name: String },
    #[error("unknown element code: {name}")]
    UnknownElement { name: String },
    #[error("unknown item kind: {name}")]
    UnknownItemKind { name: String },
    #[error("year row has {actual} values but the table has {expected} year columns")]
    YearWidthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
