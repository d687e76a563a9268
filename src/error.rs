#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseIdError {
    #[error("invalid identifier: {id}")]
    InvalidFormat { id: String },

    #[error("identifier is not in case-insensitive format: {id}")]
    NotInsensitiveFormat { id: String },
}

pub type Result<T> = std::result::Result<T, CaseIdError>;
