use thiserror::Error;

/// Broad category of a [`DirectoryError`], for callers that only care
/// whether the input was bad or the entry was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Name may not be empty")]
    BlankName,

    #[error("Name too long ({length} characters, max {max})")]
    NameTooLong { length: usize, max: usize },

    #[error("Name may not contain '{ch}'")]
    ForbiddenChar { ch: char },

    #[error("Invalid birthday: {month}/{day}")]
    InvalidBirthday { month: u32, day: u32 },

    #[error("No birthdays set")]
    NoBirthdays,

    #[error("Entry not found: {name}")]
    NotFound { name: String },

    #[error("No phone number set for {name}")]
    PhoneNotSet { name: String },

    #[error("No birthday set for {name}")]
    BirthdayNotSet { name: String },
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::BlankName
            | DirectoryError::NameTooLong { .. }
            | DirectoryError::ForbiddenChar { .. }
            | DirectoryError::InvalidBirthday { .. }
            | DirectoryError::NoBirthdays => ErrorKind::InvalidArgument,
            DirectoryError::NotFound { .. }
            | DirectoryError::PhoneNotSet { .. }
            | DirectoryError::BirthdayNotSet { .. } => ErrorKind::NotFound,
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
