use std::fmt;
use thiserror::Error;

/// The argument shape a command was expecting when it rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Name,
    NameAndPhone,
    NameAndBirthday,
    NoArguments,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Usage::Name => write!(f, "<name>"),
            Usage::NameAndPhone => write!(f, "<name> <phone>"),
            Usage::NameAndBirthday => write!(f, "<name> <birthday>"),
            Usage::NoArguments => write!(f, "no arguments"),
        }
    }
}

/// Coarse classification used by the command boundary to pick a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Lookup,
    Argument,
    Storage,
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid phone number '{0}': must be exactly 10 digits")]
    InvalidPhone(String),

    #[error("Invalid birthday '{0}': use DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    #[error("Missing arguments, expected {0}")]
    MissingArguments(Usage),

    #[error("Unexpected arguments, expected {0}")]
    UnexpectedArguments(Usage),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl BookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::InvalidPhone(_) | BookError::InvalidBirthday(_) => ErrorKind::Validation,
            BookError::ContactNotFound(_) | BookError::PhoneNotFound(_) => ErrorKind::Lookup,
            BookError::MissingArguments(_) | BookError::UnexpectedArguments(_) => {
                ErrorKind::Argument
            }
            BookError::Io(_) | BookError::Serialization(_) | BookError::Config(_) => {
                ErrorKind::Storage
            }
        }
    }

    /// The fixed message shown to the user when a command fails.
    pub fn user_message(&self) -> String {
        match (self.kind(), self) {
            (ErrorKind::Validation, BookError::InvalidBirthday(_)) => {
                "Invalid date format. Use DD.MM.YYYY".to_string()
            }
            (ErrorKind::Validation, _) => "Give me name and phone please.".to_string(),
            // An unknown phone on a known contact reads as bad phone input.
            (ErrorKind::Lookup, BookError::PhoneNotFound(_)) => {
                "Give me name and phone please.".to_string()
            }
            (ErrorKind::Lookup, _) => "Contact does not exist.".to_string(),
            (
                ErrorKind::Argument,
                BookError::MissingArguments(usage) | BookError::UnexpectedArguments(usage),
            ) => match usage {
                Usage::Name => "Give me name please.".to_string(),
                Usage::NameAndPhone => "Give me name and phone please.".to_string(),
                Usage::NameAndBirthday => "Give me name and birthday please.".to_string(),
                Usage::NoArguments => "Invalid command format.".to_string(),
            },
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
