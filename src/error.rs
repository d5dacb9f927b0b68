use std::error::Error;

use rusoto_ce::GetCostAndUsageError;
use rusoto_core::RusotoError;
use rusoto_ses::SendEmailError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum NotifierError {
    InvalidAmount(String),
    Config(String),
    GetCostAndUsage(RusotoError<GetCostAndUsageError>),
    SendEmail(RusotoError<SendEmailError>),
}

impl Display for NotifierError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            NotifierError::InvalidAmount(ref amount) => {
                write!(f, "Failed to parse cost amount {:?}", amount)
            }
            NotifierError::Config(ref message) => write!(f, "Invalid configuration: {}", message),
            NotifierError::GetCostAndUsage(ref error) => std::fmt::Display::fmt(error, f),
            NotifierError::SendEmail(ref error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl Error for NotifierError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            NotifierError::GetCostAndUsage(ref error) => Some(error),
            NotifierError::SendEmail(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<GetCostAndUsageError>> for NotifierError {
    fn from(e: RusotoError<GetCostAndUsageError>) -> NotifierError {
        NotifierError::GetCostAndUsage(e)
    }
}

impl From<RusotoError<SendEmailError>> for NotifierError {
    fn from(e: RusotoError<SendEmailError>) -> NotifierError {
        NotifierError::SendEmail(e)
    }
}
