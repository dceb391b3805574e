use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("invalid date format: {input:?} matches none of the recognized formats")]
    InvalidDateFormat {
        input: String,
    },

    #[error("missing required field: {field}")]
    MissingRequiredField {
        field: String,
    },

    #[error("invalid amount: {input:?}")]
    InvalidAmount {
        input: String,
    },

    #[error("invalid billing period: {from} is after {to}")]
    InvalidPeriod {
        from: NaiveDate,
        to: NaiveDate,
    },

    #[error("invalid occupancy window: start {start} is after end {end}")]
    InvalidOccupancyWindow {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config serialization error: {0}")]
    ConfigSerialization(#[from] serde_json::Error),
}

impl BillingError {
    pub fn missing(field: &str) -> Self {
        BillingError::MissingRequiredField {
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BillingError>;
