//! Error type shared by the finance pipeline.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DaybookError {
    #[error("invalid order date '{0}' (expected dd/mm/yyyy)")]
    InvalidDate(String),

    #[error("non-finite {field} total on {date}")]
    NonFiniteTotal { date: String, field: &'static str },

    #[error("no orders found for {month:02}/{year}")]
    NoOrdersInPeriod { month: u32, year: i32 },

    #[error("no journal entries generated")]
    NoJournalLines,
}

pub type Result<T> = std::result::Result<T, DaybookError>;
