use thiserror::Error;

pub type AkResult<T> = Result<T, AkError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AkError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}
