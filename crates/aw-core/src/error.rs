use thiserror::Error;

pub type AwResult<T> = Result<T, AwError>;

#[derive(Error, Debug)]
pub enum AwError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Out of range: {what} = {value} (expected {expected})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Did not converge: {what}")]
    NotConverged { what: &'static str },
}
