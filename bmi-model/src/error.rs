/// Measurement field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Weight,
    Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0} must be greater than zero")]
    InvalidMeasurement(Field),
}

impl Error {
    pub fn field(&self) -> Field {
        match self {
            Error::InvalidMeasurement(field) => *field,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
