use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid date `{value}`: expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    #[error("date `{0}` is outside the supported calendar range")]
    DateOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, Error>;
