pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    InvalidName(String),
    AlreadyRegistered(String),
    NotFound(String),
    NotTrained(String),
    Io(String),
    Json(String),
    Custom(String),
}

// region:    --- Error Boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl From<lib_core::error::Error> for Error {
    fn from(err: lib_core::error::Error) -> Self {
        match err {
            lib_core::error::Error::InvalidName(name) => Error::InvalidName(name),
            lib_core::error::Error::NotFound(detail) => Error::NotFound(detail),
            other => Error::Custom(other.to_string()),
        }
    }
}

impl From<lib_storage::error::Error> for Error {
    fn from(err: lib_storage::error::Error) -> Self {
        match err {
            lib_storage::error::Error::NotFound(detail) => Error::NotTrained(detail),
            other => Error::Custom(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
// endregion: --- Error Boilerplate
