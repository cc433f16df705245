pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    InvalidName(String),
    PathEscape,
    NotFound(String),
    AlreadyExists(String),
    CtxCannotNewRootCtx,
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

impl From<lib_utils::error::Error> for Error {
    fn from(err: lib_utils::error::Error) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<lib_auth::error::Error> for Error {
    fn from(err: lib_auth::error::Error) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
// endregion: --- Error Boilerplate
