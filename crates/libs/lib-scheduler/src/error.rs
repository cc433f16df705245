pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Classifier(String),
    Storage(String),
    Custom(String),
}

// region:    --- Error Boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<lib_classifier::error::Error> for Error {
    fn from(err: lib_classifier::error::Error) -> Self {
        Error::Classifier(err.to_string())
    }
}

impl From<lib_storage::error::Error> for Error {
    fn from(err: lib_storage::error::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
// endregion: --- Error Boilerplate
