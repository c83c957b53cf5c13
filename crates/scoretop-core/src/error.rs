use strum::IntoStaticStr;
use thiserror::Error;

#[derive(Debug, Error, IntoStaticStr)]
pub enum Error {
    #[error("NBT parse error: {0}")]
    Nbt(String),

    #[error("Malformed score data: {0}")]
    MalformedData(String),

    #[error("Invalid identity file name: {0}")]
    MalformedIdentityFilename(String),

    #[error("Unknown converter: {0}")]
    UnknownConverter(String),

    #[error("Unknown unit prefix: {0}")]
    UnknownUnit(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid combine pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short name of the error kind, used in retry diagnostics.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_names() {
        assert_eq!(Error::Nbt("x".into()).kind(), "Nbt");
        assert_eq!(Error::UnknownConverter("x".into()).kind(), "UnknownConverter");
        assert_eq!(
            Error::MalformedIdentityFilename("x".into()).kind(),
            "MalformedIdentityFilename"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert_eq!(err.kind(), "Io");
        assert!(err.to_string().contains("gone"));
    }
}
