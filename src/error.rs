use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Set GH_ACCESS_TOKEN first.")]
    MissingToken,

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ExportResult<T>;
    fn with_context<F>(self, f: F) -> ExportResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ExportResult<T> {
        self.map_err(|e| ExportError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ExportResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ExportError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ExportResult<T> {
        self.ok_or_else(|| ExportError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ExportResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ExportError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! export_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::ExportError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::ExportError::$error_type(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export_error;

    #[test]
    fn test_error_context_on_result() {
        let result: Result<i32, std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));

        let export_result = result.context("Failed to read remote file");
        assert!(export_result.is_err());

        match export_result {
            Err(ExportError::Unknown(msg)) => {
                assert!(msg.contains("Failed to read remote file"));
                assert!(msg.contains("file not found"));
            }
            _ => panic!("Expected ExportError::Unknown"),
        }
    }

    #[test]
    fn test_error_context_on_option() {
        let option: Option<String> = None;
        let result = option.context("access token not found");

        assert!(result.is_err());
        match result {
            Err(ExportError::Unknown(msg)) => {
                assert_eq!(msg, "access token not found");
            }
            _ => panic!("Expected ExportError::Unknown"),
        }
    }

    #[test]
    fn test_error_context_with_closure() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let export_result =
            result.with_context(|| format!("Failed to publish file at path: {}", "github_issues.json"));

        assert!(export_result.is_err());
        match export_result {
            Err(ExportError::Unknown(msg)) => {
                assert!(msg.contains("Failed to publish file at path: github_issues.json"));
                assert!(msg.contains("access denied"));
            }
            _ => panic!("Expected ExportError::Unknown"),
        }
    }

    #[test]
    fn test_export_error_macro() {
        let error = export_error!(ApiError, "Request failed");
        match error {
            ExportError::ApiError(msg) => assert_eq!(msg, "Request failed"),
            _ => panic!("Expected ExportError::ApiError"),
        }

        let error = export_error!(Unknown, "invalid payload in {}", "github_teams.yml");
        match error {
            ExportError::Unknown(msg) => {
                assert_eq!(msg, "invalid payload in github_teams.yml")
            }
            _ => panic!("Expected ExportError::Unknown"),
        }
    }

    #[test]
    fn test_missing_token_message_is_fixed() {
        assert_eq!(ExportError::MissingToken.to_string(), "Set GH_ACCESS_TOKEN first.");
    }
}
