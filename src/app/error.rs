use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid Chart URL.")]
    InvalidChartUrl,

    #[error("Chart URL must end with .tgz")]
    ChartUrlNotTgz,

    #[error("API error: {status} {reason} - {body}")]
    Api {
        status: i32,
        reason: String,
        body: String,
    },

    #[error("request failed: {0}")]
    Http(#[from] minreq::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_form_error_display() {
        assert_eq!(AppError::InvalidChartUrl.to_string(), "Invalid Chart URL.");
        assert_eq!(
            AppError::ChartUrlNotTgz.to_string(),
            "Chart URL must end with .tgz"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = AppError::Api {
            status: 500,
            reason: "Internal Server Error".to_string(),
            body: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error: 500 Internal Server Error - boom"
        );
    }
}
