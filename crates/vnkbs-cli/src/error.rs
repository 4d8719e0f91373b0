use thiserror::Error;
use vnkbs_core::{ApiError, ErrorKind, HttpError, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to start http client: {0}")]
    Transport(#[from] HttpError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Api(error) => match error.kind() {
                ErrorKind::Validation => 2,
                ErrorKind::Status => 3,
                ErrorKind::Decode => 4,
                ErrorKind::Transport => 5,
            },
            Self::Transport(_) => 5,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_the_root_error_kind() {
        let validation = CliError::from(ValidationError::EmptySymbol);
        assert_eq!(validation.exit_code(), 2);

        let status = CliError::from(
            ApiError::Status {
                url: String::from("https://example.test/x"),
                status: 404,
                body: None,
            }
            .with_context("company profile for VNM"),
        );
        assert_eq!(status.exit_code(), 3);

        let transport = CliError::from(ApiError::Transport {
            url: String::from("https://example.test/x"),
            attempts: 3,
            source: HttpError::new("connection reset"),
        });
        assert_eq!(transport.exit_code(), 5);

        let wrapped_validation = CliError::from(ApiError::from(ValidationError::EmptySymbolList));
        assert_eq!(wrapped_validation.exit_code(), 2);
    }
}
