use crate::config::ConfigError;
use crate::recruitment::{PipelineError, RepositoryError, ServiceError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Service(ServiceError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Service(err) => match err {
                ServiceError::Validation(_)
                | ServiceError::Invite(_)
                | ServiceError::Upload(_)
                | ServiceError::Login(_)
                | ServiceError::Pipeline(PipelineError::UnknownStage(_)) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ServiceError::NotPermitted(_) => StatusCode::FORBIDDEN,
                ServiceError::NotFound { .. } | ServiceError::Repository(RepositoryError::NotFound) => {
                    StatusCode::NOT_FOUND
                }
                ServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
                ServiceError::Pipeline(_)
                | ServiceError::Repository(RepositoryError::Unavailable(_))
                | ServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Service(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Service(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recruitment::{ApplyError, MatchScore};

    #[test]
    fn service_errors_map_to_http_statuses() {
        let forbidden = AppError::from(ServiceError::NotPermitted(
            ApplyError::ScoreBelowThreshold {
                score: MatchScore::clamped(45),
                threshold: 50,
            },
        ));
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

        let conflict = AppError::from(ServiceError::Repository(RepositoryError::Conflict));
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let missing = AppError::from(ServiceError::NotFound {
            kind: "job",
            id: "job-404".to_string(),
        });
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "job 'job-404' not found");

        let unknown = AppError::from(ServiceError::Pipeline(PipelineError::UnknownStage(
            "Ghosted".to_string(),
        )));
        assert_eq!(unknown.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn infrastructure_errors_are_internal() {
        let io = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(std::error::Error::source(&io).is_some());
    }
}
