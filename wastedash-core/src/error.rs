// Error types for the dashboard HTTP layer

use crate::HttpStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Payload Too Large: {0}")]
    PayloadTooLarge(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.http_status().code()
    }

    /// Get the HttpStatus enum for this error
    pub fn http_status(&self) -> HttpStatus {
        match self {
            Error::RouteNotFound(_) | Error::NotFound(_) => HttpStatus::NotFound,
            Error::MethodNotAllowed(_) => HttpStatus::MethodNotAllowed,
            Error::BadRequest(_) | Error::Deserialization(_) => HttpStatus::BadRequest,
            Error::PayloadTooLarge(_) => HttpStatus::PayloadTooLarge,
            Error::ServiceUnavailable(_) => HttpStatus::ServiceUnavailable,
            Error::Template(_) | Error::Database(_) | Error::Internal(_) | Error::Io(_) => {
                HttpStatus::InternalServerError
            }
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.http_status().is_server_error()
    }

    /// Message safe to show to a browser. Server errors never echo their detail.
    pub fn public_message(&self) -> String {
        match self {
            Error::RouteNotFound(_) | Error::NotFound(_) => {
                "The page or record you asked for does not exist.".to_string()
            }
            Error::MethodNotAllowed(_) => "That action is not supported here.".to_string(),
            Error::BadRequest(msg) | Error::Deserialization(msg) => msg.clone(),
            Error::PayloadTooLarge(_) => "The submitted form is too large.".to_string(),
            _ => "Something went wrong while processing your request.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(Error::NotFound("routes/9".into()).status_code(), 404);
        assert_eq!(Error::RouteNotFound("GET /nope".into()).status_code(), 404);
        assert_eq!(Error::MethodNotAllowed("PUT /".into()).status_code(), 405);
        assert_eq!(Error::BadRequest("bad".into()).status_code(), 400);
        assert_eq!(Error::Database("gone".into()).status_code(), 500);
    }

    #[test]
    fn test_public_message_hides_server_detail() {
        let err = Error::Database("Access denied for user 'root'@'10.0.0.4'".into());
        assert!(err.is_server_error());
        assert!(!err.public_message().contains("root"));
    }

    #[test]
    fn test_public_message_keeps_client_detail() {
        let err = Error::BadRequest("vehicle_id must be a whole number".into());
        assert!(err.is_client_error());
        assert_eq!(err.public_message(), "vehicle_id must be a whole number");
    }
}
