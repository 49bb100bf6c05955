// Dashboard error type

use thiserror::Error;
use wastedash_handlebars::HandlebarsError;
use wastedash_seaorm::DatabaseError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Template(#[from] HandlebarsError),

    #[error(transparent)]
    Http(#[from] wastedash_core::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl From<DashboardError> for wastedash_core::Error {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Database(e) => e.into(),
            DashboardError::Template(e) => e.into(),
            DashboardError::Http(e) => e,
            DashboardError::Serialization(e) => wastedash_core::Error::Internal(e.to_string()),
            not_found @ DashboardError::NotFound { .. } => {
                wastedash_core::Error::NotFound(not_found.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: wastedash_core::Error = DashboardError::NotFound {
            resource: "route",
            id: "999".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "Not Found: route 999 not found");
    }

    #[test]
    fn test_database_errors_are_500() {
        let err: wastedash_core::Error =
            DashboardError::from(DatabaseError::Connection("refused".to_string())).into();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_http_errors_pass_through() {
        let err: wastedash_core::Error =
            DashboardError::from(wastedash_core::Error::BadRequest("bad id".to_string())).into();
        assert_eq!(err.status_code(), 400);
    }
}
