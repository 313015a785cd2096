use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::Uri;

use super::problem::{Problem, ValidationViolation, bad_request, internal_error, not_found};
use crate::domain::error::DomainError;

/// Map domain error to RFC9457 Problem
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::NotFound { .. } | DomainError::NoDefaultSettings => {
            not_found(e.to_string()).with_code("TEXT_CANVAS_NOT_FOUND")
        }
        DomainError::Validation(violations) => bad_request("Input validation failed")
            .with_code("TEXT_CANVAS_VALIDATION")
            .with_errors(
                violations
                    .iter()
                    .map(|v| ValidationViolation {
                        field: v.field.clone(),
                        message: v.message.clone(),
                    })
                    .collect(),
            ),
        DomainError::TextOverflow => {
            bad_request(e.to_string()).with_code("TEXT_CANVAS_TEXT_OVERFLOW")
        }
        DomainError::Storage(_) | DomainError::Render(_) | DomainError::Database(_) => {
            tracing::error!(error = ?e, "Internal error");
            internal_error("An internal error occurred").with_code("TEXT_CANVAS_INTERNAL")
        }
    };

    problem.with_instance(instance).with_trace_id(trace_id)
}

/// Problem without an `instance`; handlers attach the request path via [`at`].
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "")
    }
}

/// Error mapper that converts into a Problem carrying the request path.
pub fn at<E: Into<Problem>>(uri: &Uri) -> impl FnOnce(E) -> Problem + '_ {
    move |e| e.into().with_instance(uri.path())
}

impl From<JsonRejection> for Problem {
    fn from(rejection: JsonRejection) -> Self {
        bad_request(rejection.body_text()).with_code("TEXT_CANVAS_BAD_REQUEST")
    }
}

impl From<PathRejection> for Problem {
    fn from(rejection: PathRejection) -> Self {
        bad_request(rejection.body_text()).with_code("TEXT_CANVAS_BAD_REQUEST")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use uuid::Uuid;

    #[test]
    fn not_found_maps_to_404() {
        let p = domain_error_to_problem(&DomainError::settings_not_found(Uuid::nil()), "/x");
        assert_eq!(p.status, StatusCode::NOT_FOUND);
        assert_eq!(p.code, "TEXT_CANVAS_NOT_FOUND");
        assert_eq!(p.instance, "/x");
        assert!(p.detail.contains("Settings not found"));
    }

    #[test]
    fn validation_lists_fields() {
        let p: Problem = DomainError::validation("name", "name is required").into();
        assert_eq!(p.status, StatusCode::BAD_REQUEST);
        let errors = p.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn request_path_becomes_the_instance() {
        let uri: Uri = "/api/settings/set-default/abc?x=1".parse().unwrap();
        let p = at(&uri)(DomainError::NoDefaultSettings);
        assert_eq!(p.instance, "/api/settings/set-default/abc");

        let p: Problem = DomainError::NoDefaultSettings.into();
        assert!(p.instance.is_empty());
    }

    #[test]
    fn overflow_is_a_client_error() {
        let p: Problem = DomainError::TextOverflow.into();
        assert_eq!(p.status, StatusCode::BAD_REQUEST);
        assert_eq!(p.code, "TEXT_CANVAS_TEXT_OVERFLOW");
    }

    #[test]
    fn internal_errors_hide_details() {
        let p: Problem = DomainError::Storage("disk /secret full".to_owned()).into();
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!p.detail.contains("secret"));

        let p: Problem = DomainError::Database(anyhow::anyhow!("connection refused")).into();
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!p.detail.contains("refused"));
    }
}
