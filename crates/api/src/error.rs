use std::collections::BTreeMap;

use agency_core::error::CoreError;
use agency_core::validation::field_messages;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `agency_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Field-level validation failure on a write payload.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// The request body could not be read as the expected JSON shape.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    /// A path segment (usually the id) did not parse.
    #[error("Invalid path: {0}")]
    Path(#[from] PathRejection),

    /// An HTML page failed to render.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<BTreeMap<String, Vec<String>>>,
}

/// Status, code, message and optional per-field messages of an error.
type Classified = (
    StatusCode,
    &'static str,
    String,
    Option<BTreeMap<String, Vec<String>>>,
);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core, None),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Request payload errors ---
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid input".to_string(),
                Some(field_messages(errors)),
            ),
            AppError::Json(rejection) => classify_json_rejection(rejection),
            AppError::Path(rejection) => classify_path_rejection(rejection),

            // --- Server-side failures ---
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                internal()
            }
        };

        let body = ErrorBody {
            error: message,
            code,
            fields,
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> Classified {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
        None,
    )
}

fn classify_core_error(core: &CoreError, field: Option<&str>) -> Classified {
    let fields = |msg: &String| {
        field.map(|f| BTreeMap::from([(f.to_string(), vec![msg.clone()])]))
    };
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
            None,
        ),
        CoreError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            msg.clone(),
            fields(msg),
        ),
        CoreError::InvalidReference(msg) => (
            StatusCode::BAD_REQUEST,
            "INVALID_REFERENCE",
            msg.clone(),
            fields(msg),
        ),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone(), None),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal error");
            internal()
        }
    }
}

fn classify_sqlx_error(err: &sqlx::Error) -> Classified {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
            None,
        );
    }
    match domain_error(err) {
        Some((core, field)) => classify_core_error(&core, field),
        None => {
            tracing::error!(error = %err, "Database error");
            internal()
        }
    }
}

/// Translate a constraint or data violation into its domain error, with the
/// request field it concerns when that is known.
///
/// - `23505` on a `uq_` constraint: conflict.
/// - `23503`: invalid reference, keyed by the foreign key's request field.
/// - `23514`: check constraint, validation.
/// - `22003`: numeric value out of the column's range, validation.
///
/// Anything else has no domain meaning and stays an internal error.
fn domain_error(err: &sqlx::Error) -> Option<(CoreError, Option<&'static str>)> {
    let db_err = err.as_database_error()?;
    let constraint = db_err.constraint().unwrap_or("unknown");
    match db_err.code().as_deref() {
        Some("23505") if constraint.starts_with("uq_") => Some((
            CoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            )),
            None,
        )),
        Some("23503") => Some((
            CoreError::InvalidReference("Referenced object does not exist".to_string()),
            reference_field(constraint),
        )),
        Some("23514") => Some((
            CoreError::Validation(format!("Value violates check constraint: {constraint}")),
            None,
        )),
        Some("22003") => Some((
            CoreError::Validation("Numeric value out of range".to_string()),
            None,
        )),
        _ => None,
    }
}

/// Request field that a foreign key constraint is fed from.
fn reference_field(constraint: &str) -> Option<&'static str> {
    match constraint {
        "fk_clients_user_id" | "fk_employees_user_id" => Some("user"),
        "fk_projects_client_user_id" => Some("client_user"),
        "fk_project_services_project_id" | "fk_reviews_project_id" => Some("project"),
        "fk_project_services_favour_id" => Some("favour"),
        "fk_project_services_employee_user_id" => Some("employee"),
        _ => None,
    }
}

/// Map a JSON extractor rejection. Deserialization failures become field
/// errors where the offending field can be identified.
fn classify_json_rejection(rejection: &JsonRejection) -> Classified {
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            let text = rejection.body_text();
            let fields = json_error_field(&text)
                .map(|(field, msg)| BTreeMap::from([(field, vec![msg])]));
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", text, fields)
        }
        other => (other.status(), "BAD_REQUEST", other.body_text(), None),
    }
}

/// Pull `(field, message)` out of a serde error message.
///
/// Handles `missing field `name`` and path-prefixed errors such as
/// `budget: invalid type: ...`.
fn json_error_field(text: &str) -> Option<(String, String)> {
    if let Some(start) = text.find("missing field `") {
        let rest = &text[start + "missing field `".len()..];
        let end = rest.find('`')?;
        return Some((rest[..end].to_string(), "This field is required".to_string()));
    }

    let detail = text.rsplit_once("target type: ").map_or(text, |(_, d)| d);
    let (path, msg) = detail.split_once(": ")?;
    let is_field = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '[' || c == ']');
    if is_field {
        let msg = msg.split(" at line ").next().unwrap_or(msg);
        Some((path.to_string(), msg.to_string()))
    } else {
        None
    }
}

/// Unparseable path parameters (e.g. `/projects/abc`) answer with the
/// same envelope as body validation failures.
fn classify_path_rejection(rejection: &PathRejection) -> Classified {
    match rejection {
        PathRejection::FailedToDeserializePathParams(_) => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            rejection.body_text(),
            None,
        ),
        other => {
            tracing::error!(error = %other.body_text(), "Path extraction failed");
            internal()
        }
    }
}
