//! Mapping from domain errors to HTTP responses.
//!
//! Every error leaving the API goes through here so the status codes and
//! the `ErrorResponse` envelope stay consistent across endpoints.

use std::collections::HashMap;

use actix_web::HttpResponse;
use validator::ValidationErrors;

use sb_core::errors::{
    AuthError, BookingError, DomainError, ExpertError, ScheduleError, TokenError,
};
use sb_shared::errors::{error_codes, ErrorResponse};

/// Convert a domain error into an HTTP response with the matching status
/// code and stable error code.
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    let (builder, code) = match err {
        DomainError::Validation { .. } => (
            HttpResponse::BadRequest(),
            error_codes::VALIDATION_ERROR,
        ),
        DomainError::Schedule(schedule) => match schedule {
            ScheduleError::InvalidDate { .. }
            | ScheduleError::InvalidTimeFormat { .. }
            | ScheduleError::InvalidWeekday { .. }
            | ScheduleError::InvalidTimeRange { .. } => {
                (HttpResponse::BadRequest(), error_codes::INVALID_INPUT)
            }
            ScheduleError::SlotOverlap => (HttpResponse::Conflict(), error_codes::CONFLICT),
            ScheduleError::SlotNotFound | ScheduleError::ExpertNotFound => {
                (HttpResponse::NotFound(), error_codes::NOT_FOUND)
            }
        },
        DomainError::NotFound { .. } => (HttpResponse::NotFound(), error_codes::NOT_FOUND),
        DomainError::Expert(expert) => match expert {
            ExpertError::ExpertNotFound | ExpertError::UserNotFound => {
                (HttpResponse::NotFound(), error_codes::NOT_FOUND)
            }
            ExpertError::ProfileAlreadyExists => {
                (HttpResponse::Conflict(), error_codes::CONFLICT)
            }
        },
        DomainError::Booking(booking) => match booking {
            BookingError::ExpertNotFound
            | BookingError::SlotNotFound
            | BookingError::BookingNotFound => {
                (HttpResponse::NotFound(), error_codes::NOT_FOUND)
            }
            BookingError::SlotOwnershipMismatch => {
                (HttpResponse::Forbidden(), error_codes::PERMISSION_DENIED)
            }
            BookingError::SlotAlreadyBooked => (HttpResponse::Conflict(), error_codes::CONFLICT),
        },
        DomainError::PermissionDenied { .. } => {
            (HttpResponse::Forbidden(), error_codes::PERMISSION_DENIED)
        }
        DomainError::Conflict { .. } => (HttpResponse::Conflict(), error_codes::CONFLICT),
        DomainError::Unauthorized => (HttpResponse::Unauthorized(), error_codes::UNAUTHORIZED),
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidCredentials => {
                (HttpResponse::Unauthorized(), error_codes::UNAUTHORIZED)
            }
            AuthError::EmailAlreadyRegistered => {
                (HttpResponse::Conflict(), error_codes::CONFLICT)
            }
            AuthError::UserNotFound => (HttpResponse::NotFound(), error_codes::NOT_FOUND),
            AuthError::InsufficientPermissions => {
                (HttpResponse::Forbidden(), error_codes::PERMISSION_DENIED)
            }
        },
        DomainError::Token(token) => match token {
            TokenError::TokenGenerationFailed => (
                HttpResponse::InternalServerError(),
                error_codes::INTERNAL_ERROR,
            ),
            _ => (HttpResponse::Unauthorized(), error_codes::UNAUTHORIZED),
        },
        DomainError::Internal { .. } => {
            log::error!("internal error: {}", err);
            (
                HttpResponse::InternalServerError(),
                error_codes::INTERNAL_ERROR,
            )
        }
    };

    let message = match err {
        // never leak internal detail to clients
        DomainError::Internal { .. } => "An internal error occurred".to_string(),
        other => other.to_string(),
    };

    let mut builder = builder;
    builder.json(ErrorResponse::new(code, message))
}

/// Convert `validator` errors into a 400 response with per-field details.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut details: HashMap<String, serde_json::Value> = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        if let Ok(value) = serde_json::to_value(messages) {
            details.insert(field.to_string(), value);
        }
    }

    HttpResponse::BadRequest().json(ErrorResponse::with_details(
        error_codes::VALIDATION_ERROR,
        "Request validation failed",
        details,
    ))
}
