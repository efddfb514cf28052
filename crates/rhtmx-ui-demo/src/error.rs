// File: src/error.rs
// Purpose: Handler errors mapped to HTML error pages

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;

use crate::layout;

#[derive(Debug)]
pub enum AppError {
    /// A 500 Internal Server Error (e.g., serializing the submitted form)
    Internal(anyhow::Error),
    /// A 404 Not Found (unknown route)
    NotFound(String),
    /// A 400 Bad Request (submitted value that can't be parsed)
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, message) = match &self {
            AppError::Internal(err) => {
                tracing::error!("Internal server error: {:#}", err);
                ("Server Error", "Something went wrong")
            }
            AppError::NotFound(msg) => ("Page Not Found", msg.as_str()),
            AppError::BadRequest(msg) => ("Bad Request", msg.as_str()),
        };
        if status != StatusCode::INTERNAL_SERVER_ERROR {
            tracing::warn!(status = status.as_u16(), "{}: {}", title, message);
        }

        let body = layout::page(
            title,
            html! {
                main class="max-w-xl mx-auto py-16 px-4" {
                    h1 class="text-2xl font-bold mb-4" { (status.as_u16()) " " (title) }
                    p class="text-gray-700 mb-6" { (message) }
                    a href="/forms" class="text-blue-600 underline" { "Back to the demo" }
                }
            },
        );
        (status, Html(body.into_string())).into_response()
    }
}

// Lets handlers use `?` on any error convertible to anyhow
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_question_mark_maps_to_internal() {
        fn parse() -> Result<u16, AppError> {
            Ok("not a number".parse::<u16>()?)
        }
        let err = parse().unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
