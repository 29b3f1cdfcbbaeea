//! Extractors whose rejections come back as `ErrorResponse` bodies

use axum::extract::{FromRequest, FromRequestParts};

use crate::routes::AppError;

/// `axum::Json`, rejecting malformed bodies with a 400 JSON error
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query`, rejecting bad query strings with a 400 JSON error
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
