use std::borrow::Cow;

use actix_web::HttpResponse;
use serde_json::json;
use validator::{ValidationError, ValidationErrors};

use super::repository::RepositoryError;
use super::types::{Patch, UpdateMoviePayload};

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::new("Invalid title")
            .with_message(Cow::from("Title can't be empty")));
    }
    if title.trim().is_empty() {
        return Err(ValidationError::new("Invalid title").with_message(Cow::from(
            "Title must contain at least 1 non-whitespace character",
        )));
    }
    Ok(())
}

pub fn validate_title_patch(title: &Patch<String>) -> Result<(), ValidationError> {
    match title {
        Patch::Missing => Ok(()),
        Patch::Null => Err(ValidationError::new("Invalid title")
            .with_message(Cow::from("Title can't be null"))),
        Patch::Value(value) => validate_title(value),
    }
}

pub fn validate_year_patch(year: &Patch<i32>) -> Result<(), ValidationError> {
    match year {
        Patch::Value(value) if !(1888..=2100).contains(value) => {
            Err(ValidationError::new("Invalid year")
                .with_message(Cow::from("Year must be between 1888 and 2100")))
        }
        _ => Ok(()),
    }
}

pub fn validate_rating_patch(rating: &Patch<f64>) -> Result<(), ValidationError> {
    match rating {
        Patch::Value(value) if !(0.0..=10.0).contains(value) => {
            Err(ValidationError::new("Invalid rating")
                .with_message(Cow::from("Rating must be between 0 and 10")))
        }
        _ => Ok(()),
    }
}

pub fn validate_update_payload(payload: &UpdateMoviePayload) -> Result<(), ValidationError> {
    if payload.title.is_missing()
        && payload.year.is_missing()
        && payload.genres.is_missing()
        && payload.rating.is_missing()
        && payload.poster_url.is_missing()
        && payload.description.is_missing()
        && payload.director.is_missing()
        && payload.cast.is_missing()
    {
        return Err(ValidationError::new("Empty update")
            .with_message(Cow::from("No fields to update")));
    }
    Ok(())
}

pub fn validation_error_body(error: ValidationErrors) -> serde_json::Value {
    let source = error.field_errors();
    for (field, errors) in source.iter() {
        for err in errors.iter() {
            if let Some(message) = err.message.as_ref() {
                tracing::error!("Validation error on `{}`: {}", field, message.as_ref());
                return json!({
                    "error": message.as_ref(),
                    "field": field,
                });
            }
        }
    }
    json!({ "error": "Invalid request payload" })
}

pub fn error_response(err: RepositoryError) -> HttpResponse {
    match err {
        RepositoryError::InvalidId => HttpResponse::BadRequest().json(json!({
            "error": "Invalid movie id"
        })),
        RepositoryError::NotFound => HttpResponse::NotFound().json(json!({
            "error": "Movie not found"
        })),
        RepositoryError::Storage(err) => {
            tracing::error!("Database Error {:#?}", err);
            HttpResponse::InternalServerError().json(json!({
                "error": "Something went wrong"
            }))
        }
    }
}
