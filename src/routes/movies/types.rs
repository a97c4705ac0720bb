use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::util::{
    validate_rating_patch, validate_title, validate_title_patch, validate_update_payload,
    validate_year_patch,
};

/// Per-field presence marker for partial updates. A key absent from the
/// request body is `Missing`; a key explicitly set to JSON null is `Null`.
/// Only non-`Missing` fields are written to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }
}

impl<T: Clone> Patch<T> {
    /// Splits the patch into a (should_set, value) pair for binding into an
    /// UPDATE statement. `Missing` keeps the stored value untouched.
    pub fn to_update(&self) -> (bool, Option<T>) {
        match self {
            Patch::Missing => (false, None),
            Patch::Null => (true, None),
            Patch::Value(value) => (true, Some(value.clone())),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present; `#[serde(default)]` covers
        // the Missing case.
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

#[derive(Deserialize, Validate, Debug)]
pub struct CreateMoviePayload {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(range(min = 1888, max = 2100, message = "Year must be between 1888 and 2100"))]
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub description: Option<String>,
    pub director: Option<String>,
    pub cast: Option<Vec<String>>,
}

#[derive(Deserialize, Validate, Debug, Default)]
#[validate(schema(function = "validate_update_payload"))]
pub struct UpdateMoviePayload {
    #[serde(default)]
    #[validate(custom(function = "validate_title_patch"))]
    pub title: Patch<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_year_patch"))]
    pub year: Patch<i32>,
    #[serde(default)]
    pub genres: Patch<Vec<String>>,
    #[serde(default)]
    #[validate(custom(function = "validate_rating_patch"))]
    pub rating: Patch<f64>,
    #[serde(default)]
    pub poster_url: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub director: Patch<String>,
    #[serde(default)]
    pub cast: Patch<Vec<String>>,
}

/// Wire representation of a stored movie. The store id is rendered as a
/// string, and absent genre/cast sequences render as empty arrays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: Option<i32>,
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub description: Option<String>,
    pub director: Option<String>,
    pub cast: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(FromRow, Debug)]
pub struct MovieRow {
    pub id: Uuid,
    pub title: String,
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub description: Option<String>,
    pub director: Option<String>,
    pub cast_list: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id.to_string(),
            title: row.title,
            year: row.year,
            genres: row.genres.unwrap_or_default(),
            rating: row.rating,
            poster_url: row.poster_url,
            description: row.description,
            director: row.director,
            cast: row.cast_list.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_missing_null_and_value() {
        let payload: UpdateMoviePayload =
            serde_json::from_str(r#"{"year": null, "rating": 8.1}"#).unwrap();
        assert_eq!(payload.year, Patch::Null);
        assert_eq!(payload.rating, Patch::Value(8.1));
        assert_eq!(payload.title, Patch::Missing);
        assert_eq!(payload.genres, Patch::Missing);
    }

    #[test]
    fn empty_update_payload_is_rejected() {
        let payload: UpdateMoviePayload = serde_json::from_str("{}").unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_with_null_title_is_rejected() {
        let payload: UpdateMoviePayload = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_with_out_of_range_year_is_rejected() {
        let payload: UpdateMoviePayload = serde_json::from_str(r#"{"year": 1500}"#).unwrap();
        assert!(payload.validate().is_err());
        let payload: UpdateMoviePayload = serde_json::from_str(r#"{"year": 1999}"#).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_payload_requires_non_empty_title() {
        let payload: CreateMoviePayload = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(payload.validate().is_err());
        let payload: CreateMoviePayload = serde_json::from_str(r#"{"title": "   "}"#).unwrap();
        assert!(payload.validate().is_err());
        let payload: CreateMoviePayload = serde_json::from_str(r#"{"title": "Alien"}"#).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_payload_checks_rating_bounds() {
        let payload: CreateMoviePayload =
            serde_json::from_str(r#"{"title": "Alien", "rating": 10.5}"#).unwrap();
        assert!(payload.validate().is_err());
        let payload: CreateMoviePayload =
            serde_json::from_str(r#"{"title": "Alien", "rating": 0.0}"#).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn row_serialization_renders_absent_sequences_as_empty() {
        let row = MovieRow {
            id: Uuid::new_v4(),
            title: "Alien".to_string(),
            year: None,
            genres: None,
            rating: None,
            poster_url: None,
            description: None,
            director: None,
            cast_list: None,
            created_at: None,
            updated_at: None,
        };
        let movie = Movie::from(row);
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["genres"], serde_json::json!([]));
        assert_eq!(value["cast"], serde_json::json!([]));
        assert_eq!(value["year"], serde_json::Value::Null);
        assert_eq!(value["rating"], serde_json::Value::Null);
    }
}
