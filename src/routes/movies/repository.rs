use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::types::{CreateMoviePayload, Movie, MovieRow, UpdateMoviePayload};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("invalid movie id")]
    InvalidId,
    #[error("movie not found")]
    NotFound,
    #[error("storage unavailable")]
    Storage(#[from] sqlx::Error),
}

/// Parses a path segment into a store identifier. Must be called before any
/// store round trip so malformed ids never reach the database.
pub fn parse_movie_id(movie_id: &str) -> Result<Uuid, RepositoryError> {
    movie_id
        .parse::<Uuid>()
        .map_err(|_| RepositoryError::InvalidId)
}

pub async fn insert_movie(
    connection: &PgPool,
    payload: &CreateMoviePayload,
) -> Result<Movie, RepositoryError> {
    let row = sqlx::query_as::<_, MovieRow>(
        r#"
      INSERT INTO movies (id, title, year, genres, rating, poster_url, description, director, cast_list, created_at)
      VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
      RETURNING id, title, year, genres, rating, poster_url, description, director, cast_list, created_at, updated_at
    "#,
    )
    .bind(Uuid::new_v4())
    .bind(payload.title.clone())
    .bind(payload.year)
    .bind(payload.genres.clone())
    .bind(payload.rating)
    .bind(payload.poster_url.clone())
    .bind(payload.description.clone())
    .bind(payload.director.clone())
    .bind(payload.cast.clone())
    .bind(Utc::now())
    .fetch_one(connection)
    .await?;

    Ok(row.into())
}

pub async fn find_movie(connection: &PgPool, movie_id: Uuid) -> Result<Movie, RepositoryError> {
    let row = sqlx::query_as::<_, MovieRow>(
        r#"
      SELECT id, title, year, genres, rating, poster_url, description, director, cast_list, created_at, updated_at
      FROM movies
      WHERE id = $1
    "#,
    )
    .bind(movie_id)
    .fetch_optional(connection)
    .await?;

    row.map(Movie::from).ok_or(RepositoryError::NotFound)
}

/// Both filters are optional and combine with AND. Title matching is a
/// case-insensitive substring, genre is exact membership in the genres array.
/// Row order is whatever the store returns.
pub async fn list_movies(
    connection: &PgPool,
    title_query: Option<&str>,
    genre: Option<&str>,
) -> Result<Vec<Movie>, RepositoryError> {
    let rows = sqlx::query_as::<_, MovieRow>(
        r#"
      SELECT id, title, year, genres, rating, poster_url, description, director, cast_list, created_at, updated_at
      FROM movies
      WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
        AND ($2::text IS NULL OR $2 = ANY(genres))
    "#,
    )
    .bind(title_query)
    .bind(genre)
    .fetch_all(connection)
    .await?;

    Ok(rows.into_iter().map(Movie::from).collect())
}

/// Applies only the fields supplied in the payload and refreshes updated_at,
/// returning the updated row in the same statement so a concurrent delete
/// can't slip between the write and the read.
pub async fn apply_movie_update(
    connection: &PgPool,
    movie_id: Uuid,
    payload: &UpdateMoviePayload,
) -> Result<Movie, RepositoryError> {
    let (set_title, title) = payload.title.to_update();
    let (set_year, year) = payload.year.to_update();
    let (set_genres, genres) = payload.genres.to_update();
    let (set_rating, rating) = payload.rating.to_update();
    let (set_poster_url, poster_url) = payload.poster_url.to_update();
    let (set_description, description) = payload.description.to_update();
    let (set_director, director) = payload.director.to_update();
    let (set_cast, cast) = payload.cast.to_update();

    let row = sqlx::query_as::<_, MovieRow>(
        r#"
      UPDATE movies SET
        title = CASE WHEN $2 THEN $3::text ELSE title END,
        year = CASE WHEN $4 THEN $5::int4 ELSE year END,
        genres = CASE WHEN $6 THEN $7::text[] ELSE genres END,
        rating = CASE WHEN $8 THEN $9::float8 ELSE rating END,
        poster_url = CASE WHEN $10 THEN $11::text ELSE poster_url END,
        description = CASE WHEN $12 THEN $13::text ELSE description END,
        director = CASE WHEN $14 THEN $15::text ELSE director END,
        cast_list = CASE WHEN $16 THEN $17::text[] ELSE cast_list END,
        updated_at = $18
      WHERE id = $1
      RETURNING id, title, year, genres, rating, poster_url, description, director, cast_list, created_at, updated_at
    "#,
    )
    .bind(movie_id)
    .bind(set_title)
    .bind(title)
    .bind(set_year)
    .bind(year)
    .bind(set_genres)
    .bind(genres)
    .bind(set_rating)
    .bind(rating)
    .bind(set_poster_url)
    .bind(poster_url)
    .bind(set_description)
    .bind(description)
    .bind(set_director)
    .bind(director)
    .bind(set_cast)
    .bind(cast)
    .bind(Utc::now())
    .fetch_optional(connection)
    .await?;

    row.map(Movie::from).ok_or(RepositoryError::NotFound)
}

pub async fn remove_movie(connection: &PgPool, movie_id: Uuid) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        r#"
      DELETE FROM movies WHERE id = $1
    "#,
    )
    .bind(movie_id)
    .execute(connection)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}
