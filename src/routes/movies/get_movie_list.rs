use actix_web::{
    web::{Data, Query},
    HttpResponse,
};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::Instrument;

use super::list_movies;
use super::util::error_response;

#[derive(Deserialize, Debug)]
pub struct MovieFilters {
    pub q: Option<String>,
    pub genre: Option<String>,
}

pub async fn get_movie_list(
    connection: Data<PgPool>,
    filters: Query<MovieFilters>,
) -> HttpResponse {
    let query_span = tracing::info_span!("List movies", ?filters);

    match list_movies(
        connection.as_ref(),
        filters.q.as_deref(),
        filters.genre.as_deref(),
    )
    .instrument(query_span)
    .await
    {
        Ok(movies) => HttpResponse::Ok().json(movies),
        Err(err) => error_response(err),
    }
}
