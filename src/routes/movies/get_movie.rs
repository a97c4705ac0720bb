use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::Instrument;

use super::util::error_response;
use super::{find_movie, parse_movie_id};

#[derive(Deserialize, Debug)]
pub struct MoviePath {
    pub movie_id: String,
}

pub async fn get_movie(connection: Data<PgPool>, path: Path<MoviePath>) -> HttpResponse {
    let query_span = tracing::info_span!("Get movie by id");

    let movie_id = match parse_movie_id(path.movie_id.as_str()) {
        Ok(movie_id) => movie_id,
        Err(err) => return error_response(err),
    };

    match find_movie(connection.as_ref(), movie_id)
        .instrument(query_span)
        .await
    {
        Ok(movie) => HttpResponse::Ok().json(movie),
        Err(err) => error_response(err),
    }
}
