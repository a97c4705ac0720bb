use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use sqlx::PgPool;
use tracing::Instrument;

use super::get_movie::MoviePath;
use super::util::error_response;
use super::{parse_movie_id, remove_movie};

pub async fn delete_movie(connection: Data<PgPool>, path: Path<MoviePath>) -> HttpResponse {
    let query_span = tracing::info_span!("Delete movie");

    let movie_id = match parse_movie_id(path.movie_id.as_str()) {
        Ok(movie_id) => movie_id,
        Err(err) => return error_response(err),
    };

    match remove_movie(connection.as_ref(), movie_id)
        .instrument(query_span)
        .await
    {
        Ok(()) => {
            tracing::info!("Movie deleted successfully");
            HttpResponse::NoContent().finish()
        }
        Err(err) => error_response(err),
    }
}
