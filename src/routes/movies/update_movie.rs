use actix_web::{
    web::{Data, Json, Path},
    HttpResponse,
};
use sqlx::PgPool;
use tracing::Instrument;
use validator::Validate;

use super::get_movie::MoviePath;
use super::types::UpdateMoviePayload;
use super::util::{error_response, validation_error_body};
use super::{apply_movie_update, parse_movie_id};

pub async fn update_movie(
    connection: Data<PgPool>,
    path: Path<MoviePath>,
    body: Json<UpdateMoviePayload>,
) -> HttpResponse {
    let query_span = tracing::info_span!("Update movie", ?body);

    let movie_id = match parse_movie_id(path.movie_id.as_str()) {
        Ok(movie_id) => movie_id,
        Err(err) => return error_response(err),
    };

    if let Err(error) = body.validate() {
        return HttpResponse::BadRequest().json(validation_error_body(error));
    }

    match apply_movie_update(connection.as_ref(), movie_id, &body)
        .instrument(query_span)
        .await
    {
        Ok(movie) => {
            tracing::info!("Movie updated successfully");
            HttpResponse::Ok().json(movie)
        }
        Err(err) => error_response(err),
    }
}
