use actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use sqlx::PgPool;
use tracing::Instrument;
use validator::Validate;

use super::insert_movie;
use super::types::CreateMoviePayload;
use super::util::{error_response, validation_error_body};

pub async fn create_movie(
    connection: Data<PgPool>,
    body: Json<CreateMoviePayload>,
) -> HttpResponse {
    let query_span = tracing::info_span!("Create new movie", ?body);

    if let Err(error) = body.validate() {
        return HttpResponse::UnprocessableEntity().json(validation_error_body(error));
    }

    match insert_movie(connection.as_ref(), &body)
        .instrument(query_span)
        .await
    {
        Ok(movie) => {
            tracing::info!("Movie created successfully");
            HttpResponse::Created().json(movie)
        }
        Err(err) => error_response(err),
    }
}
