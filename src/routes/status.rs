use actix_web::{web::Data, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use tracing::Instrument;

/// Diagnostic endpoint. Reports whether the backing store is reachable and
/// lists a handful of its tables. Always answers 200, even when the store
/// is down.
pub async fn database_status(connection: Data<PgPool>) -> HttpResponse {
    let query_span = tracing::info_span!("Database status check");

    let tables: Result<Vec<(String,)>, sqlx::Error> = sqlx::query_as(
        r#"
      SELECT tablename FROM pg_catalog.pg_tables WHERE schemaname = 'public' LIMIT 10
    "#,
    )
    .fetch_all(connection.as_ref())
    .instrument(query_span)
    .await;

    match tables {
        Ok(rows) => HttpResponse::Ok().json(json!({
            "backend": "Running",
            "database": "Connected",
            "connection_status": "Connected",
            "tables": rows.into_iter().map(|row| row.0).collect::<Vec<String>>(),
        })),
        Err(err) => {
            tracing::error!("Database status check failed {:#?}", err);
            HttpResponse::Ok().json(json!({
                "backend": "Running",
                "database": "Not Available",
                "connection_status": "Not Connected",
                "tables": [],
            }))
        }
    }
}
