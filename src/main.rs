use moviebase_backend::configuration::get_configuration;
use moviebase_backend::startup;
use moviebase_backend::telemetry::{get_subscriber, init_subscriber};
use sqlx::PgPool;
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("info", std::io::stdout);
    init_subscriber(subscriber);
    let configuration = get_configuration("configuration").expect(
        "Failed to read `configuration.json`. Please make sure it exists and is valid JSON.",
    );
    let listener = TcpListener::bind(format!("0.0.0.0:{}", configuration.application_port))
        .expect("Failed to bind");
    let connection_pool = PgPool::connect(configuration.database.connection_string().as_str())
        .await
        .expect("Failed to connect to database");
    startup::run_server(listener, connection_pool)?.await
}
