use std::net::TcpListener;

use sports_admin_backend::run;
use sports_admin_backend::config::get_config;
use sports_admin_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "sports-admin-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    // An unreachable database is fatal at startup
    let connection_pool = match config.database.connect().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&connection_pool).await {
        tracing::error!("Failed to migrate the database: {}", e);
        std::process::exit(1);
    }

    let address = config.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Server running on http://{}", address);

    run(listener, connection_pool, &config.application)?.await
}
