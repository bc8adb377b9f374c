use profilehub::{config::Config, migrator::Migrator, routes, storage::Sweeper, AppState};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use std::{net::SocketAddr, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env = Config::init();

    tracing_subscriber::fmt().with_max_level(env.log_level).init();

    let mut options = ConnectOptions::new(env.database_url.clone());
    options
        .max_connections(env.db_max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    tokio::fs::create_dir_all(env.images_dir()).await?;

    let addr = format!("{}:{}", env.server_address, env.server_port).parse::<SocketAddr>()?;

    let app_state = Arc::new(AppState::new(db, env)?);
    Sweeper::spawn(Arc::clone(&app_state));

    let app = routes::router(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::debug!("listening on: {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
