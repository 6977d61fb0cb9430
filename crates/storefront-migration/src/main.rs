use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use storefront_migration::Migrator;

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .try_init();
    tracing::info!("running storefront migrations");
    sea_orm_migration::cli::run_cli(Migrator).await;
}
