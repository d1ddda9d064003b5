use tracing::{info, Level};

use time_deposit_backend::db::DbConnection;
use time_deposit_backend::seed;
use time_deposit_backend::storage::SqliteDepositStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up database");
    let db = DbConnection::init().await?;
    let store = SqliteDepositStore::new(db);

    seed::run(&store).await?;

    info!("Seeding completed");
    Ok(())
}
