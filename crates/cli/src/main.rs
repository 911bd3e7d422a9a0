use anyhow::Result;
use tracing::info;

use domain::models::{ClientSearch, ClientUpdate};
use persistence::repositories::ClientRepository;

mod config;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;
    logging::init_logging(&config.logging);

    info!("Starting Client Directory v{}", env!("CARGO_PKG_VERSION"));

    let conn = persistence::db::connect(&config.database).await?;
    let mut directory = ClientRepository::new(conn);

    directory.init_schema().await?;

    let sergey = directory
        .add_client(
            "Sergey",
            "Smorodin",
            "smorodin@example.com",
            &["9875643956", "9876543431"],
        )
        .await?;
    let alexey = directory
        .add_client("Alexey", "Subbotin", "alexey@example.com", &[])
        .await?;
    let dmitry = directory
        .add_client("Dmitry", "Alekseev", "d.alekseev@example.com", &["9547366632"])
        .await?;
    info!(sergey, alexey, dmitry, "demo clients created");

    directory.add_phone(alexey, "9031843845").await?;

    directory
        .change_client(
            dmitry,
            &ClientUpdate {
                phones: Some(vec!["9547766677".to_string(), "9874628467".to_string()]),
                ..Default::default()
            },
        )
        .await?;
    directory
        .change_client(
            alexey,
            &ClientUpdate {
                email: Some("subbotin@example.com".to_string()),
                ..Default::default()
            },
        )
        .await?;

    directory.delete_phone(sergey, "9875643956").await?;

    let by_name = directory
        .find_client(&ClientSearch {
            first_name: Some("Sergey".to_string()),
            ..Default::default()
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&by_name)?);

    let by_email = directory
        .find_client(&ClientSearch {
            email: Some("subbotin@example.com".to_string()),
            ..Default::default()
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&by_email)?);

    directory.delete_client(dmitry).await?;

    let after_delete = directory
        .find_client(&ClientSearch {
            first_name: Some("Dmitry".to_string()),
            ..Default::default()
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&after_delete)?);

    Ok(())
}
