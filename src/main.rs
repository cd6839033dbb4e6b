use pixgen::models::{GalleryQuery, GenerateRequest, ModelTier};
use pixgen::{CredentialStore, PixGenClient, PixGenConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!(".env file loaded"),
        Err(_) => log::warn!("No .env file found, using system environment variables"),
    }

    pixgen::logger::init_with_config(
        pixgen::logger::LoggerConfig::development()
            .with_level(pixgen::logger::LogLevel::Debug),
    )?;

    log::info!("Checking environment...");

    if let Ok(base_url) = env::var("PIXGEN_API_URL") {
        log::info!("PIXGEN_API_URL: {}", base_url);
    } else {
        log::warn!("PIXGEN_API_URL not set, using the local default backend");
    }

    // Key resolution order: environment first, then the on-disk store.
    let mut config = PixGenConfig::from_env();
    if config.api_key.is_none() {
        let store = CredentialStore::new()?;
        match store.load()? {
            Some(key) => {
                log::info!("API key loaded from the credential store");
                config = config.with_api_key(key);
            }
            None => {
                log::error!("No API key in PIXGEN_API_KEY or the credential store");
                return Err("API key is required".into());
            }
        }
    }

    let client = PixGenClient::new(config);

    log::info!("Checking credit balance...");
    match client.check_balance().await {
        Ok(balance) if balance.success => {
            log::info!("Credits available: {}", balance.credits.unwrap_or(0.0));
        }
        Ok(balance) => {
            log::error!(
                "Balance check rejected: {}",
                balance.error.as_deref().unwrap_or("Unknown error")
            );
        }
        Err(e) => {
            log::error!("Balance check failed: {}", e);
            return Err(e.into());
        }
    }

    log::info!("Generating a test image...");
    let request = GenerateRequest::new("a lighthouse at dusk, oil painting")
        .with_model(ModelTier::Flash)
        .with_resolution("1024")
        .with_aspect_ratio("1:1");

    match client.generate_resolved(&request).await {
        Ok((response, url)) if response.success => {
            log::info!(
                "Generated image {} -> {}",
                response.id.unwrap_or_default(),
                url
            );
        }
        Ok((response, _)) => {
            log::error!("Generation rejected: {}", response.error_message());
        }
        Err(e) => log::error!("Generation failed: {}", e),
    }

    log::info!("Fetching recent gallery entries...");
    let gallery = client
        .gallery()
        .list(&GalleryQuery::new().with_limit(10))
        .await?;
    for record in &gallery.generations {
        log::info!(
            "  #{} [{}] {} -> {}",
            record.id,
            record.kind,
            record.prompt,
            client.image_url(record.image_path.as_deref().unwrap_or("")),
        );
    }

    let statistics = client.gallery().statistics().await?;
    if let Some(stats) = statistics.statistics {
        log::info!(
            "Gallery totals: {} ({} generated, {} edited, {} combined)",
            stats.total,
            stats.by_type.generate,
            stats.by_type.edit,
            stats.by_type.combine
        );
    }

    Ok(())
}
