use journey_server::catalog::uttarakhand_places;
use journey_server::config::ServerConfig;
use journey_server::contact::ContactClient;
use journey_server::planner::MapConfig;
use journey_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Contact form is optional
    let contact = match config.contact.clone() {
        Some(contact_config) => Some(ContactClient::new(contact_config)?),
        None => {
            tracing::warn!("WEB3FORMS_ACCESS_KEY not set; contact form disabled");
            None
        }
    };

    let places = uttarakhand_places();
    tracing::info!(places = places.len(), "loaded place catalog");

    let state = AppState::new(places, MapConfig::default(), contact);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("JourneyJunction listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
