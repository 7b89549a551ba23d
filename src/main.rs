use academy_tracker::{app, config::Config, errors::Result, state::AppState};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_json);

    info!("Starting server");
    let state = AppState::init(&config).await?;

    // ! first load runs in the background; pages show the loading screen until it lands
    let loader = state.clone();
    tokio::spawn(async move { loader.refresh().await });

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("Serving tracker at http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
