use ollama_chat_relay::config::AppConfig;
use ollama_chat_relay::llm::create_provider;
use ollama_chat_relay::routes::configure_routes;
use ollama_chat_relay::state::AppState;
use ollama_chat_relay::supervisor::Supervisor;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let provider = match create_provider(&config) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!(error = %e, "failed to create ollama client");
            std::process::exit(1);
        }
    };

    // Held until the listener exits so the server process stays owned
    let (state, _supervisor) = if config.autostart {
        let (supervisor, startup) = Supervisor::new(&config);
        (AppState::new(provider, startup), Some(supervisor.spawn()))
    } else {
        tracing::info!("autostart disabled; expecting ollama at {}", config.ollama_url);
        (AppState::unsupervised(provider), None)
    };

    let routes = configure_routes(state);

    tracing::info!("Starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;
}
