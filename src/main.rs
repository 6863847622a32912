use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use tyche::adapters::api_handler::ApiState;
use tyche::adapters::health_handler::HealthHandler;
use tyche::adapters::metrics_handler::{MetricsCollector, MetricsHandler};
use tyche::cli::Cli;
use tyche::config::Settings;
use tyche::persistence::{FileTemplateStore, TemplateStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting Tyche mock data server on {}:{}", host, port);

    // Open the template store before settings are shared
    let templates_path = settings.templates_path.clone();
    let extra_templates = settings.templates.clone();
    let store: Arc<dyn TemplateStore> =
        Arc::new(FileTemplateStore::open(templates_path, extra_templates).await);

    let settings = Arc::new(RwLock::new(settings));

    // Initialize handlers
    let metrics = Arc::new(MetricsCollector::new()?);
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));
    let metrics_handler = Arc::new(MetricsHandler::new(metrics.clone()));

    let api_state = ApiState {
        settings,
        store,
        metrics,
    };

    // Create application using the library function
    let app = tyche::create_app(api_state, health_handler, metrics_handler);

    // Start server
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
