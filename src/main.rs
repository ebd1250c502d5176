use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use dotenv::dotenv;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nametag_generator::config::{self, ApplicationSettings, Settings};
use nametag_generator::metrics::{self, Metrics};
use nametag_generator::{api, AppState, PageTemplates, TemplateStore};

#[derive(Parser)]
struct Args {
    /// Directory containing the nametag templates
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Port to listen on, overriding PORT and the config file
    #[arg(long)]
    port: Option<u16>,

    /// Print the discovered template names and exit
    #[arg(long)]
    list_templates: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "nametag_generator=debug,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let mut settings = Settings::new().unwrap_or_else(|e| {
        error!("Failed to load configuration: {:?}", e);
        std::process::exit(1);
    });
    if let Some(dir) = args.templates_dir {
        settings.templates.directory = dir;
    }
    if let Some(port) = args.port {
        settings.application.port = port;
    }

    info!("Loaded settings: {:?}", settings);

    if let Err(e) = config::validate_application_settings(&settings)
        .and_then(|_| config::validate_template_settings(&settings))
    {
        error!("Invalid configuration: {:#}", e);
        std::process::exit(1);
    }

    // Without the default template nothing can be rendered, so refuse to start
    let store = TemplateStore::load(
        &settings.templates.directory,
        settings.templates.default_template.as_str(),
    )
    .unwrap_or_else(|e| {
        error!("Failed to load templates: {}", e);
        std::process::exit(1);
    });

    if args.list_templates {
        println!("Templates in {}:", store.directory().display());
        for name in store.list() {
            println!("{name}");
        }
        return Ok(());
    }

    let pages = PageTemplates::new()?;
    let state = AppState::new(store, pages);

    // Set up metrics
    let prometheus_handle = metrics::setup_metrics_recorder()?;
    let metrics = Metrics::new(prometheus_handle);

    info!("Prometheus metrics initialized");

    let cors = cors_layer(&settings.application);

    // Create router
    let app = api::create_router(state)
        .route("/metrics", axum::routing::get(move || async move {
            (
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                metrics.render(),
            )
        }))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Successfully initialized router");

    let host = settings
        .application
        .host
        .parse::<std::net::IpAddr>()
        .unwrap_or(std::net::IpAddr::from([0, 0, 0, 0]));
    let addr = SocketAddr::from((host, settings.application.port));

    let listener = TcpListener::bind(addr).await?;
    info!("Server starting on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

fn cors_layer(application: &ApplicationSettings) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(
            application
                .cors_allow_origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("*")),
        )
        .allow_methods(
            application
                .cors_allow_methods
                .split(',')
                .map(|s| s.trim().parse::<Method>().unwrap_or(Method::GET))
                .collect::<Vec<Method>>(),
        )
        .allow_headers(
            application
                .cors_allow_headers
                .split(',')
                .map(|s| match s.trim().to_lowercase().as_str() {
                    "content-type" => header::CONTENT_TYPE,
                    "authorization" => header::AUTHORIZATION,
                    other => header::HeaderName::from_lowercase(other.as_bytes())
                        .unwrap_or(header::CONTENT_TYPE),
                })
                .collect::<Vec<_>>(),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
