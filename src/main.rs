//! Automation journey server.
//!
//! Wires configuration, catalog, storage and CRM adapters into the axum
//! router and serves it until Ctrl-C or SIGTERM.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use http::{header, HeaderValue, Method};
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use automation_journey::adapters::{
    api_router, ApiDependencies, DebouncedPersister, FileJourneyStorage, InMemoryJourneyStorage,
    LoggingLeadSink, WebhookLeadSink,
};
use automation_journey::application::JourneyRegistry;
use automation_journey::config::{AppConfig, ServerConfig};
use automation_journey::ports::{JourneyStorage, LeadSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let catalog = Arc::new(config.catalog.load()?);
    info!(
        chapters = catalog.chapter_count(),
        packages = catalog.packages.len(),
        "Catalog loaded"
    );

    let persister = config.features.enable_persistence.then(|| {
        info!(
            data_dir = %config.storage.data_dir.display(),
            debounce_ms = config.storage.debounce_ms,
            "Journey persistence enabled"
        );
        let files: Arc<dyn JourneyStorage> = Arc::new(FileJourneyStorage::new(&config.storage.data_dir));
        DebouncedPersister::new(files, config.storage.debounce())
    });
    let storage: Arc<dyn JourneyStorage> = match &persister {
        Some(persister) => Arc::new(persister.clone()),
        None => Arc::new(InMemoryJourneyStorage::new()),
    };

    let lead_sink: Arc<dyn LeadSink> = match config.crm.webhook().filter(|_| config.features.enable_crm) {
        Some(webhook) => {
            info!("CRM webhook configured");
            Arc::new(WebhookLeadSink::new(webhook)?)
        }
        None => {
            warn!("CRM webhook not configured; leads will only be logged");
            Arc::new(LoggingLeadSink::new())
        }
    };

    let registry = Arc::new(JourneyRegistry::new(Arc::clone(&catalog), storage));
    let (sweep_shutdown, sweep_signal) = watch::channel(false);
    let sweep = {
        let registry = Arc::clone(&registry);
        let interval = config.storage.sweep_interval();
        let max_idle = config.storage.idle_eviction();
        tokio::spawn(async move { registry.run_idle_sweep(interval, max_idle, sweep_signal).await })
    };

    let app = api_router(ApiDependencies {
        catalog,
        registry,
        lead_sink,
        public_url: config.server.public_url()?,
    })
    .layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.server.request_timeout_secs)))
            .layer(cors_layer(&config.server)),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = sweep_shutdown.send(true);
    if let Err(e) = sweep.await {
        warn!(error = %e, "Idle sweep task failed");
    }

    if let Some(persister) = persister {
        let flushed = persister.flush_all().await;
        info!(flushed, "Pending journeys flushed");
    }
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if server.is_production() {
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

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
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
    info!("Shutdown signal received");
}
