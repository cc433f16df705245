mod config;
pub mod error;
mod log;
mod middleware;
mod routes;
mod state;

pub use self::error::{Error, Result};
use crate::config::ApiConfig;
use crate::middleware::mw_auth::{UserToken, ctx_resolver, request_auth};
use crate::middleware::mw_response::mw_response_map;
use crate::state::AppState;
use axum::{Router, extract::Extension, serve};
use clap::Parser;
use lib_classifier::classifier::ClassifierRegistry;
use lib_classifier::contrib::passthrough::PassThroughClassifier;
use lib_classifier::contrib::sentence::SentenceClassifier;
use lib_classifier::contrib::token::TokenLabeler;
use lib_scheduler::scheduler::TrainingScheduler;
use lib_storage::config::storage_config;
use lib_storage::model::ModelStore;
use mimalloc::MiMalloc;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::time::Duration;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn build_classifiers(model_store: Arc<ModelStore>) -> ClassifierRegistry {
    let mut registry = ClassifierRegistry::new();
    registry
        .add("echo", Arc::new(PassThroughClassifier::with_store("echo", model_store.clone())))
        .expect("bundled classifier names must be unique and valid");
    registry
        .add(
            "sentiment",
            Arc::new(SentenceClassifier::new("sentiment", model_store.clone())),
        )
        .expect("bundled classifier names must be unique and valid");
    registry
        .add("pos", Arc::new(TokenLabeler::new("pos", model_store)))
        .expect("bundled classifier names must be unique and valid");
    registry
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ApiConfig::parse();
    info!("Initializing Environment");

    let data_root = PathBuf::from(&storage_config().data_root);
    let model_store = Arc::new(ModelStore::new(data_root.clone()));
    let classifiers = build_classifiers(model_store);

    let scheduler = match config.train_workers {
        Some(n) => TrainingScheduler::new(data_root.clone(), n),
        None => TrainingScheduler::with_default_worker_count(data_root.clone()),
    };
    let app_state = AppState::new(data_root, classifiers, scheduler);

    // Rate limiting configuration (spec §5.5).
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .key_extractor(UserToken)
            .finish()
            .expect("rate limit configuration is valid"),
    );
    let governor_limiter = governor_conf.limiter().clone();

    // A separate background task to clean up rate limiting storage.
    std::thread::spawn(move || {
        loop {
            std::thread::sleep(Duration::from_secs(60));
            if !governor_limiter.is_empty() {
                tracing::info!("Rate limiting storage size: {}", governor_limiter.len());
            }
            governor_limiter.retain_recent();
        }
    });

    let routes_api = Router::new()
        .merge(routes::meta::serve_meta())
        .merge(routes::dataset::serve_dataset())
        .merge(routes::classifier::serve_classifier())
        .merge(routes::train::serve_train())
        .merge(routes::predict::serve_predict())
        .route_layer(axum::middleware::from_fn(request_auth))
        .layer(GovernorLayer {
            config: governor_conf,
        });

    let global_routes = Router::new()
        .merge(routes_api)
        .layer(axum::middleware::from_fn(ctx_resolver))
        .layer(axum::middleware::map_response(mw_response_map))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    let listener = TcpListener::bind(&config.bind_addr).await.unwrap();
    info!("Server started on: http://{}", config.bind_addr);
    serve(listener, global_routes.into_make_service())
        .await
        .unwrap();

    Ok(())
}
