//! Hamilton Insights server binary.
//!
//! Startup order matters: configuration is loaded and validated before
//! anything else, and any failure there halts initialization entirely.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use hamilton_insights::adapters::auth::SessionGuard;
use hamilton_insights::adapters::http::{api_router, AdminHandlers, ListingHandlers};
use hamilton_insights::adapters::postgres::{
    PostgresCategoryRegistry, PostgresCredentialReader, PostgresPostRepository,
};
use hamilton_insights::adapters::storage::LocalPdfStorage;
use hamilton_insights::application::handlers::auth::LoginHandler;
use hamilton_insights::application::handlers::post::{
    CreatePostHandler, DeletePostHandler, GetListingHandler, ListCategoriesHandler,
    ListPostsHandler,
};
use hamilton_insights::config::AppConfig;
use hamilton_insights::ports::{
    AdminSessions, CategoryRegistry, CredentialReader, PdfStorage, PostRepository,
};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.server.log_level);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server terminated with error");
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Content store adapters
    let posts: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool.clone()));
    let categories: Arc<dyn CategoryRegistry> = Arc::new(PostgresCategoryRegistry::new(pool.clone()));
    let credentials: Arc<dyn CredentialReader> = Arc::new(PostgresCredentialReader::new(pool));
    let pdf_storage: Arc<dyn PdfStorage> = Arc::new(LocalPdfStorage::new(
        config.storage.pdf_dir_path(),
        config.storage.public_base_url.clone(),
    ));

    // Session guard - the one auth context for the whole process
    let sessions: Arc<dyn AdminSessions> = Arc::new(SessionGuard::new());

    // Operation handlers
    let admin = AdminHandlers::new(
        Arc::new(LoginHandler::new(
            credentials,
            sessions.clone(),
            posts.clone(),
            categories.clone(),
        )),
        Arc::new(CreatePostHandler::new(
            posts.clone(),
            categories.clone(),
            pdf_storage,
        )),
        Arc::new(DeletePostHandler::new(posts.clone())),
        Arc::new(ListPostsHandler::new(posts.clone())),
        Arc::new(ListCategoriesHandler::new(categories)),
    );
    let listings = ListingHandlers::new(Arc::new(GetListingHandler::new(posts)));

    let app = api_router(admin, listings, sessions, &config.server, &config.storage);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Hamilton Insights listening");

    axum::serve(listener, app).await?;
    Ok(())
}
