use anyhow::Result;
use axum::{ServiceExt, body::Body};
use corporate_cms::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use corporate_cms::config::AppConfig;
use corporate_cms::domain::{
    announcement::{AnnouncementReadRepository, AnnouncementWriteRepository},
    menu::MenuRepository,
    page::{PageReadRepository, PageWriteRepository},
    slider::SliderRepository,
};
use corporate_cms::infrastructure::{
    database,
    repositories::{
        PostgresAnnouncementReadRepository, PostgresAnnouncementWriteRepository,
        PostgresMenuRepository, PostgresPageReadRepository, PostgresPageWriteRepository,
        PostgresSliderRepository,
    },
    time::SystemClock,
    util::TurkishSlugGenerator,
};
use corporate_cms::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let page_read_repo: Arc<dyn PageReadRepository> =
        Arc::new(PostgresPageReadRepository::new(pool.clone()));
    let page_write_repo: Arc<dyn PageWriteRepository> =
        Arc::new(PostgresPageWriteRepository::new(pool.clone()));
    let announcement_read_repo: Arc<dyn AnnouncementReadRepository> =
        Arc::new(PostgresAnnouncementReadRepository::new(pool.clone()));
    let announcement_write_repo: Arc<dyn AnnouncementWriteRepository> =
        Arc::new(PostgresAnnouncementWriteRepository::new(pool.clone()));
    let menu_repo: Arc<dyn MenuRepository> =
        Arc::new(PostgresMenuRepository::new(pool.clone()));
    let slider_repo: Arc<dyn SliderRepository> =
        Arc::new(PostgresSliderRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TurkishSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&page_read_repo),
        Arc::clone(&page_write_repo),
        Arc::clone(&announcement_read_repo),
        Arc::clone(&announcement_write_repo),
        Arc::clone(&menu_repo),
        Arc::clone(&slider_repo),
        Arc::clone(&clock),
        Arc::clone(&slugger),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
