use actix_web::{middleware::NormalizePath, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use blog_service::db::{self, PgBlogStore};
use blog_service::render::JsonRenderer;
use blog_service::services::SmtpMailer;
use blog_service::{routes, AppState, Config};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct HealthState {
    db_pool: sqlx::Pool<sqlx::Postgres>,
}

async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(&state.db_pool).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "blog-service"
        })),
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

async fn shutdown_signal() -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;

        tokio::select! {
            res = tokio::signal::ctrl_c() => res,
            _ = terminate.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
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

/// Blog Service
///
/// # Routes
///
/// - `/blog` - Paginated listing of published posts
/// - `/blog/{year}/{month}/{day}/{slug}` - Post detail with active comments
/// - `/blog/{post_id}/comment` - Comment submission (POST only)
/// - `/blog/{post_id}/share` - Share-by-email form
/// - `/api/v1/health`, `/api/v1/health/live`, `/metrics` - Operations
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Support container healthchecks via CLI subcommand: `healthcheck`
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        let config = Config::from_env()?;
        let pool = db::create_pool(&config.database).await?;
        sqlx::query("SELECT 1").fetch_one(&pool).await?;
        return Ok(());
    }

    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let db_pool = db::create_pool(&config.database)
        .await
        .context("Failed to create database pool")?;
    db::run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Connected to database, migrations applied");

    let mailer = SmtpMailer::new(&config.email).context("Failed to configure mailer")?;
    if mailer.is_enabled() {
        tracing::info!(host = %config.email.smtp_host, "SMTP mailer configured");
    }

    let app_state = web::Data::new(AppState {
        store: Arc::new(PgBlogStore::new(db_pool.clone())),
        mailer: Arc::new(mailer),
        renderer: Arc::new(JsonRenderer),
        blog: config.blog.clone(),
    });
    let health_state = web::Data::new(HealthState {
        db_pool: db_pool.clone(),
    });

    let http_bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", http_bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(health_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route(
                "/metrics",
                web::get().to(blog_service::metrics::serve_metrics),
            )
            // Health check endpoints
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            .configure(routes::configure)
    })
    .bind(&http_bind_address)?
    .disable_signals()
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    tokio::select! {
        result = &mut server_task => {
            result.context("HTTP server task failed")??;
        }
        result = shutdown_signal() => {
            result.context("Failed to install shutdown signal handlers")?;
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            server_task.await.context("HTTP server task failed")??;
        }
    }

    db_pool.close().await;
    tracing::info!("Blog-service shutting down");
    Ok(())
}
