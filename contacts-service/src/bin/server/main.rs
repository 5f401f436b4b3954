use std::sync::Arc;

use auth::TokenLifetimes;
use auth::TokenService;
use contacts_service::config::Config;
use contacts_service::domain::auth::service::AuthService;
use contacts_service::domain::contact::service::ContactService;
use contacts_service::domain::user::service::UserService;
use contacts_service::inbound::http::router::create_router;
use contacts_service::outbound::avatars::FsAvatarStore;
use contacts_service::outbound::email::TracingEmailDispatcher;
use contacts_service::outbound::repositories::PostgresContactRepository;
use contacts_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contacts_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "contacts-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        mail_from = %config.mail.from_address,
        uploads_dir = %config.uploads.dir,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_service = TokenService::new(
        config.jwt.secret.as_bytes(),
        TokenLifetimes::new(
            config.jwt.access_token_minutes,
            config.jwt.refresh_token_days,
            config.jwt.verification_token_hours,
        ),
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let contact_repository = Arc::new(PostgresContactRepository::new(pg_pool.clone()));
    let email_dispatcher = Arc::new(TracingEmailDispatcher::new(
        config.mail.from_address.clone(),
        config.mail.base_url.clone(),
    ));
    let avatar_store = Arc::new(FsAvatarStore::new(config.uploads.dir.clone()));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        email_dispatcher,
        token_service,
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        avatar_store,
    ));
    let contact_service = Arc::new(ContactService::new(contact_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, user_service, contact_service, pg_pool);

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
