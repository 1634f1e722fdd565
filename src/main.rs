use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use casedesk::backend::BackendClient;
use casedesk::config::AppConfig;
use casedesk::{errors, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let backend = BackendClient::from_config(&config).map_err(std::io::Error::other)?;
    log::info!("Using backend at {}", backend.base_url());
    if config.dev_auth {
        log::warn!("DEV_AUTH is on: development login buttons are enabled");
    }

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+) — generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{bind_addr}");

    let backend = web::Data::new(backend);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(config.cookie_secure)
        .cookie_http_only(true)
        .build();

        let dev_auth = config.dev_auth;
        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(backend.clone())
            .app_data(config.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(|cfg| handlers::configure(cfg, dev_auth))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async { errors::not_found() }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
