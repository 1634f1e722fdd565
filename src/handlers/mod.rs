pub mod auth_handlers;
pub mod case_handlers;
pub mod dashboard;

use actix_web::{web, HttpResponse};

use crate::auth::middleware::require_auth;

/// Register every route. `dev_auth` adds the development login endpoint.
pub fn configure(cfg: &mut web::ServiceConfig, dev_auth: bool) {
    // Public routes
    cfg.route("/login", web::get().to(auth_handlers::login_page))
        .route("/auth/telegram", web::get().to(auth_handlers::telegram_callback))
        .route("/session/expired", web::get().to(auth_handlers::session_expired))
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish()
        }));
    if dev_auth {
        cfg.route("/auth/dev/{role}", web::post().to(auth_handlers::dev_login));
    }

    // Protected routes
    cfg.service(
        web::scope("")
            .wrap(actix_web::middleware::from_fn(require_auth))
            .route("/dashboard", web::get().to(dashboard::index))
            .route("/logout", web::post().to(auth_handlers::logout))
            // /cases/new BEFORE /cases/{category} to avoid routing conflict
            .route("/cases/new", web::get().to(case_handlers::new_form))
            .route("/cases", web::post().to(case_handlers::create))
            // One resource: a board slug on GET, a case id on POST
            .service(
                web::resource("/cases/{key}")
                    .route(web::get().to(case_handlers::list))
                    .route(web::post().to(case_handlers::update)),
            )
            .route("/cases/{id}/edit", web::get().to(case_handlers::edit_form))
            .route("/cases/{id}/delete", web::post().to(case_handlers::delete)),
    );
}
