// Route exports
pub mod mentors;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(mentors::configure),
    );
}
