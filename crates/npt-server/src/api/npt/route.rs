use actix_web::{Scope, web};

pub fn routes() -> Scope {
    web::scope("/npt-entry")
        .service(super::entry::create)
        .service(super::entry::list)
        .service(super::entry::find_one)
        .service(super::entry::update)
        .service(super::entry::remove)
}
