use actix_web::dev::HttpServiceFactory;

/// The login endpoint sits at the root of the context path.
pub fn routes() -> impl HttpServiceFactory {
    super::login::login
}
