use actix_cors::Cors;

/// CORS policy for the API.
///
/// Only the configured frontend origin may call the API from a browser, and
/// it may send credentials. Without a frontend URL no cross-origin request is
/// allowed.
pub fn cors_for(frontend_url: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec!["Authorization", "Content-Type"])
        .supports_credentials()
        .max_age(3600);

    match frontend_url {
        Some(origin) => cors.allowed_origin(origin.trim_end_matches('/')),
        None => cors,
    }
}
