use std::path::Path;

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};

/// Serves the built frontend below `root`.
///
/// Requests without a matching file get `index.html`, so the client router
/// can resolve paths like `/catalog/web-development`.
pub fn static_files(root: &str) -> Files {
    let index = Path::new(root).join("index.html");

    Files::new("/", root)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}
