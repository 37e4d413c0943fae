use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::store::ContentStore;

/// Decides which response a request gets. Evaluated once per connection;
/// no state survives between requests.
///
/// The redirect table is consulted before the file table, so a path
/// present in both always redirects and never serves content.
pub fn route(req: &Request, store: &ContentStore) -> Response {
    if req.method != Method::Get && req.method != Method::Head {
        // POST and unknown methods alike.
        return Response::Forbidden {
            content_type: mime::content_type(&req.target),
        };
    }

    if let Some(target) = store.redirect(&req.target) {
        return Response::Redirect {
            location: target.to_string(),
            content_type: mime::content_type(&req.target),
        };
    }

    match store.file(&req.target) {
        None => Response::not_found(&req.target),
        Some(data) => Response::Ok {
            body: data.to_vec(),
            content_type: mime::content_type(&req.target),
        },
    }
}
