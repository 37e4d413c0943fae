/// The four response shapes the router can produce.
///
/// `Forbidden` and `Redirect` carry the content type of the *requested*
/// path (not of any body; they never have one). `NotFound` builds its
/// HTML body up front so the writer can report its length for HEAD
/// requests without transmitting it.
#[derive(Debug)]
pub enum Response {
    Ok {
        body: Vec<u8>,
        content_type: &'static str,
    },
    Redirect {
        location: String,
        content_type: &'static str,
    },
    Forbidden {
        content_type: &'static str,
    },
    NotFound {
        body: String,
    },
}

impl Response {
    pub fn not_found(target: &str) -> Self {
        // The requested path is embedded verbatim, unescaped. Clients
        // depend on seeing the exact bytes they sent.
        let body = format!(
            "<HTML><HEAD><TITLE>404 Not Found</TITLE></HEAD>\r\n\
             <BODY><H1>404 Not Found </H1>\r\n\
             {target} is not found on this server\r\n\
             </BODY></HTML>\r\n"
        );
        Response::NotFound { body }
    }
}
