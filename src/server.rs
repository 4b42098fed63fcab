//! Thin HTTP front-end
//!
//! One endpoint, `GET /progress.png`, backed directly by [`crate::render`].
//! The server owns no state; every request is an independent, idempotent
//! computation.

use tiny_http::{Header, Method, Request, Response, Server};

use crate::{render, RenderQuery};

/// Run the server on `addr` (e.g. `127.0.0.1:3000`). Blocks forever.
pub fn run(addr: &str) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    log::info!("listening on http://{addr}/progress.png");

    for request in server.incoming_requests() {
        handle(request);
    }
    Ok(())
}

fn handle(request: Request) {
    let (path, query) = match request.url().split_once('?') {
        Some((path, query)) => (path.to_string(), query.to_string()),
        None => (request.url().to_string(), String::new()),
    };

    let response = if *request.method() != Method::Get {
        plain(405, "Method Not Allowed")
    } else if path != "/progress.png" {
        plain(404, "Not Found")
    } else {
        match render(&parse_query(&query)) {
            Ok(png) => Response::from_data(png)
                .with_header(header("Content-Type", "image/png"))
                .with_header(header("Cache-Control", "no-cache")),
            Err(e) if e.is_user_error() => {
                log::debug!("rejected request {:?}: {e}", request.url());
                plain(400, &format!("Error: {e}"))
            }
            Err(e) => {
                log::error!("render failed: {e}");
                plain(500, &format!("Error: {e}"))
            }
        }
    };

    if let Err(e) = request.respond(response) {
        log::warn!("failed to send response: {e}");
    }
}

fn parse_query(query: &str) -> RenderQuery {
    let mut parsed = RenderQuery::default();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "startDate" => parsed.start_date = Some(value.into_owned()),
            "endDate" => parsed.end_date = Some(value.into_owned()),
            "viewType" => parsed.view_type = Some(value.into_owned()),
            _ => {}
        }
    }
    parsed
}

fn plain(status: u16, body: &str) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body).with_status_code(status)
}

fn header(name: &str, value: &str) -> Header {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).unwrap()
}
