use std::borrow::Cow;

use crate::config::SiteConfig;
use crate::render::inject;
use crate::server::static_files;
use crate::site::{self, PageOutcome};

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn text(
        status_code: u16,
        status_text: &'static str,
        content_type: &'static str,
        body: String,
    ) -> Self {
        Self {
            status_code,
            status_text,
            content_type,
            body: body.into_bytes(),
        }
    }

    pub fn to_http_bytes(&self) -> Vec<u8> {
        let header = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len()
        );
        let mut out = header.into_bytes();
        out.extend_from_slice(&self.body);
        out
    }

    /// Body as text, for diagnostics and tests.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

pub fn route_request(config: &SiteConfig, method: &str, path: &str) -> HttpResponse {
    if method != "GET" {
        return error_response(405, "Method Not Allowed", "only GET is supported");
    }
    if path.starts_with("/api") {
        return match path.split('?').next().unwrap_or(path) {
            "/api/health" => match health_payload() {
                Ok(payload) => {
                    HttpResponse::text(200, "OK", "application/json", payload)
                }
                Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
            },
            _ => error_response(404, "Not Found", "Route not found"),
        };
    }
    serve_page(config, path)
}

fn serve_page(config: &SiteConfig, path: &str) -> HttpResponse {
    let Some(file) = static_files::resolve(config, path).and_then(|p| static_files::load(&p))
    else {
        return error_response(404, "Not Found", "No such page");
    };

    if file.content_type != static_files::HTML_CONTENT_TYPE {
        return HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: file.content_type,
            body: file.body,
        };
    }

    // Shells are authored as UTF-8.
    let shell = String::from_utf8_lossy(&file.body).into_owned();
    let body = render_into_shell(config, path, &shell);
    HttpResponse::text(200, "OK", static_files::HTML_CONTENT_TYPE, body)
}

/// The per-request pipeline: resolve, select, render, splice. Any failure
/// short of a missed id serves the shell exactly as authored.
fn render_into_shell(config: &SiteConfig, path: &str, shell: &str) -> String {
    match site::resolve_page(config, path) {
        PageOutcome::Untouched => shell.to_string(),
        PageOutcome::Rendered(page) => match inject::inject_fragment(shell, &page.fragment) {
            Some(spliced) => inject::set_title(&spliced, &page.title),
            None => {
                // No container, nowhere to render; title stays untouched too.
                tracing::debug!("no content container in {path}; serving shell as authored");
                shell.to_string()
            }
        },
        PageOutcome::NotFound => inject::inject_fragment(shell, &site::not_found_notice())
            .unwrap_or_else(|| shell.to_string()),
    }
}

fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "rising-site",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse::text(
        status_code,
        status_text,
        "application/json",
        format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    )
}
