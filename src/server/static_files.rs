//! Resolve request paths to authored files under the site root: page shells,
//! stylesheets and the image assets the catalog references.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub struct StaticFile {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Map a request path to a file under the site root. `None` for paths that
/// escape the root or name nothing on disk.
pub fn resolve(config: &SiteConfig, path: &str) -> Option<PathBuf> {
    let path = path.split('?').next().unwrap_or(path).trim_start_matches('/');
    if path.contains("..") {
        return None;
    }

    let root = config.site_root.canonicalize().ok()?;
    let mut target = if path.is_empty() {
        root.join("index.html")
    } else {
        root.join(path)
    };
    if target.is_dir() {
        target = target.join("index.html");
    }

    let target = target.canonicalize().ok()?;
    if !target.starts_with(&root) || !target.is_file() {
        return None;
    }
    Some(target)
}

pub fn load(path: &Path) -> Option<StaticFile> {
    let body = fs::read(path).ok()?;
    Some(StaticFile {
        content_type: content_type_for_path(&path.to_string_lossy()),
        body,
    })
}

pub fn content_type_for_path(path: &str) -> &'static str {
    if path.ends_with(".html") {
        HTML_CONTENT_TYPE
    } else if path.ends_with(".js") {
        "application/javascript; charset=utf-8"
    } else if path.ends_with(".css") {
        "text/css; charset=utf-8"
    } else if path.ends_with(".json") {
        "application/json; charset=utf-8"
    } else if path.ends_with(".png") {
        "image/png"
    } else if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        "image/jpeg"
    } else if path.ends_with(".gif") {
        "image/gif"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".webp") {
        "image/webp"
    } else if path.ends_with(".ico") {
        "image/x-icon"
    } else {
        "application/octet-stream"
    }
}
