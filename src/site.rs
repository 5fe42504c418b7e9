//! Page bootstrap: one request path in, one rendering decision out.
//! Runs once per page request; the catalog is re-read every time.

use std::path::Path;

use crate::config::SiteConfig;
use crate::data::catalog::{load_catalog, select_item, Catalog};
use crate::page::{PageContext, PageKind};
use crate::render::{render_item, RenderedPage};

/// What a page request resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// No data-driven content for this path; the authored shell stands.
    Untouched,
    /// A record matched and rendered.
    Rendered(RenderedPage),
    /// The path named an id no record carries. The only failure shown to
    /// the visitor.
    NotFound,
}

/// Markup for the not-found notice.
pub fn not_found_notice() -> String {
    "<p class=\"note\" style=\"text-align: center;\">找不到對應的資料！</p>".to_string()
}

pub fn resolve_page(config: &SiteConfig, url_path: &str) -> PageOutcome {
    let context = PageContext::from_path(url_path);
    let Some(kind) = context.kind else {
        // Home page and other chrome-only pages: no data load at all.
        return PageOutcome::Untouched;
    };
    let Some(catalog) = load_catalog_or_warn(&config.data_path) else {
        return PageOutcome::Untouched;
    };
    resolve_with_catalog(config, &catalog, kind, context.id.as_deref())
}

/// Selection and rendering against an already-loaded catalog. Split out so
/// tests can drive it without touching the filesystem.
pub fn resolve_with_catalog(
    config: &SiteConfig,
    catalog: &Catalog,
    kind: PageKind,
    id: Option<&str>,
) -> PageOutcome {
    if catalog.category(kind).is_empty() {
        return PageOutcome::Untouched;
    }
    match select_item(catalog, kind, id) {
        Some(item) => PageOutcome::Rendered(render_item(config, item, kind)),
        None => PageOutcome::NotFound,
    }
}

/// Load the catalog, degrading to "no data" on any failure. A broken data
/// file must never break the page; the shell stays as authored.
fn load_catalog_or_warn(path: &Path) -> Option<Catalog> {
    match load_catalog(path) {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            tracing::warn!("catalog unavailable: {err}");
            None
        }
    }
}
