//! Catalog: the site's single JSON document, category name → item records.
//! Loaded fresh on every page request; read-only, never cached or written
//! back.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::page::PageKind;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("catalog {path} is not valid json: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<Item>>,
}

impl Catalog {
    /// Items of one category; empty when the category is absent.
    pub fn category(&self, kind: PageKind) -> &[Item] {
        self.categories
            .get(kind.as_str())
            .map_or(&[], Vec::as_slice)
    }
}

/// One record within a category. Every presentation field is independently
/// optional; rendering is driven by explicit presence checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_zh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Subject line of a guide, shown alongside `name_zh` above its sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<StatEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactics: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatEntry {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub name_zh: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub details: Vec<StatEntry>,
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Pick the record a page context refers to. Characters and guides resolve
/// by id; every other category ignores the id and shows its first entry.
pub fn select_item<'a>(
    catalog: &'a Catalog,
    kind: PageKind,
    id: Option<&str>,
) -> Option<&'a Item> {
    let items = catalog.category(kind);
    if kind.selects_by_id() {
        let id = id?;
        items.iter().find(|item| item.id.as_deref() == Some(id))
    } else {
        items.first()
    }
}
