//! Site configuration: the two path roots every rendering call shares,
//! passed explicitly instead of living as module constants.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding the authored page shells and assets.
    pub site_root: PathBuf,
    /// The catalog JSON, one document for the whole site.
    pub data_path: PathBuf,
    /// Prefix prepended to `main_image` / `icon` filenames in generated markup.
    pub image_base: String,
    /// Leads the browser title of every rendered page.
    pub site_name: String,
}

impl SiteConfig {
    /// Defaults mirror the site layout: `data.json` at the root, skill art
    /// one directory up from the pages that reference it.
    pub fn new(site_root: impl Into<PathBuf>) -> Self {
        let site_root = site_root.into();
        let data_path = site_root.join("data.json");
        Self {
            site_root,
            data_path,
            image_base: "../assets/images/skills/".to_string(),
            site_name: "War Inc Rising".to_string(),
        }
    }
}
