//! Detail page renderer: one selected record → the content fragment and the
//! browser title. Blocks appear in a fixed order and only when their driving
//! field is present on the record.

use crate::config::SiteConfig;
use crate::data::catalog::Item;
use crate::page::PageKind;
use crate::render::html::Fragment;
use crate::render::{skill, tactics};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Full browser title, site name included.
    pub title: String,
    /// Markup destined for the content container.
    pub fragment: String,
}

pub fn render_item(config: &SiteConfig, item: &Item, kind: PageKind) -> RenderedPage {
    let mut frag = Fragment::new();

    header(config, &mut frag, item, kind);
    frag.raw("<hr>\n");

    if let Some(stats) = &item.stats {
        frag.raw("<h2>🛡️ 基礎屬性</h2>\n<div class=\"stats-table\">");
        frag.label_value_table(stats);
        frag.raw("</div>\n");
    }

    if let Some(cost) = &item.cost {
        frag.raw("<h2>💰 建造費用</h2>\n");
        frag.paragraph(cost);
    }

    if let Some(rules) = &item.rules {
        frag.raw("<h2>📝 玩法規則</h2>\n");
        frag.list(rules);
    }

    if let Some(details) = &item.details {
        frag.raw("<h2>📘 詳細說明</h2>\n");
        frag.list(details);
    }

    if let Some(sections) = &item.sections {
        let name_zh = item.name_zh.as_deref().unwrap_or_default();
        let content = item.content.as_deref().unwrap_or_default();
        frag.heading(2, &format!("{name_zh}：{content}"));
        for section in sections {
            frag.heading(3, &section.title);
            frag.paragraph(&section.text);
        }
    }

    if let Some(skills) = &item.skills {
        skill::render_skills(config, &mut frag, skills);
    }

    if let Some(tips) = &item.tactics {
        tactics::render_tactics(&mut frag, tips);
    }

    let display_name = item
        .name_zh
        .as_deref()
        .or(item.id.as_deref())
        .unwrap_or_default();

    RenderedPage {
        title: format!("{} - {display_name}", config.site_name),
        fragment: frag.into_markup(),
    }
}

/// Title line, role/description subtitle and the main visual. Always emitted,
/// independent of the optional blocks below it.
fn header(config: &SiteConfig, frag: &mut Fragment, item: &Item, kind: PageKind) {
    let name_zh = item.name_zh.as_deref().unwrap_or_default();
    let main_title = match item.name_en.as_deref() {
        Some(name_en) => format!("{name_zh} ({name_en})"),
        None => name_zh.to_string(),
    };
    frag.raw("<h1 id=\"item-title\">");
    frag.text(&format!("{} {main_title}", kind.glyph()));
    frag.raw("</h1>\n");

    let subtitle = item
        .role
        .as_deref()
        .or(item.description.as_deref())
        .unwrap_or_default();
    frag.raw("<p class=\"note\" style=\"text-align: center; color: #cc0000; font-weight: bold;\">");
    frag.text(subtitle);
    frag.raw("</p>\n");

    if let Some(image) = item.main_image.as_deref().or(item.icon.as_deref()) {
        frag.raw("<div class=\"image-container\">");
        frag.image(
            &format!("{}{image}", config.image_base),
            &format!("{name_zh}主視覺"),
        );
        frag.raw("</div>\n");
    }
}
