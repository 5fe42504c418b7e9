//! Skill overview fragment. Skills render in catalog order; no sorting,
//! filtering or deduplication.

use crate::config::SiteConfig;
use crate::data::catalog::Skill;
use crate::render::html::Fragment;

pub fn render_skills(config: &SiteConfig, frag: &mut Fragment, skills: &[Skill]) {
    frag.raw("<h2>🔥 技能一覽 (Skill Overview)</h2>\n");
    for skill in skills {
        frag.raw("<div class=\"skill-section\"><div class=\"skill-info\"><div class=\"skill-detail\">\n");
        frag.heading(
            3,
            &format!("{} ({}) - [{}]", skill.name_zh, skill.name_en, skill.kind),
        );
        frag.raw("<p><strong>效果:</strong> ");
        frag.text(&skill.effect);
        frag.raw("</p>\n");
        frag.label_value_table(&skill.details);
        frag.raw("</div></div>\n<div class=\"skill-screenshot\">");
        frag.image(
            &format!("{}{}", config.image_base, skill.icon),
            &format!("{}技能截圖", skill.name_zh),
        );
        frag.raw("</div></div>\n");
    }
}
