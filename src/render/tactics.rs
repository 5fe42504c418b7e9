//! Tactical analysis fragment: one list entry per tip, in catalog order.

use crate::render::html::Fragment;

pub fn render_tactics(frag: &mut Fragment, tips: &[String]) {
    frag.raw("<h2>💡 戰術定位與建議 (Tactical Analysis)</h2>\n");
    frag.raw("<p>核心戰術建議如下：</p>\n");
    frag.list(tips);
}
