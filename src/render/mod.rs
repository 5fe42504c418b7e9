pub mod detail;
pub mod html;
pub mod inject;
pub mod skill;
pub mod tactics;

pub use detail::{render_item, RenderedPage};
