//! Server-side renderer for the War Inc Rising reference site.
//!
//! One pipeline per page request: classify the URL into a category and item
//! id, load the catalog JSON, select the matching record, and splice the
//! generated markup into the authored page shell.

pub mod cli;
pub mod config;
pub mod data;
pub mod page;
pub mod render;
pub mod server;
pub mod site;
