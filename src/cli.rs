use std::env;
use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::data::catalog::load_catalog;
use crate::data::validate::validate_catalog;
use crate::server;
use crate::site::{resolve_page, PageOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Render,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("render") => Some(Command::Render),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(args),
        Some(Command::Render) => handle_render(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: rising <serve|render|validate>");
            2
        }
    }
}

fn site_config_at(args: &[String], index: usize) -> SiteConfig {
    let root = args
        .get(index)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    SiteConfig::new(root)
}

fn handle_serve(args: &[String]) -> i32 {
    let config = site_config_at(args, 2);
    let bind_addr = env::var("RISING_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&config, &bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_render(args: &[String]) -> i32 {
    let Some(url_path) = args.get(2) else {
        eprintln!("usage: rising render <url-path> [site-root]");
        return 2;
    };
    let config = site_config_at(args, 3);
    match resolve_page(&config, url_path) {
        PageOutcome::Rendered(page) => {
            println!("{}", page.fragment);
            0
        }
        PageOutcome::NotFound => {
            eprintln!("no record matches {url_path}");
            1
        }
        PageOutcome::Untouched => {
            eprintln!("nothing to render for {url_path}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let data_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data.json"));
    let catalog = match load_catalog(&data_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    let report = validate_catalog(&catalog);
    for diag in &report.diagnostics {
        println!("{}: {}: {}", diag.severity, diag.context, diag.message);
    }
    if report.has_errors() {
        1
    } else {
        println!("catalog ok ({} diagnostics)", report.diagnostics.len());
        0
    }
}
