use std::fs;
use std::path::Path;

use rising::config::SiteConfig;
use rising::server::routes::route_request;

const CHARACTER_SHELL: &str = r#"<!doctype html>
<html>
<head><title>War Inc Rising - 角色</title></head>
<body>
<nav>chrome</nav>
<div id="main-content-area"><p>authored placeholder</p></div>
</body>
</html>
"#;

const CATALOG: &str = r#"{
    "characters": [{
        "id": "flame_sovereign",
        "name_zh": "焰皇",
        "stats": [{"label": "HP", "value": "1000"}]
    }],
    "units": [{"id": "tank1", "name_zh": "坦克"}]
}"#;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, contents).expect("write");
}

fn test_site() -> (tempfile::TempDir, SiteConfig) {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(&root.join("index.html"), "<html><body>home</body></html>");
    write(
        &root.join("pages/characters/flame_sovereign.html"),
        CHARACTER_SHELL,
    );
    write(&root.join("pages/characters/ghost.html"), CHARACTER_SHELL);
    write(&root.join("pages/units/index.html"), CHARACTER_SHELL);
    write(&root.join("assets/css/style.css"), "body { margin: 0; }");
    write(&root.join("data.json"), CATALOG);
    let config = SiteConfig::new(root);
    (dir, config)
}

#[test]
fn character_page_renders_into_its_shell() {
    let (_dir, config) = test_site();
    let response = route_request(&config, "GET", "/pages/characters/flame_sovereign.html");

    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "text/html; charset=utf-8");
    let body = response.body_text();
    assert!(body.contains("<tr><th>HP</th><td>1000</td></tr>"));
    assert!(body.contains("<title>War Inc Rising - 焰皇</title>"));
    assert!(body.contains("<nav>chrome</nav>"), "chrome must survive");
    assert!(!body.contains("authored placeholder"));
}

#[test]
fn unit_index_page_shows_the_first_record() {
    let (_dir, config) = test_site();
    let response = route_request(&config, "GET", "/pages/units/index.html");
    assert_eq!(response.status_code, 200);
    assert!(response.body_text().contains("坦克"));
}

#[test]
fn unknown_id_renders_the_not_found_notice() {
    let (_dir, config) = test_site();
    let response = route_request(&config, "GET", "/pages/characters/ghost.html");
    assert_eq!(response.status_code, 200);
    let body = response.body_text();
    assert!(body.contains("找不到對應的資料"));
    assert!(!body.contains("authored placeholder"));
    // Title is only rewritten for a matched record.
    assert!(body.contains("<title>War Inc Rising - 角色</title>"));
}

#[test]
fn corrupt_catalog_serves_the_shell_unchanged() {
    let (dir, config) = test_site();
    fs::write(dir.path().join("data.json"), "{broken").expect("corrupt data.json");

    let response = route_request(&config, "GET", "/pages/characters/flame_sovereign.html");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body_text(), CHARACTER_SHELL);
}

#[test]
fn shell_without_container_is_served_as_authored() {
    let (dir, config) = test_site();
    let shell = "<html><head><title>t</title></head><body>no container</body></html>";
    write(
        &dir.path().join("pages/characters/flame_sovereign.html"),
        shell,
    );

    let response = route_request(&config, "GET", "/pages/characters/flame_sovereign.html");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body_text(), shell);
}

#[test]
fn home_page_is_served_without_rendering() {
    let (_dir, config) = test_site();
    for path in ["/", "/index.html"] {
        let response = route_request(&config, "GET", path);
        assert_eq!(response.status_code, 200, "path {path}");
        assert_eq!(response.body_text(), "<html><body>home</body></html>");
    }
}

#[test]
fn stylesheet_is_served_verbatim_with_its_content_type() {
    let (_dir, config) = test_site();
    let response = route_request(&config, "GET", "/assets/css/style.css");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "text/css; charset=utf-8");
    assert_eq!(response.body_text(), "body { margin: 0; }");
}

#[test]
fn missing_files_return_404() {
    let (_dir, config) = test_site();
    let response = route_request(&config, "GET", "/pages/characters/nope.html");
    assert_eq!(response.status_code, 404);
}

#[test]
fn parent_traversal_is_rejected() {
    let (_dir, config) = test_site();
    let response = route_request(&config, "GET", "/../data.json");
    assert_eq!(response.status_code, 404);
}

#[test]
fn non_get_methods_are_rejected() {
    let (_dir, config) = test_site();
    let response = route_request(&config, "POST", "/pages/units/index.html");
    assert_eq!(response.status_code, 405);
}

#[test]
fn health_endpoint_returns_ok_json() {
    let (_dir, config) = test_site();
    let response = route_request(&config, "GET", "/api/health");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert!(response.body_text().contains("\"status\": \"ok\""));
}

#[test]
fn unknown_api_routes_return_404() {
    let (_dir, config) = test_site();
    let response = route_request(&config, "GET", "/api/catalog");
    assert_eq!(response.status_code, 404);
}
