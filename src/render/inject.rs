//! Splice a rendered fragment into an authored page shell.
//!
//! Shell contract: one element carries the content-container id and its
//! inner markup is replaced wholesale. This is deliberate tag matching for
//! the site's hand-written shells, not a general HTML parser.

use crate::render::html::escape;

/// The well-known id every data-driven shell must put on its container.
pub const CONTENT_CONTAINER_ID: &str = "main-content-area";

/// Replace the inner HTML of the container element. `None` when the shell
/// has no container, in which case the caller serves the shell untouched.
pub fn inject_fragment(shell: &str, fragment: &str) -> Option<String> {
    let (open_start, tag_name) = find_container(shell)?;
    let open_end = open_start + shell[open_start..].find('>')? + 1;
    let close_start = find_matching_close(shell, open_end, &tag_name)?;

    let mut page = String::with_capacity(shell.len() + fragment.len());
    page.push_str(&shell[..open_end]);
    page.push_str(fragment);
    page.push_str(&shell[close_start..]);
    Some(page)
}

/// Rewrite the shell's `<title>` element. Shells without one pass through
/// unchanged.
pub fn set_title(shell: &str, title: &str) -> String {
    const OPEN: &str = "<title>";
    const CLOSE: &str = "</title>";
    let Some(start) = shell.find(OPEN) else {
        return shell.to_string();
    };
    let Some(close) = shell[start..].find(CLOSE) else {
        return shell.to_string();
    };

    let mut page = String::with_capacity(shell.len() + title.len());
    page.push_str(&shell[..start + OPEN.len()]);
    page.push_str(&escape(title));
    page.push_str(&shell[start + close..]);
    page
}

/// Locate the opening tag carrying the container id. Returns the byte offset
/// of its `<` and the element name.
fn find_container(shell: &str) -> Option<(usize, String)> {
    let marker = format!("id=\"{CONTENT_CONTAINER_ID}\"");
    let marker_at = shell.find(&marker)?;
    let open_start = shell[..marker_at].rfind('<')?;
    let tag_name: String = shell[open_start + 1..]
        .chars()
        .take_while(|ch| ch.is_ascii_alphanumeric())
        .collect();
    if tag_name.is_empty() {
        return None;
    }
    Some((open_start, tag_name))
}

/// Byte offset of the `</tag>` matching an already-opened element, honouring
/// nested elements of the same name.
fn find_matching_close(shell: &str, from: usize, tag: &str) -> Option<usize> {
    let open_pat = format!("<{tag}");
    let close_pat = format!("</{tag}");
    let mut depth = 1_usize;
    let mut cursor = from;

    loop {
        let next_open = find_tag(shell, cursor, &open_pat);
        let next_close = find_tag(shell, cursor, &close_pat)?;
        match next_open {
            Some(open) if open < next_close => {
                depth += 1;
                cursor = open + open_pat.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(next_close);
                }
                cursor = next_close + close_pat.len();
            }
        }
    }
}

/// Next occurrence of `pat` that ends on a tag boundary, so `<div` does not
/// match `<divider`.
fn find_tag(shell: &str, from: usize, pat: &str) -> Option<usize> {
    let mut cursor = from;
    while let Some(found) = shell[cursor..].find(pat) {
        let at = cursor + found;
        let after = at + pat.len();
        let boundary = shell[after..]
            .chars()
            .next()
            .map_or(true, |ch| ch == '>' || ch == '/' || ch.is_whitespace());
        if boundary {
            return Some(at);
        }
        cursor = after;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = "<html><head><title>old</title></head><body>\
<div id=\"main-content-area\"><p>placeholder</p></div></body></html>";

    #[test]
    fn replaces_container_contents() {
        let page = inject_fragment(SHELL, "<h1>new</h1>").expect("container present");
        assert!(page.contains("<div id=\"main-content-area\"><h1>new</h1></div>"));
        assert!(!page.contains("placeholder"));
    }

    #[test]
    fn handles_nested_elements_of_the_same_name() {
        let shell = "<body><div id=\"main-content-area\"><div><div>deep</div></div></div><div>after</div></body>";
        let page = inject_fragment(shell, "x").expect("container present");
        assert_eq!(
            page,
            "<body><div id=\"main-content-area\">x</div><div>after</div></body>"
        );
    }

    #[test]
    fn missing_container_refuses_injection() {
        assert!(inject_fragment("<body><div id=\"other\"></div></body>", "x").is_none());
    }

    #[test]
    fn set_title_rewrites_and_escapes() {
        let page = set_title(SHELL, "War Inc Rising - <焰皇>");
        assert!(page.contains("<title>War Inc Rising - &lt;焰皇&gt;</title>"));
        assert!(!page.contains("<title>old</title>"));
    }

    #[test]
    fn set_title_without_title_element_is_identity() {
        let shell = "<body></body>";
        assert_eq!(set_title(shell, "anything"), shell);
    }
}
