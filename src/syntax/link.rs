//! Links and images.
//!
//! New links and images point at a `https://` placeholder for the user to fill in.

use std::sync::LazyLock;

use regex::Regex;

use super::{CaretMode, Replacement, Target};

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*?)\]\(.*\)").expect("valid link regex"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[(.*?)\]\(.*\)").expect("valid image regex"));

const PLACEHOLDER_URL: &str = "https://";

pub fn is_link(target: &Target<'_>) -> bool {
    LINK.is_match(target.selection())
}

pub fn is_image(target: &Target<'_>) -> bool {
    IMAGE.is_match(target.selection())
}

/// Replace the selection with the captured label, or `None` without a capture.
fn strip(target: &Target<'_>, pattern: &Regex) -> Option<Replacement> {
    let label = pattern.captures(target.selection())?.get(1)?.as_str();
    Some(target.replace(label, CaretMode::Start))
}

pub fn toggle_link(target: &Target<'_>) -> Option<Replacement> {
    if is_link(target) {
        return strip(target, &LINK);
    }
    let snippet = format!("[{}]({PLACEHOLDER_URL})", target.selection());
    Some(target.replace(snippet, CaretMode::End))
}

pub fn toggle_image(target: &Target<'_>) -> Option<Replacement> {
    if is_image(target) {
        return strip(target, &IMAGE);
    }
    let snippet = format!("![{}]({PLACEHOLDER_URL})", target.selection());
    Some(target.replace(snippet, CaretMode::End))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(text: &str) -> Target<'_> {
        Target::select(text, 0..text.len())
    }

    #[test]
    fn test_insert_link() {
        assert_eq!(toggle_link(&all("Hello")).unwrap().snippet, "[Hello](https://)");
    }

    #[test]
    fn test_remove_link() {
        assert!(is_link(&all("[Hello](https://)")));
        assert_eq!(toggle_link(&all("[Hello](https://)")).unwrap().snippet, "Hello");
    }

    #[test]
    fn test_link_is_not_image() {
        assert!(!is_image(&all("[Hello](https://)")));
    }

    #[test]
    fn test_image_is_not_link() {
        assert!(!is_link(&all("![alt](pic.png)")));
    }

    #[test]
    fn test_insert_image() {
        assert_eq!(toggle_image(&all("alt")).unwrap().snippet, "![alt](https://)");
    }

    #[test]
    fn test_remove_image() {
        assert!(is_image(&all("![alt](pic.png)")));
        assert_eq!(toggle_image(&all("![alt](pic.png)")).unwrap().snippet, "alt");
    }

    #[test]
    fn test_remove_link_takes_first_label() {
        let text = "[a](x) and [b](y)";
        assert_eq!(toggle_link(&all(text)).unwrap().snippet, "a");
    }

    #[test]
    fn test_empty_selection_inserts_link_template() {
        let rep = toggle_link(&Target::caret("see ", 4)).unwrap();
        assert_eq!(rep.apply("see ").0, "see [](https://)");
    }
}
