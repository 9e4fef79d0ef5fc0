//! Bold and italic emphasis.

use super::{CaretMode, Replacement, Target};

const BOLD: &str = "**";
const ITALIC: &str = "*";

fn wrapped_in(selection: &str, marker: &str) -> bool {
    selection.len() >= marker.len() * 2
        && selection.starts_with(marker)
        && selection.ends_with(marker)
}

/// Whether the selection starts and ends with `**`.
pub fn is_bold(target: &Target<'_>) -> bool {
    wrapped_in(target.selection(), BOLD)
}

/// Whether the selection starts and ends with a single `*` and is not bold.
pub fn is_italic(target: &Target<'_>) -> bool {
    !is_bold(target) && wrapped_in(target.selection(), ITALIC)
}

pub fn toggle_bold(target: &Target<'_>) -> Replacement {
    if is_bold(target) {
        target.replace(target.unwrap(BOLD.len(), BOLD.len()), CaretMode::Start)
    } else {
        target.replace(target.wrap(BOLD, BOLD, false), CaretMode::End)
    }
}

pub fn toggle_italic(target: &Target<'_>) -> Replacement {
    if is_italic(target) {
        target.replace(target.unwrap(ITALIC.len(), ITALIC.len()), CaretMode::Start)
    } else {
        target.replace(target.wrap(ITALIC, ITALIC, false), CaretMode::End)
    }
}
