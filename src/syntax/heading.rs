//! ATX headings.

use super::{CaretMode, Replacement, Target};

/// Highest heading level markdown supports.
pub const MAX_LEVEL: u8 = 6;

pub fn clamp_level(level: u8) -> u8 {
    level.clamp(1, MAX_LEVEL)
}

/// Number of leading `#` characters.
fn leading_hashes(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b'#').count()
}

/// Whether the target starts with exactly `level` `#` not followed by another `#`.
pub fn is_heading(target: &Target<'_>, level: u8) -> bool {
    leading_hashes(target.selection_or_current_line()) == usize::from(clamp_level(level))
}

/// Toggle a heading of `level` on the target (or the caret's line).
///
/// An existing heading of the same level is removed; a heading of another
/// level is re-levelled in place.
pub fn toggle_heading(target: &Target<'_>, level: u8) -> Replacement {
    let target = target.line_snapped();
    let wanted = usize::from(clamp_level(level));
    let text = target.selection();
    let current = leading_hashes(text);

    if current == 0 {
        return target.replace(target.wrap(&"#".repeat(wanted), "", true), CaretMode::End);
    }
    if current == wanted {
        return target.replace(target.unwrap(current, 0), CaretMode::Start);
    }

    let snippet = format!("{}{}", "#".repeat(wanted), &text[current..]);
    target.replace(snippet, CaretMode::End)
}
