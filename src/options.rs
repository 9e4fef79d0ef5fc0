//! Toolbar options: which controls the host UI offers.
//!
//! Options are declarative gating only. The toggler itself never consults
//! them. Files are JSON5 with camelCase keys:
//!
//! ```json5
//! {
//!   toolbar: {
//!     headings: [1, 2, 3],
//!     lists: { ordered: true },
//!   },
//! }
//! ```
//!
//! A `toolbar` object enables exactly the controls it names; leaving
//! `toolbar` out entirely keeps the full default set.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::syntax::Construct;
use crate::syntax::heading::{MAX_LEVEL, clamp_level};

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse options {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: json5::Error,
    },
}

/// A control the toolbar can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Construct(Construct),
    Undo,
    Redo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(default)]
    pub toolbar: ToolbarOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmphasisOptions {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    pub ordered: Option<bool>,
    pub unordered: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOptions {
    pub inline: Option<bool>,
    pub block: Option<bool>,
}

/// Per-control gates. A missing value means the control is off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarOptions {
    pub headings: Option<Vec<u8>>,
    pub emphasis: Option<EmphasisOptions>,
    pub lists: Option<ListOptions>,
    pub blockquote: Option<bool>,
    pub code: Option<CodeOptions>,
    pub horizontal_rule: Option<bool>,
    pub hyperlink: Option<bool>,
    pub image: Option<bool>,
    pub undo: Option<bool>,
    pub redo: Option<bool>,
}

impl Default for ToolbarOptions {
    fn default() -> Self {
        Self {
            headings: Some((1..=MAX_LEVEL).collect()),
            emphasis: Some(EmphasisOptions {
                bold: Some(true),
                italic: Some(true),
            }),
            lists: Some(ListOptions {
                ordered: Some(true),
                unordered: Some(true),
            }),
            blockquote: Some(true),
            code: Some(CodeOptions {
                inline: Some(true),
                block: Some(true),
            }),
            horizontal_rule: Some(true),
            hyperlink: Some(true),
            image: Some(true),
            undo: Some(true),
            redo: Some(true),
        }
    }
}

fn on(gate: Option<bool>) -> bool {
    gate.unwrap_or(false)
}

impl ToolbarOptions {
    /// Whether the toolbar offers `construct`.
    pub fn allows(&self, construct: Construct) -> bool {
        match construct {
            Construct::Heading(level) => self
                .headings
                .as_ref()
                .is_some_and(|levels| levels.iter().any(|&l| clamp_level(l) == clamp_level(level))),
            Construct::Bold => on(self.emphasis.and_then(|e| e.bold)),
            Construct::Italic => on(self.emphasis.and_then(|e| e.italic)),
            Construct::OrderedList => on(self.lists.and_then(|l| l.ordered)),
            Construct::UnorderedList => on(self.lists.and_then(|l| l.unordered)),
            Construct::Blockquote => on(self.blockquote),
            Construct::InlineCode => on(self.code.and_then(|c| c.inline)),
            Construct::CodeBlock => on(self.code.and_then(|c| c.block)),
            Construct::Divider => on(self.horizontal_rule),
            Construct::Link => on(self.hyperlink),
            Construct::Image => on(self.image),
        }
    }

    /// Enabled controls in toolbar order.
    ///
    /// Headings follow the order given in the options; duplicates are dropped.
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = Vec::new();
        for &level in self.headings.iter().flatten() {
            let control = Control::Construct(Construct::Heading(clamp_level(level)));
            if !controls.contains(&control) {
                controls.push(control);
            }
        }
        controls.extend(
            Construct::ALL
                .into_iter()
                .filter(|c| !matches!(c, Construct::Heading(_)) && self.allows(*c))
                .map(Control::Construct),
        );
        if on(self.undo) {
            controls.push(Control::Undo);
        }
        if on(self.redo) {
            controls.push(Control::Redo);
        }
        controls
    }
}

impl Options {
    /// Parse options from JSON5 source.
    pub fn from_json5(source: &str) -> Result<Self, json5::Error> {
        json5::from_str(source)
    }

    /// Pretty JSON for display.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Load options from `path`, or the defaults when it does not exist.
pub fn load_options(path: &Path) -> Result<Options, OptionsError> {
    if !path.exists() {
        return Ok(Options::default());
    }
    let content = fs::read_to_string(path).map_err(|source| OptionsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Options::from_json5(&content).map_err(|source| OptionsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
