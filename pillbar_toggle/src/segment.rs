// Copyright 2026 the Pillbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

/// One selectable segment of the control: a display label, an optional
/// submission value, and transient semantic tags.
///
/// The value falls back to the label when unset, mirroring form controls
/// where the visible text doubles as the submitted value. Tags are
/// host-defined markers (for example a styling hint per semantic domain)
/// that can be wiped wholesale when the control is reused; the segment's
/// identity is positional and is never affected by tag changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    label: String,
    value: Option<String>,
    tags: Vec<String>,
}

impl Segment {
    /// Creates a segment with the given label and no explicit value.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            tags: Vec::new(),
        }
    }

    /// Creates a segment with an explicit value distinct from its label.
    pub fn with_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            tags: Vec::new(),
        }
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Overwrites the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// The segment's value, falling back to the label when unset.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.label)
    }

    /// Sets an explicit value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// The transient semantic tags currently attached.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Attaches a semantic tag. Duplicates are ignored.
    pub fn push_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Removes every semantic tag, leaving label and value intact.
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }
}
