// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for a [`DatePicker`](crate::picker::DatePicker).
//!
//! A [`PickerConfig`] is immutable for the lifetime of a picker. It is a flat set of props so hosts
//! can build it in code or, with the `serde` feature, load it from a config file:
//!
//! ```toml
//! mode = "range"
//! swap_range = true
//! ```
//!
//! Missing fields take their defaults; unknown fields are rejected.

use crate::types::{ModeOptions, SelectionMode};

/// Picker props.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct PickerConfig {
    /// Single date or start/end range.
    pub mode: SelectionMode,
    /// Swap a range completed backwards. Ignored in single mode.
    pub swap_range: bool,
    /// Calendar is always visible and never closed by selection.
    pub inline: bool,
    /// Keep the popup open after a selection completes.
    pub keep_open_on_select: bool,
    /// Start with the popup open. Inline pickers are always open.
    pub open: bool,
}

impl PickerConfig {
    /// Defaults for a single-date picker.
    pub fn single() -> Self {
        Self::default()
    }

    /// Defaults for a range picker.
    pub fn range() -> Self {
        Self {
            mode: SelectionMode::Range,
            ..Self::default()
        }
    }

    /// Set [`Self::swap_range`].
    #[must_use]
    pub fn with_swap_range(mut self, swap_range: bool) -> Self {
        self.swap_range = swap_range;
        self
    }

    /// Set [`Self::inline`].
    #[must_use]
    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Set [`Self::keep_open_on_select`].
    #[must_use]
    pub fn with_keep_open_on_select(mut self, keep_open: bool) -> Self {
        self.keep_open_on_select = keep_open;
        self
    }

    /// Set [`Self::open`].
    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// The option flags these props describe.
    pub fn options(&self) -> ModeOptions {
        let mut options = ModeOptions::empty();
        options.set(ModeOptions::SWAP_RANGE, self.swap_range);
        options.set(ModeOptions::INLINE, self.inline);
        options.set(ModeOptions::KEEP_OPEN_ON_SELECT, self.keep_open_on_select);
        options
    }

    /// Whether a picker built from these props starts with the popup open.
    pub fn initially_open(&self) -> bool {
        self.inline || self.open
    }
}
