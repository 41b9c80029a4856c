// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popup visibility: decide whether a commit closes the calendar, and track open/closed state.
//!
//! ## Policy
//!
//! - [`INLINE`](ModeOptions::INLINE) or [`KEEP_OPEN_ON_SELECT`](ModeOptions::KEEP_OPEN_ON_SELECT):
//!   never close on selection.
//! - [`Single`](SelectionMode::Single): close on every commit.
//! - [`Range`](SelectionMode::Range): close only once the range has both ends, so the end date can
//!   be picked right after the start.
//!
//! [`should_close`] never looks at focus, and [`choose_focus_target`](crate::focus::choose_focus_target)
//! never looks at the popup. Both consume the same [`CommitDecision`].

use crate::types::{CommitDecision, ModeOptions, PopupState, SelectionMode};

/// Whether the popup should close after a commit.
pub fn should_close(decision: CommitDecision, mode: SelectionMode, options: ModeOptions) -> bool {
    if options.inline() || options.keep_open_on_select() {
        return false;
    }
    match mode {
        SelectionMode::Single => decision.committed,
        SelectionMode::Range => decision.committed && decision.final_step_of_range,
    }
}

impl PopupState {
    /// Create a popup state.
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    /// Whether the calendar is showing.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Set the open flag, returning `true` if it changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }

    /// Close the popup if `close` is set, returning `true` if it was open.
    ///
    /// Pass the result of [`should_close`].
    pub fn apply(&mut self, close: bool) -> bool {
        close && self.set_open(false)
    }
}
