// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus coordination: pick where focus goes after a commit.
//!
//! ## Policy
//!
//! Evaluated in order, first match wins:
//!
//! | Mode | Condition | Target |
//! |---|---|---|
//! | `Single` | any | [`Input`](FocusTarget::Input) |
//! | `Range` | only the start was picked | [`DayCell`](FocusTarget::DayCell) |
//! | `Range` | range complete, end before start, no swap | [`DayCell`](FocusTarget::DayCell) |
//! | `Range` | range complete otherwise | [`Input`](FocusTarget::Input) |
//!
//! A backwards range without [`SWAP_RANGE`](ModeOptions::SWAP_RANGE) keeps focus in the calendar so
//! the user can correct it.
//!
//! The target is only computed here. Moving focus is the view's job
//! (see [`dispatcher`](crate::dispatcher)).

use crate::types::{CommitDecision, FocusTarget, ModeOptions, Selection, SelectionMode};

/// Choose the element that should hold focus after a commit.
///
/// `next` is the selection returned by [`reduce`](crate::reducer::reduce) and `source` is the
/// day cell that produced the activation.
pub fn choose_focus_target<D: Copy + Ord, E>(
    decision: CommitDecision,
    mode: SelectionMode,
    options: ModeOptions,
    next: &Selection<D>,
    source: E,
) -> FocusTarget<E> {
    match mode {
        SelectionMode::Single => FocusTarget::Input,
        SelectionMode::Range if !decision.final_step_of_range => FocusTarget::DayCell(source),
        SelectionMode::Range if !options.swap_range() && next.is_out_of_order() => {
            FocusTarget::DayCell(source)
        }
        SelectionMode::Range => FocusTarget::Input,
    }
}
