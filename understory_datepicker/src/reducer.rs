// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection reducer: fold one day activation into the current selection.
//!
//! ## Rules
//!
//! - [`Single`](SelectionMode::Single): the activated date replaces the selection.
//! - [`Range`](SelectionMode::Range), no start yet or a complete range: start a new range at the
//!   activated date with no end.
//! - [`Range`](SelectionMode::Range), start set and end unset: the activated date completes the range.
//!   With [`SWAP_RANGE`](ModeOptions::SWAP_RANGE) and an end before the start, the two are swapped.
//!   Otherwise the pair is kept exactly as picked, even when out of order.
//!
//! Every activation commits. The reducer is total and pure: equal inputs give equal outputs.

use crate::types::{ActivationEvent, CommitDecision, ModeOptions, Selection, SelectionMode};

/// Compute the next selection and the commit decision for an activation.
///
/// `current` is read as a selection of `mode`; a mismatched variant counts as empty
/// (see [`Selection::normalized`]).
///
/// ```
/// use understory_datepicker::reducer::reduce;
/// use understory_datepicker::types::{
///     ActivationEvent, CommitDecision, ModeOptions, Selection, SelectionMode,
/// };
///
/// let current = Selection::Range { start: Some(5), end: None };
/// let event = ActivationEvent { date: 2, source: () };
///
/// let (next, decision) = reduce(&current, &event, SelectionMode::Range, ModeOptions::SWAP_RANGE);
/// assert_eq!(next, Selection::Range { start: Some(2), end: Some(5) });
/// assert_eq!(decision, CommitDecision::RANGE_COMPLETED);
/// ```
pub fn reduce<D: Copy + Ord, E>(
    current: &Selection<D>,
    event: &ActivationEvent<D, E>,
    mode: SelectionMode,
    options: ModeOptions,
) -> (Selection<D>, CommitDecision) {
    match mode {
        SelectionMode::Single => (Selection::Single(Some(event.date)), CommitDecision::COMMITTED),
        SelectionMode::Range => match current.normalized(SelectionMode::Range) {
            Selection::Range {
                start: Some(start),
                end: None,
            } => {
                let next = if options.swap_range() && event.date < start {
                    Selection::Range {
                        start: Some(event.date),
                        end: Some(start),
                    }
                } else {
                    Selection::Range {
                        start: Some(start),
                        end: Some(event.date),
                    }
                };
                (next, CommitDecision::RANGE_COMPLETED)
            }
            // No start yet, or both ends already set.
            _ => (
                Selection::Range {
                    start: Some(event.date),
                    end: None,
                },
                CommitDecision::COMMITTED,
            ),
        },
    }
}
