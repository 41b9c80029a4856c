// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the picker: modes, options, selections, activations, decisions, and focus targets.
//!
//! ## Overview
//!
//! These types are the inputs and outputs of the three transition functions:
//! [`reduce`](crate::reducer::reduce), [`should_close`](crate::visibility::should_close), and
//! [`choose_focus_target`](crate::focus::choose_focus_target).
//! They are generic over the date value `D` (anything totally ordered in time) and the element
//! reference `E` (a non‑owning handle to a focusable day cell in the host view).

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Whether a picker selects one date or a start/end pair.
///
/// Fixed for the lifetime of a [`DatePicker`](crate::picker::DatePicker).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SelectionMode {
    /// One date.
    #[default]
    Single,
    /// A start date followed by an end date.
    Range,
}

impl SelectionMode {
    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`SelectionMode`] from an unknown name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown selection mode `{0}`, expected `single` or `range`")]
pub struct ParseModeError(String);

impl FromStr for SelectionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("single") {
            Ok(Self::Single)
        } else if name.eq_ignore_ascii_case("range") {
            Ok(Self::Range)
        } else {
            Err(ParseModeError(name.to_string()))
        }
    }
}

bitflags::bitflags! {
    /// Behavior flags layered on top of a [`SelectionMode`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModeOptions: u8 {
        /// Reorder a completed range whose end precedes its start.
        ///
        /// Only consulted in [`SelectionMode::Range`].
        const SWAP_RANGE          = 0b0000_0001;
        /// The calendar is always visible and never closes itself on selection.
        const INLINE              = 0b0000_0010;
        /// Leave a popup calendar open after a selection completes.
        const KEEP_OPEN_ON_SELECT = 0b0000_0100;
    }
}

impl Default for ModeOptions {
    fn default() -> Self {
        Self::empty()
    }
}

impl ModeOptions {
    /// Whether [`Self::SWAP_RANGE`] is set.
    pub fn swap_range(self) -> bool {
        self.contains(Self::SWAP_RANGE)
    }

    /// Whether [`Self::INLINE`] is set.
    pub fn inline(self) -> bool {
        self.contains(Self::INLINE)
    }

    /// Whether [`Self::KEEP_OPEN_ON_SELECT`] is set.
    pub fn keep_open_on_select(self) -> bool {
        self.contains(Self::KEEP_OPEN_ON_SELECT)
    }
}

/// The committed value of a picker.
///
/// The variant follows the picker's [`SelectionMode`].
/// A `Range` carries no ordering invariant: `start` may be later than `end` when the range was
/// completed out of order without [`ModeOptions::SWAP_RANGE`]. Use
/// [`is_out_of_order`](Self::is_out_of_order) to detect that case downstream.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Selection<D> {
    /// Single-date selection.
    Single(Option<D>),
    /// Start/end selection.
    Range {
        /// First date picked.
        start: Option<D>,
        /// Second date picked.
        end: Option<D>,
    },
}

impl<D> Selection<D> {
    /// The empty selection for `mode`.
    pub const fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Range => Self::Range {
                start: None,
                end: None,
            },
        }
    }

    /// The mode this selection belongs to.
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Range { .. } => SelectionMode::Range,
        }
    }

    /// Returns `true` if no date is set.
    pub const fn is_empty(&self) -> bool {
        matches!(
            self,
            Self::Single(None)
                | Self::Range {
                    start: None,
                    end: None
                }
        )
    }
}

impl<D: Copy + Ord> Selection<D> {
    /// The selected date of a single selection.
    pub fn selected_date(&self) -> Option<D> {
        match *self {
            Self::Single(date) => date,
            Self::Range { .. } => None,
        }
    }

    /// The start date of a range selection.
    pub fn start_date(&self) -> Option<D> {
        match *self {
            Self::Range { start, .. } => start,
            Self::Single(_) => None,
        }
    }

    /// The end date of a range selection.
    pub fn end_date(&self) -> Option<D> {
        match *self {
            Self::Range { end, .. } => end,
            Self::Single(_) => None,
        }
    }

    /// Returns `true` if a single date is set, or both ends of a range are set.
    pub fn is_complete(&self) -> bool {
        match *self {
            Self::Single(date) => date.is_some(),
            Self::Range { start, end } => start.is_some() && end.is_some(),
        }
    }

    /// Returns `true` for a complete range whose end is strictly before its start.
    pub fn is_out_of_order(&self) -> bool {
        match *self {
            Self::Range {
                start: Some(start),
                end: Some(end),
            } => end < start,
            _ => false,
        }
    }

    /// Reinterpret this selection under `mode`.
    ///
    /// A selection of the matching variant is returned unchanged; any other becomes
    /// [`Selection::empty`] for `mode`.
    pub fn normalized(self, mode: SelectionMode) -> Self {
        if self.mode() == mode {
            self
        } else {
            Self::empty(mode)
        }
    }
}

/// A day cell was activated in the calendar view.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActivationEvent<D, E> {
    /// Date of the activated day.
    pub date: D,
    /// The focusable element that produced the activation.
    ///
    /// Only used as a lookup key when returning focus to the day cell; the picker never owns it.
    pub source: E,
}

/// What the reducer did with an activation.
///
/// Produced by [`reduce`](crate::reducer::reduce) and consumed by both
/// [`should_close`](crate::visibility::should_close) and
/// [`choose_focus_target`](crate::focus::choose_focus_target).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CommitDecision {
    /// The selection changed.
    pub committed: bool,
    /// In range mode, this activation supplied the second of the two dates.
    pub final_step_of_range: bool,
}

impl CommitDecision {
    /// A commit that did not complete a range: every single pick, and every range start.
    pub const COMMITTED: Self = Self {
        committed: true,
        final_step_of_range: false,
    };

    /// A commit that supplied the end of a range.
    pub const RANGE_COMPLETED: Self = Self {
        committed: true,
        final_step_of_range: true,
    };
}

/// Which element should hold focus after an activation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FocusTarget<E> {
    /// The picker's text input.
    Input,
    /// The day cell that produced the activation.
    DayCell(E),
}

/// Open/closed state of the popup calendar.
///
/// See [`visibility`](crate::visibility) for the transitions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PopupState {
    pub(crate) open: bool,
}
