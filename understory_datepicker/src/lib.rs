// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_datepicker --heading-base-level=0

//! Understory Datepicker: a deterministic, `no_std` selection state machine for date pickers.
//!
//! ## Overview
//!
//! This crate decides what happens after a day is activated in a calendar: the new selection,
//! whether the popup calendar closes, and which element gets focus.
//! It does not render, lay out a month grid, do date arithmetic, or move focus.
//! Instead, feed it [`ActivationEvent`](crate::types::ActivationEvent)s from your calendar view and it emits
//! [`Instruction`](crate::picker::Instruction)s you carry out.
//!
//! ## Inputs
//!
//! - A [`PickerConfig`](crate::config::PickerConfig), fixed per instance: [`SelectionMode`](crate::types::SelectionMode)
//!   (`Single` or `Range`) and the [`ModeOptions`](crate::types::ModeOptions) flags `SWAP_RANGE`,
//!   `INLINE`, and `KEEP_OPEN_ON_SELECT`.
//! - Activations carrying the day's date `D` and the day cell `E` that produced it. Dates only need
//!   `Copy + Ord`; element references are opaque handles into your view.
//!
//! ## Transitions
//!
//! 1) Reduce: [`reduce`](crate::reducer::reduce) folds the activation into the selection and reports a
//!    [`CommitDecision`](crate::types::CommitDecision). In range mode the first pick starts a range and the second
//!    completes it. A backwards range is kept as picked unless `SWAP_RANGE` is set.
//! 2) Visibility: [`should_close`](crate::visibility::should_close) closes single pickers on commit and range
//!    pickers once both ends are set. Inline pickers never close on selection.
//! 3) Focus: [`choose_focus_target`](crate::focus::choose_focus_target) returns focus to the input when the
//!    selection is done, or leaves it on the day cell while a range is unfinished or backwards.
//!
//! Steps 2 and 3 both read the decision from step 1 and are otherwise independent: an inline range
//! picker stays open while handing focus back to the input.
//!
//! ## Layering
//!
//! The transition functions are pure and total. [`DatePicker`](crate::picker::DatePicker) owns one
//! instance's selection and popup state and turns each step into instructions. A
//! [`ViewSink`](crate::dispatcher::ViewSink) executes them against your toolkit.
//!
//! ```
//! use understory_datepicker::config::PickerConfig;
//! use understory_datepicker::picker::{DatePicker, Instruction};
//! use understory_datepicker::types::{ActivationEvent, FocusTarget, Selection};
//!
//! let mut picker: DatePicker<u32, &str> =
//!     DatePicker::with_selection(PickerConfig::range(), Selection::Range { start: Some(5), end: None });
//! picker.focus_requested();
//!
//! // Ending before the start without swap: the range is kept and focus stays in the calendar.
//! let out = picker.activate(ActivationEvent { date: 2, source: "day-02" });
//! assert_eq!(out.last(), Some(&Instruction::Focus(FocusTarget::DayCell("day-02"))));
//! assert_eq!(picker.selection(), &Selection::Range { start: Some(5), end: Some(2) });
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`PickerConfig`](crate::config::PickerConfig),
//!   [`SelectionMode`](crate::types::SelectionMode), and [`Selection`](crate::types::Selection).
//!
//! Diagnostics are emitted through the `log` facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod dispatcher;
pub mod focus;
pub mod picker;
pub mod reducer;
pub mod types;
pub mod visibility;
