// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker state machine: run the reducer and both controllers for each activation.
//!
//! ## Overview
//!
//! [`step`] is the pure composition: reduce, then decide visibility and focus from the same
//! [`CommitDecision`]. [`DatePicker`] owns one instance's [`Selection`] and [`PopupState`], applies
//! each step, and returns the [`Instruction`]s the view must carry out.
//!
//! ## Instruction order
//!
//! For an activation the picker emits, in order:
//! 1) [`SelectionChanged`](Instruction::SelectionChanged) with the full next selection,
//! 2) [`SetPopupOpen(false)`](Instruction::SetPopupOpen) if the popup was open and now closes,
//! 3) exactly one [`Focus`](Instruction::Focus).
//!
//! Every call runs to completion before returning; there is nothing to cancel or await.

use alloc::vec::Vec;
use core::fmt::Debug;

use log::{debug, trace};

use crate::config::PickerConfig;
use crate::focus::choose_focus_target;
use crate::reducer::reduce;
use crate::types::{
    ActivationEvent, CommitDecision, FocusTarget, ModeOptions, PopupState, Selection,
    SelectionMode,
};
use crate::visibility::should_close;

/// Outcome of one activation, computed without touching any picker state.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Step<D, E> {
    /// Selection after the activation.
    pub next: Selection<D>,
    /// What the reducer decided.
    pub decision: CommitDecision,
    /// Whether the popup should close.
    pub close: bool,
    /// Where focus should go.
    pub focus: FocusTarget<E>,
}

/// Run the reducer, then the visibility and focus policies, for one activation.
///
/// The two policies only share the reducer's output; neither observes the other.
pub fn step<D: Copy + Ord, E: Copy>(
    current: &Selection<D>,
    event: &ActivationEvent<D, E>,
    mode: SelectionMode,
    options: ModeOptions,
) -> Step<D, E> {
    let (next, decision) = reduce(current, event, mode, options);
    let close = should_close(decision, mode, options);
    let focus = choose_focus_target(decision, mode, options, &next, event.source);
    Step {
        next,
        decision,
        close,
        focus,
    }
}

/// An instruction for the view layer.
///
/// Returned by [`DatePicker`] methods and executed by a [`ViewSink`](crate::dispatcher::ViewSink).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Instruction<D, E> {
    /// The committed selection changed.
    SelectionChanged(Selection<D>),
    /// Show or hide the popup calendar.
    SetPopupOpen(bool),
    /// Move focus to the target.
    Focus(FocusTarget<E>),
}

/// Selection, popup, and focus state for one picker instance.
///
/// ## Usage
///
/// - Construct with [`DatePicker::new`] or [`DatePicker::with_selection`]; the
///   [`PickerConfig`] is fixed from then on.
/// - Forward view events: [`activate`](Self::activate) for day activations,
///   [`focus_requested`](Self::focus_requested) when the input gains focus,
///   [`escape_requested`](Self::escape_requested) on escape, and [`clear`](Self::clear).
/// - Hand the returned instructions to the view, for example with [`dispatcher::run`](crate::dispatcher::run).
///
/// ```
/// use understory_datepicker::config::PickerConfig;
/// use understory_datepicker::picker::{DatePicker, Instruction};
/// use understory_datepicker::types::{ActivationEvent, FocusTarget, Selection};
///
/// let mut picker: DatePicker<u32, &str> = DatePicker::new(PickerConfig::range());
/// assert_eq!(picker.focus_requested(), vec![Instruction::SetPopupOpen(true)]);
///
/// // Start date: the popup stays open and focus stays on the grid.
/// let out = picker.activate(ActivationEvent { date: 1, source: "day-01" });
/// assert_eq!(
///     out,
///     vec![
///         Instruction::SelectionChanged(Selection::Range { start: Some(1), end: None }),
///         Instruction::Focus(FocusTarget::DayCell("day-01")),
///     ]
/// );
///
/// // End date: the popup closes and the input gets focus back.
/// let out = picker.activate(ActivationEvent { date: 5, source: "day-05" });
/// assert_eq!(
///     out,
///     vec![
///         Instruction::SelectionChanged(Selection::Range { start: Some(1), end: Some(5) }),
///         Instruction::SetPopupOpen(false),
///         Instruction::Focus(FocusTarget::Input),
///     ]
/// );
/// assert!(!picker.is_open());
/// ```
#[derive(Clone, Debug)]
pub struct DatePicker<D, E> {
    config: PickerConfig,
    options: ModeOptions,
    selection: Selection<D>,
    popup: PopupState,
    _phantom: core::marker::PhantomData<fn() -> E>,
}

impl<D: Copy + Ord, E: Copy + Debug> DatePicker<D, E> {
    /// Create a picker with an empty selection.
    pub fn new(config: PickerConfig) -> Self {
        Self::with_selection(config, Selection::empty(config.mode))
    }

    /// Create a picker with an initial selection.
    ///
    /// A selection that does not match `config.mode` is replaced by the empty one.
    pub fn with_selection(config: PickerConfig, selection: Selection<D>) -> Self {
        Self {
            config,
            options: config.options(),
            selection: selection.normalized(config.mode),
            popup: PopupState::new(config.initially_open()),
            _phantom: core::marker::PhantomData,
        }
    }

    /// Construction-time props.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.config.mode
    }

    /// Option flags.
    pub fn options(&self) -> ModeOptions {
        self.options
    }

    /// The committed selection.
    pub fn selection(&self) -> &Selection<D> {
        &self.selection
    }

    /// Whether the calendar is showing.
    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    /// Apply a day activation.
    pub fn activate(&mut self, event: ActivationEvent<D, E>) -> Vec<Instruction<D, E>> {
        let step = step(&self.selection, &event, self.mode(), self.options);
        let mut out = Vec::with_capacity(3);
        if step.decision.committed {
            self.selection = step.next;
            out.push(Instruction::SelectionChanged(step.next));
        }
        if self.popup.apply(step.close) {
            trace!("popup closed by selection");
            out.push(Instruction::SetPopupOpen(false));
        }
        out.push(Instruction::Focus(step.focus));
        debug!(
            "activation: mode={} decision={:?} close={} focus={:?}",
            self.mode(),
            step.decision,
            step.close,
            step.focus
        );
        out
    }

    /// The text input gained focus: open the popup.
    pub fn focus_requested(&mut self) -> Vec<Instruction<D, E>> {
        self.set_open(true)
    }

    /// Escape was pressed: close the popup and return focus to the input.
    ///
    /// Inline pickers ignore this.
    pub fn escape_requested(&mut self) -> Vec<Instruction<D, E>> {
        if self.options.inline() {
            trace!("escape ignored: inline picker");
            return Vec::new();
        }
        if !self.popup.set_open(false) {
            return Vec::new();
        }
        trace!("popup closed by escape");
        alloc::vec![
            Instruction::SetPopupOpen(false),
            Instruction::Focus(FocusTarget::Input),
        ]
    }

    /// Explicitly show or hide the popup.
    ///
    /// Inline pickers cannot be hidden. Emits nothing when the state does not change.
    pub fn set_open(&mut self, open: bool) -> Vec<Instruction<D, E>> {
        if !open && self.options.inline() {
            trace!("close ignored: inline picker");
            return Vec::new();
        }
        if !self.popup.set_open(open) {
            return Vec::new();
        }
        trace!("popup open={open}");
        alloc::vec![Instruction::SetPopupOpen(open)]
    }

    /// Reset the selection to empty and return focus to the input.
    ///
    /// Emits nothing when the selection is already empty.
    pub fn clear(&mut self) -> Vec<Instruction<D, E>> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        self.selection = Selection::empty(self.mode());
        debug!("selection cleared: mode={}", self.mode());
        alloc::vec![
            Instruction::SelectionChanged(self.selection),
            Instruction::Focus(FocusTarget::Input),
        ]
    }
}
