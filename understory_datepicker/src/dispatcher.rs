// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deliver picker instructions to the view layer.
//!
//! The picker never renders or moves focus itself. Implement [`ViewSink`] for your toolkit and pass
//! the instructions returned by [`DatePicker`](crate::picker::DatePicker) to [`run`].
//!
//! ```
//! use understory_datepicker::config::PickerConfig;
//! use understory_datepicker::dispatcher::{self, ViewSink};
//! use understory_datepicker::picker::DatePicker;
//! use understory_datepicker::types::{ActivationEvent, FocusTarget, Selection};
//!
//! #[derive(Default)]
//! struct View {
//!     open: bool,
//!     focused: Option<FocusTarget<u8>>,
//! }
//!
//! impl ViewSink<u32, u8> for View {
//!     fn selection_changed(&mut self, _selection: &Selection<u32>) {}
//!     fn set_popup_open(&mut self, open: bool) {
//!         self.open = open;
//!     }
//!     fn focus_element(&mut self, target: FocusTarget<u8>) {
//!         self.focused = Some(target);
//!     }
//! }
//!
//! let mut picker: DatePicker<u32, u8> = DatePicker::new(PickerConfig::single());
//! let mut view = View::default();
//!
//! dispatcher::run(&picker.focus_requested(), &mut view);
//! assert!(view.open);
//!
//! dispatcher::run(&picker.activate(ActivationEvent { date: 2, source: 2 }), &mut view);
//! assert!(!view.open);
//! assert_eq!(view.focused, Some(FocusTarget::Input));
//! ```

use alloc::vec::Vec;

use crate::picker::Instruction;
use crate::types::{FocusTarget, Selection};

/// The view collaborator that carries out picker instructions.
pub trait ViewSink<D, E> {
    /// Report a committed selection to the host.
    fn selection_changed(&mut self, selection: &Selection<D>);
    /// Show or hide the popup calendar.
    fn set_popup_open(&mut self, open: bool);
    /// Move focus to the target element.
    fn focus_element(&mut self, target: FocusTarget<E>);
}

/// Recording sink: keeps every instruction in delivery order.
impl<D: Copy, E> ViewSink<D, E> for Vec<Instruction<D, E>> {
    fn selection_changed(&mut self, selection: &Selection<D>) {
        self.push(Instruction::SelectionChanged(*selection));
    }

    fn set_popup_open(&mut self, open: bool) {
        self.push(Instruction::SetPopupOpen(open));
    }

    fn focus_element(&mut self, target: FocusTarget<E>) {
        self.push(Instruction::Focus(target));
    }
}

/// Deliver `instructions` to `sink` in order.
pub fn run<D, E, S>(instructions: &[Instruction<D, E>], sink: &mut S)
where
    E: Copy,
    S: ViewSink<D, E> + ?Sized,
{
    for instruction in instructions {
        match instruction {
            Instruction::SelectionChanged(selection) => sink.selection_changed(selection),
            Instruction::SetPopupOpen(open) => sink.set_popup_open(*open),
            Instruction::Focus(target) => sink.focus_element(*target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn recording_sink_preserves_order() {
        let seq: Vec<Instruction<u32, u32>> = vec![
            Instruction::SelectionChanged(Selection::Single(Some(2))),
            Instruction::SetPopupOpen(false),
            Instruction::Focus(FocusTarget::Input),
        ];
        let mut recorded = Vec::new();
        run(&seq, &mut recorded);
        assert_eq!(recorded, seq);
    }

    #[test]
    fn empty_sequence_delivers_nothing() {
        struct Counting(usize);
        impl ViewSink<u32, u32> for Counting {
            fn selection_changed(&mut self, _: &Selection<u32>) {
                self.0 += 1;
            }
            fn set_popup_open(&mut self, _: bool) {
                self.0 += 1;
            }
            fn focus_element(&mut self, _: FocusTarget<u32>) {
                self.0 += 1;
            }
        }

        let mut sink = Counting(0);
        run::<u32, u32, _>(&[], &mut sink);
        assert_eq!(sink.0, 0);
    }
}
