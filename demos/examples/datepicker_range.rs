// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range picking, with and without swap.
//!
//! Picks November 5th, then November 2nd. Without `swap_range` the backwards range is kept and
//! focus stays on the calendar; with it the ends are swapped and the input regains focus.
//!
//! Run:
//! - `cargo run -p understory_demos --example datepicker_range`

use chrono::NaiveDate;
use understory_datepicker::config::PickerConfig;
use understory_datepicker::dispatcher::{self, ViewSink};
use understory_datepicker::picker::DatePicker;
use understory_datepicker::types::{ActivationEvent, FocusTarget, Selection};

type Cell = u32;

/// Prints what a real view would do.
struct ConsoleView;

impl ViewSink<NaiveDate, Cell> for ConsoleView {
    fn selection_changed(&mut self, selection: &Selection<NaiveDate>) {
        match selection {
            Selection::Range { start, end } => println!("  onChange start={start:?} end={end:?}"),
            Selection::Single(date) => println!("  onChange {date:?}"),
        }
    }

    fn set_popup_open(&mut self, open: bool) {
        println!("  popup {}", if open { "shown" } else { "hidden" });
    }

    fn focus_element(&mut self, target: FocusTarget<Cell>) {
        match target {
            FocusTarget::Input => println!("  focus -> input"),
            FocusTarget::DayCell(day) => println!("  focus -> day cell {day:03}"),
        }
    }
}

fn nov(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, day).expect("valid November date")
}

fn run(config: PickerConfig) {
    let mut picker: DatePicker<NaiveDate, Cell> = DatePicker::new(config);
    let mut view = ConsoleView;
    dispatcher::run(&picker.focus_requested(), &mut view);
    for day in [5, 2] {
        println!(" click {}", nov(day));
        let out = picker.activate(ActivationEvent {
            date: nov(day),
            source: day,
        });
        dispatcher::run(&out, &mut view);
    }
    println!(" out of order: {}", picker.selection().is_out_of_order());
}

fn main() {
    println!("== swap_range = false ==");
    run(PickerConfig::range());

    println!("== swap_range = true ==");
    run(PickerConfig::range().with_swap_range(true));
}
