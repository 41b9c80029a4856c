// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-date picker basics.
//!
//! Focus the input to open the calendar, click a day, and watch the picker close the popup and
//! hand focus back to the input.
//!
//! Run:
//! - `cargo run -p understory_demos --example datepicker_basics`

use chrono::NaiveDate;
use understory_datepicker::config::PickerConfig;
use understory_datepicker::picker::DatePicker;
use understory_datepicker::types::{ActivationEvent, Selection};

/// Day cells are identified by their day of month.
type Cell = u32;

fn main() {
    let today = NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid date");
    let mut picker: DatePicker<NaiveDate, Cell> =
        DatePicker::with_selection(PickerConfig::single(), Selection::Single(Some(today)));

    println!("== Focus input ==");
    for i in picker.focus_requested() {
        println!("  {i:?}");
    }

    let clicked = NaiveDate::from_ymd_opt(2025, 11, 2).expect("valid date");
    println!("== Click {clicked} ==");
    for i in picker.activate(ActivationEvent {
        date: clicked,
        source: 2,
    }) {
        println!("  {i:?}");
    }

    println!("selection={:?} open={}", picker.selection(), picker.is_open());
}
