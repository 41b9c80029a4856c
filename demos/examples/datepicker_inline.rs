// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline range picker.
//!
//! An inline calendar is always shown. Completing a range still refocuses the input, but the
//! calendar never closes, and escape is ignored.
//!
//! Run:
//! - `cargo run -p understory_demos --example datepicker_inline`

use chrono::NaiveDate;
use understory_datepicker::config::PickerConfig;
use understory_datepicker::picker::DatePicker;
use understory_datepicker::types::ActivationEvent;

fn main() {
    let mut picker: DatePicker<NaiveDate, u32> =
        DatePicker::new(PickerConfig::range().with_inline(true));
    println!("open at start: {}", picker.is_open());

    for day in [1, 5] {
        let date = NaiveDate::from_ymd_opt(2025, 11, day).expect("valid date");
        println!("== Click {date} ==");
        for i in picker.activate(ActivationEvent { date, source: day }) {
            println!("  {i:?}");
        }
    }

    println!("== Escape ==");
    let out = picker.escape_requested();
    println!("  {} instruction(s), open={}", out.len(), picker.is_open());
}
