// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load picker props from TOML and trace the state machine.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example datepicker_config`

use chrono::NaiveDate;
use serde::Deserialize;
use understory_datepicker::config::PickerConfig;
use understory_datepicker::picker::DatePicker;
use understory_datepicker::types::{ActivationEvent, Selection};

const PROPS: &str = r#"
[picker]
mode = "range"
swap_range = true

[selection.range]
start = "2025-11-05"
"#;

#[derive(Debug, Deserialize)]
struct Props {
    picker: PickerConfig,
    #[serde(default = "no_selection")]
    selection: Selection<NaiveDate>,
}

fn no_selection() -> Selection<NaiveDate> {
    Selection::Single(None)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let props: Props = toml::from_str(PROPS)?;
    log::info!("loaded {:?}", props.picker);

    let mut picker: DatePicker<NaiveDate, u32> =
        DatePicker::with_selection(props.picker, props.selection);
    picker.focus_requested();

    let date = NaiveDate::parse_from_str("2025-11-02", "%Y-%m-%d")?;
    for i in picker.activate(ActivationEvent { date, source: 2 }) {
        println!("{i:?}");
    }
    println!("mode={} selection={:?}", picker.mode(), picker.selection());
    Ok(())
}
