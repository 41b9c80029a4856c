// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading picker props from TOML.

use chrono::NaiveDate;
use understory_datepicker::config::PickerConfig;
use understory_datepicker::picker::DatePicker;
use understory_datepicker::types::{ModeOptions, Selection, SelectionMode};

#[test]
fn empty_document_is_default() {
    let config: PickerConfig = toml::from_str("").unwrap();
    assert_eq!(config, PickerConfig::default());
}

#[test]
fn range_with_flags() {
    let config: PickerConfig = toml::from_str(
        r#"
mode = "range"
swap_range = true
inline = true
"#,
    )
    .unwrap();
    assert_eq!(config.mode, SelectionMode::Range);
    assert_eq!(config.options(), ModeOptions::SWAP_RANGE | ModeOptions::INLINE);
    assert!(!config.keep_open_on_select);
}

#[test]
fn unknown_mode_is_rejected() {
    let err = toml::from_str::<PickerConfig>(r#"mode = "multiple""#).unwrap_err();
    assert!(err.to_string().contains("multiple"), "{err}");
}

#[test]
fn unknown_field_is_rejected() {
    let err = toml::from_str::<PickerConfig>("swap = true").unwrap_err();
    assert!(err.to_string().contains("swap"), "{err}");
}

#[test]
fn config_round_trips() {
    let config = PickerConfig::range()
        .with_keep_open_on_select(true)
        .with_open(true);
    let text = toml::to_string(&config).unwrap();
    assert_eq!(toml::from_str::<PickerConfig>(&text).unwrap(), config);
}

#[derive(Debug, serde::Deserialize)]
struct Props {
    picker: PickerConfig,
    selection: Selection<NaiveDate>,
}

#[test]
fn initial_selection_from_props() {
    let props: Props = toml::from_str(
        r#"
[picker]
mode = "range"

[selection.range]
start = "2025-11-01"
"#,
    )
    .unwrap();
    let picker: DatePicker<NaiveDate, u32> =
        DatePicker::with_selection(props.picker, props.selection);
    assert_eq!(
        picker.selection().start_date(),
        NaiveDate::from_ymd_opt(2025, 11, 1)
    );
    assert_eq!(picker.selection().end_date(), None);
}
