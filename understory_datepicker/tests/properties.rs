// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the reducer and both controllers.

use chrono::NaiveDate;
use proptest::prelude::*;
use understory_datepicker::picker::step;
use understory_datepicker::reducer::reduce;
use understory_datepicker::types::{
    ActivationEvent, CommitDecision, FocusTarget, ModeOptions, Selection, SelectionMode,
};
use understory_datepicker::visibility::should_close;

const CELL: u16 = 7;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Roughly 1917 to 2054.
    (700_000_i32..750_000).prop_map(|n| NaiveDate::from_num_days_from_ce_opt(n).unwrap())
}

fn arb_mode() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![Just(SelectionMode::Single), Just(SelectionMode::Range)]
}

fn arb_options() -> impl Strategy<Value = ModeOptions> {
    (0_u8..8).prop_map(ModeOptions::from_bits_truncate)
}

fn arb_selection() -> impl Strategy<Value = Selection<NaiveDate>> {
    prop_oneof![
        proptest::option::of(arb_date()).prop_map(Selection::Single),
        (proptest::option::of(arb_date()), proptest::option::of(arb_date()))
            .prop_map(|(start, end)| Selection::Range { start, end }),
    ]
}

fn arb_decision() -> impl Strategy<Value = CommitDecision> {
    (any::<bool>(), any::<bool>()).prop_map(|(committed, final_step_of_range)| CommitDecision {
        committed,
        final_step_of_range,
    })
}

fn click(date: NaiveDate) -> ActivationEvent<NaiveDate, u16> {
    ActivationEvent { date, source: CELL }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Any single pick becomes the selection, closes a plain popup, and refocuses the input.
    #[test]
    fn prop_single_commit(
        current in arb_selection(),
        d in arb_date(),
        swap in any::<bool>(),
    ) {
        let mut opts = ModeOptions::empty();
        opts.set(ModeOptions::SWAP_RANGE, swap);
        let s = step(&current, &click(d), SelectionMode::Single, opts);
        prop_assert_eq!(s.next, Selection::Single(Some(d)));
        prop_assert!(s.close);
        prop_assert_eq!(s.focus, FocusTarget::Input);
    }

    #[test]
    fn prop_inline_never_closes(
        decision in arb_decision(),
        mode in arb_mode(),
        opts in arb_options(),
    ) {
        prop_assert!(!should_close(decision, mode, opts | ModeOptions::INLINE));
    }

    #[test]
    fn prop_reduce_is_pure(
        current in arb_selection(),
        d in arb_date(),
        mode in arb_mode(),
        opts in arb_options(),
    ) {
        let before = current;
        let first = reduce(&current, &click(d), mode, opts);
        let second = reduce(&current, &click(d), mode, opts);
        prop_assert_eq!(first, second);
        prop_assert_eq!(current, before);
    }

    #[test]
    fn prop_every_activation_commits(
        current in arb_selection(),
        d in arb_date(),
        mode in arb_mode(),
        opts in arb_options(),
    ) {
        let (next, decision) = reduce(&current, &click(d), mode, opts);
        prop_assert!(decision.committed);
        prop_assert_eq!(next.mode(), mode);
    }

    // The final step happens exactly when a range has a start and no end.
    #[test]
    fn prop_final_step_only_completes_half_ranges(
        current in arb_selection(),
        d in arb_date(),
        opts in arb_options(),
    ) {
        let (next, decision) = reduce(&current, &click(d), SelectionMode::Range, opts);
        let half = matches!(current, Selection::Range { start: Some(_), end: None });
        prop_assert_eq!(decision.final_step_of_range, half);
        prop_assert_eq!(next.is_complete(), half);
        if !half {
            prop_assert_eq!(next, Selection::Range { start: Some(d), end: None });
        }
    }

    #[test]
    fn prop_swap_orders_completed_ranges(start in arb_date(), d in arb_date()) {
        let current = Selection::Range { start: Some(start), end: None };
        let (next, _) = reduce(&current, &click(d), SelectionMode::Range, ModeOptions::SWAP_RANGE);
        prop_assert!(!next.is_out_of_order());
        prop_assert_eq!(next.start_date(), Some(start.min(d)));
        prop_assert_eq!(next.end_date(), Some(start.max(d)));
    }

    #[test]
    fn prop_no_swap_keeps_pick_order(start in arb_date(), d in arb_date()) {
        let current = Selection::Range { start: Some(start), end: None };
        let (next, _) = reduce(&current, &click(d), SelectionMode::Range, ModeOptions::empty());
        prop_assert_eq!(next, Selection::Range { start: Some(start), end: Some(d) });
    }

    // Focus returns to the input exactly when the range is complete and in order.
    #[test]
    fn prop_range_focus_follows_completion(
        current in arb_selection(),
        d in arb_date(),
        opts in arb_options(),
    ) {
        let s = step(&current, &click(d), SelectionMode::Range, opts);
        let done = s.next.is_complete() && !s.next.is_out_of_order();
        let expected = if done { FocusTarget::Input } else { FocusTarget::DayCell(CELL) };
        prop_assert_eq!(s.focus, expected);
    }

    // Closing depends on the options and decision only, never on the focus outcome.
    #[test]
    fn prop_close_ignores_focus(
        current in arb_selection(),
        d in arb_date(),
        mode in arb_mode(),
        opts in arb_options(),
    ) {
        let s = step(&current, &click(d), mode, opts);
        prop_assert_eq!(s.close, should_close(s.decision, mode, opts));
    }
}
