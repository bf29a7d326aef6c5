//! Property tests for the behaviors with universal guarantees.

use std::cell::RefCell;
use std::rc::Rc;

use folio_motion::config::HeaderConfig;
use folio_motion::state::{HeaderState, Revealer, debounce, reduce_header, throttle};
use folio_motion::types::ElementId;
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn revealed_elements_stay_revealed(
        events in prop::collection::vec((0_usize..6, any::<bool>()), 0..64)
    ) {
        let mut revealer = Revealer::new(100);
        for i in 0..6 {
            revealer.observe(ElementId(i));
        }

        let mut seen = [false; 6];
        for (i, intersecting) in events {
            revealer.on_intersection(ElementId(i), intersecting);
            for (j, was) in seen.iter_mut().enumerate() {
                let now = revealer.is_revealed(ElementId(j));
                prop_assert!(!*was || now, "element {} was un-revealed", j);
                *was = now;
            }
        }
    }

    #[test]
    fn header_visible_after_upward_step(
        positions in prop::collection::vec(0.0_f32..2_000.0, 1..64),
        emphasis in 0.0_f32..200.0,
        hide in 0.0_f32..400.0,
    ) {
        let config = HeaderConfig {
            emphasis_threshold: emphasis,
            hide_threshold: hide,
            ..HeaderConfig::default()
        };

        let mut state = HeaderState::default();
        let mut previous: Option<f32> = None;
        for position in positions {
            state = reduce_header(state, position, &config);
            if previous.is_some_and(|p| position < p) {
                prop_assert!(state.mode.visible);
            }
            prop_assert_eq!(state.mode.emphasized, position > emphasis);
            previous = Some(position);
        }
    }

    #[test]
    fn debounce_fires_once_with_last_args(
        wait in 1_u64..500,
        gaps in prop::collection::vec(0_u64..500, 1..32),
    ) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let mut debounced = debounce(move |v: usize| sink.borrow_mut().push(v), wait);

        let mut now = 1_000;
        let n = gaps.len();
        for (i, gap) in gaps.into_iter().enumerate() {
            now += gap % wait;
            debounced.call(i, now);
        }

        prop_assert!(!debounced.poll(now + wait - 1));
        prop_assert!(debounced.poll(now + wait));
        prop_assert!(!debounced.poll(now + 10 * wait));
        prop_assert_eq!(calls.borrow().clone(), vec![n - 1]);
    }

    #[test]
    fn throttle_passes_first_args_in_window(
        limit in 1_u64..500,
        offsets in prop::collection::vec(0_u64..500, 1..32),
    ) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let mut throttled = throttle(move |v: usize| sink.borrow_mut().push(v), limit);

        let start = 1_000;
        let mut offsets: Vec<u64> = offsets.into_iter().map(|o| o % limit).collect();
        offsets.sort_unstable();
        offsets[0] = 0;

        for (i, offset) in offsets.iter().enumerate() {
            throttled.call(i, start + offset);
        }
        prop_assert_eq!(calls.borrow().clone(), vec![0]);

        prop_assert!(throttled.call(99, start + limit));
        prop_assert_eq!(calls.borrow().clone(), vec![0, 99]);
    }
}
