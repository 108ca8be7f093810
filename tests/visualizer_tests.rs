// Tests for the algorithm visualizers

use clecture::constants::{SEARCH_SEED, SORT_SEED};
use clecture::visualizer::recursion::factorial_trace;
use clecture::visualizer::search::{binary_search, linear_search};
use clecture::visualizer::shift::{delete_with_shift, insert_with_shift};
use clecture::visualizer::sort::{bubble_sort, count_inversions};
use clecture::visualizer::{Outcome, Role};
use proptest::prelude::*;

#[test]
fn test_bubble_sort_seed() {
    let trace = bubble_sort(&SORT_SEED);
    let last = trace.last_frame().expect("trace has frames");

    assert_eq!(last.values(), vec![7, 12, 23, 34, 45, 89]);
    assert!(last.cells.iter().all(|c| c.role == Role::Sorted));
    assert_eq!(trace.outcome, Outcome::Sorted);

    // One swap frame per resolved inversion
    assert_eq!(count_inversions(&SORT_SEED), 9);
    assert_eq!(trace.frames_with(Role::Swapping), 9);
}

#[test]
fn test_bubble_sort_frame_structure() {
    let trace = bubble_sort(&[2, 1]);
    // compare, swap, pass done, front settled
    assert_eq!(trace.frames.len(), 4);
    assert_eq!(trace.frames[0].indices_with(Role::Comparing), vec![0, 1]);
    assert_eq!(trace.frames[1].values(), vec![1, 2]);
    assert_eq!(trace.frames[1].indices_with(Role::Swapping), vec![0, 1]);
    assert_eq!(trace.frames[2].indices_with(Role::Sorted), vec![1]);
    assert_eq!(trace.frames[3].indices_with(Role::Sorted), vec![0, 1]);
}

#[test]
fn test_bubble_sort_degenerate_inputs() {
    let empty = bubble_sort(&[]);
    assert_eq!(empty.frames.len(), 1);
    assert!(empty.frames[0].cells.is_empty());

    let single = bubble_sort(&[5]);
    assert_eq!(single.frames.len(), 1);
    assert_eq!(single.frames[0].indices_with(Role::Sorted), vec![0]);
}

#[test]
fn test_linear_search_found_stops_early() {
    let trace = linear_search(&SEARCH_SEED, 23);

    assert_eq!(trace.outcome, Outcome::Found { index: 3 });
    assert_eq!(trace.frames.len(), 4);
    for (i, frame) in trace.frames.iter().take(3).enumerate() {
        assert_eq!(frame.indices_with(Role::Comparing), vec![i]);
    }
    assert_eq!(trace.frames[3].indices_with(Role::Found), vec![3]);
}

#[test]
fn test_linear_search_not_found() {
    let trace = linear_search(&SEARCH_SEED, 100);

    assert_eq!(trace.outcome, Outcome::NotFound);
    assert_eq!(trace.frames.len(), SEARCH_SEED.len() + 1);
    assert!(!trace.frames.iter().any(|f| f.has_role(Role::Found)));
    assert_eq!(trace.outcome.message(), "Not found");
}

#[test]
fn test_binary_search() {
    let sorted = [7, 12, 23, 34, 45, 89];

    let direct = binary_search(&sorted, 34);
    assert_eq!(direct.outcome, Outcome::Found { index: 3 });
    assert_eq!(direct.frames.len(), 1);

    let left = binary_search(&sorted, 7);
    assert_eq!(left.outcome, Outcome::Found { index: 0 });
    assert_eq!(left.frames.len(), 3);
    // After the first halving only arr[0..3] remains
    assert_eq!(left.frames[1].indices_with(Role::Discarded), vec![3, 4, 5]);

    let missing = binary_search(&sorted, 40);
    assert_eq!(missing.outcome, Outcome::NotFound);
}

#[test]
fn test_insert_with_shift() {
    let trace = insert_with_shift(&SEARCH_SEED, 2, 99);

    assert_eq!(trace.outcome, Outcome::Inserted { index: 2 });
    // Four shifts (arr[5..2] move right) and the placement
    assert_eq!(trace.frames.len(), 5);
    assert_eq!(trace.frames[0].values(), vec![12, 45, 7, 23, 89, 34, 34]);
    assert_eq!(trace.frames[0].indices_with(Role::Shifting), vec![6]);

    let last = trace.last_frame().expect("trace has frames");
    assert_eq!(last.values(), vec![12, 45, 99, 7, 23, 89, 34]);
    assert_eq!(last.indices_with(Role::Placed), vec![2]);
}

#[test]
fn test_insert_at_end_needs_no_shift() {
    let trace = insert_with_shift(&[1, 2, 3], 3, 4);
    assert_eq!(trace.frames.len(), 1);
    assert_eq!(trace.frames[0].values(), vec![1, 2, 3, 4]);
}

#[test]
fn test_insert_invalid_position() {
    let trace = insert_with_shift(&SEARCH_SEED, 7, 99);
    assert!(trace.frames.is_empty());
    assert_eq!(trace.outcome, Outcome::InvalidPosition { index: 7, len: 6 });
    assert_eq!(trace.outcome.message(), "Invalid Position!");
}

#[test]
fn test_delete_with_shift() {
    let trace = delete_with_shift(&SEARCH_SEED, 1);

    assert_eq!(trace.outcome, Outcome::Deleted { index: 1, value: 45 });
    assert_eq!(trace.frames.len(), 5);
    assert_eq!(trace.frames[0].values(), vec![12, 7, 7, 23, 89, 34]);
    assert_eq!(
        trace.last_frame().expect("trace has frames").values(),
        vec![12, 7, 23, 89, 34]
    );
}

#[test]
fn test_delete_invalid_position() {
    let trace = delete_with_shift(&SEARCH_SEED, 6);
    assert!(trace.frames.is_empty());
    assert_eq!(trace.outcome.message(), "Invalid Position!");

    let empty = delete_with_shift(&[], 0);
    assert_eq!(empty.outcome, Outcome::InvalidPosition { index: 0, len: 0 });
}

#[test]
fn test_factorial_trace() {
    let frames = factorial_trace(3);

    // main, three calls down, three returns up, main again
    assert_eq!(frames.len(), 8);
    let depths: Vec<usize> = frames.iter().map(|f| f.stack.depth()).collect();
    assert_eq!(depths, vec![1, 2, 3, 4, 4, 3, 2, 1]);

    let base = frames[4].stack.current_frame().expect("frame");
    assert_eq!(base.get_local("n"), Some(1));
    assert_eq!(base.return_value, Some(1));

    let outer = frames[6].stack.current_frame().expect("frame");
    assert_eq!(outer.return_value, Some(6));

    let main = frames[7].stack.current_frame().expect("frame");
    assert_eq!(main.function_name, "main");
    assert_eq!(main.get_local("result"), Some(6));
    assert_eq!(frames[7].note, "main receives 6");
}

#[test]
fn test_factorial_of_zero() {
    let frames = factorial_trace(0);
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[3].note, "main receives 1");
}

proptest! {
    #[test]
    fn prop_bubble_sort_is_deterministic_and_sorts(values in prop::collection::vec(-50i64..50, 0..10)) {
        let first = bubble_sort(&values);
        let second = bubble_sort(&values);
        prop_assert_eq!(&first, &second);

        let mut expected = values.clone();
        expected.sort();
        let last = first.last_frame().expect("trace has frames");
        prop_assert_eq!(last.values(), expected);
        prop_assert_eq!(first.frames_with(Role::Swapping), count_inversions(&values));
    }

    #[test]
    fn prop_linear_search_finds_first_match(values in prop::collection::vec(0i64..10, 1..12), target in 0i64..10) {
        let trace = linear_search(&values, target);
        match values.iter().position(|&v| v == target) {
            Some(index) => {
                prop_assert_eq!(trace.outcome, Outcome::Found { index });
                prop_assert_eq!(trace.frames.len(), index + 1);
            }
            None => prop_assert_eq!(trace.outcome, Outcome::NotFound),
        }
    }
}
