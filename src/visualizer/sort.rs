//! Bubble sort visualizer

use super::{Frame, Outcome, Role, Trace};

/// Classic bubble sort (no early exit), one frame per comparison, per swap and per
/// finished pass
///
/// A swap frame shows the pair already exchanged. The last frame has every element
/// `Sorted`.
pub fn bubble_sort(values: &[i64]) -> Trace {
    let n = values.len();
    let mut work = values.to_vec();
    let mut sorted = vec![false; n];
    let mut frames = Vec::new();

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            frames.push(
                snapshot(
                    &work,
                    &sorted,
                    format!("pass {}: compare arr[{}] and arr[{}]", pass + 1, j, j + 1),
                )
                .with_role(j, Role::Comparing)
                .with_role(j + 1, Role::Comparing),
            );

            if work[j] > work[j + 1] {
                work.swap(j, j + 1);
                frames.push(
                    snapshot(
                        &work,
                        &sorted,
                        format!("swap {} and {}", work[j + 1], work[j]),
                    )
                    .with_role(j, Role::Swapping)
                    .with_role(j + 1, Role::Swapping),
                );
            }
        }

        let settled = n - 1 - pass;
        sorted[settled] = true;
        frames.push(snapshot(
            &work,
            &sorted,
            format!("{} is in its final position", work[settled]),
        ));
    }

    // The front element is settled once every later one is
    if sorted.iter().any(|&s| !s) || frames.is_empty() {
        sorted.iter_mut().for_each(|s| *s = true);
        frames.push(snapshot(&work, &sorted, "array is sorted".to_string()));
    }

    Trace {
        frames,
        outcome: Outcome::Sorted,
    }
}

fn snapshot(work: &[i64], sorted: &[bool], note: String) -> Frame {
    let mut frame = Frame::plain(work, note);
    for (cell, &done) in frame.cells.iter_mut().zip(sorted) {
        if done {
            cell.role = Role::Sorted;
        }
    }
    frame
}

/// Number of out-of-order pairs; bubble sort performs exactly this many swaps
pub fn count_inversions(values: &[i64]) -> usize {
    let mut count = 0;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i] > values[j] {
                count += 1;
            }
        }
    }
    count
}
