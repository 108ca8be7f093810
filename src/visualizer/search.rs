//! Search visualizers

use super::{Frame, Outcome, Role, Trace};

/// Linear search for `target`, one frame per examined element
///
/// The matching element's frame tags it `Found` and ends the trace. Without a
/// match, a last frame with nothing highlighted carries the "not found" caption.
pub fn linear_search(values: &[i64], target: i64) -> Trace {
    let mut frames = Vec::with_capacity(values.len() + 1);

    for (i, &value) in values.iter().enumerate() {
        if value == target {
            frames.push(
                Frame::plain(values, format!("arr[{}] == {}: found", i, target))
                    .with_role(i, Role::Found),
            );
            return Trace {
                frames,
                outcome: Outcome::Found { index: i },
            };
        }
        frames.push(
            Frame::plain(values, format!("arr[{}] = {} != {}", i, value, target))
                .with_role(i, Role::Comparing),
        );
    }

    frames.push(Frame::plain(values, format!("{} is not in the array", target)));
    Trace {
        frames,
        outcome: Outcome::NotFound,
    }
}

/// Binary search for `target` in ascending `values`
///
/// Each frame examines the middle of the remaining range; elements already ruled
/// out are `Discarded`. An unsorted input gives the same answer C would: whatever
/// the halving finds.
pub fn binary_search(values: &[i64], target: i64) -> Trace {
    let mut frames = Vec::new();
    let mut low = 0usize;
    let mut high = values.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let mut frame = range_frame(values, low, high, String::new());

        if values[mid] == target {
            frame.note = format!("arr[{}] == {}: found", mid, target);
            frames.push(frame.with_role(mid, Role::Found));
            return Trace {
                frames,
                outcome: Outcome::Found { index: mid },
            };
        }

        if values[mid] < target {
            frame.note = format!("arr[{}] = {} < {}: search right half", mid, values[mid], target);
            low = mid + 1;
        } else {
            frame.note = format!("arr[{}] = {} > {}: search left half", mid, values[mid], target);
            high = mid;
        }
        frames.push(frame.with_role(mid, Role::Comparing));
    }

    frames.push(range_frame(
        values,
        0,
        0,
        format!("{} is not in the array", target),
    ));
    Trace {
        frames,
        outcome: Outcome::NotFound,
    }
}

/// Frame where everything outside `low..high` is discarded
fn range_frame(values: &[i64], low: usize, high: usize, note: String) -> Frame {
    let mut frame = Frame::plain(values, note);
    for (i, cell) in frame.cells.iter_mut().enumerate() {
        if i < low || i >= high {
            cell.role = Role::Discarded;
        }
    }
    frame
}
