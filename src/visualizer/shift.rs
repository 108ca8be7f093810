//! Insertion and deletion with shifting
//!
//! Both follow the C loops from the array lecture literally:
//!
//! ```text
//! for (i = n - 1; i >= pos; i--) arr[i + 1] = arr[i];   arr[pos] = value; n++;
//! for (i = pos; i < n - 1; i++)  arr[i] = arr[i + 1];   n--;
//! ```
//!
//! so intermediate frames show the duplicated value a shift leaves behind.

use super::{Frame, Outcome, Role, Trace};

/// Insert `value` at `index` (valid range `0..=len`)
pub fn insert_with_shift(values: &[i64], index: usize, value: i64) -> Trace {
    let len = values.len();
    if index > len {
        tracing::debug!(index, len, "insert at invalid position");
        return invalid(index, len);
    }

    let mut work = values.to_vec();
    let mut frames = Vec::with_capacity(len - index + 1);

    for i in (index..len).rev() {
        if i + 1 == work.len() {
            work.push(work[i]);
        } else {
            work[i + 1] = work[i];
        }
        frames.push(
            Frame::plain(&work, format!("arr[{}] = arr[{}]", i + 1, i))
                .with_role(i + 1, Role::Shifting),
        );
    }

    if index == work.len() {
        work.push(value);
    } else {
        work[index] = value;
    }
    frames.push(
        Frame::plain(&work, format!("arr[{}] = {}", index, value)).with_role(index, Role::Placed),
    );

    Trace {
        frames,
        outcome: Outcome::Inserted { index },
    }
}

/// Delete the element at `index` (valid range `0..len`)
pub fn delete_with_shift(values: &[i64], index: usize) -> Trace {
    let len = values.len();
    if index >= len {
        tracing::debug!(index, len, "delete at invalid position");
        return invalid(index, len);
    }

    let removed = values[index];
    let mut work = values.to_vec();
    let mut frames = Vec::with_capacity(len - index);

    for i in index..len - 1 {
        work[i] = work[i + 1];
        frames.push(
            Frame::plain(&work, format!("arr[{}] = arr[{}]", i, i + 1))
                .with_role(i, Role::Shifting),
        );
    }

    work.truncate(len - 1);
    frames.push(Frame::plain(
        &work,
        format!("n-- : {} removed, {} elements left", removed, work.len()),
    ));

    Trace {
        frames,
        outcome: Outcome::Deleted {
            index,
            value: removed,
        },
    }
}

fn invalid(index: usize, len: usize) -> Trace {
    Trace {
        frames: Vec::new(),
        outcome: Outcome::InvalidPosition { index, len },
    }
}
