use std::cmp::Ordering;

/// Merges two runs, each sorted under `compare`, into one sorted vector in
/// `O(xs.len() + ys.len())` comparisons. A tie emits the left element, then the
/// right one, and advances both cursors.
pub fn merge<T, F>(xs: &[T], ys: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_runs(
        xs.iter().cloned(),
        ys.iter().cloned(),
        xs.len() + ys.len(),
        &mut compare,
    )
}

pub(crate) fn merge_runs<T, L, R, F>(
    left: L,
    right: R,
    capacity: usize,
    compare: &mut F,
) -> Vec<T>
where
    L: Iterator<Item = T>,
    R: Iterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(capacity);
    let mut left = left.peekable();
    let mut right = right.peekable();

    loop {
        let order = match (left.peek(), right.peek()) {
            (Some(x), Some(y)) => compare(x, y),
            _ => break,
        };
        match order {
            Ordering::Less => merged.extend(left.next()),
            Ordering::Greater => merged.extend(right.next()),
            Ordering::Equal => {
                merged.extend(left.next());
                merged.extend(right.next());
            }
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
