use std::cmp::Ordering;

use super::merge::merge_runs;

/// Top-down merge sort. Returns a sorted copy; `xs` is left as is.
///
/// Not stable: a tie in [`merge`](super::merge::merge) emits the right element
/// right after the left one, ahead of any equal elements still in the left run.
pub fn merge_sorted<T, F>(xs: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_owned(xs.to_vec(), &mut compare)
}

fn merge_sort_owned<T, F>(mut xs: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = xs.len();
    if len < 2 {
        return xs;
    }

    let right = xs.split_off(len / 2);
    let mut left = merge_sort_owned(xs, compare);
    let right = merge_sort_owned(right, compare);

    // Halves already in order: concatenation is the merge.
    let in_order = match (left.last(), right.first()) {
        (Some(last), Some(first)) => compare(last, first) != Ordering::Greater,
        _ => false,
    };
    if in_order {
        left.extend(right);
        return left;
    }

    merge_runs(left.into_iter(), right.into_iter(), len, compare)
}
