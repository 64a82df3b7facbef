use std::cmp::Ordering;

/// In-place quicksort using the Lomuto partition scheme.
///
/// Sorts `xs` directly and hands the same slice back. Not stable. The smaller
/// side of each partition is sorted recursively and the larger side in a loop,
/// which keeps stack depth logarithmic in `xs.len()` whatever the input.
pub fn quick_sort<T, F>(xs: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = xs.len();
    quick_sort_range(xs, 0, len, &mut compare);
    xs
}

/// Sorts the half-open window `lo..hi` of `xs`.
fn quick_sort_range<T, F>(xs: &mut [T], mut lo: usize, mut hi: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while hi - lo > 1 {
        let p = partition_lomuto(xs, lo, hi, compare);

        if p - lo < hi - (p + 1) {
            quick_sort_range(xs, lo, p, compare);
            lo = p + 1;
        } else {
            quick_sort_range(xs, p + 1, hi, compare);
            hi = p;
        }
    }
}

/// Partitions `lo..hi` around its last element and returns the pivot's final index.
///
/// Afterwards everything in `lo..p` compares `Less` than the pivot and nothing
/// in `p + 1..hi` does.
fn partition_lomuto<T, F>(xs: &mut [T], lo: usize, hi: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(lo < hi && hi <= xs.len());

    let pivot = hi - 1;
    let mut boundary = lo;
    for scan in lo..pivot {
        if compare(&xs[scan], &xs[pivot]) == Ordering::Less {
            xs.swap(scan, boundary);
            boundary += 1;
        }
    }
    xs.swap(boundary, pivot);
    boundary
}
