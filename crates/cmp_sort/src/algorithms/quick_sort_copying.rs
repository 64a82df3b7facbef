use std::cmp::Ordering;

/// Three-way quicksort that returns a sorted copy; `xs` is left as is.
///
/// The pivot is the middle element. It always lands in the equal group, so
/// every group handed on holds strictly fewer elements than its parent. Only
/// the smaller of the less/greater groups is sorted recursively, which bounds
/// stack depth by `log2(xs.len())`.
pub fn quick_sorted<T, F>(xs: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_owned(xs.to_vec(), &mut compare)
}

fn quick_sort_owned<T, F>(mut xs: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = Vec::with_capacity(xs.len());
    // Sorted runs that belong after whatever `xs` still has to produce.
    let mut tails: Vec<Vec<T>> = Vec::new();

    while xs.len() > 1 {
        let len = xs.len();
        let mut equal = vec![xs.swap_remove(len / 2)];
        let mut less = Vec::new();
        let mut greater = Vec::new();

        for x in xs {
            let order = compare(&x, &equal[0]);
            match order {
                Ordering::Less => less.push(x),
                Ordering::Equal => equal.push(x),
                Ordering::Greater => greater.push(x),
            }
        }
        debug_assert!(less.len() < len && greater.len() < len);

        if less.len() <= greater.len() {
            sorted.extend(quick_sort_owned(less, compare));
            sorted.append(&mut equal);
            xs = greater;
        } else {
            equal.extend(quick_sort_owned(greater, compare));
            tails.push(equal);
            xs = less;
        }
    }

    sorted.extend(xs);
    while let Some(tail) = tails.pop() {
        sorted.extend(tail);
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare_ascending;

    fn assert_sorts(data: Vec<u64>) {
        let actual = quick_sorted(&data, compare_ascending);
        let mut expected = data;
        expected.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn larger_side_first_keeps_order() {
        // Pivots near the top push the long part to the less side.
        assert_sorts(vec![9, 8, 10, 7, 6, 5, 4, 3, 2, 1]);
        assert_sorts(vec![1, 2, 3, 4, 5, 6, 10, 8, 9, 7]);
    }

    #[test]
    fn large_structured_inputs() {
        let n = 50_000_u64;
        let ascending: Vec<u64> = (0..n).collect();
        let descending: Vec<u64> = (0..n).rev().collect();
        let organ_pipe: Vec<u64> = (0..n / 2).chain((0..n / 2).rev()).collect();
        let sawtooth: Vec<u64> = (0..n).map(|i| i % 97).collect();

        for data in [ascending, descending, organ_pipe, sawtooth, vec![4; 4096]] {
            assert_sorts(data);
        }
    }
}
