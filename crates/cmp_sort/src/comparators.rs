use std::cmp::Ordering;

/// Natural ascending order.
#[inline]
pub fn compare_ascending<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

#[inline]
pub fn compare_descending<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Orders integers by their last decimal digit only.
///
/// Uses the euclidean remainder, so `-3` has last digit `7`.
#[inline]
pub fn compare_last_digit(a: &i64, b: &i64) -> Ordering {
    compare_ascending(&a.rem_euclid(10), &b.rem_euclid(10))
}

/// Adapts a sign-returning comparator (`-1`, `0`, `1`, or any negative / zero /
/// positive value) into an [`Ordering`] comparator.
pub fn by_sign<T, F>(mut sign: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> i32,
{
    move |a: &T, b: &T| sign(a, b).cmp(&0)
}

/// Returns `true` when no adjacent pair of `xs` compares `Greater`.
pub fn is_sorted_by<T, F>(xs: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    xs.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tri_state_values() {
        assert_eq!(compare_ascending(&125, &322) as i8, -1);
        assert_eq!(compare_ascending(&523, &322) as i8, 1);
        assert_eq!(compare_ascending(&7, &7) as i8, 0);

        assert_eq!(compare_descending(&125, &322) as i8, 1);
        assert_eq!(compare_descending(&523, &322) as i8, -1);

        assert_eq!(compare_last_digit(&125, &322), Ordering::Greater);
        assert_eq!(compare_last_digit(&523, &322), Ordering::Greater);
        assert_eq!(compare_last_digit(&12, &2), Ordering::Equal);
        assert_eq!(compare_last_digit(&-3, &7), Ordering::Equal);
    }

    #[test]
    fn by_sign_accepts_any_magnitude() {
        let mut cmp = by_sign(|a: &i32, b: &i32| a - b);
        assert_eq!(cmp(&1, &10), Ordering::Less);
        assert_eq!(cmp(&10, &1), Ordering::Greater);
        assert_eq!(cmp(&4, &4), Ordering::Equal);
    }

    #[test]
    fn sortedness_predicate() {
        assert!(is_sorted_by::<u32, _>(&[], compare_ascending));
        assert!(is_sorted_by(&[1], compare_ascending));
        assert!(is_sorted_by(&[1, 2, 2, 3], compare_ascending));
        assert!(!is_sorted_by(&[1, 3, 2], compare_ascending));
        assert!(is_sorted_by(&[3, 2, 2, 1], compare_descending));
        assert!(is_sorted_by(&[322, 12, 523, 125], compare_last_digit));
    }
}
