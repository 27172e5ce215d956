use std::cmp::Ordering;

use crate::pair::Pair;

/// Lexicographic comparison over loose, possibly absent components.
///
/// An absent component sorts before any present one. Two absent firsts tie
/// and the seconds decide, with the same absent-before-present rule. Seconds
/// are never examined when the firsts are present and unequal. This is a
/// total order and agrees with [`equals`]: it returns [`Ordering::Equal`]
/// exactly for structurally equal component lists.
pub fn compare<F, S>(
    first_of_left: Option<&F>,
    second_of_left: Option<&S>,
    first_of_right: Option<&F>,
    second_of_right: Option<&S>,
) -> Ordering
where
    F: Ord,
    S: Ord,
{
    match (first_of_left, first_of_right) {
        // (none, ?) and (none, ?)
        (None, None) => compare_seconds(second_of_left, second_of_right),
        // (none, ?) and (something, ?)
        (None, Some(..)) => Ordering::Less,
        // (something, ?) and (none, ?)
        (Some(..), None) => Ordering::Greater,
        // (something, ?) and (something, ?)
        (Some(left), Some(right)) => match left.cmp(right) {
            // (x, ?) and (x, ?)
            Ordering::Equal => compare_seconds(second_of_left, second_of_right),
            unequal => unequal,
        },
    }
}

fn compare_seconds<S: Ord>(left: Option<&S>, right: Option<&S>) -> Ordering {
    match (left, right) {
        // (_, none) and (_, none)
        (None, None) => Ordering::Equal,
        // (_, none) and (_, something)
        (None, Some(..)) => Ordering::Less,
        // (_, something) and (_, none)
        (Some(..), None) => Ordering::Greater,
        // (_, something) and (_, something)
        (Some(left), Some(right)) => left.cmp(right),
    }
}

/// Compares two pairs by extracting their components.
#[inline]
pub fn compare_pairs<F, S>(left: &Pair<F, S>, right: &Pair<F, S>) -> Ordering
where
    F: Ord,
    S: Ord,
{
    compare(
        Some(left.first()),
        Some(left.second()),
        Some(right.first()),
        Some(right.second()),
    )
}

/// Structural equality over loose, possibly absent components.
///
/// Two absent components are equal, an absent and a present one are not,
/// two present ones use the components' own equality. The component types
/// on both sides may differ as long as they are comparable.
pub fn equals<F, S, F2, S2>(
    first_of_left: Option<&F>,
    second_of_left: Option<&S>,
    first_of_right: Option<&F2>,
    second_of_right: Option<&S2>,
) -> bool
where
    F: PartialEq<F2>,
    S: PartialEq<S2>,
{
    component_eq(first_of_left, first_of_right) && component_eq(second_of_left, second_of_right)
}

fn component_eq<L, R>(left: Option<&L>, right: Option<&R>) -> bool
where
    L: PartialEq<R>,
{
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compare_equal_values() {
        assert_eq!(
            compare(Some(&1), Some(&1), Some(&1), Some(&1)),
            Ordering::Equal
        );
    }

    #[test]
    fn compare_equal_absent_values() {
        assert_eq!(
            compare::<i32, i32>(None, None, None, None),
            Ordering::Equal
        );
    }

    #[test]
    fn compare_lesser_in_second_component() {
        assert_eq!(
            compare(Some(&1), Some(&0), Some(&1), Some(&1)),
            Ordering::Less
        );
    }

    #[test]
    fn compare_greater_in_second_component() {
        assert_eq!(
            compare(Some(&1), Some(&1), Some(&1), Some(&0)),
            Ordering::Greater
        );
    }

    #[test]
    fn first_component_decides_before_second() {
        // Unequal firsts win even against an opposing second.
        assert_eq!(
            compare(Some(&0), Some(&9), Some(&1), Some(&0)),
            Ordering::Less
        );
        assert_eq!(
            compare(Some(&2), Some(&0), Some(&1), Some(&9)),
            Ordering::Greater
        );
    }

    #[test]
    fn absent_sorts_before_present() {
        assert_eq!(
            compare(None, Some(&5), Some(&1), Some(&5)),
            Ordering::Less
        );
        assert_eq!(
            compare(Some(&1), Some(&5), None, Some(&5)),
            Ordering::Greater
        );
        // Equal firsts, absent second first.
        assert_eq!(
            compare(Some(&1), None, Some(&1), Some(&0)),
            Ordering::Less
        );
        assert_eq!(
            compare(Some(&1), Some(&0), Some(&1), None),
            Ordering::Greater
        );
    }

    #[test]
    fn absent_firsts_resolved_by_seconds() {
        assert_eq!(compare::<i32, i32>(None, None, None, Some(&0)), Ordering::Less);
        assert_eq!(compare::<i32, i32>(None, Some(&0), None, None), Ordering::Greater);
        assert_eq!(compare::<i32, i32>(None, Some(&1), None, Some(&2)), Ordering::Less);
    }

    #[test]
    fn agrees_with_option_ordering() {
        // Option's Ord sorts None before Some as well, so comparing every
        // combination against std's tuple ordering checks totality,
        // antisymmetry and transitivity in one sweep.
        let values = [None, Some(1), Some(2)];
        for fl in values {
            for sl in values {
                for fr in values {
                    for sr in values {
                        let expected = (fl, sl).cmp(&(fr, sr));
                        assert_eq!(
                            compare(fl.as_ref(), sl.as_ref(), fr.as_ref(), sr.as_ref()),
                            expected,
                            "({fl:?}, {sl:?}) vs ({fr:?}, {sr:?})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn antisymmetric() {
        let values = [None, Some(0), Some(7)];
        for fl in values {
            for sl in values {
                for fr in values {
                    for sr in values {
                        let forward = compare(fl.as_ref(), sl.as_ref(), fr.as_ref(), sr.as_ref());
                        let backward = compare(fr.as_ref(), sr.as_ref(), fl.as_ref(), sl.as_ref());
                        assert_eq!(forward, backward.reverse());
                    }
                }
            }
        }
    }

    #[test]
    fn equal_iff_compare_equal() {
        let values = [None, Some(1), Some(2)];
        for fl in values {
            for sl in values {
                for fr in values {
                    for sr in values {
                        let compared = compare(fl.as_ref(), sl.as_ref(), fr.as_ref(), sr.as_ref());
                        let equal = equals(fl.as_ref(), sl.as_ref(), fr.as_ref(), sr.as_ref());
                        assert_eq!(compared == Ordering::Equal, equal);
                    }
                }
            }
        }
    }

    #[test]
    fn equals_across_component_types() {
        let owned = "pair".to_string();
        assert!(equals(Some(&owned), Some(&1), Some(&"pair"), Some(&1)));
        assert!(!equals(Some(&owned), Some(&1), Some(&"other"), Some(&1)));
    }

    #[test]
    fn compare_pairs_extracts_components() {
        let left = Pair::new(1, "a");
        let right = Pair::new(1, "b");
        assert_eq!(compare_pairs(&left, &right), Ordering::Less);
        assert_eq!(compare_pairs(&left, &left), Ordering::Equal);
        assert_eq!(compare_pairs(&right, &left), Ordering::Greater);
    }
}
