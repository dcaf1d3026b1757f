//! Order-preserving intersection of vertex collections by identity.

use crate::point::PointId;

/// Elements of `a` whose id also occurs in `b`, in `a`'s order, each id at most once.
///
/// O(|a|·|b|); works on unsorted input.
pub fn intersect(a: &[PointId], b: &[PointId]) -> Vec<PointId> {
    let mut out: Vec<PointId> = Vec::with_capacity(a.len().min(b.len()));
    for &u in a {
        if b.contains(&u) && !out.contains(&u) {
            out.push(u);
        }
    }
    out
}

/// Linear merge for strictly ascending inputs. Agrees with [`intersect`] on such inputs.
pub fn intersect_sorted(a: &[PointId], b: &[PointId]) -> Vec<PointId> {
    debug_assert!(is_strictly_ascending(a) && is_strictly_ascending(b));
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

#[inline]
pub(crate) fn is_strictly_ascending(v: &[PointId]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn ids(v: &[usize]) -> Vec<PointId> {
        v.iter().copied().map(PointId).collect()
    }

    #[test]
    fn keeps_common_ids_in_left_order() {
        let a = ids(&[1, 2, 3]);
        let b = ids(&[2, 3, 4]);
        assert_eq!(intersect(&a, &b), ids(&[2, 3]));
        let c = ids(&[3, 1, 2]);
        assert_eq!(intersect(&c, &b), ids(&[3, 2]));
    }

    #[test]
    fn empty_sides() {
        assert!(intersect(&[], &ids(&[1])).is_empty());
        assert!(intersect(&ids(&[1]), &[]).is_empty());
        assert!(intersect_sorted(&[], &[]).is_empty());
    }

    #[test]
    fn duplicates_in_left_collapse() {
        let a = ids(&[5, 5, 2, 5]);
        let b = ids(&[5, 2]);
        assert_eq!(intersect(&a, &b), ids(&[5, 2]));
    }

    proptest! {
        #[test]
        fn law_membership(a in prop::collection::vec(0usize..20, 0..15),
                          b in prop::collection::vec(0usize..20, 0..15)) {
            let (a, b) = (ids(&a), ids(&b));
            let got = intersect(&a, &b);
            for u in &got {
                prop_assert!(a.contains(u) && b.contains(u));
            }
            for u in &a {
                prop_assert_eq!(b.contains(u), got.contains(u));
            }
        }

        #[test]
        fn law_idempotent_and_symmetric(a in prop::collection::btree_set(0usize..30, 0..15),
                                        b in prop::collection::btree_set(0usize..30, 0..15)) {
            let a: Vec<PointId> = a.into_iter().map(PointId).collect();
            let b: Vec<PointId> = b.into_iter().map(PointId).collect();
            prop_assert_eq!(intersect(&a, &a), a.clone());
            let ab: BTreeSet<_> = intersect(&a, &b).into_iter().collect();
            let ba: BTreeSet<_> = intersect(&b, &a).into_iter().collect();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn sorted_merge_matches_general(a in prop::collection::btree_set(0usize..40, 0..20),
                                        b in prop::collection::btree_set(0usize..40, 0..20)) {
            let a: Vec<PointId> = a.into_iter().map(PointId).collect();
            let b: Vec<PointId> = b.into_iter().map(PointId).collect();
            prop_assert_eq!(intersect_sorted(&a, &b), intersect(&a, &b));
        }
    }
}
