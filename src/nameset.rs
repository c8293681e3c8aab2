//! Set operations over child-name collections.
//!
//! Directory listings already contain unique names, so these operate on
//! plain slices and preserve the left operand's iteration order.

use std::collections::HashSet;
use std::hash::Hash;

/// Elements of `a` absent from `b`, in `a`'s order.
pub fn difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let lookup: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| !lookup.contains(x)).cloned().collect()
}

/// Elements of `a` present in `b`, in `a`'s order.
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let lookup: HashSet<&T> = b.iter().collect();
    a.iter().filter(|x| lookup.contains(x)).cloned().collect()
}
