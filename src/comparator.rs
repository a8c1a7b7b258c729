/*!
Utilities to assist with comparing based on various characteristics. Useful for sorting by
properties different from the natural ordering provided by ordering traits e.g. [`PartialOrd`],
or for handing an explicit ordering policy to a priority queue.
*/

use std::cmp::Ordering;

use crate::node::CodeNode;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`
    */
    fn compare(a: T, b: T) -> Ordering;
}

/**
A comparator ordering [`CodeNode`]'s by their frequency field, ascending.

This is the ordering that code builders feed to a min-first priority queue so that the least
frequent nodes surface first. The comparison is relational (`u64::cmp`), not the classic
`a.frequency - b.frequency` shortcut; the subtraction form wraps when the operands straddle the
numeric range boundaries and reports the wrong sign.
*/
#[derive(Debug)]
pub struct FrequencyComparator {}

impl Comparator<&CodeNode> for FrequencyComparator {
    fn compare(a: &CodeNode, b: &CodeNode) -> Ordering {
        a.frequency().cmp(&b.frequency())
    }
}
