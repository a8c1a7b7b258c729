/*!
This module contains the node type for a Huffman-style code tree. A node is either a leaf holding
a symbol or an internal node holding two children, and every node carries the frequency (a.k.a.
weight) that code builders use as the sort key when pulling nodes out of a priority queue.

Only the node structure and its ordering live here. Assembling a full code tree, assigning code
lengths, and emitting bits are the concerns of a code builder sitting on top of this crate.
*/

use std::cmp::Ordering;

use crate::errors::{FreqOrderError, FreqOrderResult};

/**
A node in a Huffman-style code tree.

# Ordering

Nodes are ordered by frequency alone, ascending. This is the total order that min-first priority
queues rely on when repeatedly extracting the two least frequent nodes. The comparison is done
with direct relational operators rather than subtraction of the frequencies; subtraction wraps
for extreme magnitudes and is a well-known comparator bug.

Equality follows the same rule: two nodes compare equal when their frequencies are equal, even if
their shapes differ. Nodes are keys here, not values.
*/
#[derive(Clone, Debug)]
pub enum CodeNode {
    /// A leaf node. It has a symbol value and the weight of that symbol.
    Leaf {
        /// The symbol this leaf encodes. Symbol values are always non-negative.
        symbol: u32,
        /// The weight of the symbol e.g. its number of occurrences in some corpus.
        frequency: u64,
    },

    /// An internal node. It has two nodes as children and carries their combined weight.
    Internal {
        /// The combined weight of the children.
        frequency: u64,
        /// The left child.
        left: Box<CodeNode>,
        /// The right child.
        right: Box<CodeNode>,
    },
}

impl CodeNode {
    /// Construct a leaf node for `symbol` with the provided weight.
    pub fn leaf(symbol: u32, frequency: u64) -> Self {
        CodeNode::Leaf { symbol, frequency }
    }

    /**
    Construct an internal node joining `left` and `right`.

    The frequency of the new node is the sum of the children's frequencies. Returns
    [`FreqOrderError::FrequencyOverflow`] if the sum does not fit in a `u64` instead of wrapping,
    since a wrapped frequency would order the parent below its own children.
    */
    pub fn join(left: CodeNode, right: CodeNode) -> FreqOrderResult<Self> {
        let frequency = left
            .frequency()
            .checked_add(right.frequency())
            .ok_or_else(|| {
                FreqOrderError::FrequencyOverflow(format!(
                    "Joining nodes with frequencies {} and {} overflows the frequency field.",
                    left.frequency(),
                    right.frequency(),
                ))
            })?;

        Ok(CodeNode::Internal {
            frequency,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Return the frequency of the node.
    pub fn frequency(&self) -> u64 {
        match self {
            CodeNode::Leaf { frequency, .. } => *frequency,
            CodeNode::Internal { frequency, .. } => *frequency,
        }
    }

    /// Return true if the node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, CodeNode::Leaf { .. })
    }

    /// Return the symbol of a leaf node. Returns [`None`] for internal nodes.
    pub fn symbol(&self) -> Option<u32> {
        match self {
            CodeNode::Leaf { symbol, .. } => Some(*symbol),
            CodeNode::Internal { .. } => None,
        }
    }

    /// Return the children of an internal node. Returns [`None`] for leaves.
    pub fn children(&self) -> Option<(&CodeNode, &CodeNode)> {
        match self {
            CodeNode::Leaf { .. } => None,
            CodeNode::Internal { left, right, .. } => Some((left, right)),
        }
    }
}

impl Ord for CodeNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Relational comparison on the frequency field. `u64::cmp` is correct across the full
        // range, including the boundary cases where a subtraction-based comparator wraps.
        self.frequency().cmp(&other.frequency())
    }
}

impl PartialOrd for CodeNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CodeNode {
    fn eq(&self, other: &Self) -> bool {
        // Equality must stay consistent with `Ord`, which only looks at the frequency. Structural
        // equality would disagree with `cmp` returning `Equal` for distinct same-weight nodes.
        self.frequency() == other.frequency()
    }
}

impl Eq for CodeNode {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leaf_nodes_expose_their_symbol_and_frequency() {
        let node = CodeNode::leaf(97, 41);

        assert!(node.is_leaf());
        assert_eq!(node.symbol(), Some(97));
        assert_eq!(node.frequency(), 41);
        assert!(node.children().is_none());
    }

    #[test]
    fn joining_nodes_sums_the_frequencies() {
        let left = CodeNode::leaf(1, 3);
        let right = CodeNode::leaf(2, 7);

        let joined = CodeNode::join(left, right).unwrap();

        assert!(!joined.is_leaf());
        assert_eq!(joined.frequency(), 10);
        assert_eq!(joined.symbol(), None);

        let (left_child, right_child) = joined.children().unwrap();
        assert_eq!(left_child.symbol(), Some(1));
        assert_eq!(right_child.symbol(), Some(2));
    }

    #[test]
    fn joining_nodes_with_an_overflowing_sum_is_an_error() {
        let left = CodeNode::leaf(1, u64::MAX);
        let right = CodeNode::leaf(2, 1);

        let result = CodeNode::join(left, right);

        assert!(matches!(
            result,
            Err(FreqOrderError::FrequencyOverflow(_))
        ));
    }

    #[test]
    fn nodes_order_by_frequency_regardless_of_shape() {
        let light_leaf = CodeNode::leaf(5, 3);
        let heavy_leaf = CodeNode::leaf(6, 7);
        let internal =
            CodeNode::join(CodeNode::leaf(7, 2), CodeNode::leaf(8, 3)).unwrap();

        assert!(light_leaf < heavy_leaf);
        assert!(heavy_leaf > light_leaf);
        assert!(light_leaf < internal);
        assert_eq!(
            internal.cmp(&CodeNode::leaf(9, 5)),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn equal_frequencies_compare_equal_across_shapes() {
        let leaf = CodeNode::leaf(1, 5);
        let other_leaf = CodeNode::leaf(2, 5);
        let internal =
            CodeNode::join(CodeNode::leaf(3, 2), CodeNode::leaf(4, 3)).unwrap();

        assert_eq!(leaf, other_leaf);
        assert_eq!(leaf, internal);
    }

    #[test]
    fn extreme_frequencies_order_correctly() {
        let smallest = CodeNode::leaf(1, 0);
        let largest = CodeNode::leaf(2, u64::MAX);

        assert!(smallest < largest);
        assert!(largest > smallest);
    }
}
