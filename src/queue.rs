/*!
This module contains a min-first priority queue over [`CodeNode`]'s. Code builders seed the queue
with one leaf per symbol and repeatedly extract the two least frequent nodes, so the queue
surfaces nodes in ascending frequency order.
*/

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::CodeNode;

/**
A min-first priority queue of [`CodeNode`]'s keyed on node frequency.

[`std::collections::BinaryHeap`] is a max-heap, so nodes are stored under [`Reverse`] to flip the
node ordering. The node ordering itself lives on [`CodeNode`]; see
[`crate::comparator::FrequencyComparator`] for the standalone form of the same comparison.

Ties are broken arbitrarily: when several nodes share the minimal frequency, any one of them may
be returned first.
*/
#[derive(Clone, Debug, Default)]
pub struct FrequencyQueue {
    /// The backing heap. `Reverse` turns the max-heap into the min-heap the queue exposes.
    heap: BinaryHeap<Reverse<CodeNode>>,
}

impl FrequencyQueue {
    /// Construct a new, empty [`FrequencyQueue`].
    pub fn new() -> Self {
        FrequencyQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Add a node to the queue.
    pub fn push(&mut self, node: CodeNode) {
        self.heap.push(Reverse(node));
    }

    /// Remove and return a node with the lowest frequency. Returns [`None`] if the queue is
    /// empty.
    pub fn pop(&mut self) -> Option<CodeNode> {
        self.heap.pop().map(|Reverse(node)| node)
    }

    /// Return a reference to a node with the lowest frequency without removing it. Returns
    /// [`None`] if the queue is empty.
    pub fn peek(&self) -> Option<&CodeNode> {
        self.heap.peek().map(|Reverse(node)| node)
    }

    /// Return the number of nodes in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Return true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl FromIterator<CodeNode> for FrequencyQueue {
    fn from_iter<I: IntoIterator<Item = CodeNode>>(nodes: I) -> Self {
        let heap: BinaryHeap<Reverse<CodeNode>> =
            nodes.into_iter().map(Reverse).collect();
        log::debug!("Built a frequency queue holding {} nodes", heap.len());

        FrequencyQueue { heap }
    }
}
