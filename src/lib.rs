/*!
freqorder provides the ordering primitives that sit underneath Huffman-style code tree builders:
a frequency-keyed node type, a comparator defining a total order over those nodes, and a
min-first priority queue that surfaces the least frequent nodes first.

The crate deliberately stops at ordering. Frequency counting, assembling the code tree,
assigning canonical code lengths, and bit-level encoding all belong to the builders layered on
top of these primitives.

A note on the comparison itself: comparators over fixed-width integers are commonly written as
`a - b`, which wraps for extreme magnitudes and reports the wrong sign. Every comparison in this
crate uses direct relational operators instead and is correct across the full integer range.
*/

#![warn(missing_debug_implementations, missing_docs)]

mod errors;
pub use errors::{FreqOrderError, FreqOrderResult};

mod node;
pub use node::CodeNode;

pub mod comparator;
pub use comparator::{Comparator, FrequencyComparator};

mod queue;
pub use queue::FrequencyQueue;
