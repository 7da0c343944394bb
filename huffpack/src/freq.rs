//! Symbol frequency analysis.
//!
//! The first stage of the pipeline: a single linear pass over the input
//! producing a per-symbol occurrence count. The table drives tree
//! construction, so its contents (not its iteration order) are what matter;
//! [`crate::tree`] sorts symbols before seeding its priority queue.

use std::collections::HashMap;

/// Occurrence count per symbol, keyed by byte value.
///
/// The empty input yields the empty table.
pub type FrequencyTable = HashMap<u8, u64>;

/// Count symbol occurrences in `input`.
///
/// O(n) time, O(distinct symbols) space.
///
/// # Example
///
/// ```
/// use huffpack::freq::count_frequencies;
///
/// let table = count_frequencies(b"aaab");
/// assert_eq!(table[&b'a'], 3);
/// assert_eq!(table[&b'b'], 1);
/// assert_eq!(table.len(), 2);
/// ```
pub fn count_frequencies(input: &[u8]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for &byte in input {
        *table.entry(byte).or_insert(0) += 1;
    }
    table
}
