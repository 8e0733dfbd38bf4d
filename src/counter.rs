use std::hash::Hash;

use ahash::AHashMap;

use crate::record::CountRecord;

/// Counter of values of type T.
///
/// Values are remembered in the order they were first seen, which is what
/// breaks ties in [`FrequencyCounter::most_common`].
#[derive(Debug, Clone)]
pub struct FrequencyCounter<T: Copy + Eq + Hash> {
    /// Map from value to its slot in `counts`
    index: AHashMap<T, usize>,
    /// Values and counts in first-seen order
    counts: Vec<(T, u32)>,
}

impl<T: Copy + Eq + Hash> FrequencyCounter<T> {
    /// Create a new counter.
    pub fn new() -> Self {
        Self {
            index: AHashMap::new(),
            counts: Vec::new(),
        }
    }

    /// Get the count of a value, zero if it was never seen.
    pub fn get(&self, value: &T) -> u32 {
        self.index.get(value).map_or(0, |&slot| self.counts[slot].1)
    }

    /// Get a mutable reference to the count of a value. Unlike .get(), this will insert
    /// into the underlying table if the value is not present.
    pub fn entry(&mut self, value: &T) -> &mut u32 {
        let counts = &mut self.counts;
        let slot = *self.index.entry(*value).or_insert_with(|| {
            counts.push((*value, 0));
            counts.len() - 1
        });
        &mut self.counts[slot].1
    }

    /// Iterate over all values and their counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &u32)> {
        self.counts.iter().map(|(value, count)| (value, count))
    }

    /// The number of distinct values in the counter.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&(_, count)| count as u64).sum()
    }

    /// Add the counts of `other` into this counter. Counts saturate at `u32::MAX`.
    pub fn merge(&mut self, other: &Self) {
        for (value, count) in other.iter() {
            let slot = self.entry(value);
            *slot = slot.saturating_add(*count);
        }
    }

    /// Count values from a stream, consuming it. Counts saturate at `u32::MAX`.
    pub fn update_from<I: IntoIterator<Item = T>>(&mut self, stream: I) {
        for x in stream {
            let slot = self.entry(&x);
            *slot = slot.saturating_add(1);
        }
    }

    /// The `k` most frequent values, highest count first. Equal counts keep
    /// first-seen order.
    pub fn most_common(&self, k: usize) -> Vec<CountRecord<T>> {
        let mut records: Vec<_> = self
            .counts
            .iter()
            .map(|&(value, count)| CountRecord { value, count })
            .collect();

        // sort_by is stable
        records.sort_by(|a, b| b.count.cmp(&a.count));
        records.truncate(k);
        records
    }
}

impl<T: Copy + Eq + Hash> Default for FrequencyCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> FromIterator<T> for FrequencyCounter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.update_from(iter);
        counter
    }
}
