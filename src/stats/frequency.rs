use std::collections::BTreeMap;

/// A value and how many times it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency<K> {
    pub value: K,
    pub count: usize,
}

/// Most frequent value, or None when there were no values
pub type Popular<K> = Option<Frequency<K>>;

/// Count occurrences of each value, ordered by value
pub fn counts<K: Ord, I: IntoIterator<Item = K>>(items: I) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value and its count. Ties go to the lowest value.
pub fn most_frequent<K: Ord, I: IntoIterator<Item = K>>(items: I) -> Popular<K> {
    counts(items)
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(value, count)| Frequency { value, count })
}

/// Every value tied for the highest count, ascending
pub fn modes<K: Ord, I: IntoIterator<Item = K>>(items: I) -> Vec<K> {
    let counts = counts(items);
    let Some(&top) = counts.values().max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter(|&(_, count)| count == top)
        .map(|(value, _)| value)
        .collect()
}
