//! Order-preserving counting used by the "most" queries.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of each key, listing keys in order of first appearance.
pub fn tally<K: Eq + Hash + Copy>(keys: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match positions.get(&key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

/// Returns the key with the highest count. On a tie the earliest entry wins.
pub fn first_max<K: Copy>(counts: &[(K, usize)]) -> Option<K> {
    counts
        .iter()
        .fold(None, |best: Option<(K, usize)>, &(key, count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((key, count)),
        })
        .map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_keeps_first_appearance_order() {
        let counts = tally(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_first_max_breaks_ties_by_position() {
        assert_eq!(first_max(&[("a", 2), ("b", 2)]), Some("a"));
        assert_eq!(first_max(&[("a", 1), ("b", 2), ("c", 2)]), Some("b"));
        assert_eq!(first_max::<&str>(&[]), None);
    }
}
