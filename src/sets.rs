use std::collections::HashSet;
use std::hash::Hash;

/// Items present in every input collection.
///
/// With no input collections at all the result is empty.
pub fn intersect<T, I, L>(lists: L) -> Vec<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
    L: IntoIterator<Item = I>,
{
    let mut lists = lists.into_iter();
    let Some(first) = lists.next() else {
        return Vec::new();
    };

    let mut common: HashSet<T> = first.into_iter().collect();
    for list in lists {
        let other: HashSet<T> = list.into_iter().collect();
        common.retain(|item| other.contains(item));
    }

    common.into_iter().collect()
}

/// Items present in at least one input collection, each once.
pub fn union<T, I, L>(lists: L) -> Vec<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
    L: IntoIterator<Item = I>,
{
    lists
        .into_iter()
        .flatten()
        .collect::<HashSet<T>>()
        .into_iter()
        .collect()
}
