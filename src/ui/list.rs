//! List input: plain sequences or key/value pairs.

use std::collections::{BTreeMap, HashMap};

/// Items for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItems {
    /// Plain values, rendered one per entry.
    Sequence(Vec<String>),
    /// Key/value pairs, rendered in two columns.
    Assoc(Vec<(String, String)>),
}

impl ListItems {
    /// Classify keyed input.
    ///
    /// The pairs are associative when at least one key is not a number;
    /// otherwise the keys are positional and only the values are kept.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if pairs.iter().any(|(k, _)| !is_numeric(k)) {
            Self::Assoc(pairs)
        } else {
            Self::Sequence(pairs.into_iter().map(|(_, v)| v).collect())
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Assoc(pairs) => pairs.len(),
        }
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the items are key/value pairs.
    pub fn is_assoc(&self) -> bool {
        matches!(self, Self::Assoc(_))
    }
}

fn is_numeric(key: &str) -> bool {
    key.trim().parse::<f64>().is_ok()
}

impl<S: Into<String>> From<Vec<S>> for ListItems {
    fn from(items: Vec<S>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ListItems {
    fn from(items: [S; N]) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String> + Ord, V: Into<String>> From<BTreeMap<K, V>> for ListItems {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::from_pairs(map)
    }
}

impl<K: Into<String>, V: Into<String>> From<HashMap<K, V>> for ListItems {
    fn from(map: HashMap<K, V>) -> Self {
        let mut pairs: Vec<(String, String)> =
            map.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        pairs.sort();
        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_keys_are_assoc() {
        let items = ListItems::from_pairs([("Name", "Alice"), ("Age", "30")]);
        assert_eq!(
            items,
            ListItems::Assoc(vec![
                ("Name".into(), "Alice".into()),
                ("Age".into(), "30".into())
            ])
        );
    }

    #[test]
    fn numeric_keys_are_sequence() {
        let items = ListItems::from_pairs([("0", "a"), ("1", "b")]);
        assert_eq!(items, ListItems::Sequence(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn one_string_key_makes_assoc() {
        let items = ListItems::from_pairs([("0", "a"), ("x", "b")]);
        assert!(items.is_assoc());
    }

    #[test]
    fn plain_values_are_sequence() {
        let items = ListItems::from(vec!["a", "b", "c"]);
        assert!(!items.is_assoc());
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn maps_are_classified_by_keys() {
        let mut map = BTreeMap::new();
        map.insert("b", "2");
        map.insert("a", "1");
        assert_eq!(
            ListItems::from(map),
            ListItems::Assoc(vec![("a".into(), "1".into()), ("b".into(), "2".into())])
        );
    }

    #[test]
    fn empty_pairs_are_sequence() {
        let items = ListItems::from_pairs(Vec::<(String, String)>::new());
        assert!(items.is_empty());
        assert!(!items.is_assoc());
    }
}
