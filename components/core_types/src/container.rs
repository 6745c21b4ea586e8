//! Ordered key/value container.
//!
//! The runtime's array is an insertion-ordered map whose keys are either
//! integers or strings. Entries are kept in a vector in insertion order;
//! lookups are linear, which keeps iteration order trivially correct.

use std::fmt;

use crate::value::Value;

/// Key of a container entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    /// Integer key
    Int(i64),
    /// String key (never a canonical decimal integer)
    Str(String),
}

impl ArrayKey {
    /// Build a key from a string, normalizing canonical decimal integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::ArrayKey;
    ///
    /// assert_eq!(ArrayKey::from_str_key("12"), ArrayKey::Int(12));
    /// assert_eq!(ArrayKey::from_str_key("012"), ArrayKey::Str("012".to_string()));
    /// assert_eq!(ArrayKey::from_str_key("one"), ArrayKey::Str("one".to_string()));
    /// ```
    pub fn from_str_key(s: &str) -> Self {
        if is_canonical_int(s) {
            if let Ok(n) = s.parse::<i64>() {
                return ArrayKey::Int(n);
            }
        }
        ArrayKey::Str(s.to_string())
    }
}

fn is_canonical_int(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    // "-0" stays a string key
    !(s.starts_with('-') && digits == "0")
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(n) => write!(f, "{}", n),
            ArrayKey::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(n: i64) -> Self {
        ArrayKey::Int(n)
    }
}

impl From<&str> for ArrayKey {
    fn from(s: &str) -> Self {
        ArrayKey::from_str_key(s)
    }
}

/// Insertion-ordered mapping of unique keys to values.
///
/// Two containers are equal when they hold the same entries in the same order.
#[derive(Clone)]
pub struct Container {
    entries: Vec<(ArrayKey, Value)>,
    /// Next free integer key; `None` once `i64::MAX` has been used.
    next_index: Option<i64>,
}

impl Default for Container {
    fn default() -> Self {
        Container {
            entries: Vec::new(),
            next_index: Some(0),
        }
    }
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Container::default()
    }

    /// Create a list-shaped container keyed `0..n`.
    pub fn from_values(values: Vec<Value>) -> Self {
        let mut container = Container::new();
        for value in values {
            // keys stay far below i64::MAX
            container.push(value);
        }
        container
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a value under the next free integer key.
    ///
    /// Returns `false`, leaving the container unchanged, when the next
    /// element is already occupied (an entry under `i64::MAX` exists).
    pub fn push(&mut self, value: Value) -> bool {
        match self.next_index {
            Some(n) => {
                self.insert(ArrayKey::Int(n), value);
                true
            }
            None => false,
        }
    }

    /// Insert or overwrite the value stored under `key`.
    ///
    /// Overwriting keeps the entry at its original position.
    pub fn insert(&mut self, key: ArrayKey, value: Value) {
        if let (ArrayKey::Int(n), Some(next)) = (&key, self.next_index) {
            if *n >= next {
                self.next_index = n.checked_add(1);
            }
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &ArrayKey) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArrayKey, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl FromIterator<(ArrayKey, Value)> for Container {
    fn from_iter<I: IntoIterator<Item = (ArrayKey, Value)>>(iter: I) -> Self {
        let mut container = Container::new();
        for (key, value) in iter {
            container.insert(key, value);
        }
        container
    }
}
