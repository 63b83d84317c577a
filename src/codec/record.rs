// Tue Jan 13 2026 - Alex

use crate::catalog::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

type RecordMap = IndexMap<Arc<str>, Value, ahash::RandomState>;

/// Field name to value mapping. Equality ignores entry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: RecordMap,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: RecordMap::with_capacity_and_hasher(capacity, ahash::RandomState::new()),
        }
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(Arc::from(name), value.into())
    }

    pub(crate) fn insert_shared(&mut self, name: &Arc<str>, value: Value) {
        self.values.insert(Arc::clone(name), value);
    }

    /// Chaining form of [`insert`](Self::insert).
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_ref(), *value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(|name| name.as_ref())
    }
}

impl<'a, V: Into<Value>> FromIterator<(&'a str, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
