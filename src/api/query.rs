//! Ordered query-string builder with repeated-key support.
//!
//! The API takes list parameters as repeated keys (`tlds=com&tlds=net`), so a
//! plain map is not enough.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every existing value of `key`.
    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a value, keeping earlier ones.
    pub fn add(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn add_all<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for v in values {
            self.add(key, v);
        }
        self
    }

    /// Sets `key` only when `value` is non-empty.
    pub fn set_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.set(key, value);
        }
        self
    }

    /// Sets `key=true` only when `flag` is set.
    pub fn set_flag(&mut self, key: &str, flag: bool) -> &mut Self {
        if flag {
            self.set(key, true);
        }
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
