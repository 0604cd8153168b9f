//! Translation seam.
//!
//! Message keys are the English strings themselves; a translator maps a
//! key to the localized text or returns it unchanged.

use std::borrow::Cow;
use std::collections::HashMap;

pub trait Translator {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// Returns every key unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct English;

impl Translator for English {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// Table-backed translator; unknown keys fall through unchanged.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl Translator for Catalog {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.entries.get(key) {
            Some(v) => Cow::Borrowed(v.as_str()),
            None => Cow::Borrowed(key),
        }
    }
}
