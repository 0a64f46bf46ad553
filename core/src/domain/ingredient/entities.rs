use std::fmt;

use serde::Serialize;

/// A trimmed, lowercase, non-empty ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Ingredient(String);

impl Ingredient {
    /// Normalizes raw user input, returning `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ingredient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, duplicate-free list of ingredients in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientSet {
    items: Vec<Ingredient>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `raw` after normalization. Returns `false` if it was blank or already present.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(ingredient) = Ingredient::parse(raw) else {
            return false;
        };
        if self.items.contains(&ingredient) {
            return false;
        }
        self.items.push(ingredient);
        true
    }

    /// Removes the normalized match of `ingredient`. Returns `false` if it was absent.
    pub fn remove(&mut self, ingredient: &str) -> bool {
        let Some(target) = Ingredient::parse(ingredient) else {
            return false;
        };
        let before = self.items.len();
        self.items.retain(|item| item != &target);
        self.items.len() != before
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        Ingredient::parse(ingredient).is_some_and(|target| self.items.contains(&target))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Plain copy of the current ingredients, read once at the start of a run.
    pub fn snapshot(&self) -> Vec<String> {
        self.items.iter().map(|i| i.as_str().to_string()).collect()
    }
}

impl<'a> FromIterator<&'a str> for IngredientSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = IngredientSet::new();
        for raw in iter {
            set.add(raw);
        }
        set
    }
}
