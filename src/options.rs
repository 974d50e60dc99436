//! Option list
//!
//! Order is significant: an option's position decides its slice on the
//! wheel. Duplicate labels are allowed and each gets its own slice.

use serde::{Deserialize, Serialize};

/// Options a fresh session starts with
pub const DEFAULT_OPTIONS: [&str; 6] = ["Pizza", "Burger", "Tacos", "Salad", "Sushi", "Pasta"];

/// Ordered list of wheel labels
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList {
    labels: Vec<String>,
}

impl OptionList {
    /// Build a list from labels, trimming each and dropping blank ones
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = labels
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        Self { labels }
    }

    /// Parse the one-option-per-line text format
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Render back to one option per line
    pub fn to_text(&self) -> String {
        self.labels.join("\n")
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Index of the first slice whose label matches exactly (case-sensitive)
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

/// The starter list used when nothing else is configured
pub fn default_options() -> OptionList {
    OptionList::new(DEFAULT_OPTIONS)
}

impl<S: AsRef<str>> FromIterator<S> for OptionList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_trims_and_drops_blanks() {
        let list = OptionList::from_text("  Pizza \n\n Burger\n   \nTacos  ");
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), Some("Pizza"));
        assert_eq!(list.get(1), Some("Burger"));
        assert_eq!(list.get(2), Some("Tacos"));
        assert_eq!(list.to_text(), "Pizza\nBurger\nTacos");
    }

    #[test]
    fn test_duplicates_are_distinct_slices() {
        let list = OptionList::new(["A", "B", "A"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.position("A"), Some(0));
        assert_eq!(list.position("a"), None);
    }

    #[test]
    fn test_default_options() {
        let list = default_options();
        assert_eq!(list.len(), 6);
        assert_eq!(list.get(5), Some("Pasta"));
    }

    #[test]
    fn test_empty_text() {
        assert!(OptionList::from_text("\n  \n").is_empty());
    }
}
