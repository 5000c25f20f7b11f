use std::ops::Index;

use crate::Category;

/// The root artifact: an ordered sequence of categories.
///
/// Behaves like a plain ordered list: indexable, iterable, and cloneable.
/// Cloning a dialog deep-copies the whole tree, so two clones never observe
/// each other's mutations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dialog {
    categories: Vec<Category>,
}

impl Dialog {
    /// Create an empty dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category, returning the updated dialog.
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// The categories, in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Append a category, taking ownership so the stored copy cannot alias
    /// the caller's state.
    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Replace the whole category list.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Get the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the dialog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over the categories.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }
}

impl Index<usize> for Dialog {
    type Output = Category;

    fn index(&self, index: usize) -> &Self::Output {
        &self.categories[index]
    }
}

impl IntoIterator for Dialog {
    type Item = Category;
    type IntoIter = std::vec::IntoIter<Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dialog {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

impl FromIterator<Category> for Dialog {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexable_and_iterable() {
        let dialog = Dialog::new()
            .with_category(Category::labeled("General"))
            .with_category(Category::labeled("Files"));

        assert_eq!(dialog.len(), 2);
        assert_eq!(dialog[0].label(), Some("General"));
        assert_eq!(dialog[1].label(), Some("Files"));

        let labels: Vec<_> = dialog.iter().filter_map(Category::label).collect();
        assert_eq!(labels, vec!["General", "Files"]);
    }

    #[test]
    fn set_categories_replaces_wholesale() {
        let mut dialog = Dialog::new().with_category(Category::labeled("Old"));
        dialog.set_categories(vec![
            Category::labeled("First"),
            Category::labeled("Second"),
        ]);
        assert_eq!(dialog.len(), 2);
        assert_eq!(dialog[0].label(), Some("First"));
    }

    #[test]
    fn clones_are_independent() {
        let original = Dialog::new().with_category(Category::labeled("General"));
        let mut copy = original.clone();
        copy.add_category(Category::labeled("Extra"));

        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
