//! Filter + sort projection.
//!
//! # Responsibility
//! - Filter tasks by case-insensitive title substring.
//! - Order the survivors by the selected criterion.
//!
//! # Invariants
//! - All sorts are stable: equal keys keep filter-stage order.
//! - An empty search term matches every task.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::fmt::{Display, Formatter};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Ordering applied to the filtered tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// High before medium before low.
    #[default]
    Priority,
    /// Ascending title, locale-aware.
    Alphabetical,
    /// Completed tasks before open ones.
    Completion,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Priority,
        SortCriterion::Alphabetical,
        SortCriterion::Completion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Alphabetical => "alphabetical",
            Self::Completion => "completion",
        }
    }
}

impl Display for SortCriterion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projection inputs owned by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub sort: SortCriterion,
}

impl ViewQuery {
    pub fn new(search: impl Into<String>, sort: SortCriterion) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }

    pub fn project<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        project(tasks, &self.search, self.sort)
    }
}

/// Returns the tasks to render, filtered by `search_term` and ordered by
/// `sort`.
pub fn project<'a>(tasks: &'a [Task], search_term: &str, sort: SortCriterion) -> Vec<&'a Task> {
    let needle = search_term.to_lowercase();
    let mut visible = tasks
        .iter()
        .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
        .collect::<Vec<_>>();

    match sort {
        SortCriterion::Priority => visible.sort_by_key(|task| Reverse(task.priority.rank())),
        SortCriterion::Alphabetical => {
            visible.sort_by(|left, right| locale_compare(&left.title, &right.title))
        }
        SortCriterion::Completion => visible.sort_by_key(|task| Reverse(task.completed)),
    }

    visible
}

/// Collation-style string comparison approximating the root locale.
///
/// Levels, in order: base characters (symbols before digits before letters,
/// case and accents ignored), then accents, then case (lowercase first),
/// then code points.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    primary_key(left)
        .cmp(&primary_key(right))
        .then_with(|| accent_key(left).cmp(&accent_key(right)))
        .then_with(|| case_key(left).cmp(&case_key(right)))
        .then_with(|| left.cmp(right))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharGroup {
    Symbol,
    Digit,
    Letter,
}

impl CharGroup {
    fn of(ch: char) -> Self {
        if ch.is_alphabetic() {
            Self::Letter
        } else if ch.is_numeric() {
            Self::Digit
        } else {
            Self::Symbol
        }
    }
}

fn base_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfd().filter(|ch| !is_combining_mark(*ch))
}

fn primary_key(value: &str) -> Vec<(CharGroup, char)> {
    base_chars(value)
        .flat_map(char::to_lowercase)
        .map(|ch| (CharGroup::of(ch), ch))
        .collect()
}

// Combining marks stay in, so unaccented sorts before accented.
fn accent_key(value: &str) -> Vec<char> {
    value.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(value: &str) -> Vec<bool> {
    base_chars(value).map(char::is_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::{locale_compare, primary_key, CharGroup};
    use std::cmp::Ordering;

    #[test]
    fn locale_compare_ignores_case_at_primary_level() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn locale_compare_puts_lowercase_first_on_case_ties() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Task", "task"), Ordering::Greater);
    }

    #[test]
    fn locale_compare_orders_accented_letters_with_base_letter() {
        assert_eq!(locale_compare("éclair", "fig"), Ordering::Less);
        assert_eq!(locale_compare("Čaj", "dog"), Ordering::Less);
        assert_eq!(locale_compare("śliwka", "tea"), Ordering::Less);
        assert_eq!(locale_compare("őz", "pear"), Ordering::Less);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_puts_symbols_and_digits_before_letters() {
        assert_eq!(locale_compare("{x}", "apple"), Ordering::Less);
        assert_eq!(locale_compare("~tilde", "a"), Ordering::Less);
        assert_eq!(locale_compare("9 lives", "apple"), Ordering::Less);
        assert_eq!(locale_compare("|pipe", "1st"), Ordering::Less);
    }

    #[test]
    fn primary_key_drops_marks_and_case() {
        assert_eq!(
            primary_key("Čá-1"),
            vec![
                (CharGroup::Letter, 'c'),
                (CharGroup::Letter, 'a'),
                (CharGroup::Symbol, '-'),
                (CharGroup::Digit, '1'),
            ]
        );
    }
}
