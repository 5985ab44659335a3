//! Comparator engine.
//!
//! Pure ordering of field values by declared [`SortType`], plus a stable,
//! non-mutating row permutation with the direction applied as a post-step.
//!
//! String ordering uses a two-level collation over a Latin and a Russian
//! Cyrillic alphabet profile: the primary level compares letters
//! case-insensitively by alphabet rank (non-letters order before letters by
//! code point, Latin before Cyrillic), and only when the whole primary
//! sequence ties does the secondary level apply, with uppercase sorting
//! before lowercase.

use std::cmp::Ordering;

use serde_json::Value;

use crate::column::{Row, SortOrder, SortType};

/// Compare two field values under the given sort type.
pub fn compare_values(a: &Value, b: &Value, sort_type: SortType) -> Ordering {
    match sort_type {
        SortType::Number => compare_numbers(a, b),
        SortType::String => collate(&text_of(a), &text_of(b)),
    }
}

/// Return a new, stably sorted permutation of `rows` by `field`.
///
/// The input slice is not mutated; rows absent the field participate with
/// `Value::Null`.
pub fn sort_rows(rows: &[Row], field: &str, sort_type: SortType, order: SortOrder) -> Vec<Row> {
    let mut result: Vec<Row> = rows.to_vec();
    result.sort_by(|a, b| {
        let left = a.get(field).unwrap_or(&Value::Null);
        let right = b.get(field).unwrap_or(&Value::Null);
        let ordering = compare_values(left, right, sort_type);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    result
}

/// Textual form of a value for string collation and plain cell rendering.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Numeric ordering; missing or non-numeric values order before any number
/// and compare equal among themselves, so stability preserves input order.
fn compare_numbers(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Locale-aware string collation with uppercase-first case ordering.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight));
    if primary != Ordering::Equal {
        return primary;
    }

    let case = a.chars().map(case_weight).cmp(b.chars().map(case_weight));
    if case != Ordering::Equal {
        return case;
    }

    // Full tie at both levels; fall back to code points.
    a.cmp(b)
}

/// Primary weight: (script class, rank). Non-letters sort first by code
/// point, then Latin letters by alphabet position, then Cyrillic.
fn primary_weight(c: char) -> (u8, u32) {
    if let Some(rank) = latin_rank(c) {
        (1, rank)
    } else if let Some(rank) = cyrillic_rank(c) {
        (2, rank)
    } else {
        (0, c as u32)
    }
}

fn case_weight(c: char) -> u8 {
    // caseFirst: upper
    if c.is_uppercase() { 0 } else { 1 }
}

fn latin_rank(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        _ => None,
    }
}

/// Russian alphabet rank, with `ё` collating directly after `е`.
fn cyrillic_rank(c: char) -> Option<u32> {
    let lower = c.to_lowercase().next()?;
    let rank = match lower {
        'а'..='е' => lower as u32 - 'а' as u32,
        'ё' => 6,
        'ж'..='я' => lower as u32 - 'а' as u32 + 1,
        _ => return None,
    };
    Some(rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collate_orders_alphabetically_ignoring_case_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Banana", "cherry"), Ordering::Less);
    }

    #[test]
    fn collate_uppercase_before_lowercase_on_primary_tie() {
        assert_eq!(collate("Banana", "banana"), Ordering::Less);
        assert_eq!(collate("banana", "Banana"), Ordering::Greater);
    }

    #[test]
    fn collate_primary_difference_beats_case() {
        // Secondary (case) only applies when the whole primary level ties.
        assert_eq!(collate("ab", "Ac"), Ordering::Less);
    }

    #[test]
    fn collate_cyrillic_profile() {
        assert_eq!(collate("арбуз", "Банан"), Ordering::Less);
        assert_eq!(collate("ежевика", "ёлка"), Ordering::Less);
        assert_eq!(collate("ёлка", "жар"), Ordering::Less);
    }

    #[test]
    fn latin_sorts_before_cyrillic() {
        assert_eq!(collate("zeta", "арбуз"), Ordering::Less);
    }

    #[test]
    fn numbers_with_missing_values() {
        let ten = Value::from(10);
        let thirty = Value::from(30);
        assert_eq!(compare_numbers(&ten, &thirty), Ordering::Less);
        assert_eq!(compare_numbers(&Value::Null, &ten), Ordering::Less);
        assert_eq!(
            compare_numbers(&Value::from("n/a"), &Value::Null),
            Ordering::Equal
        );
    }
}
