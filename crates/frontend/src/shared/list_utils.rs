//! Client-side search and sorting for list pages
use std::cmp::Ordering;

/// Types whose rows can be matched against a search query
pub trait Searchable {
    /// Case-insensitive match of the query against the searchable fields
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive ordering used for every name column
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keeps items matching the query; an empty query keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Lowercased substring test shared by the `Searchable` impls
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            compare_names(self.0, other.0)
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![Row("Bebidas"), Row("Lácteos"), Row("bebés")];
        assert_eq!(filter_list(rows.clone(), "BEB"), vec![Row("Bebidas"), Row("bebés")]);
        assert_eq!(filter_list(rows.clone(), "  ").len(), 3);
    }

    #[test]
    fn test_sort_both_directions() {
        let mut rows = vec![Row("b"), Row("C"), Row("a")];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows, vec![Row("a"), Row("b"), Row("C")]);
        sort_list(&mut rows, "name", false);
        assert_eq!(rows, vec![Row("C"), Row("b"), Row("a")]);
    }
}
