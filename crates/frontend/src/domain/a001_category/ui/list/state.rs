use contracts::domain::a001_category::aggregate::Category;
use std::cmp::Ordering;

use crate::shared::list_utils::{compare_names, contains_ci, filter_list, sort_list, Searchable, Sortable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategorySortField {
    Name,
    Description,
}

impl CategorySortField {
    pub fn as_str(self) -> &'static str {
        match self {
            CategorySortField::Name => "name",
            CategorySortField::Description => "description",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryListState {
    pub sort_field: CategorySortField,
    pub sort_ascending: bool,
}

impl Default for CategoryListState {
    fn default() -> Self {
        Self {
            sort_field: CategorySortField::Name,
            sort_ascending: true,
        }
    }
}

impl CategoryListState {
    /// Same column flips the direction; a new column starts ascending
    pub fn toggle(&mut self, field: CategorySortField) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field;
            self.sort_ascending = true;
        }
    }

    pub fn apply(&self, items: Vec<Category>, filter: &str) -> Vec<Category> {
        let mut rows = filter_list(items, filter);
        sort_list(&mut rows, self.sort_field.as_str(), self.sort_ascending);
        rows
    }

    pub fn indicator(&self, field: CategorySortField) -> &'static str {
        match (self.sort_field == field, self.sort_ascending) {
            (false, _) => "",
            (true, true) => " ▲",
            (true, false) => " ▼",
        }
    }
}

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.description, filter)
    }
}

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => compare_names(&self.description, &other.description),
            _ => compare_names(&self.name, &other.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, description: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn names(rows: &[Category]) -> Vec<&str> {
        rows.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_filter_matches_name_or_description() {
        let items = vec![
            category(1, "Bebidas", "Frías y calientes"),
            category(2, "Almacén", "Secos"),
            category(3, "Lácteos", "Leche fría"),
        ];
        let state = CategoryListState::default();
        assert_eq!(names(&state.apply(items, "FRÍ")), vec!["Bebidas", "Lácteos"]);
    }

    #[test]
    fn test_toggle_sort() {
        let items = vec![category(1, "b", "z"), category(2, "a", "y"), category(3, "c", "x")];
        let mut state = CategoryListState::default();
        assert_eq!(names(&state.apply(items.clone(), "")), vec!["a", "b", "c"]);

        state.toggle(CategorySortField::Name);
        assert_eq!(names(&state.apply(items.clone(), "")), vec!["c", "b", "a"]);
        assert_eq!(state.indicator(CategorySortField::Name), " ▼");

        state.toggle(CategorySortField::Description);
        assert!(state.sort_ascending);
        assert_eq!(names(&state.apply(items, "")), vec!["c", "a", "b"]);
        assert_eq!(state.indicator(CategorySortField::Name), "");
    }
}
