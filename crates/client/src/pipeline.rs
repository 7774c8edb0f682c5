//! List filter/paginate pipeline.
//!
//! Pure computation over the recipe snapshot: a conjunction of filter
//! predicates applied in input order, then a fixed-size page slice. No
//! hidden state; re-running on the same inputs yields identical output.
//!
//! Page numbers are 1-based. The pipeline does not validate page numbers
//! against the filtered total - callers clamp; an out-of-range page simply
//! yields an empty slice.

use recipe_box_core::{CategoryId, Difficulty, Recipe, UserId};

/// Page size of the recipe list view.
pub const LIST_PAGE_SIZE: usize = 9;

/// Size of the "recent recipes" home preview.
pub const RECENT_COUNT: usize = 6;

/// Default inclusive duration range: no practical constraint.
pub const DEFAULT_DURATION_RANGE: (u32, u32) = (0, 300);

/// A transient recipe query. Empty/default fields mean "no constraint".
///
/// Lifecycle is per browsing session; not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFilters {
    /// Free-text, matched case-insensitively against name or description.
    pub search: String,
    /// Restrict to one category.
    pub category: Option<CategoryId>,
    /// Restrict to one difficulty level.
    pub difficulty: Option<Difficulty>,
    /// Inclusive `(min, max)` duration bounds in minutes.
    pub duration: (u32, u32),
    /// Restrict to one owner.
    pub owner: Option<UserId>,
}

impl Default for RecipeFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            difficulty: None,
            duration: DEFAULT_DURATION_RANGE,
            owner: None,
        }
    }
}

impl RecipeFilters {
    /// Whether `recipe` passes every active constraint.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !recipe.name.to_lowercase().contains(&needle)
                && !recipe.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(category) = self.category
            && recipe.category_id != category
        {
            return false;
        }

        if let Some(difficulty) = self.difficulty
            && recipe.difficulty != difficulty
        {
            return false;
        }

        let (min, max) = self.duration;
        if recipe.duration_minutes < min || recipe.duration_minutes > max {
            return false;
        }

        if let Some(owner) = self.owner
            && recipe.owner_id != owner
        {
            return false;
        }

        true
    }
}

/// Lazily filter `recipes`, preserving input order.
pub fn filter<'a>(
    recipes: &'a [Recipe],
    filters: &'a RecipeFilters,
) -> impl Iterator<Item = &'a Recipe> {
    recipes.iter().filter(move |recipe| filters.matches(recipe))
}

/// The 1-based page `page` of the filtered sequence.
///
/// The slice covers filtered indices `[(page-1)*page_size, page*page_size)`.
/// An empty result is the "no results" state, not an error.
#[must_use]
pub fn page<'a>(
    recipes: &'a [Recipe],
    filters: &'a RecipeFilters,
    page: usize,
    page_size: usize,
) -> Vec<&'a Recipe> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    filter(recipes, filters).skip(start).take(page_size).collect()
}

/// Number of pages needed for `filtered_count` items.
///
/// `page_size` must be nonzero; both view sizes in this module are.
#[must_use]
pub const fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page_size must be nonzero");
    filtered_count.div_ceil(page_size)
}

/// The most recent recipes: highest identity value first, truncated to
/// `count`. The data model has no creation timestamp; identity order is the
/// service's stand-in for recency.
#[must_use]
pub fn recent(recipes: &[Recipe], count: usize) -> Vec<Recipe> {
    let mut sorted: Vec<Recipe> = recipes.to_vec();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted.truncate(count);
    sorted
}

/// Current filter value and page of the recipe list view.
///
/// Changing any filter field resets the page to 1.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    filters: RecipeFilters,
    page: usize,
}

impl ListView {
    /// A view of page 1 with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: RecipeFilters::default(),
            page: 1,
        }
    }

    /// The active filter value.
    #[must_use]
    pub const fn filters(&self) -> &RecipeFilters {
        &self.filters
    }

    /// The current 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Replace the filter value; any change resets the page to 1.
    pub fn set_filters(&mut self, filters: RecipeFilters) {
        if filters != self.filters {
            self.filters = filters;
            self.page = 1;
        }
    }

    /// Move to `page`. Callers are responsible for clamping into range.
    pub const fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// The visible slice of `recipes` for the current filters and page.
    #[must_use]
    pub fn visible<'a>(&'a self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        page(recipes, &self.filters, self.page, LIST_PAGE_SIZE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use recipe_box_core::{Ingredient, RecipeId};

    use super::*;

    fn recipe(id: i32, name: &str, difficulty: Difficulty, duration: u32) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            instructions: vec!["step".to_string()],
            ingredients: vec![Ingredient {
                name: "salt".to_string(),
                count: 1.0,
                unit: "pinch".to_string(),
            }],
            difficulty,
            duration_minutes: duration,
            category_id: CategoryId::new(i32::from(id % 3 == 0) + 1),
            owner_id: UserId::new(if id % 2 == 0 { 1 } else { 2 }),
            owner_name: None,
            image_url: None,
        }
    }

    fn collection(count: i32) -> Vec<Recipe> {
        (1..=count)
            .map(|i| {
                let difficulty = Difficulty::try_from(u8::try_from((i - 1) % 4 + 1).unwrap()).unwrap();
                recipe(i, &format!("Recipe {i}"), difficulty, u32::try_from(i).unwrap() * 10)
            })
            .collect()
    }

    #[test]
    fn test_default_filters_pass_everything() {
        let recipes = collection(10);
        let filters = RecipeFilters::default();
        let filtered: Vec<_> = filter(&recipes, &filters).collect();
        assert_eq!(filtered.len(), recipes.len());
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_description() {
        let mut recipes = collection(3);
        recipes[1].name = "Shakshuka".to_string();
        recipes[2].description = "with SHAKSHUKA on the side".to_string();

        let filters = RecipeFilters {
            search: "shakshuka".to_string(),
            ..RecipeFilters::default()
        };
        let filtered: Vec<_> = filter(&recipes, &filters).collect();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, RecipeId::new(2));
        assert_eq!(filtered[1].id, RecipeId::new(3));
    }

    #[test]
    fn test_duration_bounds_are_inclusive() {
        let recipes = vec![
            recipe(1, "below", Difficulty::Easy, 9),
            recipe(2, "at-min", Difficulty::Easy, 10),
            recipe(3, "inside", Difficulty::Easy, 25),
            recipe(4, "at-max", Difficulty::Easy, 40),
            recipe(5, "above", Difficulty::Easy, 41),
        ];
        let filters = RecipeFilters {
            duration: (10, 40),
            ..RecipeFilters::default()
        };
        let names: Vec<_> = filter(&recipes, &filters).map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["at-min", "inside", "at-max"]);
    }

    #[test]
    fn test_narrowing_yields_subset_and_widening_superset() {
        let recipes = collection(20);

        let wide = RecipeFilters::default();
        let narrow = RecipeFilters {
            difficulty: Some(Difficulty::Medium),
            ..RecipeFilters::default()
        };

        let wide_ids: Vec<_> = filter(&recipes, &wide).map(|r| r.id).collect();
        let narrow_ids: Vec<_> = filter(&recipes, &narrow).map(|r| r.id).collect();

        assert!(narrow_ids.iter().all(|id| wide_ids.contains(id)));
        assert!(narrow_ids.len() < wide_ids.len());
    }

    #[test]
    fn test_pagination_partitions_the_filtered_sequence() {
        let recipes = collection(23);
        let filters = RecipeFilters::default();

        for page_size in 1..=10 {
            let filtered: Vec<_> = filter(&recipes, &filters).map(|r| r.id).collect();
            let pages = total_pages(filtered.len(), page_size);

            let mut reassembled = Vec::new();
            for p in 1..=pages {
                reassembled.extend(page(&recipes, &filters, p, page_size).iter().map(|r| r.id));
            }
            assert_eq!(reassembled, filtered, "page_size {page_size}");
        }
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let recipes = collection(15);
        let filters = RecipeFilters {
            search: "recipe 1".to_string(),
            ..RecipeFilters::default()
        };
        let first: Vec<_> = page(&recipes, &filters, 1, LIST_PAGE_SIZE)
            .iter()
            .map(|r| r.id)
            .collect();
        let second: Vec<_> = page(&recipes, &filters, 1, LIST_PAGE_SIZE)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_difficulty_filter_keeps_original_order() {
        // Scenario: 10 recipes, difficulty = medium, default duration range
        let recipes = collection(10);
        let filters = RecipeFilters {
            difficulty: Some(Difficulty::Medium),
            ..RecipeFilters::default()
        };
        let filtered: Vec<_> = filter(&recipes, &filters).collect();

        assert!(filtered.iter().all(|r| r.difficulty == Difficulty::Medium));
        let ids: Vec<_> = filtered.iter().map(|r| r.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 6, 10]);
    }

    #[test]
    fn test_last_partial_page() {
        // Scenario: 20 recipes, page size 9, page 3 holds indices 18-19
        let recipes = collection(20);
        let filters = RecipeFilters::default();

        let third = page(&recipes, &filters, 3, 9);
        assert_eq!(third.len(), 2);
        assert_eq!(third[0].id, RecipeId::new(19));
        assert_eq!(third[1].id, RecipeId::new(20));
        assert_eq!(total_pages(20, 9), 3);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_an_error() {
        let recipes = collection(5);
        let filters = RecipeFilters::default();
        assert!(page(&recipes, &filters, 4, LIST_PAGE_SIZE).is_empty());
    }

    #[test]
    #[should_panic(expected = "page_size must be nonzero")]
    fn test_total_pages_rejects_zero_page_size() {
        let _ = total_pages(10, 0);
    }

    #[test]
    fn test_filtered_empty_is_no_results() {
        let recipes = collection(5);
        let filters = RecipeFilters {
            search: "no such dish".to_string(),
            ..RecipeFilters::default()
        };
        assert_eq!(filter(&recipes, &filters).count(), 0);
        assert_eq!(total_pages(0, LIST_PAGE_SIZE), 0);
    }

    #[test]
    fn test_recent_sorts_by_descending_id_and_truncates() {
        let mut recipes = collection(10);
        // Input order is not guaranteed sorted
        recipes.swap(0, 9);
        recipes.swap(3, 7);

        let preview = recent(&recipes, RECENT_COUNT);
        let ids: Vec<_> = preview.iter().map(|r| r.id.as_i32()).collect();
        assert_eq!(ids, vec![10, 9, 8, 7, 6, 5]);
    }

    #[test]
    fn test_changing_filters_resets_page() {
        let mut view = ListView::new();
        view.set_page(3);
        assert_eq!(view.page(), 3);

        view.set_filters(RecipeFilters {
            category: Some(CategoryId::new(1)),
            ..RecipeFilters::default()
        });
        assert_eq!(view.page(), 1);

        // Setting an identical filter value keeps the page
        view.set_page(2);
        view.set_filters(view.filters().clone());
        assert_eq!(view.page(), 2);
    }
}
