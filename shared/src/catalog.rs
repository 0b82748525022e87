//! 目录筛选
//!
//! 纯内存筛选，不分页、不排序，结果保持源顺序。

use crate::Activity;

/// 分类哨兵值的显示文本
pub const ALL_CATEGORIES: &str = "All";

/// Selectable categories, in display order.
pub const CATEGORIES: [&str; 6] = [
    ALL_CATEGORIES,
    "Visite guidée",
    "Excursion bateau",
    "Safari",
    "Plongée",
    "Culturel",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub fn parse(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            Category::All
        } else {
            Category::Named(s.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL_CATEGORIES,
            Category::Named(name) => name,
        }
    }

    pub fn matches(&self, kind: &str) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => name == kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    pub query: String,
    pub category: Category,
}

impl CatalogFilter {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 查询词对标题或地点做大小写不敏感的子串匹配，且分类相符
    pub fn matches(&self, activity: &Activity) -> bool {
        let needle = self.query.to_lowercase();
        let matches_search = activity.title.to_lowercase().contains(&needle)
            || activity.location.to_lowercase().contains(&needle);
        matches_search && self.category.matches(&activity.kind)
    }
}

pub fn filter_activities(activities: &[Activity], filter: &CatalogFilter) -> Vec<Activity> {
    activities
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::fallback_activities;

    fn ids(list: &[Activity]) -> Vec<&str> {
        list.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn empty_query_and_all_returns_everything_in_order() {
        let all = fallback_activities();
        let result = filter_activities(&all, &CatalogFilter::default());
        assert_eq!(result, all);
    }

    #[test]
    fn search_dakar_matches_title_or_location_case_insensitively() {
        let all = fallback_activities();
        let result = filter_activities(&all, &CatalogFilter::new("dAkAr", Category::All));
        assert_eq!(ids(&result), vec!["1", "4"]);
        assert!(result.iter().all(|a| {
            a.location.to_lowercase().contains("dakar") || a.title.to_lowercase().contains("dakar")
        }));
    }

    #[test]
    fn query_matches_title_too() {
        let all = fallback_activities();
        let result = filter_activities(&all, &CatalogFilter::new("SAFARI", Category::All));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn category_and_query_are_combined() {
        let all = fallback_activities();
        let boats = filter_activities(
            &all,
            &CatalogFilter::new("", Category::parse("Excursion bateau")),
        );
        assert_eq!(ids(&boats), vec!["1", "3"]);

        let boats_in_dakar = filter_activities(
            &all,
            &CatalogFilter::new("dakar", Category::parse("Excursion bateau")),
        );
        assert_eq!(ids(&boats_in_dakar), vec!["1"]);

        let none = filter_activities(&all, &CatalogFilter::new("kenya", Category::parse("Culturel")));
        assert!(none.is_empty());
    }

    #[test]
    fn result_is_exactly_the_matching_subset() {
        let all = fallback_activities();
        let queries = ["", "a", "sénégal", "KENYA", "île", "zzz"];
        for query in queries {
            for label in CATEGORIES {
                let filter = CatalogFilter::new(query, Category::parse(label));
                let result = filter_activities(&all, &filter);
                let expected: Vec<Activity> = all
                    .iter()
                    .filter(|a| {
                        let q = query.to_lowercase();
                        (a.title.to_lowercase().contains(&q) || a.location.to_lowercase().contains(&q))
                            && (label == ALL_CATEGORIES || a.kind == label)
                    })
                    .cloned()
                    .collect();
                assert_eq!(result, expected, "query={query:?} category={label:?}");
            }
        }
    }

    #[test]
    fn reset_restores_defaults() {
        let mut filter = CatalogFilter::new("dakar", Category::parse("Safari"));
        filter.reset();
        assert_eq!(filter, CatalogFilter::default());
        assert_eq!(filter.category.label(), "All");
    }
}
