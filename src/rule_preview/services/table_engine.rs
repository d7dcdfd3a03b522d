use crate::rule_preview::domain::{Rule, SortDirection, SortState};
use std::cmp::Ordering;

/// TableEngine orders and filters rule records for the content table.
///
/// Sorting always runs over the full data set; the query is applied
/// afterwards while selecting the rows to display, so narrowing the search
/// never changes the relative order of the remaining rows.
pub struct TableEngine;

impl TableEngine {
    /// Stable sort of the full data set by one column.
    ///
    /// Ties keep insertion order in both directions, which makes the sort
    /// idempotent.
    pub fn sort<'a>(rules: &'a [Rule], state: SortState) -> Vec<&'a Rule> {
        let mut sorted: Vec<&Rule> = rules.iter().collect();
        sorted.sort_by(|a, b| Self::compare(a, b, state));
        sorted
    }

    fn compare(a: &Rule, b: &Rule, state: SortState) -> Ordering {
        let ordering = state.key.field(a).cmp(state.key.field(b));
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Keeps the rules whose name, plugin or error key contains the query,
    /// ignoring case. An empty query keeps everything.
    pub fn filter<'a>(rules: Vec<&'a Rule>, query: &str) -> Vec<&'a Rule> {
        let lowered = query.to_lowercase();
        rules
            .into_iter()
            .filter(|rule| rule.matches_query(&lowered))
            .collect()
    }

    /// Sort then filter, yielding the rules to display in order
    pub fn visible<'a>(rules: &'a [Rule], state: SortState, query: &str) -> Vec<&'a Rule> {
        Self::filter(Self::sort(rules, state), query)
    }
}
