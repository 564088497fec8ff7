//! Schema summary: the distinct node labels and relationship types present.

use serde::{Deserialize, Serialize};

use crate::{ACTED_IN, MOVIE_LABEL, PERSON_LABEL};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaSummary {
    pub labels: Vec<String>,
    pub relationship_types: Vec<String>,
}

impl SchemaSummary {
    /// Build a summary with both collections sorted and deduplicated.
    pub fn new(mut labels: Vec<String>, mut relationship_types: Vec<String>) -> Self {
        labels.sort();
        labels.dedup();
        relationship_types.sort();
        relationship_types.dedup();
        Self {
            labels,
            relationship_types,
        }
    }

    /// The summary a freshly seeded movie graph should produce.
    pub fn expected_for_movies() -> Self {
        Self::new(
            vec![PERSON_LABEL.to_string(), MOVIE_LABEL.to_string()],
            vec![ACTED_IN.to_string()],
        )
    }

    /// Order-insensitive comparison.
    pub fn same_as(&self, other: &SchemaSummary) -> bool {
        let a = Self::new(self.labels.clone(), self.relationship_types.clone());
        let b = Self::new(other.labels.clone(), other.relationship_types.clone());
        a == b
    }

    pub fn labels_line(&self) -> String {
        self.labels.join(", ")
    }

    pub fn relationship_types_line(&self) -> String {
        self.relationship_types.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_ignores_order() {
        let found = SchemaSummary {
            labels: vec!["Person".to_string(), "Movie".to_string()],
            relationship_types: vec!["ACTED_IN".to_string()],
        };
        assert!(found.same_as(&SchemaSummary::expected_for_movies()));
    }

    #[test]
    fn extra_label_is_a_difference() {
        let found = SchemaSummary::new(
            vec!["Movie".into(), "Person".into(), "Studio".into()],
            vec!["ACTED_IN".into()],
        );
        assert!(!found.same_as(&SchemaSummary::expected_for_movies()));
    }

    #[test]
    fn lines_are_comma_joined() {
        let summary = SchemaSummary::expected_for_movies();
        assert_eq!(summary.labels_line(), "Movie, Person");
        assert_eq!(summary.relationship_types_line(), "ACTED_IN");
    }
}
