//! Builds the single Cypher statement that loads a dataset.
//!
//! Every literal value is a bound parameter; only generated variable and
//! parameter names appear in the statement text.

use crate::dataset::Dataset;
use crate::{ACTED_IN, MOVIE_LABEL, PERSON_LABEL};

/// A parameter value bound into the seed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedParam {
    Text(String),
    Integer(i64),
}

/// Cypher text plus its bound parameters.
///
/// The statement returns one row with a `movies_created` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStatement {
    pub cypher: String,
    pub params: Vec<(String, SeedParam)>,
}

/// Column holding the created-movie count.
pub const MOVIES_CREATED: &str = "movies_created";

impl SeedStatement {
    /// Generate the statement for a dataset.
    ///
    /// People are MERGEd, movies and relationships CREATEd. The dataset is
    /// expected to have passed [`Dataset::validate`]; credits naming an
    /// undeclared person are skipped.
    pub fn build(dataset: &Dataset) -> Self {
        let mut cypher = String::new();
        let mut params = Vec::new();

        for (i, person) in dataset.people.iter().enumerate() {
            let key = format!("person{i}");
            cypher.push_str(&format!("MERGE (p{i}:{PERSON_LABEL} {{name: ${key}}})\n"));
            params.push((key, SeedParam::Text(person.name.clone())));
        }

        for (m, movie) in dataset.movies.iter().enumerate() {
            let title = format!("movie{m}_title");
            let released = format!("movie{m}_released");
            cypher.push_str(&format!(
                "CREATE (m{m}:{MOVIE_LABEL} {{title: ${title}, released: ${released}"
            ));
            params.push((title, SeedParam::Text(movie.title.clone())));
            params.push((released, SeedParam::Integer(movie.released)));

            if let Some(tagline) = &movie.tagline {
                let key = format!("movie{m}_tagline");
                cypher.push_str(&format!(", tagline: ${key}"));
                params.push((key, SeedParam::Text(tagline.clone())));
            }
            cypher.push_str("})\n");

            for (c, credit) in movie.cast.iter().enumerate() {
                let Some(p) = dataset.people.iter().position(|p| p.name == credit.person) else {
                    continue;
                };
                match &credit.role {
                    Some(role) => {
                        let key = format!("movie{m}_role{c}");
                        cypher.push_str(&format!(
                            "CREATE (p{p})-[:{ACTED_IN} {{role: ${key}}}]->(m{m})\n"
                        ));
                        params.push((key, SeedParam::Text(role.clone())));
                    }
                    None => {
                        cypher.push_str(&format!("CREATE (p{p})-[:{ACTED_IN}]->(m{m})\n"));
                    }
                }
            }
        }

        if dataset.movies.is_empty() {
            cypher.push_str(&format!("RETURN 0 AS {MOVIES_CREATED}"));
        } else {
            let counts: Vec<String> = (0..dataset.movies.len())
                .map(|m| format!("count(m{m})"))
                .collect();
            cypher.push_str(&format!("RETURN {} AS {MOVIES_CREATED}", counts.join(" + ")));
        }

        Self { cypher, params }
    }

    /// Look up a bound parameter by name.
    pub fn param(&self, key: &str) -> Option<&SeedParam> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Credit, Movie, Person};

    #[test]
    fn people_are_merged_movies_created() {
        let stmt = SeedStatement::build(&Dataset::sample());

        assert_eq!(stmt.cypher.matches("MERGE (p").count(), 4);
        assert_eq!(stmt.cypher.matches(":Movie {").count(), 10);
        assert_eq!(stmt.cypher.matches(":ACTED_IN").count(), 12);
        assert!(!stmt.cypher.contains("MERGE (m"));
        assert!(stmt
            .cypher
            .ends_with("RETURN count(m0) + count(m1) + count(m2) + count(m3) + count(m4) + count(m5) + count(m6) + count(m7) + count(m8) + count(m9) AS movies_created"));
    }

    #[test]
    fn values_are_bound_not_inlined() {
        let stmt = SeedStatement::build(&Dataset::sample());

        assert!(!stmt.cypher.contains("Tom Hanks"));
        assert!(!stmt.cypher.contains("Rainey"));
        assert!(!stmt.cypher.contains('\''));
        assert_eq!(
            stmt.param("movie7_title"),
            Some(&SeedParam::Text("Ma Rainey's Black Bottom".to_string()))
        );
        assert_eq!(stmt.param("movie0_released"), Some(&SeedParam::Integer(1994)));
        assert_eq!(
            stmt.param("person3"),
            Some(&SeedParam::Text("Denzel Washington".to_string()))
        );
    }

    #[test]
    fn role_is_only_set_when_present() {
        let stmt = SeedStatement::build(&Dataset::sample());

        assert!(stmt
            .cypher
            .contains("CREATE (p0)-[:ACTED_IN {role: $movie0_role0}]->(m0)"));
        assert!(stmt.cypher.contains("CREATE (p0)-[:ACTED_IN]->(m5)\n"));
        assert!(stmt.param("movie5_role0").is_none());
    }

    #[test]
    fn missing_tagline_is_omitted() {
        let data = Dataset {
            people: vec![Person {
                name: "Viola Davis".to_string(),
            }],
            movies: vec![Movie {
                title: "Widows".to_string(),
                released: 2018,
                tagline: None,
                cast: vec![Credit {
                    person: "Viola Davis".to_string(),
                    role: None,
                }],
            }],
        };
        let stmt = SeedStatement::build(&data);

        assert!(stmt
            .cypher
            .contains("CREATE (m0:Movie {title: $movie0_title, released: $movie0_released})"));
        assert!(!stmt.cypher.contains("tagline"));
        assert!(stmt.cypher.ends_with("RETURN count(m0) AS movies_created"));
    }

    #[test]
    fn empty_dataset_returns_zero() {
        let stmt = SeedStatement::build(&Dataset::default());
        assert_eq!(stmt.cypher, "RETURN 0 AS movies_created");
        assert!(stmt.params.is_empty());
    }
}
