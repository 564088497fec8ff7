//! The movie sample dataset written by the seeder.
//!
//! People are merged by name; movies and ACTED_IN relationships are
//! always created fresh, so a dataset is only loaded into a wiped graph.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ── Entities ──────────────────────────────────────────────────────

/// A person, identified by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
}

/// One ACTED_IN relationship from a person to the enclosing movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credit {
    /// Name of a person declared in the dataset.
    pub person: String,
    pub role: Option<String>,
}

/// A movie and the people who acted in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub released: i64,
    pub tagline: Option<String>,
    pub cast: Vec<Credit>,
}

/// A full set of people and movies loaded in one seeding run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    pub people: Vec<Person>,
    pub movies: Vec<Movie>,
}

impl Dataset {
    /// Number of ACTED_IN relationships the dataset creates.
    pub fn credit_count(&self) -> usize {
        self.movies.iter().map(|m| m.cast.len()).sum()
    }

    /// Check that names are unique and non-empty and that every credit
    /// points at a declared person.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut names = HashSet::with_capacity(self.people.len());
        for person in &self.people {
            if person.name.trim().is_empty() {
                return Err(CoreError::Dataset("person with an empty name".to_string()));
            }
            if !names.insert(person.name.as_str()) {
                return Err(CoreError::Dataset(format!(
                    "person {:?} is declared more than once",
                    person.name
                )));
            }
        }

        for movie in &self.movies {
            for credit in &movie.cast {
                if !names.contains(credit.person.as_str()) {
                    return Err(CoreError::Dataset(format!(
                        "movie {:?} credits undeclared person {:?}",
                        movie.title, credit.person
                    )));
                }
            }
        }

        Ok(())
    }

    /// The fixed sample: four people, ten movies, twelve credits.
    pub fn sample() -> Self {
        const TOM: &str = "Tom Hanks";
        const MERYL: &str = "Meryl Streep";
        const VIOLA: &str = "Viola Davis";
        const DENZEL: &str = "Denzel Washington";

        let people = [TOM, MERYL, VIOLA, DENZEL]
            .into_iter()
            .map(|name| Person {
                name: name.to_string(),
            })
            .collect();

        let movies = vec![
            movie(
                "Forrest Gump",
                1994,
                "Life is like a box of chocolates.",
                &[(TOM, Some("Forrest"))],
            ),
            movie(
                "The Post",
                2017,
                "The truth belongs to us.",
                &[(TOM, Some("Ben Bradlee")), (MERYL, Some("Kay Graham"))],
            ),
            movie(
                "The Devil Wears Prada",
                2006,
                "Hell on heels.",
                &[(MERYL, Some("Miranda Priestly"))],
            ),
            movie(
                "Fences",
                2016,
                "Some walls are built to keep people out. And some walls are built to keep people in.",
                &[(VIOLA, Some("Rose Maxson")), (DENZEL, Some("Troy Maxson"))],
            ),
            movie(
                "Training Day",
                2001,
                "The only thing more dangerous than the street is the man who swore to protect it.",
                &[(DENZEL, Some("Alonzo Harris"))],
            ),
            movie(
                "Sleepless in Seattle",
                1993,
                "What if they just met?",
                &[(TOM, None)],
            ),
            movie(
                "Into the Woods",
                2014,
                "Be careful what you wish for.",
                &[(MERYL, None)],
            ),
            movie(
                "Ma Rainey's Black Bottom",
                2020,
                "The mother of the Blues.",
                &[(VIOLA, None)],
            ),
            movie(
                "Flight",
                2012,
                "The pilot everyone thought was a hero.",
                &[(DENZEL, None)],
            ),
            movie(
                "Cast Away",
                2000,
                "An adventure on an island.",
                &[(TOM, None)],
            ),
        ];

        Self { people, movies }
    }
}

fn movie(title: &str, released: i64, tagline: &str, cast: &[(&str, Option<&str>)]) -> Movie {
    Movie {
        title: title.to_string(),
        released,
        tagline: Some(tagline.to_string()),
        cast: cast
            .iter()
            .map(|(person, role)| Credit {
                person: (*person).to_string(),
                role: role.map(str::to_string),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_fixed_shape() {
        let data = Dataset::sample();
        assert_eq!(data.people.len(), 4);
        assert_eq!(data.movies.len(), 10);
        assert_eq!(data.credit_count(), 12);
        data.validate().unwrap();
    }

    #[test]
    fn sample_roles_are_partial() {
        let data = Dataset::sample();
        let with_role = data
            .movies
            .iter()
            .flat_map(|m| &m.cast)
            .filter(|c| c.role.is_some())
            .count();
        assert_eq!(with_role, 7);

        let fences = data.movies.iter().find(|m| m.title == "Fences").unwrap();
        assert_eq!(fences.released, 2016);
        assert_eq!(fences.cast[1].person, "Denzel Washington");
        assert_eq!(fences.cast[1].role.as_deref(), Some("Troy Maxson"));
    }

    #[test]
    fn duplicate_person_is_rejected() {
        let mut data = Dataset::sample();
        data.people.push(Person {
            name: "Tom Hanks".to_string(),
        });
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn unknown_credit_is_rejected() {
        let mut data = Dataset::sample();
        data.movies[0].cast.push(Credit {
            person: "Robin Wright".to_string(),
            role: Some("Jenny".to_string()),
        });
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("Robin Wright"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let data = Dataset {
            people: vec![Person {
                name: "  ".to_string(),
            }],
            movies: Vec::new(),
        };
        assert!(data.validate().is_err());
    }
}
