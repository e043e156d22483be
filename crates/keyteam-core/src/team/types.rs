//! Core team types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fingerprint::Fingerprint;

/// A person listed in a team roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Person's email address
    pub email: String,

    /// Fingerprint of the person's OpenPGP key
    pub fingerprint: Fingerprint,

    /// Whether the person administers the team
    #[serde(default)]
    pub is_admin: bool,
}

impl Person {
    /// Create a new (non-admin) person
    pub fn new(email: impl Into<String>, fingerprint: Fingerprint) -> Self {
        Self {
            email: email.into(),
            fingerprint,
            is_admin: false,
        }
    }

    /// Create a new team administrator
    pub fn new_admin(email: impl Into<String>, fingerprint: Fingerprint) -> Self {
        Self {
            is_admin: true,
            ..Self::new(email, fingerprint)
        }
    }
}

/// A team roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Globally unique team identifier
    #[serde(rename = "uuid")]
    pub id: Uuid,

    /// Team display name
    pub name: String,

    /// People in the team, in roster order
    #[serde(rename = "person", default)]
    pub people: Vec<Person>,
}

impl Team {
    /// Create a new team
    pub fn new(id: Uuid, name: impl Into<String>, people: Vec<Person>) -> Self {
        Self {
            id,
            name: name.into(),
            people,
        }
    }

    /// Fingerprints of every person in roster order, duplicates included
    pub fn fingerprints(&self) -> Vec<Fingerprint> {
        self.people.iter().map(|p| p.fingerprint).collect()
    }

    /// First person listed with the given fingerprint
    pub fn person_for_fingerprint(&self, fingerprint: &Fingerprint) -> Option<&Person> {
        self.people.iter().find(|p| p.fingerprint == *fingerprint)
    }

    /// Whether any entry for the given fingerprint is an admin
    pub fn is_admin(&self, fingerprint: &Fingerprint) -> bool {
        self.people
            .iter()
            .any(|p| p.is_admin && p.fingerprint == *fingerprint)
    }

    /// Administrators of the team
    pub fn admins(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| p.is_admin)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(c: char) -> Fingerprint {
        Fingerprint::must_parse(&c.to_string().repeat(40))
    }

    fn sample_team() -> Team {
        Team::new(
            Uuid::nil(),
            "Kiffix",
            vec![
                Person::new_admin("ada@example.com", fp('A')),
                Person::new("bob@example.com", fp('B')),
                Person::new("bob@work.example.com", fp('B')),
            ],
        )
    }

    #[test]
    fn test_person_creation() {
        let person = Person::new("bob@example.com", fp('B'));
        assert_eq!(person.email, "bob@example.com");
        assert!(!person.is_admin);
        assert!(Person::new_admin("ada@example.com", fp('A')).is_admin);
    }

    #[test]
    fn test_fingerprints_keep_order_and_duplicates() {
        assert_eq!(sample_team().fingerprints(), vec![fp('A'), fp('B'), fp('B')]);
    }

    #[test]
    fn test_person_for_fingerprint() {
        let team = sample_team();
        assert_eq!(
            team.person_for_fingerprint(&fp('B')).map(|p| p.email.as_str()),
            Some("bob@example.com")
        );
        assert!(team.person_for_fingerprint(&fp('C')).is_none());
    }

    #[test]
    fn test_is_admin() {
        let team = sample_team();
        assert!(team.is_admin(&fp('A')));
        assert!(!team.is_admin(&fp('B')));
        assert!(!team.is_admin(&fp('C')));
        assert_eq!(team.admins().count(), 1);
    }

    #[test]
    fn test_roster_toml_shape() {
        let roster = r#"
uuid = "38be2a70-23d8-11e9-bafd-7f97f2e239a3"
name = "Kiffix"

[[person]]
email = "ada@example.com"
fingerprint = "AAAA AAAA AAAA AAAA AAAA  AAAA AAAA AAAA AAAA AAAA"
is_admin = true

[[person]]
email = "bob@example.com"
fingerprint = "0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB"
"#;
        let team: Team = toml::from_str(roster).unwrap();
        assert_eq!(team.name, "Kiffix");
        assert_eq!(team.people.len(), 2);
        assert!(team.people[0].is_admin);
        assert!(!team.people[1].is_admin);
        assert_eq!(team.people[1].fingerprint, fp('B'));
    }
}
