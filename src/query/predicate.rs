//! # Predicate Builder
//!
//! Each criterion maps to at most one [`Condition`]; an absent criterion maps
//! to `None` and constrains nothing. A [`Predicate`] is the AND of all the
//! conditions it holds, so an empty predicate matches every record.
//!
//! Conditions are plain data. The in-memory store evaluates them with
//! [`Predicate::matches`]; another store could translate them into its own
//! query language instead.

use std::fmt;

use crate::player::{Player, Profession, Race};

use super::criteria::{Bounds, Criteria};

/// Filterable and sortable player fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerField {
    Id,
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Banned,
    Experience,
    Level,
}

impl PlayerField {
    /// Field name as it appears in the JSON record
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerField::Id => "id",
            PlayerField::Name => "name",
            PlayerField::Title => "title",
            PlayerField::Race => "race",
            PlayerField::Profession => "profession",
            PlayerField::Birthday => "birthday",
            PlayerField::Banned => "banned",
            PlayerField::Experience => "experience",
            PlayerField::Level => "level",
        }
    }

    /// Read this field from a record. `None` for an unset optional field.
    pub fn value_of(&self, player: &Player) -> Option<FieldValue> {
        match self {
            PlayerField::Id => Some(FieldValue::Int(player.id)),
            PlayerField::Name => Some(FieldValue::Text(player.name.clone())),
            PlayerField::Title => Some(FieldValue::Text(player.title.clone())),
            PlayerField::Race => player.race.map(FieldValue::Race),
            PlayerField::Profession => player.profession.map(FieldValue::Profession),
            PlayerField::Birthday => player.birthday.map(FieldValue::Int),
            PlayerField::Banned => Some(FieldValue::Bool(player.banned)),
            PlayerField::Experience => Some(FieldValue::Int(player.experience)),
            PlayerField::Level => Some(FieldValue::Int(player.level)),
        }
    }

    fn int_of(&self, player: &Player) -> Option<i64> {
        match self.value_of(player) {
            Some(FieldValue::Int(value)) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed field value.
///
/// Ordering is only meaningful between values of the same variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Race(Race),
    Profession(Profession),
    Bool(bool),
}

/// One atomic test over a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Case-sensitive substring match on a text field
    Contains { field: PlayerField, needle: String },

    /// Exact equality
    Eq { field: PlayerField, value: FieldValue },

    /// `field >= bound`
    Gte { field: PlayerField, bound: i64 },

    /// `field <= bound`
    Lte { field: PlayerField, bound: i64 },

    /// `min <= field <= max`. Never matches when `min > max`.
    Between { field: PlayerField, min: i64, max: i64 },
}

impl Condition {
    /// Field this condition reads
    pub fn field(&self) -> PlayerField {
        match self {
            Condition::Contains { field, .. }
            | Condition::Eq { field, .. }
            | Condition::Gte { field, .. }
            | Condition::Lte { field, .. }
            | Condition::Between { field, .. } => *field,
        }
    }

    /// Check a record against this condition.
    ///
    /// An unset optional field never matches.
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            Condition::Contains { field, needle } => match field.value_of(player) {
                Some(FieldValue::Text(text)) => text.contains(needle.as_str()),
                _ => false,
            },
            Condition::Eq { field, value } => field.value_of(player).as_ref() == Some(value),
            Condition::Gte { field, bound } => field.int_of(player).is_some_and(|v| v >= *bound),
            Condition::Lte { field, bound } => field.int_of(player).is_some_and(|v| v <= *bound),
            Condition::Between { field, min, max } => field
                .int_of(player)
                .is_some_and(|v| *min <= v && v <= *max),
        }
    }
}

/// Conjunction of conditions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    /// The predicate that matches every record
    pub fn match_all() -> Self {
        Self::default()
    }

    /// AND another condition in; `None` leaves the predicate unchanged
    pub fn and(mut self, condition: Option<Condition>) -> Self {
        if let Some(condition) = condition {
            self.conditions.push(condition);
        }
        self
    }

    /// Check if a record satisfies every condition
    pub fn matches(&self, player: &Player) -> bool {
        self.conditions.iter().all(|c| c.matches(player))
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_match_all(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Combine every supplied criterion
    pub fn from_criteria(criteria: &Criteria) -> Self {
        Self::match_all()
            .and(filter_by_name(criteria.name.as_deref()))
            .and(filter_by_title(criteria.title.as_deref()))
            .and(filter_by_race(criteria.race))
            .and(filter_by_profession(criteria.profession))
            .and(filter_by_experience(criteria.experience))
            .and(filter_by_level(criteria.level))
            .and(filter_by_birthday(criteria.birthday))
            .and(filter_by_banned(criteria.banned))
    }
}

impl From<&Criteria> for Predicate {
    fn from(criteria: &Criteria) -> Self {
        Self::from_criteria(criteria)
    }
}

pub fn filter_by_name(name: Option<&str>) -> Option<Condition> {
    name.map(|needle| Condition::Contains {
        field: PlayerField::Name,
        needle: needle.to_string(),
    })
}

pub fn filter_by_title(title: Option<&str>) -> Option<Condition> {
    title.map(|needle| Condition::Contains {
        field: PlayerField::Title,
        needle: needle.to_string(),
    })
}

pub fn filter_by_race(race: Option<Race>) -> Option<Condition> {
    race.map(|race| Condition::Eq {
        field: PlayerField::Race,
        value: FieldValue::Race(race),
    })
}

pub fn filter_by_profession(profession: Option<Profession>) -> Option<Condition> {
    profession.map(|profession| Condition::Eq {
        field: PlayerField::Profession,
        value: FieldValue::Profession(profession),
    })
}

pub fn filter_by_experience(bounds: Bounds) -> Option<Condition> {
    range(PlayerField::Experience, bounds)
}

pub fn filter_by_level(bounds: Bounds) -> Option<Condition> {
    range(PlayerField::Level, bounds)
}

/// `after` and `before` are millisecond epochs, both inclusive
pub fn filter_by_birthday(bounds: Bounds) -> Option<Condition> {
    range(PlayerField::Birthday, bounds)
}

/// Only an explicit flag filters; `None` matches banned and unbanned alike
pub fn filter_by_banned(banned: Option<bool>) -> Option<Condition> {
    banned.map(|banned| Condition::Eq {
        field: PlayerField::Banned,
        value: FieldValue::Bool(banned),
    })
}

fn range(field: PlayerField, bounds: Bounds) -> Option<Condition> {
    match (bounds.min, bounds.max) {
        (Some(min), Some(max)) => Some(Condition::Between { field, min, max }),
        (Some(bound), None) => Some(Condition::Gte { field, bound }),
        (None, Some(bound)) => Some(Condition::Lte { field, bound }),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{NewPlayer, Player};

    fn player(id: i64, name: &str, experience: i64, banned: bool) -> Player {
        Player::from_new(
            id,
            NewPlayer {
                name: name.to_string(),
                title: format!("the {}", name.to_lowercase()),
                race: Some(Race::Elf),
                profession: Some(Profession::Druid),
                birthday: Some(1_000 * id),
                banned,
                experience,
            },
        )
    }

    #[test]
    fn test_absent_criteria_build_nothing() {
        assert_eq!(filter_by_name(None), None);
        assert_eq!(filter_by_race(None), None);
        assert_eq!(filter_by_experience(Bounds::default()), None);
        assert_eq!(filter_by_banned(None), None);
        assert!(Predicate::from_criteria(&Criteria::default()).is_match_all());
    }

    #[test]
    fn test_range_shapes() {
        assert_eq!(
            filter_by_level(Bounds::new(Some(2), None)),
            Some(Condition::Gte {
                field: PlayerField::Level,
                bound: 2
            })
        );
        assert_eq!(
            filter_by_level(Bounds::new(None, Some(4))),
            Some(Condition::Lte {
                field: PlayerField::Level,
                bound: 4
            })
        );
        assert_eq!(
            filter_by_experience(Bounds::new(Some(1), Some(9))),
            Some(Condition::Between {
                field: PlayerField::Experience,
                min: 1,
                max: 9
            })
        );
    }

    #[test]
    fn test_substring_is_case_sensitive() {
        let p = player(1, "Gandalf", 0, false);
        assert!(filter_by_name(Some("anda")).unwrap().matches(&p));
        assert!(!filter_by_name(Some("GAND")).unwrap().matches(&p));
        assert!(filter_by_title(Some("the g")).unwrap().matches(&p));
        assert!(filter_by_name(Some("")).unwrap().matches(&p));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let condition = filter_by_experience(Bounds::new(Some(500), Some(100))).unwrap();
        for experience in [0, 100, 300, 500, 1000] {
            assert!(!condition.matches(&player(1, "A", experience, false)));
        }
    }

    #[test]
    fn test_banned_tri_state() {
        let clean = player(1, "A", 0, false);
        let banned = player(2, "B", 0, true);

        let only_clean = filter_by_banned(Some(false)).unwrap();
        assert!(only_clean.matches(&clean));
        assert!(!only_clean.matches(&banned));

        let any = Predicate::match_all().and(filter_by_banned(None));
        assert!(any.matches(&clean));
        assert!(any.matches(&banned));
    }

    #[test]
    fn test_unset_optional_field_never_matches() {
        let mut p = player(1, "A", 0, false);
        p.race = None;
        p.birthday = None;

        assert!(!filter_by_race(Some(Race::Elf)).unwrap().matches(&p));
        assert!(!filter_by_birthday(Bounds::new(None, Some(i64::MAX)))
            .unwrap()
            .matches(&p));
    }

    #[test]
    fn test_conjunction() {
        let criteria = Criteria {
            name: Some("o".to_string()),
            experience: Bounds::new(Some(100), None),
            banned: Some(false),
            ..Default::default()
        };
        let predicate = Predicate::from(&criteria);
        assert_eq!(predicate.conditions().len(), 3);

        assert!(predicate.matches(&player(1, "Frodo", 150, false)));
        assert!(!predicate.matches(&player(2, "Frodo", 50, false)));
        assert!(!predicate.matches(&player(3, "Frodo", 150, true)));
        assert!(!predicate.matches(&player(4, "Sam", 150, false)));
    }
}
