//! Ordering Resolver
//!
//! Maps the `order` parameter onto one concrete field. Sorting is always
//! ascending; ties fall back to the id so pages are stable.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::player::Player;

use super::errors::QueryError;
use super::predicate::PlayerField;

/// Client-selectable sort key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    pub const ALL: [PlayerOrder; 5] = [
        PlayerOrder::Id,
        PlayerOrder::Name,
        PlayerOrder::Experience,
        PlayerOrder::Birthday,
        PlayerOrder::Level,
    ];

    /// Wire name of this key
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "ID",
            PlayerOrder::Name => "NAME",
            PlayerOrder::Experience => "EXPERIENCE",
            PlayerOrder::Birthday => "BIRTHDAY",
            PlayerOrder::Level => "LEVEL",
        }
    }

    /// Record field this key sorts by
    pub fn field(&self) -> PlayerField {
        match self {
            PlayerOrder::Id => PlayerField::Id,
            PlayerOrder::Name => PlayerField::Name,
            PlayerOrder::Experience => PlayerField::Experience,
            PlayerOrder::Birthday => PlayerField::Birthday,
            PlayerOrder::Level => PlayerField::Level,
        }
    }

    pub fn resolve(&self) -> SortSpec {
        SortSpec {
            field: self.field(),
        }
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| QueryError::UnknownEnumValue {
                param: "order",
                value: s.to_string(),
            })
    }
}

/// Resolved ascending sort on one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: PlayerField,
}

impl SortSpec {
    /// Ascending comparison; unset values sort first, ties by id
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        self.field
            .value_of(a)
            .cmp(&self.field.value_of(b))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Sort records in place
    pub fn sort(&self, players: &mut [Player]) {
        players.sort_by(|a, b| self.compare(a, b));
    }
}
