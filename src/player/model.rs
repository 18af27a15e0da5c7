//! Player record and write payloads

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::errors::{PlayerError, PlayerResult};
use super::kind::{Profession, Race};
use super::level::{level_for, until_next_level};

/// Identifier assigned by storage, always positive
pub type PlayerId = i64;

/// Maximum name length in characters
pub const MAX_NAME_LEN: usize = 12;

/// Maximum title length in characters
pub const MAX_TITLE_LEN: usize = 30;

/// Upper bound on experience, inclusive
pub const MAX_EXPERIENCE: i64 = 10_000_000;

/// A stored player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub title: String,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Milliseconds since the epoch
    pub birthday: Option<i64>,
    pub banned: bool,
    pub experience: i64,
    pub level: i64,
    pub until_next_level: i64,
}

impl Player {
    /// Materialize a validated draft under a freshly assigned id
    pub fn from_new(id: PlayerId, new: NewPlayer) -> Self {
        let level = level_for(new.experience);
        Self {
            id,
            name: new.name,
            title: new.title,
            race: new.race,
            profession: new.profession,
            birthday: new.birthday,
            banned: new.banned,
            experience: new.experience,
            level,
            until_next_level: until_next_level(level, new.experience),
        }
    }

    /// Overwrite every field present in `patch`, keeping the id.
    ///
    /// The patch must already have passed [`PlayerFields::validate`].
    pub fn apply(&mut self, patch: &PlayerFields) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(race) = patch.race {
            self.race = Some(race);
        }
        if let Some(profession) = patch.profession {
            self.profession = Some(profession);
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = Some(birthday);
        }
        if let Some(banned) = patch.banned {
            self.banned = banned;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        self.level = level_for(self.experience);
        self.until_next_level = until_next_level(self.level, self.experience);
    }

    /// Calendar date of `birthday` in UTC
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birthday
            .and_then(DateTime::from_timestamp_millis)
            .map(|at| at.date_naive())
    }
}

/// A validated record awaiting an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<i64>,
    pub banned: bool,
    pub experience: i64,
}

/// Player fields as sent by a client.
///
/// Used both as a create body and as an update patch; every field is
/// optional and `id`, `level` and `untilNextLevel` are ignored if sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<Profession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<i64>,
}

impl PlayerFields {
    /// Check the bounds of every field that is present
    pub fn validate(&self) -> PlayerResult<()> {
        if let Some(name) = &self.name {
            let len = name.chars().count();
            if name.trim().is_empty() || len > MAX_NAME_LEN {
                return Err(PlayerError::InvalidName {
                    len,
                    max: MAX_NAME_LEN,
                });
            }
        }

        if let Some(title) = &self.title {
            let len = title.chars().count();
            if len > MAX_TITLE_LEN {
                return Err(PlayerError::TitleTooLong {
                    len,
                    max: MAX_TITLE_LEN,
                });
            }
        }

        if let Some(experience) = self.experience {
            if !(0..=MAX_EXPERIENCE).contains(&experience) {
                return Err(PlayerError::ExperienceOutOfRange {
                    value: experience,
                    max: MAX_EXPERIENCE,
                });
            }
        }

        if let Some(birthday) = self.birthday {
            if birthday < 0 {
                return Err(PlayerError::NegativeBirthday(birthday));
            }
        }

        Ok(())
    }

    /// Validate as a create body; `name` is mandatory
    pub fn into_new_player(self) -> PlayerResult<NewPlayer> {
        self.validate()?;
        let name = self.name.ok_or(PlayerError::MissingName)?;

        Ok(NewPlayer {
            name,
            title: self.title.unwrap_or_default(),
            race: self.race,
            profession: self.profession,
            birthday: self.birthday,
            banned: self.banned.unwrap_or(false),
            experience: self.experience.unwrap_or(0),
        })
    }
}
