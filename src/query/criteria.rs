//! # Criteria Parsing
//!
//! Parses the query string of `GET /rest/players` and `/rest/players/count`
//! into typed, independently optional filter values.
//!
//! A parameter that is missing or sent with an empty value is absent. A
//! parameter that is present but does not parse is an error; it is never
//! silently replaced by a default.

use std::collections::HashMap;
use std::str::FromStr;

use crate::player::{Profession, Race};

use super::errors::{QueryError, QueryResult};
use super::order::PlayerOrder;
use super::page::{PageSpec, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// Inclusive numeric bounds, each end optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Bounds {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Optional filter values of one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub experience: Bounds,
    pub level: Bounds,
    /// `after` / `before`, millisecond epochs
    pub birthday: Bounds,
    /// `None` when not supplied; `Some(false)` is an explicit filter
    pub banned: Option<bool>,
}

impl Criteria {
    /// Parse filter parameters, ignoring everything else
    pub fn parse(params: &HashMap<String, String>) -> QueryResult<Self> {
        Ok(Self {
            name: param(params, "name").map(str::to_string),
            title: param(params, "title").map(str::to_string),
            race: parse_enum(params, "race")?,
            profession: parse_enum(params, "profession")?,
            experience: Bounds::new(
                parse_int(params, "minExperience")?,
                parse_int(params, "maxExperience")?,
            ),
            level: Bounds::new(
                parse_int(params, "minLevel")?,
                parse_int(params, "maxLevel")?,
            ),
            birthday: Bounds::new(parse_int(params, "after")?, parse_int(params, "before")?),
            banned: parse_bool(params, "banned")?,
        })
    }

    /// Number of criteria actually supplied
    pub fn len(&self) -> usize {
        [
            self.name.is_some(),
            self.title.is_some(),
            self.race.is_some(),
            self.profession.is_some(),
            !self.experience.is_unbounded(),
            !self.level.is_unbounded(),
            !self.birthday.is_unbounded(),
            self.banned.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filters plus ordering and paging for a listing request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub criteria: Criteria,
    pub order: PlayerOrder,
    pub page: PageSpec,
}

impl ListQuery {
    pub fn parse(params: &HashMap<String, String>) -> QueryResult<Self> {
        let criteria = Criteria::parse(params)?;
        let order = parse_enum(params, "order")?.unwrap_or_default();

        let number = parse_int(params, "pageNumber")?.unwrap_or(DEFAULT_PAGE_NUMBER as i64);
        let size = parse_int(params, "pageSize")?.unwrap_or(DEFAULT_PAGE_SIZE as i64);
        let page = PageSpec::new(number, size)?;

        Ok(Self {
            criteria,
            order,
            page,
        })
    }
}

/// A parameter's value, with empty treated as absent
fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn parse_int(params: &HashMap<String, String>, key: &'static str) -> QueryResult<Option<i64>> {
    param(params, key)
        .map(|value| {
            value.trim().parse::<i64>().map_err(|_| QueryError::InvalidParam {
                param: key,
                value: value.to_string(),
            })
        })
        .transpose()
}

fn parse_bool(params: &HashMap<String, String>, key: &'static str) -> QueryResult<Option<bool>> {
    param(params, key)
        .map(|value| match value.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(QueryError::InvalidParam {
                param: key,
                value: value.to_string(),
            }),
        })
        .transpose()
}

fn parse_enum<T>(params: &HashMap<String, String>, key: &str) -> QueryResult<Option<T>>
where
    T: FromStr<Err = QueryError>,
{
    param(params, key).map(|value| value.trim().parse()).transpose()
}
