//! Public models for the contribution settings module.
//!
//! These are transport-agnostic data structures shared by the settings store
//! and its consumers. Field names serialize in camelCase, which is also the
//! shape of the persisted record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// How the contribution rate is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionType {
    /// Rate is a percentage of each paycheck.
    #[default]
    Percentage,
    /// Rate is a flat dollar amount per paycheck.
    Dollar,
}

impl ContributionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Dollar => "dollar",
        }
    }
}

impl fmt::Display for ContributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `percentage` nor `dollar`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contribution type '{0}'")]
pub struct UnknownContributionType(pub String);

impl FromStr for ContributionType {
    type Err = UnknownContributionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(Self::Percentage),
            "dollar" => Ok(Self::Dollar),
            other => Err(UnknownContributionType(other.to_owned())),
        }
    }
}

/// The single stored contribution preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSettings {
    pub contribution_type: ContributionType,
    pub contribution_rate: f64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub last_updated: DateTime<Utc>,
}

impl ContributionSettings {
    pub const DEFAULT_TYPE: ContributionType = ContributionType::Percentage;
    pub const DEFAULT_RATE: f64 = 5.0;

    /// Default settings stamped with the given time.
    #[must_use]
    pub fn defaults_at(last_updated: DateTime<Utc>) -> Self {
        Self {
            contribution_type: Self::DEFAULT_TYPE,
            contribution_rate: Self::DEFAULT_RATE,
            last_updated,
        }
    }
}

/// Parses an RFC 3339 timestamp, or a naive ISO 8601 one taken as UTC
/// (`2025-03-01T12:30:00.123456`, as older records store it).
///
/// # Errors
/// Returns the RFC 3339 error when neither form matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Ok(ts.with_timezone(&Utc)),
        Err(err) => raw
            .parse::<NaiveDateTime>()
            .map(|naive| naive.and_utc())
            .map_err(|_| err),
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Full replacement of the stored settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionSettingsUpdate {
    pub contribution_type: ContributionType,
    pub contribution_rate: f64,
}
