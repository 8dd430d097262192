use serde::{Deserialize, Serialize};
use std::fmt;

/// A display string with optional translations, as the API returns names
/// (`{"default": "Dallas Stars", "fr": "Stars de Dallas"}`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LocalizedName {
    #[serde(default)]
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr: Option<String>,
}

impl LocalizedName {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            fr: None,
        }
    }
}

impl fmt::Display for LocalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.default)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PeriodDescriptor {
    #[serde(default)]
    pub number: i32,
    #[serde(rename = "periodType", default)]
    pub period_type: String,
    #[serde(rename = "maxRegulationPeriods", default)]
    pub max_regulation_periods: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GameClock {
    #[serde(rename = "timeRemaining", default)]
    pub time_remaining: String,
    #[serde(rename = "secondsRemaining", default)]
    pub seconds_remaining: i32,
    #[serde(default)]
    pub running: bool,
    #[serde(rename = "inIntermission", default)]
    pub in_intermission: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TvBroadcast {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub market: String,
    #[serde(rename = "countryCode", default)]
    pub country_code: String,
    #[serde(default)]
    pub network: String,
    #[serde(rename = "sequenceNumber", default)]
    pub sequence_number: i32,
}

/// Win-loss-overtime-loss triple shown as `W-L-OTL`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: i32,
    pub losses: i32,
    #[serde(rename = "otLosses")]
    pub ot_losses: i32,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ot_losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_name_accepts_missing_translation() {
        let name: LocalizedName = serde_json::from_str(r#"{"default":"Dallas Stars"}"#).unwrap();
        assert_eq!(name.default, "Dallas Stars");
        assert!(name.fr.is_none());

        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"{"default":"Dallas Stars"}"#);
    }

    #[test]
    fn test_localized_name_display_uses_default() {
        let name = LocalizedName {
            default: "Montreal Canadiens".to_string(),
            fr: Some("Canadiens de Montréal".to_string()),
        };
        assert_eq!(name.to_string(), "Montreal Canadiens");
    }

    #[test]
    fn test_record_display() {
        let record = Record {
            wins: 7,
            losses: 2,
            ot_losses: 1,
        };
        assert_eq!(record.to_string(), "7-2-1");
    }

    #[test]
    fn test_clock_defaults_when_fields_missing() {
        let clock: GameClock = serde_json::from_str(r#"{"timeRemaining":"12:34"}"#).unwrap();
        assert_eq!(clock.time_remaining, "12:34");
        assert!(!clock.running);
        assert!(!clock.in_intermission);
    }
}
