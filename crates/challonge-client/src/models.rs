//! Challonge resource models and request parameters
//!
//! The service wraps every object in its singular name
//! (`{"tournament": {...}}`); [`Resource::KEY`] names that wrapper.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ClientError, Result};

/// A model the service returns wrapped in `{KEY: {...}}`
pub trait Resource: DeserializeOwned {
    const KEY: &'static str;
}

/// Unwrap a single `{KEY: {...}}` envelope
pub(crate) fn unwrap_one<T: Resource>(value: Value) -> Result<T> {
    match value {
        Value::Object(mut map) => match map.remove(T::KEY) {
            Some(inner) => Ok(serde_json::from_value(inner)?),
            None => Err(ClientError::Decode(format!("missing '{}' envelope", T::KEY))),
        },
        other => Err(ClientError::Decode(format!(
            "expected object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Unwrap an array of `{KEY: {...}}` envelopes
pub(crate) fn unwrap_list<T: Resource>(value: Value) -> Result<Vec<T>> {
    match value {
        Value::Array(items) => items.into_iter().map(unwrap_one).collect(),
        other => Err(ClientError::Decode(format!(
            "expected array, got {}",
            json_kind(&other)
        ))),
    }
}

/// Wrap parameters in `{KEY: params}` for a request body
pub(crate) fn envelope<P: Serialize>(key: &str, params: &P) -> Result<Value> {
    let mut map = serde_json::Map::new();
    map.insert(key.to_string(), serde_json::to_value(params)?);
    Ok(Value::Object(map))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Nested lists (e.g. participants inside a tournament) keep their envelopes
fn enveloped_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let wrapped: Option<Vec<HashMap<String, T>>> = Option::deserialize(deserializer)?;
    Ok(wrapped
        .unwrap_or_default()
        .into_iter()
        .flat_map(|entry| entry.into_values())
        .collect())
}

/// Identifies a tournament by numeric id or by URL slug.
///
/// Slugs are checked on construction, so a reference can be placed in a
/// request path as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentRef(RefKind);

#[derive(Debug, Clone, PartialEq, Eq)]
enum RefKind {
    Id(u64),
    Url {
        subdomain: Option<String>,
        url: String,
    },
}

impl TournamentRef {
    pub fn id(id: u64) -> Self {
        TournamentRef(RefKind::Id(id))
    }

    /// Tournament by URL slug (letters, digits and underscores)
    pub fn url(url: &str) -> Result<Self> {
        check_slug(url)?;
        Ok(TournamentRef(RefKind::Url {
            subdomain: None,
            url: url.to_string(),
        }))
    }

    /// Tournament hosted under an organization subdomain
    pub fn subdomain(subdomain: &str, url: &str) -> Result<Self> {
        check_subdomain(subdomain)?;
        check_slug(url)?;
        Ok(TournamentRef(RefKind::Url {
            subdomain: Some(subdomain.to_string()),
            url: url.to_string(),
        }))
    }
}

pub(crate) fn is_slug(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_slug(url: &str) -> Result<()> {
    if is_slug(url) {
        Ok(())
    } else {
        Err(ClientError::InvalidReference(format!(
            "URL {:?} may only contain letters, numbers and underscores",
            url
        )))
    }
}

fn check_subdomain(subdomain: &str) -> Result<()> {
    let valid = !subdomain.is_empty()
        && !subdomain.starts_with('-')
        && !subdomain.ends_with('-')
        && subdomain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ClientError::InvalidReference(format!(
            "subdomain {:?} may only contain letters, numbers, underscores and inner hyphens",
            subdomain
        )))
    }
}

impl From<u64> for TournamentRef {
    fn from(id: u64) -> Self {
        TournamentRef::id(id)
    }
}

impl TryFrom<&str> for TournamentRef {
    type Error = ClientError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl FromStr for TournamentRef {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(id) = s.parse::<u64>() {
            return Ok(TournamentRef::id(id));
        }
        // Slugs never contain '-', so the last one separates the subdomain
        match s.rsplit_once('-') {
            Some((subdomain, url)) => TournamentRef::subdomain(subdomain, url),
            None => TournamentRef::url(s),
        }
    }
}

impl fmt::Display for TournamentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            RefKind::Id(id) => write!(f, "{}", id),
            RefKind::Url {
                subdomain: Some(subdomain),
                url,
            } => write!(f, "{}-{}", subdomain, url),
            RefKind::Url { subdomain: None, url } => f.write_str(url),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentType {
    #[serde(rename = "single elimination")]
    SingleElimination,
    #[serde(rename = "double elimination")]
    DoubleElimination,
    #[serde(rename = "round robin")]
    RoundRobin,
    #[serde(rename = "swiss")]
    Swiss,
    #[serde(rename = "free for all")]
    FreeForAll,
    /// A format this client does not know yet
    #[serde(other)]
    Unknown,
}

impl TournamentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentType::SingleElimination => "single elimination",
            TournamentType::DoubleElimination => "double elimination",
            TournamentType::RoundRobin => "round robin",
            TournamentType::Swiss => "swiss",
            TournamentType::FreeForAll => "free for all",
            TournamentType::Unknown => "unknown",
        }
    }
}

impl FromStr for TournamentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], " ").as_str() {
            "single elimination" => Ok(TournamentType::SingleElimination),
            "double elimination" => Ok(TournamentType::DoubleElimination),
            "round robin" => Ok(TournamentType::RoundRobin),
            "swiss" => Ok(TournamentType::Swiss),
            "free for all" => Ok(TournamentType::FreeForAll),
            other => Err(format!("unknown tournament type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    Pending,
    CheckingIn,
    CheckedIn,
    Underway,
    GroupStagesUnderway,
    GroupStagesFinalized,
    AwaitingReview,
    Complete,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: u64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub subdomain: Option<String>,
    #[serde(default)]
    pub full_challonge_url: Option<String>,
    pub tournament_type: TournamentType,
    pub state: TournamentState,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub private: Option<bool>,
    #[serde(default)]
    pub open_signup: Option<bool>,
    #[serde(default)]
    pub hold_third_place_match: Option<bool>,
    #[serde(default)]
    pub signup_cap: Option<u32>,
    #[serde(default)]
    pub participants_count: Option<u32>,
    #[serde(default)]
    pub progress_meter: Option<u32>,
    #[serde(default)]
    pub check_in_duration: Option<u32>,
    #[serde(default)]
    pub start_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub started_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Present when requested with `include_participants`
    #[serde(default, deserialize_with = "enveloped_list")]
    pub participants: Vec<Participant>,
    /// Present when requested with `include_matches`
    #[serde(default, deserialize_with = "enveloped_list")]
    pub matches: Vec<Match>,
}

impl Resource for Tournament {
    const KEY: &'static str = "tournament";
}

impl Tournament {
    /// Reference usable in subsequent requests
    pub fn reference(&self) -> TournamentRef {
        TournamentRef::id(self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub tournament_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub challonge_username: Option<String>,
    pub seed: u32,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub checked_in: Option<bool>,
    #[serde(default)]
    pub final_rank: Option<u32>,
    #[serde(default)]
    pub misc: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Resource for Participant {
    const KEY: &'static str = "participant";
}

impl Participant {
    /// Best available name for display
    pub fn label(&self) -> String {
        self.display_name
            .clone()
            .or_else(|| self.name.clone())
            .or_else(|| self.challonge_username.clone())
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    Pending,
    Open,
    Complete,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: u64,
    pub tournament_id: u64,
    pub state: MatchState,
    /// Negative rounds belong to the losers bracket
    pub round: i32,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub player1_id: Option<u64>,
    #[serde(default)]
    pub player2_id: Option<u64>,
    #[serde(default)]
    pub winner_id: Option<u64>,
    #[serde(default)]
    pub loser_id: Option<u64>,
    #[serde(default)]
    pub scores_csv: Option<String>,
    #[serde(default)]
    pub player1_votes: Option<u32>,
    #[serde(default)]
    pub player2_votes: Option<u32>,
    #[serde(default)]
    pub suggested_play_order: Option<u32>,
    #[serde(default)]
    pub underway_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub started_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<FixedOffset>>,
}

impl Resource for Match {
    const KEY: &'static str = "match";
}

impl Match {
    /// Set scores parsed from `scores_csv`
    pub fn scores(&self) -> Result<Vec<SetScore>> {
        match self.scores_csv.as_deref() {
            None | Some("") => Ok(Vec::new()),
            Some(csv) => SetScore::parse_csv(csv),
        }
    }

    pub fn is_losers_bracket(&self) -> bool {
        self.round < 0
    }

    pub fn involves(&self, participant_id: u64) -> bool {
        self.player1_id == Some(participant_id) || self.player2_id == Some(participant_id)
    }
}

/// Score of one set, player 1 first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetScore {
    pub player1: i64,
    pub player2: i64,
}

impl SetScore {
    pub fn new(player1: i64, player2: i64) -> Self {
        Self { player1, player2 }
    }

    /// Parse `"3-1,1-3,-1-2"`; scores may be negative
    pub fn parse_csv(csv: &str) -> Result<Vec<SetScore>> {
        csv.split(',').map(|set| set.trim().parse()).collect()
    }

    /// Render sets back into the `scores_csv` form
    pub fn to_csv(scores: &[SetScore]) -> String {
        scores
            .iter()
            .map(|s| format!("{}-{}", s.player1, s.player2))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for SetScore {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ClientError::Decode(format!("invalid set score: {:?}", s));

        // The separator is the first '-' that is not a leading sign
        let split_at = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '-')
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;

        let player1 = s[..split_at].trim().parse().map_err(|_| invalid())?;
        let player2 = s[split_at + 1..].trim().parse().map_err(|_| invalid())?;
        Ok(SetScore { player1, player2 })
    }
}

/// Parameters for creating or updating a tournament
#[derive(Debug, Clone, Default, Serialize)]
pub struct TournamentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament_type: Option<TournamentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_signup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_third_place_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_cap: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<FixedOffset>>,
}

impl TournamentParams {
    /// Minimal parameters for a new tournament
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub(crate) fn validate_new(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            errors.push("Name can't be blank".to_string());
        }
        if let Some(url) = &self.url {
            if !is_slug(url) {
                errors.push("URL may only contain letters, numbers and underscores".to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ClientError::Validation(errors))
        }
    }
}

/// Parameters for adding or updating a participant
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParticipantParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challonge_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_name_or_email: Option<String>,
}

impl ParticipantParams {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Parameters for reporting a match result
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores_csv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player1_votes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player2_votes: Option<u32>,
}

impl MatchParams {
    /// Report final set scores and the winner
    pub fn report(scores: &[SetScore], winner_id: u64) -> Self {
        Self {
            scores_csv: Some(SetScore::to_csv(scores)),
            winner_id: Some(winner_id),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TournamentStateFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Ended,
}

/// Filters for listing tournaments
#[derive(Debug, Clone, Default)]
pub struct TournamentFilter {
    pub state: TournamentStateFilter,
    pub tournament_type: Option<TournamentType>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
    pub subdomain: Option<String>,
}

impl TournamentFilter {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let state = match self.state {
            TournamentStateFilter::All => "all",
            TournamentStateFilter::Pending => "pending",
            TournamentStateFilter::InProgress => "in_progress",
            TournamentStateFilter::Ended => "ended",
        };
        query.push(("state".to_string(), state.to_string()));

        if let Some(kind) = self.tournament_type {
            query.push(("type".to_string(), kind.as_str().to_string()));
        }
        if let Some(date) = self.created_after {
            query.push(("created_after".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.created_before {
            query.push(("created_before".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(subdomain) = &self.subdomain {
            query.push(("subdomain".to_string(), subdomain.clone()));
        }
        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStateFilter {
    #[default]
    All,
    Pending,
    Open,
    Complete,
}

/// Filters for listing matches
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub state: MatchStateFilter,
    pub participant_id: Option<u64>,
}

impl MatchFilter {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let state = match self.state {
            MatchStateFilter::All => "all",
            MatchStateFilter::Pending => "pending",
            MatchStateFilter::Open => "open",
            MatchStateFilter::Complete => "complete",
        };
        let mut query = vec![("state".to_string(), state.to_string())];
        if let Some(id) = self.participant_id {
            query.push(("participant_id".to_string(), id.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tournament_ref_parse() {
        assert_eq!("1234".parse::<TournamentRef>().unwrap(), TournamentRef::id(1234));
        assert_eq!(
            "spring_cup".parse::<TournamentRef>().unwrap(),
            TournamentRef::url("spring_cup").unwrap()
        );
        assert_eq!(
            "myorg-spring_cup".parse::<TournamentRef>().unwrap(),
            TournamentRef::subdomain("myorg", "spring_cup").unwrap()
        );
        assert_eq!(
            TournamentRef::try_from("my-org-spring_cup").unwrap(),
            TournamentRef::subdomain("my-org", "spring_cup").unwrap()
        );
        assert_eq!(TournamentRef::subdomain("myorg", "cup").unwrap().to_string(), "myorg-cup");
        assert_eq!(TournamentRef::id(7).to_string(), "7");
    }

    #[test]
    fn test_tournament_ref_rejects_path_characters() {
        for input in ["../../admin", "cup?state=x#", "a/b", "cup.json", "", "-cup", "cup-", "my org"] {
            assert!(
                matches!(input.parse::<TournamentRef>(), Err(ClientError::InvalidReference(_))),
                "{:?} should be rejected",
                input
            );
        }
        assert!(TournamentRef::url("spring cup").is_err());
        assert!(TournamentRef::subdomain("org/..", "cup").is_err());
    }

    #[test]
    fn test_unknown_tournament_type_still_decodes() {
        let body = json!({
            "tournament": {
                "id": 43,
                "name": "Grand Finals",
                "url": "grand_finals",
                "tournament_type": "two stage",
                "state": "pending"
            }
        });

        let tournament: Tournament = unwrap_one(body).unwrap();
        assert_eq!(tournament.tournament_type, TournamentType::Unknown);
        assert_eq!(tournament.tournament_type.as_str(), "unknown");
    }

    #[test]
    fn test_unwrap_tournament_with_includes() {
        let body = json!({
            "tournament": {
                "id": 42,
                "name": "Spring Cup",
                "url": "spring_cup",
                "tournament_type": "double elimination",
                "state": "underway",
                "private": false,
                "participants_count": 2,
                "created_at": "2015-01-19T16:57:17-05:00",
                "participants": [
                    {"participant": {"id": 1, "tournament_id": 42, "name": "Ann", "seed": 1}},
                    {"participant": {"id": 2, "tournament_id": 42, "name": "Bo", "seed": 2}}
                ],
                "matches": [
                    {"match": {"id": 9, "tournament_id": 42, "state": "open", "round": 1,
                               "player1_id": 1, "player2_id": 2, "scores_csv": ""}}
                ]
            }
        });

        let tournament: Tournament = unwrap_one(body).unwrap();
        assert_eq!(tournament.id, 42);
        assert_eq!(tournament.tournament_type, TournamentType::DoubleElimination);
        assert_eq!(tournament.state, TournamentState::Underway);
        assert_eq!(tournament.participants.len(), 2);
        assert_eq!(tournament.participants[1].label(), "Bo");
        assert_eq!(tournament.matches.len(), 1);
        assert!(tournament.matches[0].involves(2));
        assert!(tournament.matches[0].scores().unwrap().is_empty());
        assert!(tournament.created_at.is_some());
    }

    #[test]
    fn test_unknown_state_tolerated() {
        let body = json!({"match": {
            "id": 1, "tournament_id": 2, "state": "marked_as_underway", "round": -2
        }});
        let m: Match = unwrap_one(body).unwrap();
        assert_eq!(m.state, MatchState::Unknown);
        assert!(m.is_losers_bracket());
    }

    #[test]
    fn test_unwrap_wrong_envelope() {
        let body = json!({"participant": {"id": 1}});
        let err = unwrap_one::<Tournament>(body).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));

        let err = unwrap_list::<Tournament>(json!({"tournament": {}})).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_set_scores() {
        let scores = SetScore::parse_csv("3-1, 1-3,-1-2,2--4").unwrap();
        assert_eq!(
            scores,
            vec![
                SetScore::new(3, 1),
                SetScore::new(1, 3),
                SetScore::new(-1, 2),
                SetScore::new(2, -4),
            ]
        );
        assert_eq!(SetScore::to_csv(&scores), "3-1,1-3,-1-2,2--4");
        assert!(SetScore::parse_csv("3:1").is_err());
        assert!(SetScore::parse_csv("a-b").is_err());
    }

    #[test]
    fn test_params_skip_unset_fields() {
        let params = TournamentParams {
            tournament_type: Some(TournamentType::RoundRobin),
            ..TournamentParams::new("Spring Cup", "spring_cup")
        };
        let body = envelope(Tournament::KEY, &params).unwrap();
        assert_eq!(
            body,
            json!({"tournament": {
                "name": "Spring Cup",
                "url": "spring_cup",
                "tournament_type": "round robin"
            }})
        );
    }

    #[test]
    fn test_validate_new_tournament() {
        assert!(TournamentParams::new("Cup", "cup_2024").validate_new().is_ok());
        match TournamentParams::new(" ", "bad url").validate_new() {
            Err(ClientError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_tournament_type_from_str() {
        assert_eq!(
            "single_elimination".parse::<TournamentType>().unwrap(),
            TournamentType::SingleElimination
        );
        assert_eq!("Swiss".parse::<TournamentType>().unwrap(), TournamentType::Swiss);
        assert!("ladder".parse::<TournamentType>().is_err());
    }

    #[test]
    fn test_filter_query() {
        let filter = TournamentFilter {
            state: TournamentStateFilter::InProgress,
            created_after: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..TournamentFilter::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("state".to_string(), "in_progress".to_string()),
                ("created_after".to_string(), "2024-03-01".to_string()),
            ]
        );

        let filter = MatchFilter {
            state: MatchStateFilter::Open,
            participant_id: Some(5),
        };
        assert_eq!(filter.to_query().len(), 2);
    }
}
