use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// One delivery (or extra) outcome. Events are immutable once appended to the
/// ball history; the ordered history is the single source of truth and every
/// aggregate counter is a fold over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BallEvent {
    /// UUID v4 token used as the ordering/dedup key.
    pub id: String,
    pub kind: BallKind,
    /// Non-negative run count; semantics vary by kind (for a no-ball this is
    /// the runs scored off the bat, the one-run penalty is implicit).
    pub runs: u32,
    pub inning: InningsNumber,
    /// Unix milliseconds at creation. Tie-break aid only; array order is
    /// authoritative.
    pub timestamp: u64,
    /// Only meaningful on `noball`: whether a run-out occurred on that
    /// delivery (the ball then counts, and a wicket falls).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_run_out: Option<bool>,
    /// Optional per-delivery attribution used for the per-player tallies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_striker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowler_id: Option<String>,
}

impl BallEvent {
    pub fn new(kind: BallKind, runs: u32, inning: InningsNumber) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            runs,
            inning,
            timestamp: current_timestamp(),
            is_run_out: None,
            striker_id: None,
            non_striker_id: None,
            bowler_id: None,
        }
    }

    /// Whether this delivery advances the legal ball count.
    ///
    /// Wides never count. No-balls count only when a run-out happened on the
    /// delivery. Everything else counts.
    pub fn counts_ball(&self) -> bool {
        match self.kind {
            BallKind::Wide => false,
            BallKind::Noball => self.is_run_out.unwrap_or(false),
            _ => true,
        }
    }

    /// Runs this event adds to the innings total, penalties included.
    pub fn total_runs(&self) -> u32 {
        match self.kind {
            BallKind::Wide => 1,
            BallKind::Noball => 1 + self.runs,
            _ => self.runs,
        }
    }

    /// Whether a wicket falls on this event.
    pub fn takes_wicket(&self) -> bool {
        match self.kind {
            BallKind::Wicket => true,
            BallKind::Noball => self.is_run_out.unwrap_or(false),
            _ => false,
        }
    }
}

/// The delivery-outcome vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum BallKind {
    Run,
    Wicket,
    Wide,
    Noball,
    Bye,
    Legbye,
}

/// Which innings an event belongs to. Serialized as the number `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InningsNumber {
    #[default]
    First,
    Second,
}

impl From<InningsNumber> for u8 {
    fn from(inning: InningsNumber) -> u8 {
        match inning {
            InningsNumber::First => 1,
            InningsNumber::Second => 2,
        }
    }
}

impl TryFrom<u8> for InningsNumber {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InningsNumber::First),
            2 => Ok(InningsNumber::Second),
            other => Err(format!("innings number must be 1 or 2, got {}", other)),
        }
    }
}

impl JsonSchema for InningsNumber {
    fn schema_name() -> String {
        "InningsNumber".to_owned()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        let mut schema = gen.subschema_for::<u8>().into_object();
        schema.number().minimum = Some(1.0);
        schema.number().maximum = Some(2.0);
        schema.into()
    }
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
