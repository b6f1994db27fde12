//! Analysis Report — the structured answer produced by the model.
//!
//! Nothing here is trusted: every field is optional and tolerant of the usual
//! shape drift in model output (numbers as strings, scalars instead of lists).
//! Defaults are applied later, at the rendering boundary.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A model answer: the object exactly as emitted plus the fields the page reads.
///
/// Serializes back to the emitted object, so the full JSON view, the download and
/// the API all show what the model said. The typed fields only feed rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    /// Heuristic 0–100 score. Not range-checked; may be negative or above 100.
    pub match_score: Option<i64>,
    pub missing_skills: Option<Vec<String>>,
    pub partially_covered_skills: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
    pub feedback: Option<String>,
    /// The JSON object as the model returned it.
    pub raw: Map<String, Value>,
}

#[derive(Deserialize)]
struct ReportFields {
    #[serde(default, deserialize_with = "lenient_score")]
    match_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient_list")]
    missing_skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list")]
    partially_covered_skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list")]
    recommendations: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    feedback: Option<String>,
}

impl<'de> Deserialize<'de> for AnalysisReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let fields =
            ReportFields::deserialize(Value::Object(raw.clone())).map_err(D::Error::custom)?;
        Ok(Self {
            match_score: fields.match_score,
            missing_skills: fields.missing_skills,
            partially_covered_skills: fields.partially_covered_skills,
            recommendations: fields.recommendations,
            feedback: fields.feedback,
            raw,
        })
    }
}

impl Serialize for AnalysisReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

/// Accepts `72`, `72.9` (truncated), `"72"` and `"72/100"`. Anything else is treated as absent.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(score_from_value))
}

fn score_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let head = s.split('/').next().unwrap_or_default().trim();
            head.parse::<i64>()
                .ok()
                .or_else(|| head.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

/// Accepts a list of scalars or a single string. Empty strings are dropped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items.iter().filter_map(scalar_text).collect()),
        Some(other) => Some(scalar_text(&other).into_iter().collect()),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => return None,
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}
