//! Exec summary prep document (`prep/execsummary-N.json`).
//!
//! Only the keys the inspector looks at are modeled. Values stay as raw JSON
//! because generated files have not always used the same types.

use serde::Deserialize;
use serde_json::Value as Json;

#[derive(Debug, Default, Deserialize)]
pub struct ExecSummary {
    #[serde(default, rename = "executiveSummary")]
    pub executive_summary: Option<Json>,
    #[serde(default, rename = "overallSynthesis")]
    pub overall_synthesis: Option<Json>,
    #[serde(default)]
    pub keywords: Option<Json>,
    #[serde(default, rename = "keyQuestions")]
    pub key_questions: Option<Json>,
    #[serde(default)]
    pub timeline: Option<Json>,
}

impl ExecSummary {
    /// View a parsed document. A non-object root carries none of the keys.
    pub fn from_json(json: &Json) -> Self {
        if !json.is_object() {
            return ExecSummary::default();
        }
        ExecSummary::deserialize(json).unwrap_or_default()
    }

    /// `executiveSummary`, or `overallSynthesis` when the former is empty.
    pub fn summary(&self) -> Option<&Json> {
        self.executive_summary
            .as_ref()
            .filter(|v| !is_empty(v))
            .or(self.overall_synthesis.as_ref())
            .filter(|v| !is_empty(v))
    }

    /// Length of the summary: characters for strings, elements for
    /// collections, zero for anything else.
    pub fn summary_len(&self) -> usize {
        match self.summary() {
            Some(Json::String(s)) => s.chars().count(),
            Some(Json::Array(a)) => a.len(),
            Some(Json::Object(o)) => o.len(),
            _ => 0,
        }
    }
}

/// Null, false, zero, and empty strings/collections count as empty.
pub fn is_empty(v: &Json) -> bool {
    match v {
        Json::Null => true,
        Json::Bool(b) => !b,
        Json::Number(n) => n.as_f64() == Some(0.0),
        Json::String(s) => s.is_empty(),
        Json::Array(a) => a.is_empty(),
        Json::Object(o) => o.is_empty(),
    }
}

/// True when the key is absent or holds an empty value.
pub fn is_missing(v: Option<&Json>) -> bool {
    v.map_or(true, is_empty)
}
