//! Completeness rules for exec summary prep files (`prep/execsummary-N.json`).

use crate::models::exec_summary::{is_missing, ExecSummary};
use crate::models::{Issue, Severity};
use serde_json::Value as Json;

/// Check one exec summary. Invalid JSON is reported once and ends the file.
pub fn check_exec_summary(file: &str, content: &str, summary_min_chars: usize) -> Vec<Issue> {
    let json: Json = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => return vec![Issue::new(Severity::Critical, file, "Invalid JSON.")],
    };
    let doc = ExecSummary::from_json(&json);
    let mut issues = Vec::new();

    if doc.summary_len() < summary_min_chars {
        issues.push(Issue::new(
            Severity::Warning,
            file,
            "Executive summary missing or too short.",
        ));
    }
    if is_missing(doc.keywords.as_ref()) {
        issues.push(Issue::new(Severity::Minor, file, "No keywords defined."));
    }
    if is_missing(doc.key_questions.as_ref()) {
        issues.push(Issue::new(Severity::Minor, file, "No key questions defined."));
    }
    if is_missing(doc.timeline.as_ref()) {
        issues.push(Issue::new(Severity::Minor, file, "No timeline events defined."));
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const F: &str = "prep/execsummary-1.json";

    fn complete(summary: &str) -> String {
        json!({
            "executiveSummary": summary,
            "keywords": ["Meiji"],
            "keyQuestions": ["Why 1868?"],
            "timeline": [{"year": 1868, "event": "Restoration"}]
        })
        .to_string()
    }

    #[test]
    fn test_summary_length_boundary() {
        let short = "x".repeat(49);
        let issues = check_exec_summary(F, &complete(&short), 50);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].message, "Executive summary missing or too short.");

        let exact = "x".repeat(50);
        assert!(check_exec_summary(F, &complete(&exact), 50).is_empty());
    }

    #[test]
    fn test_absent_summary_warns_once() {
        let doc = json!({"keywords": ["a"], "keyQuestions": ["b"], "timeline": ["c"]}).to_string();
        let issues = check_exec_summary(F, &doc, 50);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_overall_synthesis_is_accepted() {
        let doc = json!({
            "overallSynthesis": "s".repeat(60),
            "keywords": ["a"],
            "keyQuestions": ["b"],
            "timeline": ["c"]
        })
        .to_string();
        assert!(check_exec_summary(F, &doc, 50).is_empty());
    }

    #[test]
    fn test_invalid_json_suppresses_other_checks() {
        let issues = check_exec_summary(F, "{\"executiveSummary\": ", 50);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].message, "Invalid JSON.");
    }

    #[test]
    fn test_empty_collections_are_minor() {
        let doc = json!({
            "executiveSummary": "s".repeat(80),
            "keywords": [],
            "keyQuestions": null,
            "timeline": {}
        })
        .to_string();
        let msgs: Vec<_> = check_exec_summary(F, &doc, 50)
            .into_iter()
            .map(|i| (i.severity, i.message))
            .collect();
        assert_eq!(
            msgs,
            vec![
                (Severity::Minor, "No keywords defined.".to_string()),
                (Severity::Minor, "No key questions defined.".to_string()),
                (Severity::Minor, "No timeline events defined.".to_string()),
            ]
        );
    }
}
