//! Report Renderer — projects an `AnalysisReport` into display values.
//!
//! This is the single place where defaults are substituted for missing fields:
//!
//! | field                      | when absent                 |
//! |----------------------------|-----------------------------|
//! | `match_score`              | `0`                         |
//! | `missing_skills`           | no bullets                  |
//! | `partially_covered_skills` | the literal `"None"`        |
//! | `recommendations`          | no bullets                  |
//! | `feedback`                 | `"No feedback provided."`   |

use serde::Serialize;

use crate::analysis::report::AnalysisReport;

pub const NO_FEEDBACK: &str = "No feedback provided.";
pub const NO_PARTIAL_SKILLS: &str = "None";
pub const REPORT_FILE_NAME: &str = "report.json";

/// Display-ready projection of a report. Pure function of its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    /// Raw score as reported by the model, shown in the metric.
    pub score: i64,
    /// Score clamped into 0–100 for the progress bar.
    pub progress: u8,
    /// `"<score>/100"`.
    pub score_label: String,
    pub missing_skills: Vec<String>,
    pub partially_covered_skills: Vec<String>,
    /// Shown instead of the partial-skills list when it is empty or absent.
    pub partially_covered_placeholder: Option<String>,
    pub recommendations: Vec<String>,
    pub feedback: String,
    /// Pretty JSON for the on-page viewer.
    pub report_json_pretty: String,
    /// Compact JSON carried by the download form.
    pub report_json: String,
}

impl ReportView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let score = report.match_score.unwrap_or(0);
        let partially_covered_skills = report.partially_covered_skills.clone().unwrap_or_default();
        let partially_covered_placeholder = partially_covered_skills
            .is_empty()
            .then(|| NO_PARTIAL_SKILLS.to_string());

        Self {
            score,
            progress: clamp_progress(score),
            score_label: format!("{score}/100"),
            missing_skills: report.missing_skills.clone().unwrap_or_default(),
            partially_covered_skills,
            partially_covered_placeholder,
            recommendations: report.recommendations.clone().unwrap_or_default(),
            feedback: report
                .feedback
                .clone()
                .unwrap_or_else(|| NO_FEEDBACK.to_string()),
            report_json_pretty: report_to_json(report, true),
            report_json: report_to_json(report, false),
        }
    }
}

pub fn clamp_progress(score: i64) -> u8 {
    score.clamp(0, 100) as u8
}

/// Serializes the object the model emitted. A JSON map cannot fail to serialize;
/// an empty object is the fallback.
pub fn report_to_json(report: &AnalysisReport, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    result.unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(json: &str) -> AnalysisReport {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_score_above_range_clamps_progress_only() {
        let view = ReportView::from_report(&report(r#"{"match_score": 130}"#));
        assert_eq!(view.score, 130);
        assert_eq!(view.score_label, "130/100");
        assert_eq!(view.progress, 100);
    }

    #[test]
    fn test_score_below_range_clamps_progress_only() {
        let view = ReportView::from_report(&report(r#"{"match_score": -20}"#));
        assert_eq!(view.score, -20);
        assert_eq!(view.score_label, "-20/100");
        assert_eq!(view.progress, 0);
    }

    #[test]
    fn test_progress_matches_score_in_range() {
        for score in [0_i64, 1, 50, 99, 100] {
            assert_eq!(clamp_progress(score) as i64, score);
        }
    }

    #[test]
    fn test_missing_recommendations_render_no_bullets() {
        let view = ReportView::from_report(&report(r#"{"match_score": 60}"#));
        assert!(view.recommendations.is_empty());
    }

    #[test]
    fn test_missing_partial_skills_show_none() {
        let view = ReportView::from_report(&report(r#"{"match_score": 60}"#));
        assert!(view.partially_covered_skills.is_empty());
        assert_eq!(view.partially_covered_placeholder.as_deref(), Some("None"));
    }

    #[test]
    fn test_empty_partial_skills_show_none() {
        let view = ReportView::from_report(&report(r#"{"partially_covered_skills": []}"#));
        assert_eq!(view.partially_covered_placeholder.as_deref(), Some("None"));
    }

    #[test]
    fn test_present_partial_skills_have_no_placeholder() {
        let view =
            ReportView::from_report(&report(r#"{"partially_covered_skills": ["Jenkins"]}"#));
        assert_eq!(view.partially_covered_skills, vec!["Jenkins".to_string()]);
        assert!(view.partially_covered_placeholder.is_none());
    }

    #[test]
    fn test_missing_feedback_uses_fallback() {
        let view = ReportView::from_report(&AnalysisReport::default());
        assert_eq!(view.feedback, NO_FEEDBACK);
        assert_eq!(view.score, 0);
        assert_eq!(view.progress, 0);
    }

    #[test]
    fn test_view_does_not_mutate_report() {
        let original = report(r#"{"match_score": 150, "recommendations": ["a"]}"#);
        let copy = original.clone();
        let _ = ReportView::from_report(&original);
        assert_eq!(original, copy);
    }

    #[test]
    fn test_json_views_keep_values_the_page_cannot_use() {
        let json = r#"{"match_score":"high","feedback":"","missing_skills":[" Go ",""],"recommendations":null}"#;
        let view = ReportView::from_report(&report(json));
        assert_eq!(view.report_json, json);
        assert!(view.report_json_pretty.contains(r#""match_score": "high""#));
        assert_eq!(view.score, 0);
        assert_eq!(view.feedback, NO_FEEDBACK);
        assert_eq!(view.missing_skills, vec!["Go".to_string()]);
    }

    #[test]
    fn test_download_json_round_trips_report() {
        let original = report(r#"{"match_score": 70, "missing_skills": ["Go"], "note": "x"}"#);
        let view = ReportView::from_report(&original);
        let parsed: AnalysisReport = serde_json::from_str(&view.report_json).unwrap();
        assert_eq!(parsed, original);
    }
}
