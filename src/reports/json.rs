//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::TortoiseHareError;
use crate::sweep::SweepResults;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, results: &SweepResults) -> Result<String, TortoiseHareError> {
        let cases: Vec<_> = results
            .checks()
            .iter()
            .map(|check| {
                json!({
                    "shape": check.shape,
                    "analysis": check.analysis,
                    "passed": check.passed(),
                    "mismatches": check.mismatches(),
                })
            })
            .collect();

        let report = json!({
            "all_passed": results.all_passed(),
            "case_count": results.checks().len(),
            "failure_count": results.checks().len() - results.passed_count(),
            "cases": cases,
        });

        serde_json::to_string_pretty(&report).map_err(TortoiseHareError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::path::PathShape;
    use crate::sweep::{ShapeCheck, ShapeSweep};

    #[test]
    fn test_json_report_empty_results() {
        let report = JsonReportGenerator::new()
            .generate_report(&SweepResults::default())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["all_passed"], true);
        assert_eq!(json["case_count"], 0);
        assert_eq!(json["cases"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_case_structure() {
        let results = SweepResults::from(vec![ShapeCheck::run(PathShape::new(2, 3))]);
        let report = JsonReportGenerator::new().generate_report(&results).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        let case = &json["cases"][0];
        assert_eq!(case["shape"]["nodes_before_cycle"], 2);
        assert_eq!(case["shape"]["nodes_in_cycle"], 3);
        assert_eq!(case["analysis"]["cycle_start"], 2);
        assert_eq!(case["analysis"]["nodes_before_cycle"], 2);
        assert_eq!(case["analysis"]["nodes_in_cycle"], 3);
        assert_eq!(case["passed"], true);
        assert_eq!(case["mismatches"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_acyclic_case_has_null_start() {
        let results = SweepResults::from(vec![ShapeCheck::run(PathShape::new(3, 0))]);
        let report = JsonReportGenerator::new().generate_report(&results).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert!(json["cases"][0]["analysis"]["cycle_start"].is_null());
    }

    #[test]
    fn test_json_report_counts_failures() {
        let mut broken = ShapeCheck::run(PathShape::new(1, 1));
        broken.analysis.cycle_start = None;
        let results = SweepResults::from(vec![broken, ShapeCheck::run(PathShape::new(0, 0))]);

        let report = JsonReportGenerator::new().generate_report(&results).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["all_passed"], false);
        assert_eq!(json["case_count"], 2);
        assert_eq!(json["failure_count"], 1);
    }

    #[test]
    fn test_json_report_sweep_round_trips_analysis() {
        let results = ShapeSweep::new(3, 3).run(None);
        let report = JsonReportGenerator::new().generate_report(&results).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        let parsed: Vec<ShapeCheck> = json["cases"]
            .as_array()
            .unwrap()
            .iter()
            .map(|case| ShapeCheck {
                shape: serde_json::from_value(case["shape"].clone()).unwrap(),
                analysis: serde_json::from_value(case["analysis"].clone()).unwrap(),
            })
            .collect();

        assert_eq!(parsed, results.checks());
    }
}
