//! Integration tests for tortoise-hare using the library interface

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;
use tortoise_hare::ConfigBuilder;
use tortoise_hare::cli::{GraphFormat, OutputFormat};
use tortoise_hare::config::{RenderConfig, SweepConfig};
use tortoise_hare::executors::CommandExecutor;
use tortoise_hare::executors::render::RenderExecutor;
use tortoise_hare::graph::{PathRenderer, to_digraph};
use tortoise_hare::path::{PathShape, PathStore};
use tortoise_hare::reports::{
    HumanReportGenerator, JsonReportGenerator, JunitReportGenerator, ReportGenerator,
};
use tortoise_hare::sweep::{ShapeCheck, SweepResults};

fn render_config(shape: PathShape, format: GraphFormat, output: &TempDir) -> RenderConfig {
    RenderConfig::builder()
        .with_shape(shape)
        .with_format(format)
        .with_output(Some(output.path().join("path.out")))
        .with_highlight_cycle(true)
        .build()
        .unwrap()
}

#[test]
fn test_render_mermaid_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = render_config(PathShape::new(2, 2), GraphFormat::Mermaid, &temp_dir);

    RenderExecutor::execute(config).unwrap();

    let written = fs::read_to_string(temp_dir.path().join("path.out")).unwrap();
    let is_flowchart = predicate::str::starts_with("flowchart LR");
    let has_back_edge = predicate::str::contains("n3 ==>|cycle| n2");
    assert!(is_flowchart.eval(&written));
    assert!(has_back_edge.eval(&written));
}

#[test]
fn test_render_dot_without_highlight() {
    let graph = to_digraph(&PathStore::from_shape(PathShape::new(0, 3)));
    let mut output = Vec::new();
    PathRenderer::new(false)
        .render_dot(&graph, &mut output)
        .unwrap();

    let dot = String::from_utf8(output).unwrap();
    let highlighted = predicate::str::contains("#FF6500");
    assert!(highlighted.not().eval(&dot));
    assert!(predicate::str::contains(r#""n2" -> "n0""#).eval(&dot));
}

#[test]
fn test_sweep_config_feeds_every_report_format() {
    let config = SweepConfig::builder()
        .with_max_before(3)
        .with_max_cycle(4)
        .with_format(OutputFormat::Json)
        .build()
        .unwrap();

    let results = config.sweep().run(None);
    assert_eq!(results.checks().len(), 12);

    let generators: Vec<Box<dyn ReportGenerator>> = vec![
        Box::new(HumanReportGenerator::new(None)),
        Box::new(JsonReportGenerator::new()),
        Box::new(JunitReportGenerator::new()),
    ];
    for generator in generators {
        let report = generator.generate_report(&results).unwrap();
        assert!(!report.is_empty());
    }
}

#[test]
fn test_reports_flag_a_disagreeing_check() {
    let mut broken = ShapeCheck::run(PathShape::new(2, 2));
    broken.analysis.nodes_before_cycle = 1;
    let results = SweepResults::from(vec![broken, ShapeCheck::run(PathShape::new(0, 0))]);

    assert!(!results.all_passed());

    let json = JsonReportGenerator::new().generate_report(&results).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["failure_count"], 1);

    let junit = JunitReportGenerator::new().generate_report(&results).unwrap();
    assert!(predicate::str::contains("expected 2 nodes before cycle, found 1").eval(&junit));
}
