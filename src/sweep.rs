//! Shape sweeps: build paths of known layout and check the detector agrees

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::detector::{CycleAnalysis, analyze};
use crate::path::{PathShape, PathStore};
use crate::progress::ProgressReporter;

/// A constructed shape and what the detector reported for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeCheck {
    pub shape: PathShape,
    pub analysis: CycleAnalysis,
}

impl ShapeCheck {
    /// Build a path of `shape` and analyze it
    pub fn run(shape: PathShape) -> Self {
        let path = PathStore::from_shape(shape);
        let analysis = analyze(&path);

        debug!(%shape, cycle_start = ?analysis.cycle_start, "analyzed path");

        Self { shape, analysis }
    }

    /// Whether the analysis matches the shape the path was built from
    pub fn passed(&self) -> bool {
        self.analysis.has_cycle() == self.shape.has_cycle()
            && self.analysis.nodes_before_cycle == self.shape.nodes_before_cycle
            && self.analysis.nodes_in_cycle == self.shape.nodes_in_cycle
    }

    /// Human-readable reasons the check failed, empty when it passed
    pub fn mismatches(&self) -> Vec<String> {
        let mut mismatches = Vec::new();

        if self.analysis.has_cycle() != self.shape.has_cycle() {
            mismatches.push(format!(
                "expected cycle: {}, found cycle: {}",
                self.shape.has_cycle(),
                self.analysis.has_cycle()
            ));
        }
        if self.analysis.nodes_before_cycle != self.shape.nodes_before_cycle {
            mismatches.push(format!(
                "expected {} nodes before cycle, found {}",
                self.shape.nodes_before_cycle, self.analysis.nodes_before_cycle
            ));
        }
        if self.analysis.nodes_in_cycle != self.shape.nodes_in_cycle {
            mismatches.push(format!(
                "expected {} nodes in cycle, found {}",
                self.shape.nodes_in_cycle, self.analysis.nodes_in_cycle
            ));
        }

        mismatches
    }
}

/// Grid of shapes `0..max_before` by `0..max_cycle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSweep {
    max_before: usize,
    max_cycle: usize,
}

impl ShapeSweep {
    pub fn new(max_before: usize, max_cycle: usize) -> Self {
        Self {
            max_before,
            max_cycle,
        }
    }

    /// Number of shapes in the grid, or `None` when it does not fit in a
    /// `usize`
    pub fn case_count(&self) -> Option<usize> {
        self.max_before.checked_mul(self.max_cycle)
    }

    /// Every shape in the grid, ordered by lead-in length then loop length
    pub fn shapes(&self) -> Vec<PathShape> {
        (0..self.max_before)
            .flat_map(|before| (0..self.max_cycle).map(move |cycle| PathShape::new(before, cycle)))
            .collect()
    }

    /// Check every shape, spreading the work across the rayon pool
    pub fn run(&self, progress: Option<&ProgressReporter>) -> SweepResults {
        let bar = progress.and_then(ProgressReporter::current_bar);

        let mut checks: Vec<ShapeCheck> = self
            .shapes()
            .into_par_iter()
            .map(|shape| {
                let check = ShapeCheck::run(shape);
                if let Some(bar) = &bar {
                    bar.inc(1);
                }
                check
            })
            .collect();

        checks.sort_by_key(|check| check.shape);

        let results = SweepResults { checks };
        for failure in results.failed() {
            warn!(shape = %failure.shape, "detector disagrees with constructed shape");
        }

        results
    }
}

/// Outcome of a [`ShapeSweep`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepResults {
    checks: Vec<ShapeCheck>,
}

impl SweepResults {
    pub fn checks(&self) -> &[ShapeCheck] {
        &self.checks
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|check| check.passed()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &ShapeCheck> {
        self.checks.iter().filter(|check| !check.passed())
    }

    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(ShapeCheck::passed)
    }
}

impl From<Vec<ShapeCheck>> for SweepResults {
    fn from(mut checks: Vec<ShapeCheck>) -> Self {
        checks.sort_by_key(|check| check.shape);
        Self { checks }
    }
}
