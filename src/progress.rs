use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::path::PathShape;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        let term = Term::stderr();
        Self {
            term,
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    /// Bar of the phase in progress, if any
    pub fn current_bar(&self) -> Option<ProgressBar> {
        self.current_bar.clone()
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn building_path(&self, shape: PathShape) {
        let _ = self.term.clear_line();
        eprint!(
            "\r{} Building path ({})... ",
            style(self.next_frame()).cyan(),
            style(shape).dim()
        );
    }

    pub fn start_sweep(&mut self, case_count: usize) -> ProgressBar {
        eprintln!(
            "{} Sweeping {} path shapes...",
            style("🔍").cyan(),
            style(case_count).yellow().bold()
        );
        let pb = self.create_progress_bar(case_count as u64, "Checking shapes");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_sweep(&mut self, passed: usize, total: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if passed == total {
            eprintln!(
                "\r{} All {} shapes agree with the detector {}",
                style("✓").green().bold(),
                style(total).yellow().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "\r{} {} of {} shapes disagree with the detector",
                style("⚠").yellow().bold(),
                style(total - passed).red().bold(),
                style(total).yellow()
            );
        }
    }

    pub fn finish_analysis(&self, has_cycle: bool) {
        let _ = self.term.clear_line();
        if has_cycle {
            eprintln!("\r{} Cycle detected", style("🔄").yellow());
        } else {
            eprintln!("\r{} Path ends without a cycle", style("✓").green());
        }
    }
}
