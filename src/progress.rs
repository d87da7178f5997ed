use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Operator feedback while indexing. Has no effect on the result.
pub trait Progress {
    fn labels_found(&mut self, _count: usize) {}
    fn label_started(&mut self, _label: &str, _entries: usize) {}
    fn entry_indexed(&mut self) {}
    fn label_finished(&mut self, _label: &str) {}
    fn finished(&mut self, _records: usize) {}
}

/// Reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Two stacked bars: one over labels, one over the current label's entries.
pub struct TerminalProgress {
    bars: MultiProgress,
    labels: Option<ProgressBar>,
    entries: Option<ProgressBar>,
}

const LABELS_TEMPLATE: &str = "{msg:<28} [{bar:40.cyan/blue}] {pos}/{len}";
const ENTRIES_TEMPLATE: &str = "  {msg:<26} [{bar:40.green/white}] {pos}/{len} ({per_sec})";

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .map(|s| s.progress_chars("=> "))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self {
            bars: MultiProgress::new(),
            labels: None,
            entries: None,
        }
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for TerminalProgress {
    fn labels_found(&mut self, count: usize) {
        let pb = self.bars.add(ProgressBar::new(count as u64));
        pb.set_style(style(LABELS_TEMPLATE));
        pb.set_message("Processing garbage types");
        self.labels = Some(pb);
    }

    fn label_started(&mut self, label: &str, entries: usize) {
        let pb = self.bars.add(ProgressBar::new(entries as u64));
        pb.set_style(style(ENTRIES_TEMPLATE));
        pb.set_message(label.to_string());
        self.entries = Some(pb);
    }

    fn entry_indexed(&mut self) {
        if let Some(pb) = &self.entries {
            pb.inc(1);
        }
    }

    fn label_finished(&mut self, _label: &str) {
        if let Some(pb) = self.entries.take() {
            pb.finish_and_clear();
            self.bars.remove(&pb);
        }
        if let Some(pb) = &self.labels {
            pb.inc(1);
        }
    }

    fn finished(&mut self, records: usize) {
        if let Some(pb) = self.labels.take() {
            pb.finish_with_message(format!("Indexed {} files", records));
        }
    }
}
