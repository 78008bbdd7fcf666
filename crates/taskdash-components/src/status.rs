//! Task-status counts as a chart series

use taskdash_core::{CategoryDatum, Series};

/// Workflow status of a task, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Stable category key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Default palette
    pub fn color(&self) -> &'static str {
        match self {
            Self::Pending => "#7e57c2",
            Self::InProgress => "#42a5f5",
            Self::Done => "#66bb6a",
        }
    }

    /// Match a label or key, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label) || s.key().eq_ignore_ascii_case(label))
    }
}

/// Build the chart series from labelled counts.
///
/// Entries come out in status order whatever the input order; a status with no
/// matching label counts as zero, and unknown labels are skipped.
pub fn status_series(counts: &[(&str, i64)]) -> Series {
    let mut totals = [0i64; 3];
    for (label, count) in counts {
        match TaskStatus::from_label(label) {
            Some(status) => {
                let slot = &mut totals[status as usize];
                *slot = slot.saturating_add(*count);
            }
            None => tracing::warn!("Ignoring unknown task status `{}`", label),
        }
    }

    TaskStatus::ALL
        .into_iter()
        .zip(totals)
        .map(|(status, count)| CategoryDatum::new(status.label(), count, status.color()))
        .collect()
}
