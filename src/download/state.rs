//! Per-file outcomes and run statistics.

/// What happened to one index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Fetched and verified against the probed size.
    Downloaded { file_name: String, bytes: u64 },
    /// Local copy already had the probed size.
    Skipped { file_name: String },
    /// Empty index line; nothing was requested.
    Blank,
    /// Gave up on this file.
    Failed { attempts: u32, error: String },
}

/// A file that could not be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub url: String,
    pub attempts: u32,
    pub error: String,
}

/// Statistics across one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub downloaded: u64,
    pub skipped: u64,
    pub blank: u64,
    pub bytes_downloaded: u64,
    pub failures: Vec<FailedFile>,
}

impl RunSummary {
    /// Record the outcome for `url`.
    pub fn record(&mut self, url: &str, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Downloaded { bytes, .. } => {
                self.downloaded += 1;
                self.bytes_downloaded += bytes;
            }
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Blank => self.blank += 1,
            FileOutcome::Failed { attempts, error } => self.failures.push(FailedFile {
                url: url.to_string(),
                attempts,
                error,
            }),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Entries that were actually attempted (blank lines excluded).
    pub fn total(&self) -> usize {
        (self.downloaded + self.skipped) as usize + self.failed()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
