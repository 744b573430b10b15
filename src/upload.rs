use crate::error::{Result, TallyError};
use crate::models::{FileContent, ProcessingResult};

/// Observable phase of the upload flow, derived from the controller's
/// fields rather than stored directly.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadPhase {
    Idle,
    FilesIncomplete,
    Ready,
    Processing,
    Succeeded(ProcessingResult),
    Failed(String),
}

#[derive(Debug, Clone)]
enum Outcome {
    Success(ProcessingResult),
    Failure(String),
}

/// Drives the submit flow: collect two files, submit once both are present,
/// record the outcome. Holds no I/O; the command layer performs ingestion
/// and the HTTP call and feeds the result back through `finish`.
#[derive(Default)]
pub struct UploadController {
    bank: Option<FileContent>,
    rules: Option<FileContent>,
    processing: bool,
    outcome: Option<Outcome>,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choosing or replacing a file re-evaluates readiness. Ignored while a
    /// submission is in flight, mirroring the disabled inputs.
    pub fn set_bank_file(&mut self, file: FileContent) {
        if !self.processing {
            self.bank = Some(file);
        }
    }

    pub fn set_rules_file(&mut self, file: FileContent) {
        if !self.processing {
            self.rules = Some(file);
        }
    }

    pub fn bank_file(&self) -> Option<&FileContent> {
        self.bank.as_ref()
    }

    pub fn rules_file(&self) -> Option<&FileContent> {
        self.rules.as_ref()
    }

    /// Submit is enabled iff both files are present and nothing is in
    /// flight.
    pub fn can_submit(&self) -> bool {
        self.bank.is_some() && self.rules.is_some() && !self.processing
    }

    /// Move into the in-flight state, clearing any previous outcome.
    /// Returns the two files to submit.
    pub fn begin_submit(&mut self) -> Result<(&FileContent, &FileContent)> {
        if !self.can_submit() {
            return Err(TallyError::MissingFiles);
        }
        self.processing = true;
        self.outcome = None;
        match (self.bank.as_ref(), self.rules.as_ref()) {
            (Some(bank), Some(rules)) => Ok((bank, rules)),
            _ => Err(TallyError::MissingFiles),
        }
    }

    /// Record the submission outcome. Always clears the in-flight flag, so
    /// another attempt is possible from either outcome.
    pub fn finish(&mut self, result: Result<ProcessingResult>) {
        self.processing = false;
        self.outcome = Some(match result {
            Ok(summary) => Outcome::Success(summary),
            Err(e) => Outcome::Failure(e.to_string()),
        });
    }

    pub fn phase(&self) -> UploadPhase {
        if self.processing {
            return UploadPhase::Processing;
        }
        match &self.outcome {
            Some(Outcome::Success(summary)) => UploadPhase::Succeeded(summary.clone()),
            Some(Outcome::Failure(message)) => UploadPhase::Failed(message.clone()),
            None => {
                if self.bank.is_some() && self.rules.is_some() {
                    UploadPhase::Ready
                } else if self.bank.is_some() || self.rules.is_some() {
                    UploadPhase::FilesIncomplete
                } else {
                    UploadPhase::Idle
                }
            }
        }
    }
}
