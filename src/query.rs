use crate::error::{Result, TallyError};
use crate::models::TransactionRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryPhase {
    Idle,
    Loading,
    Loaded(Vec<TransactionRecord>),
    Error(String),
}

/// Token identifying one search. `finish` only applies the result carrying
/// the newest token, so overlapping searches resolve last-request-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchToken(u64);

/// Drives the company-records lookup. Holds no I/O; the command layer runs
/// the HTTP call between `start` and `finish`.
pub struct QueryController {
    seq: u64,
    phase: QueryPhase,
}

impl Default for QueryController {
    fn default() -> Self {
        Self {
            seq: 0,
            phase: QueryPhase::Idle,
        }
    }
}

impl QueryController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the company identifier and enter `Loading`. A blank (empty
    /// or all-whitespace) identifier is rejected here, before any network
    /// call happens.
    pub fn start(&mut self, company_id: &str) -> Result<SearchToken> {
        if company_id.trim().is_empty() {
            self.phase = QueryPhase::Error(TallyError::BlankCompanyId.to_string());
            return Err(TallyError::BlankCompanyId);
        }
        self.seq += 1;
        self.phase = QueryPhase::Loading;
        Ok(SearchToken(self.seq))
    }

    /// Apply a search result. Returns false (and changes nothing) when the
    /// token is stale, i.e. a newer search has started since.
    pub fn finish(&mut self, token: SearchToken, result: Result<Vec<TransactionRecord>>) -> bool {
        if token.0 != self.seq {
            return false;
        }
        self.phase = match result {
            Ok(records) => QueryPhase::Loaded(records),
            Err(e) => QueryPhase::Error(e.to_string()),
        };
        true
    }

    pub fn phase(&self) -> &QueryPhase {
        &self.phase
    }
}
