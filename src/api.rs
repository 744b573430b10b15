use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::{Result, TallyError};
use crate::models::{FileContent, FileKind, ProcessingResult, TransactionRecord};

/// All service routes live under this prefix; in production deployments a
/// reverse proxy rewrites it to the backend origin.
const API_PREFIX: &str = "/api/v1/accounting";

const GENERIC_PROCESS_ERROR: &str = "An error occurred while processing the files";
const GENERIC_QUERY_ERROR: &str = "An error occurred while fetching transactions";

/// Typed client for the classification service. One call per operation,
/// no retries, no per-request timeout.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    /// Health check against `GET /pong`. The response body is ignored.
    pub fn ping(&self) -> Result<()> {
        log::debug!("GET {}", self.url("/pong"));
        let response = self.client.get(self.url("/pong")).send()?;
        if !response.status().is_success() {
            return Err(TallyError::Api(format!(
                "Ping failed: {}",
                response.status()
            )));
        }
        Ok(())
    }

    /// Submit both files as one multipart request with file parts named
    /// `bankTransactions` and `rules`. A non-2xx response may carry a JSON
    /// `{ "message": … }` body; that message is surfaced when present,
    /// otherwise a generic one.
    pub fn process_transactions(
        &self,
        bank: &FileContent,
        rules: &FileContent,
    ) -> Result<ProcessingResult> {
        let form = Form::new()
            .part("bankTransactions", file_part(bank)?)
            .part("rules", file_part(rules)?);

        log::debug!(
            "POST {} ({} + {})",
            self.url("/process"),
            bank.name,
            rules.name
        );
        let response = self
            .client
            .post(self.url("/process"))
            .multipart(form)
            .send()?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .ok()
                .and_then(|body| body.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_PROCESS_ERROR.to_string());
            return Err(TallyError::Api(message));
        }

        Ok(response.json()?)
    }

    /// Fetch a company's stored transactions via
    /// `GET /records?companyId=<id>`.
    pub fn transactions_by_company(&self, company_id: &str) -> Result<Vec<TransactionRecord>> {
        log::debug!("GET {}?companyId={company_id}", self.url("/records"));
        let response = self
            .client
            .get(self.url("/records"))
            .query(&[("companyId", company_id)])
            .send()?;

        if !response.status().is_success() {
            return Err(TallyError::Api(GENERIC_QUERY_ERROR.to_string()));
        }

        Ok(response.json()?)
    }
}

fn file_part(file: &FileContent) -> Result<Part> {
    let mime = match file.kind {
        FileKind::Csv => "text/csv",
        FileKind::Json => "application/json",
    };
    Ok(Part::bytes(file.content.clone().into_bytes())
        .file_name(file.name.clone())
        .mime_str(mime)?)
}
