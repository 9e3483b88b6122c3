use crate::serialization::JsonSerializer;
use crate::traits::{RemoteStore, Serializer};
use countdown_core::{CountdownError, CountdownResult};
use countdown_domain::CountdownEntry;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Spreadsheet web app reached over HTTP.
///
/// `GET endpoint` returns the whole list as a JSON array and
/// `POST endpoint` with a JSON array body replaces it.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    endpoint: String,
}

impl HttpStore {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> CountdownResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CountdownError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait::async_trait]
impl RemoteStore for HttpStore {
    async fn fetch_all(&self) -> CountdownResult<Vec<CountdownEntry>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| CountdownError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CountdownError::Connection(format!(
                "Fetching countdowns failed: HTTP {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CountdownError::Connection(e.to_string()))?;
        let entries: Vec<CountdownEntry> = JsonSerializer.deserialize(&body)?;

        tracing::info!(
            "Fetched {} countdowns ({} bytes) from {}",
            entries.len(),
            body.len(),
            self.endpoint
        );

        Ok(entries)
    }

    async fn replace_all(&self, entries: &[CountdownEntry]) -> CountdownResult<()> {
        let body = JsonSerializer.serialize(&entries.to_vec())?;
        let body_len = body.len();

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| CountdownError::Connection(e.to_string()))?;

        // The web app's reply carries nothing we act on.
        tracing::debug!(
            "Sent {} countdowns ({} bytes) to {}, store answered {}",
            entries.len(),
            body_len,
            self.endpoint,
            response.status()
        );

        Ok(())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
