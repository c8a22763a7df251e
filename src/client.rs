use crate::domain::model::{AnalysisResponse, FeedResponse, TickerRequest, TrackResponse};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ClientError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// Stateless binding to the SEC Insight backend: one method per endpoint,
/// one round trip per call. No caching, no retries, no timeout beyond the
/// transport's defaults; concurrent calls share only the connection pool.
pub struct FilingApi<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> FilingApi<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Start tracking `ticker`. The backend registers it with the filing
    /// monitor and returns its recent filings.
    pub async fn track(&self, ticker: &str) -> Result<TrackResponse> {
        let url = self.endpoint("/api/track")?;
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(&TickerRequest {
                ticker: ticker.to_string(),
            })
            .send()
            .await?;
        self.decode("track", response).await
    }

    /// Trigger on-demand analysis of one filing, identified by document URL,
    /// ticker and form type.
    ///
    /// All three query parameters are percent-encoded; a raw `&`, `#` or
    /// space in any of them would otherwise corrupt the query string.
    pub async fn analyze(
        &self,
        filing_url: &str,
        ticker: &str,
        form: &str,
    ) -> Result<AnalysisResponse> {
        let mut url = self.endpoint("/api/analyze")?;
        url.query_pairs_mut()
            .append_pair("url", filing_url)
            .append_pair("ticker", ticker)
            .append_pair("form", form);
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).send().await?;
        self.decode("analyze", response).await
    }

    /// Filings detected since the last monitor poll, most recent first.
    pub async fn feed(&self) -> Result<FeedResponse> {
        let url = self.endpoint("/api/feed")?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        self.decode("feed fetch", response).await
    }

    /// Company-wide analysis across the ticker's filing history.
    pub async fn analyze_company(&self, ticker: &str) -> Result<AnalysisResponse> {
        let url = self.endpoint("/api/analyze-company")?;
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(&TickerRequest {
                ticker: ticker.to_string(),
            })
            .send()
            .await?;
        self.decode("company analysis", response).await
    }

    /// Tickers currently registered with the backend monitor.
    pub async fn tracked(&self) -> Result<Vec<String>> {
        let url = self.endpoint("/api/tracked")?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        self.decode("tracked fetch", response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(self.config.api_base())?.join(path)?)
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        response: Response,
    ) -> Result<T> {
        let status = response.status();
        tracing::debug!("{} response status: {}", operation, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
