use serde::{Deserialize, Serialize};

/// Body sent to `/api/track` and `/api/analyze-company`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerRequest {
    pub ticker: String,
}

/// One EDGAR filing as the backend reports it. Keys are camelCase on the
/// wire; dates are left as the raw strings the SEC submissions API returns
/// (`reportDate` can be empty).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filing {
    pub ticker: String,
    pub cik: String,
    pub form: String,
    #[serde(rename = "accessionNumber")]
    pub accession_number: String,
    #[serde(rename = "filingDate")]
    pub filing_date: String,
    #[serde(rename = "reportDate", default)]
    pub report_date: String,
    pub url: String,
}

/// Response of `POST /api/track`: the ticker as the backend normalized it,
/// plus its most recent filings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackResponse {
    pub ticker: String,
    pub recent_filings: Vec<Filing>,
}

/// Response of `POST /api/analyze` and `POST /api/analyze-company`: a
/// markdown analysis produced by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// Response of `GET /api/feed`: filings detected since the last poll,
/// most recent first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedResponse {
    #[serde(default)]
    pub updates: Vec<Filing>,
}
