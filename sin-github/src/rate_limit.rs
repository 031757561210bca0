//! API rate-limit status

use crate::{Error, GitHubClient, Result};
use chrono::{DateTime, Utc};
use octocrab::models::Rate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Core REST API quota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub used: u64,
    /// When the quota window resets
    pub reset: DateTime<Utc>,
}

impl RateLimit {
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl TryFrom<Rate> for RateLimit {
    type Error = Error;

    fn try_from(rate: Rate) -> Result<Self> {
        let reset = i64::try_from(rate.reset)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| Error::Parse(format!("Rate-limit reset out of range: {}", rate.reset)))?;

        Ok(RateLimit {
            limit: rate.limit as u64,
            remaining: rate.remaining as u64,
            used: rate.used as u64,
            reset,
        })
    }
}

impl GitHubClient {
    /// Current rate-limit status; does not count against the quota
    pub async fn rate_limit(&self) -> Result<RateLimit> {
        let response = self.client().ratelimit().get().await?;
        let rate_limit = RateLimit::try_from(response.rate)?;

        debug!(
            remaining = rate_limit.remaining,
            limit = rate_limit.limit,
            reset = %rate_limit.reset,
            "Fetched rate limit"
        );
        Ok(rate_limit)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::mock_client;
    use crate::Error;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn rate_limit_json(reset: u64) -> serde_json::Value {
        let rate = json!({"limit": 5000, "remaining": 0, "reset": reset, "used": 5000});
        json!({
            "resources": {"core": rate, "search": rate},
            "rate": rate
        })
    }

    #[tokio::test]
    async fn test_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rate_limit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rate_limit_json(1_700_000_000)))
            .mount(&server)
            .await;

        let rate_limit = mock_client(&server).rate_limit().await.unwrap();
        assert_eq!(rate_limit.limit, 5000);
        assert_eq!(rate_limit.used, 5000);
        assert!(rate_limit.is_exhausted());
        assert_eq!(rate_limit.reset.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[tokio::test]
    async fn test_rate_limit_rejects_out_of_range_reset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rate_limit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rate_limit_json(u64::MAX)))
            .mount(&server)
            .await;

        let err = mock_client(&server).rate_limit().await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
