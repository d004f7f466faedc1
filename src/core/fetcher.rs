use crate::core::normalize;
use crate::core::transport::{RequestOptions, RetryingTransport};
use crate::domain::model::{
    Envelope, FetchOutcome, ImagesResponse, ItineraryResponse, Locale, ReviewsResponse,
};
use crate::domain::ports::{ConfigProvider, ContentSource};
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::validate_non_empty_string;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// 動態內容的 HTTP 客戶端：重試、檢查狀態碼、解析並轉換回應
pub struct ContentClient<C: ConfigProvider> {
    config: C,
    transport: RetryingTransport,
}

impl<C: ConfigProvider> ContentClient<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self {
            config,
            transport: RetryingTransport::new(client),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn default_package(&self) -> &str {
        self.config.package_id()
    }

    /// `{base_url}/api/{resource}/{package_id}`，套件 ID 會經過路徑編碼
    fn endpoint(&self, resource: &str, package_id: &str) -> Result<Url> {
        validate_non_empty_string("package_id", package_id)?;
        normalize::api_url(self.config.api_base_url(), ["api", resource, package_id])
    }

    /// Runs the transport and returns the body of a 2xx response. Any other
    /// final status becomes `ContentError::StatusError`.
    async fn get_body(&self, label: &str, url: &Url) -> Result<String> {
        let policy = self.config.retry_policy();
        let options = RequestOptions::default().with_timeout(policy.request_timeout);

        tracing::info!("🌐 [{}] Fetching {}", label, url);

        let response = self
            .transport
            .attempt(url.as_str(), &options, policy.max_retries, policy.initial_delay)
            .await?;

        tracing::debug!(
            "[{}] Response status {} after {} attempt(s)",
            label,
            response.status,
            response.attempts
        );

        if !response.is_success() {
            return Err(ContentError::StatusError {
                url: url.to_string(),
                status: response.status.as_u16(),
            });
        }

        Ok(response.body)
    }

    async fn try_fetch_reviews(&self, package_id: &str) -> Result<ReviewsResponse> {
        let url = self.endpoint("reviews", package_id)?;
        let body = self.get_body("reviews", &url).await?;
        normalize::decode_reviews(&body)
    }

    async fn try_fetch_images(&self, package_id: &str) -> Result<ImagesResponse> {
        let url = self.endpoint("images", package_id)?;
        let body = self.get_body("images", &url).await?;
        let envelope = normalize::decode_images(&body)?;
        normalize::normalize_images(self.config.api_base_url(), package_id, envelope)
    }

    async fn try_fetch_itinerary(
        &self,
        package_id: &str,
        locale: Locale,
    ) -> Result<ItineraryResponse> {
        let mut url = self.endpoint("itinerary", package_id)?;
        url.query_pairs_mut().append_pair("lang", locale.as_str());
        let body = self.get_body("itinerary", &url).await?;
        normalize::normalize_itinerary(&body)
    }
}

/// 將結果收斂成 FetchOutcome，錯誤只記錄不往外拋
fn settle<T: Envelope>(label: &str, package_id: &str, result: Result<T>) -> FetchOutcome<T> {
    match result {
        Ok(envelope) => {
            let count = envelope.item_count();
            if count == 0 {
                tracing::warn!("⚠️ [{}] Backend returned no items for {}", label, package_id);
            } else {
                tracing::info!("✅ [{}] Fetched {} item(s) for {}", label, count, package_id);
            }
            FetchOutcome::from_envelope(envelope)
        }
        Err(e) => {
            tracing::error!(
                category = ?e.category(),
                "❌ [{}] Failed to fetch {}: {}",
                label,
                package_id,
                e
            );
            FetchOutcome::Unavailable(e)
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> ContentSource for ContentClient<C> {
    async fn fetch_reviews(&self, package_id: &str) -> FetchOutcome<ReviewsResponse> {
        settle("reviews", package_id, self.try_fetch_reviews(package_id).await)
    }

    async fn fetch_images(&self, package_id: &str) -> FetchOutcome<ImagesResponse> {
        settle("images", package_id, self.try_fetch_images(package_id).await)
    }

    async fn fetch_itinerary(
        &self,
        package_id: &str,
        locale: Locale,
    ) -> FetchOutcome<ItineraryResponse> {
        settle(
            "itinerary",
            package_id,
            self.try_fetch_itinerary(package_id, locale).await,
        )
    }
}
