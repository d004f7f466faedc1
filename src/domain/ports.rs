use crate::domain::model::{
    FetchOutcome, ImagesResponse, ItineraryResponse, Locale, RetryPolicy, ReviewsResponse,
};
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn package_id(&self) -> &str;
    fn locale(&self) -> Locale;
    fn retry_policy(&self) -> RetryPolicy;
    fn fallback_on_empty(&self) -> bool;
}

/// Live source of the three dynamic resources. Implementations swallow every
/// failure into `FetchOutcome::Unavailable`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_reviews(&self, package_id: &str) -> FetchOutcome<ReviewsResponse>;
    async fn fetch_images(&self, package_id: &str) -> FetchOutcome<ImagesResponse>;
    async fn fetch_itinerary(
        &self,
        package_id: &str,
        locale: Locale,
    ) -> FetchOutcome<ItineraryResponse>;
}
