use crate::domain::model::{
    FetchOutcome, ImagesResponse, ItineraryResponse, Locale, ReviewsResponse,
};
use crate::domain::ports::ContentSource;
use crate::fallback;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentOrigin {
    Live,
    Fallback,
}

/// Data handed to the caller, plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    pub origin: ContentOrigin,
    pub data: T,
}

impl<T> Resolved<T> {
    pub fn is_fallback(&self) -> bool {
        self.origin == ContentOrigin::Fallback
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripContent {
    pub package_id: String,
    pub locale: Locale,
    pub reviews: Resolved<ReviewsResponse>,
    pub images: Resolved<ImagesResponse>,
    pub itinerary: Resolved<ItineraryResponse>,
}

/// 以備援資料取代失敗的結果；`fallback_on_empty` 為真時空結果也會被取代
pub fn with_fallback<T>(
    resource: &str,
    outcome: FetchOutcome<T>,
    fallback_on_empty: bool,
    fallback: impl FnOnce() -> T,
) -> Resolved<T> {
    match outcome {
        FetchOutcome::Loaded(data) => Resolved {
            origin: ContentOrigin::Live,
            data,
        },
        FetchOutcome::Empty(data) if !fallback_on_empty => Resolved {
            origin: ContentOrigin::Live,
            data,
        },
        FetchOutcome::Empty(_) => {
            tracing::info!("📦 [{}] Live result is empty, using fallback content", resource);
            Resolved {
                origin: ContentOrigin::Fallback,
                data: fallback(),
            }
        }
        FetchOutcome::Unavailable(e) => {
            tracing::warn!("📦 [{}] Using fallback content: {}", resource, e);
            Resolved {
                origin: ContentOrigin::Fallback,
                data: fallback(),
            }
        }
    }
}

pub struct ContentEngine<S: ContentSource> {
    source: S,
    fallback_on_empty: bool,
}

impl<S: ContentSource> ContentEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            fallback_on_empty: false,
        }
    }

    pub fn with_fallback_on_empty(mut self, enabled: bool) -> Self {
        self.fallback_on_empty = enabled;
        self
    }

    pub async fn reviews(&self, package_id: &str, locale: Locale) -> Resolved<ReviewsResponse> {
        let outcome = self.source.fetch_reviews(package_id).await;
        with_fallback("reviews", outcome, self.fallback_on_empty, || {
            fallback::reviews(locale)
        })
    }

    pub async fn images(&self, package_id: &str) -> Resolved<ImagesResponse> {
        let outcome = self.source.fetch_images(package_id).await;
        with_fallback("images", outcome, self.fallback_on_empty, fallback::images)
    }

    pub async fn itinerary(&self, package_id: &str, locale: Locale) -> Resolved<ItineraryResponse> {
        let outcome = self.source.fetch_itinerary(package_id, locale).await;
        with_fallback("itinerary", outcome, self.fallback_on_empty, || {
            fallback::itinerary(locale)
        })
    }

    /// Fetches all three resources concurrently.
    pub async fn load_all(&self, package_id: &str, locale: Locale) -> TripContent {
        tracing::info!("🚀 Loading content for {} ({})", package_id, locale);

        let (reviews, images, itinerary) = tokio::join!(
            self.reviews(package_id, locale),
            self.images(package_id),
            self.itinerary(package_id, locale),
        );

        let fallbacks = [reviews.is_fallback(), images.is_fallback(), itinerary.is_fallback()]
            .iter()
            .filter(|used| **used)
            .count();
        if fallbacks > 0 {
            tracing::warn!("⚠️ {} of 3 resources served from fallback content", fallbacks);
        } else {
            tracing::info!("✅ All resources served live");
        }

        TripContent {
            package_id: package_id.to_string(),
            locale,
            reviews,
            images,
            itinerary,
        }
    }
}
