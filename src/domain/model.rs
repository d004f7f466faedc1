use crate::utils::error::{ContentError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PACKAGE_ID: &str = "11days";

/// 評分分佈的合法鍵
pub const STAR_KEYS: [&str; 5] = ["1", "2", "3", "4", "5"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(ContentError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: other.to_string(),
                reason: "Supported locales: en, es".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub rating: u8,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    pub total_reviews: u32,
    pub average_rating: f64,
    pub star_distribution: BTreeMap<String, u32>,
}

impl ReviewsResponse {
    /// 由評論清單計算總數、平均分數（四捨五入到一位小數）與星等分佈
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let mut star_distribution: BTreeMap<String, u32> =
            STAR_KEYS.iter().map(|key| (key.to_string(), 0)).collect();

        for review in &reviews {
            if let Some(count) = star_distribution.get_mut(&review.rating.to_string()) {
                *count += 1;
            }
        }

        let total_reviews = reviews.len() as u32;
        let average_rating = if reviews.is_empty() {
            0.0
        } else {
            let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
            (f64::from(sum) / f64::from(total_reviews) * 10.0).round() / 10.0
        };

        Self {
            reviews,
            total_reviews,
            average_rating,
            star_distribution,
        }
    }

    pub fn distribution_total(&self) -> u32 {
        self.star_distribution.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageCategory {
    Hero,
    Itinerary,
    Overview,
    Other(String),
}

impl From<String> for ImageCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "hero" => ImageCategory::Hero,
            "itinerary" => ImageCategory::Itinerary,
            "overview" => ImageCategory::Overview,
            _ => ImageCategory::Other(value),
        }
    }
}

impl From<ImageCategory> for String {
    fn from(value: ImageCategory) -> Self {
        match value {
            ImageCategory::Hero => "hero".to_string(),
            ImageCategory::Itinerary => "itinerary".to_string(),
            ImageCategory::Overview => "overview".to_string(),
            ImageCategory::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: u32,
    pub url: String,
    pub category: ImageCategory,
    /// Spanish alt text
    pub alt_text: String,
    pub alt_text_en: String,
}

impl Image {
    pub fn alt_text_for(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.alt_text_en,
            Locale::Es => &self.alt_text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub package_id: String,
    pub images: Vec<Image>,
    pub total_images: u32,
}

/// Display-format itinerary day. Only the normalizer builds these from wire data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
    pub accommodation: String,
    pub included_activities: String,
    pub meals: String,
    pub optional_activities: Vec<String>,
    pub special_info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub package_id: String,
    pub itinerary: Vec<ItineraryDay>,
    pub total_days: u32,
}

/// 各資源回應共用的集合介面
pub trait Envelope {
    fn item_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

impl Envelope for ReviewsResponse {
    fn item_count(&self) -> usize {
        self.reviews.len()
    }
}

impl Envelope for ImagesResponse {
    fn item_count(&self) -> usize {
        self.images.len()
    }
}

impl Envelope for ItineraryResponse {
    fn item_count(&self) -> usize {
        self.itinerary.len()
    }
}

/// Result of one fetcher call. Failures never escape as errors; they land in
/// `Unavailable` so the caller can decide whether to substitute fallback data.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// Live data with at least one item.
    Loaded(T),
    /// Live data, but the backend returned zero items.
    Empty(T),
    Unavailable(ContentError),
}

impl<T: Envelope> FetchOutcome<T> {
    pub fn from_envelope(envelope: T) -> Self {
        if envelope.is_empty() {
            FetchOutcome::Empty(envelope)
        } else {
            FetchOutcome::Loaded(envelope)
        }
    }
}

impl<T> FetchOutcome<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchOutcome::Unavailable(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchOutcome::Loaded(data) | FetchOutcome::Empty(data) => Some(data),
            FetchOutcome::Unavailable(_) => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            FetchOutcome::Loaded(data) | FetchOutcome::Empty(data) => Some(data),
            FetchOutcome::Unavailable(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ContentError> {
        match self {
            FetchOutcome::Unavailable(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    /// Upper bound for a single attempt; expiry counts as a network failure.
    pub request_timeout: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_RETRIES: u32 = 3;
    pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(1000);
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: Self::DEFAULT_MAX_RETRIES,
            initial_delay: Self::DEFAULT_INITIAL_DELAY,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: u32, rating: u8) -> Review {
        Review {
            id,
            name: format!("Guest {}", id),
            date: "October 2024".to_string(),
            rating,
            body: "Great trip".to_string(),
        }
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" ES ".parse::<Locale>().unwrap(), Locale::Es);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Es.to_string(), "es");
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_reviews_from_reviews_computes_stats() {
        let response = ReviewsResponse::from_reviews(vec![
            review(1, 5),
            review(2, 4),
            review(3, 5),
            review(4, 3),
            review(5, 5),
        ]);

        assert_eq!(response.total_reviews, 5);
        assert_eq!(response.average_rating, 4.4);
        assert_eq!(response.star_distribution.len(), 5);
        assert_eq!(response.star_distribution["1"], 0);
        assert_eq!(response.star_distribution["3"], 1);
        assert_eq!(response.star_distribution["5"], 3);
        assert_eq!(response.distribution_total(), 5);
    }

    #[test]
    fn test_reviews_from_empty_list() {
        let response = ReviewsResponse::from_reviews(vec![]);
        assert_eq!(response.total_reviews, 0);
        assert_eq!(response.average_rating, 0.0);
        assert!(response.star_distribution.values().all(|count| *count == 0));
        assert!(response.is_empty());
    }

    #[test]
    fn test_image_category_keeps_unknown_tags() {
        let image: Image = serde_json::from_value(serde_json::json!({
            "id": 4,
            "url": "https://cdn.example.com/4.webp",
            "category": "gallery",
            "alt_text": "Templo de la Isla de la Luna",
            "alt_text_en": "Island of the Moon temple"
        }))
        .unwrap();

        assert_eq!(image.category, ImageCategory::Other("gallery".to_string()));
        assert_eq!(image.alt_text_for(Locale::En), "Island of the Moon temple");
        assert_eq!(image.alt_text_for(Locale::Es), "Templo de la Isla de la Luna");

        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value["category"], "gallery");
    }

    #[test]
    fn test_itinerary_day_serializes_camel_case() {
        let day = ItineraryDay {
            day: 1,
            title: "Copacabana".to_string(),
            description: "Arrival".to_string(),
            accommodation: "Hotel (1 night)".to_string(),
            included_activities: "Bus from La Paz".to_string(),
            meals: "Lunch, Dinner".to_string(),
            optional_activities: vec!["Museum".to_string()],
            special_info: String::new(),
        };

        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(value["includedActivities"], "Bus from La Paz");
        assert_eq!(value["optionalActivities"][0], "Museum");
        assert!(value.get("included_activities").is_none());
        assert!(value.get("specialInfo").is_some());
    }

    #[test]
    fn test_fetch_outcome_distinguishes_empty_from_failure() {
        let empty = FetchOutcome::from_envelope(ReviewsResponse::from_reviews(vec![]));
        assert!(matches!(empty, FetchOutcome::Empty(_)));
        assert!(!empty.is_unavailable());
        assert!(empty.data().is_some());

        let loaded = FetchOutcome::from_envelope(ReviewsResponse::from_reviews(vec![review(1, 5)]));
        assert!(matches!(loaded, FetchOutcome::Loaded(_)));

        let failed: FetchOutcome<ReviewsResponse> =
            FetchOutcome::Unavailable(ContentError::StatusError {
                url: "http://localhost:8000/api/reviews/11days".to_string(),
                status: 500,
            });
        assert!(failed.is_unavailable());
        assert!(failed.error().is_some());
        assert!(failed.into_option().is_none());
    }

    #[test]
    fn test_retry_policy_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.initial_delay, Duration::from_millis(1000));
        assert_eq!(policy.request_timeout, Duration::from_secs(15));
    }
}
