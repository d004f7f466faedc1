use crate::domain::model::{
    ImagesResponse, ItineraryDay, ItineraryResponse, ReviewsResponse, STAR_KEYS,
};
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::Validate;
use serde::Deserialize;
use url::Url;

// 後端回傳的行程格式（snake_case），只在這個模組內讀取
#[derive(Debug, Deserialize)]
struct WireItineraryDay {
    day: u32,
    title: String,
    description: String,
    accommodation: String,
    included_activities: String,
    meals: String,
    optional_activities: Vec<String>,
    special_info: String,
}

#[derive(Debug, Deserialize)]
struct WireItineraryResponse {
    package_id: String,
    itinerary: Vec<WireItineraryDay>,
    total_days: u32,
}

impl From<WireItineraryDay> for ItineraryDay {
    fn from(wire: WireItineraryDay) -> Self {
        Self {
            day: wire.day,
            title: wire.title,
            description: wire.description,
            accommodation: wire.accommodation,
            included_activities: wire.included_activities,
            meals: wire.meals,
            optional_activities: wire.optional_activities,
            special_info: wire.special_info,
        }
    }
}

/// 在 base URL 後面接上路徑片段，每個片段都會經過百分比編碼
pub fn api_url<'a>(base_url: &str, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| ContentError::InvalidConfigValueError {
        field: "api_base_url".to_string(),
        value: base_url.to_string(),
        reason: e.to_string(),
    })?;

    url.path_segments_mut()
        .map_err(|_| ContentError::ConfigError {
            message: format!("Base URL cannot be a base: {}", base_url),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// `{base_url}/api/images/{package_id}/proxy/{image_id}`
pub fn proxy_url(base_url: &str, package_id: &str, image_id: u32) -> Result<String> {
    let image_id = image_id.to_string();
    let url = api_url(
        base_url,
        ["api", "images", package_id, "proxy", image_id.as_str()],
    )?;
    Ok(url.to_string())
}

/// Replaces every upstream image URL with the backend proxy URL. The result
/// depends only on `package_id` and each image id, so reapplying is a no-op.
pub fn normalize_images(
    base_url: &str,
    package_id: &str,
    mut envelope: ImagesResponse,
) -> Result<ImagesResponse> {
    for image in &mut envelope.images {
        image.url = proxy_url(base_url, package_id, image.id)?;
    }
    Ok(envelope)
}

pub fn decode_images(body: &str) -> Result<ImagesResponse> {
    serde_json::from_str(body).map_err(|e| ContentError::shape("images", e.to_string()))
}

/// Decodes a snake_case itinerary payload and renames the day fields to the
/// display format. Any day missing a field rejects the whole payload.
pub fn normalize_itinerary(body: &str) -> Result<ItineraryResponse> {
    let wire: WireItineraryResponse =
        serde_json::from_str(body).map_err(|e| ContentError::shape("itinerary", e.to_string()))?;

    if let Some(bad) = wire.itinerary.iter().find(|day| day.day == 0) {
        return Err(ContentError::shape(
            "itinerary",
            format!("day numbers start at 1, got {} ('{}')", bad.day, bad.title),
        ));
    }

    Ok(ItineraryResponse {
        package_id: wire.package_id,
        itinerary: wire.itinerary.into_iter().map(ItineraryDay::from).collect(),
        total_days: wire.total_days,
    })
}

/// 評論不需要轉換欄位，只做解析與檢查；缺少的星等補 0，讓分佈永遠有 "1".."5"
pub fn decode_reviews(body: &str) -> Result<ReviewsResponse> {
    let mut response: ReviewsResponse =
        serde_json::from_str(body).map_err(|e| ContentError::shape("reviews", e.to_string()))?;
    response.validate()?;

    for key in STAR_KEYS {
        response
            .star_distribution
            .entry(key.to_string())
            .or_insert(0);
    }
    Ok(response)
}

impl Validate for ReviewsResponse {
    fn validate(&self) -> Result<()> {
        if let Some(review) = self.reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
            return Err(ContentError::shape(
                "reviews",
                format!("review {} has rating {} outside 1..=5", review.id, review.rating),
            ));
        }

        if let Some(key) = self
            .star_distribution
            .keys()
            .find(|key| !STAR_KEYS.contains(&key.as_str()))
        {
            return Err(ContentError::shape(
                "reviews",
                format!("unexpected star_distribution key '{}'", key),
            ));
        }

        if !(0.0..=5.0).contains(&self.average_rating) {
            return Err(ContentError::shape(
                "reviews",
                format!("average_rating {} outside 0..=5", self.average_rating),
            ));
        }

        let distribution_total = self.distribution_total();
        if distribution_total != self.total_reviews {
            tracing::warn!(
                "⚠️ star_distribution sums to {} but total_reviews is {}",
                distribution_total,
                self.total_reviews
            );
        }

        Ok(())
    }
}
