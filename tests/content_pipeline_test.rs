use httpmock::prelude::*;
use serde_json::{json, Value};
use std::time::Duration;
use trip_content::{
    fallback, ContentClient, ContentEngine, ContentError, ContentOrigin, ContentSource,
    FetchOutcome, Locale, RetryPolicy, Settings,
};

fn settings_for(base_url: String, initial_delay_ms: u64) -> Settings {
    Settings {
        base_url,
        package_id: "11days".to_string(),
        locale: Locale::En,
        retry: RetryPolicy {
            max_retries: 3,
            initial_delay: Duration::from_millis(initial_delay_ms),
            request_timeout: Duration::from_secs(5),
        },
        fallback_on_empty: false,
    }
}

fn wire_day(day: u32, title: &str) -> Value {
    json!({
        "day": day,
        "title": title,
        "description": format!("Description for day {}", day),
        "accommodation": "Hotel (1 night)",
        "included_activities": format!("Guided visit on day {}", day),
        "meals": "Breakfast, Lunch",
        "optional_activities": ["Kayak"],
        "special_info": ""
    })
}

fn wire_itinerary() -> Value {
    json!({
        "package_id": "11days",
        "itinerary": [
            wire_day(1, "Copacabana, Gateway to Titicaca"),
            wire_day(2, "Island of the Sun"),
            wire_day(3, "Island of the Moon"),
            wire_day(4, "Return to La Paz")
        ],
        "total_days": 4
    })
}

fn wire_images(count: u32) -> Value {
    let images: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "url": format!("https://storage.example.com/raw/{}.jpg", id),
                "category": if id == 1 { "hero" } else { "itinerary" },
                "alt_text": format!("Foto {}", id),
                "alt_text_en": format!("Photo {}", id)
            })
        })
        .collect();

    json!({
        "package_id": "11days",
        "images": images,
        "total_images": count
    })
}

fn wire_reviews() -> Value {
    json!({
        "reviews": [
            {"id": 7, "name": "Ana", "date": "May 2025", "rating": 5, "body": "Excelente"},
            {"id": 8, "name": "Mark", "date": "May 2025", "rating": 3, "body": "Cold nights"}
        ],
        "total_reviews": 2,
        "average_rating": 4.0,
        "star_distribution": {"1": 0, "2": 0, "3": 1, "4": 0, "5": 1}
    })
}

/// 把 JSON 值化簡為結構描述：物件保留鍵、陣列取第一個元素、純量只保留型別
fn shape(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, inner)| (key.clone(), shape(inner)))
                .collect(),
        ),
        Value::Array(items) => match items.first() {
            Some(first) => json!([shape(first)]),
            None => json!([]),
        },
        Value::String(_) => json!("string"),
        Value::Number(_) => json!("number"),
        Value::Bool(_) => json!("bool"),
        Value::Null => json!("null"),
    }
}

#[tokio::test]
async fn test_itinerary_is_normalized_to_display_format() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/itinerary/11days")
                .query_param("lang", "en");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(wire_itinerary());
        })
        .await;

    let client = ContentClient::new(settings_for(server.base_url(), 10));
    let outcome = client.fetch_itinerary("11days", Locale::En).await;

    mock.assert_async().await;
    let itinerary = match outcome {
        FetchOutcome::Loaded(itinerary) => itinerary,
        other => panic!("expected loaded itinerary, got {other:?}"),
    };

    assert_eq!(itinerary.total_days, 4);
    assert_eq!(itinerary.itinerary.len(), 4);
    assert_eq!(itinerary.itinerary[0].included_activities, "Guided visit on day 1");
    assert_eq!(itinerary.itinerary[3].title, "Return to La Paz");

    let value = serde_json::to_value(&itinerary.itinerary[0]).unwrap();
    assert_eq!(value["includedActivities"], "Guided visit on day 1");
    assert_eq!(value["optionalActivities"], json!(["Kayak"]));
    assert!(value.get("included_activities").is_none());
}

#[tokio::test]
async fn test_reviews_server_errors_exhaust_retries_then_fall_back() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/reviews/11days");
            then.status(503);
        })
        .await;

    let client = ContentClient::new(settings_for(server.base_url(), 10));
    let outcome = client.fetch_reviews("11days").await;

    mock.assert_hits_async(3).await;
    assert!(matches!(
        outcome,
        FetchOutcome::Unavailable(ContentError::RetriesExhausted { attempts: 3, .. })
    ));

    let engine = ContentEngine::new(client);
    let resolved = engine.reviews("11days", Locale::En).await;

    assert_eq!(resolved.origin, ContentOrigin::Fallback);
    assert_eq!(resolved.data, fallback::reviews(Locale::En));
    assert_eq!(resolved.data.reviews.len(), 5);
    assert_eq!(resolved.data.average_rating, 4.4);
    assert_eq!(resolved.data.star_distribution["5"], 3);
    assert_eq!(resolved.data.star_distribution["4"], 1);
    assert_eq!(resolved.data.star_distribution["3"], 1);
    assert_eq!(resolved.data.star_distribution["1"], 0);
}

#[tokio::test]
async fn test_image_urls_are_rewritten_to_proxy() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/images/11days");
            then.status(200).json_body(wire_images(11));
        })
        .await;

    let base_url = server.base_url();
    let client = ContentClient::new(settings_for(base_url.clone(), 10));
    let images = client.fetch_images("11days").await.into_option().unwrap();

    assert_eq!(images.images.len(), 11);
    assert_eq!(images.total_images, 11);
    for image in &images.images {
        assert_eq!(
            image.url,
            format!("{}/api/images/11days/proxy/{}", base_url, image.id)
        );
    }
    assert_eq!(images.images[0].alt_text_for(Locale::Es), "Foto 1");
    assert_eq!(images.images[0].alt_text_for(Locale::En), "Photo 1");
}

#[tokio::test]
async fn test_transient_failure_recovers_on_retry() {
    let server = MockServer::start_async().await;
    let mut failing = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/reviews/11days");
            then.status(500);
        })
        .await;

    let client = ContentClient::new(settings_for(server.base_url(), 300));
    let handle = tokio::spawn(async move { client.fetch_reviews("11days").await });

    // 等第一次請求打到伺服器，再把回應換成成功
    let mut waited = Duration::ZERO;
    while failing.hits_async().await == 0 {
        assert!(waited < Duration::from_secs(5), "first attempt never arrived");
        tokio::time::sleep(Duration::from_millis(10)).await;
        waited += Duration::from_millis(10);
    }
    assert_eq!(failing.hits_async().await, 1);
    failing.delete_async().await;

    let healthy = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/reviews/11days");
            then.status(200).json_body(wire_reviews());
        })
        .await;

    let outcome = handle.await.unwrap();

    healthy.assert_hits_async(1).await;
    let reviews = match outcome {
        FetchOutcome::Loaded(reviews) => reviews,
        other => panic!("expected loaded reviews, got {other:?}"),
    };
    assert_eq!(reviews.total_reviews, 2);
    assert_eq!(reviews.reviews[0].name, "Ana");
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/images/unknown");
            then.status(404);
        })
        .await;

    let engine = ContentEngine::new(ContentClient::new(settings_for(server.base_url(), 10)));
    let resolved = engine.images("unknown").await;

    mock.assert_hits_async(1).await;
    assert!(resolved.is_fallback());
    assert_eq!(resolved.data, fallback::images());
}

#[tokio::test]
async fn test_fallback_matches_live_shape() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/itinerary/11days");
            then.status(200).json_body(wire_itinerary());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/images/11days");
            then.status(200).json_body(wire_images(3));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/reviews/11days");
            then.status(200).json_body(wire_reviews());
        })
        .await;

    let client = ContentClient::new(settings_for(server.base_url(), 10));

    for locale in [Locale::En, Locale::Es] {
        let live = client.fetch_itinerary("11days", locale).await.into_option().unwrap();
        assert_eq!(
            shape(&serde_json::to_value(&live).unwrap()),
            shape(&serde_json::to_value(fallback::itinerary(locale)).unwrap())
        );

        let live = client.fetch_reviews("11days").await.into_option().unwrap();
        assert_eq!(
            shape(&serde_json::to_value(&live).unwrap()),
            shape(&serde_json::to_value(fallback::reviews(locale)).unwrap())
        );
    }

    let live = client.fetch_images("11days").await.into_option().unwrap();
    assert_eq!(
        shape(&serde_json::to_value(&live).unwrap()),
        shape(&serde_json::to_value(fallback::images()).unwrap())
    );
}

#[tokio::test]
async fn test_partial_star_distribution_matches_fallback_shape() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/reviews/11days");
            then.status(200).json_body(json!({
                "reviews": [
                    {"id": 1, "name": "Ana", "date": "May 2025", "rating": 5, "body": "Excelente"}
                ],
                "total_reviews": 1,
                "average_rating": 5.0,
                "star_distribution": {"5": 1}
            }));
        })
        .await;

    let client = ContentClient::new(settings_for(server.base_url(), 10));
    let live = client.fetch_reviews("11days").await.into_option().unwrap();
    let expected = fallback::reviews(Locale::En);

    assert_eq!(
        live.star_distribution.keys().collect::<Vec<_>>(),
        expected.star_distribution.keys().collect::<Vec<_>>()
    );
    assert_eq!(live.star_distribution["5"], 1);
    assert_eq!(
        shape(&serde_json::to_value(&live).unwrap()),
        shape(&serde_json::to_value(&expected).unwrap())
    );
}

#[tokio::test]
async fn test_proxy_urls_encode_package_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/api/images/trip");
            then.status(200).json_body(wire_images(2));
        })
        .await;

    let base_url = server.base_url();
    let client = ContentClient::new(settings_for(base_url.clone(), 10));
    let images = client.fetch_images("trip a").await.into_option().unwrap();

    mock.assert_async().await;
    assert_eq!(
        images.images[1].url,
        format!("{}/api/images/trip%20a/proxy/2", base_url)
    );
}

#[tokio::test]
async fn test_load_all_mixes_live_and_fallback() {
    let server = MockServer::start_async().await;
    let itinerary_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/itinerary/11days")
                .query_param("lang", "es");
            then.status(200).json_body(wire_itinerary());
        })
        .await;
    let images_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/images/11days");
            then.status(502);
        })
        .await;
    let reviews_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/reviews/11days");
            then.status(200).json_body(wire_reviews());
        })
        .await;

    let engine = ContentEngine::new(ContentClient::new(settings_for(server.base_url(), 10)));
    let content = engine.load_all("11days", Locale::Es).await;

    itinerary_mock.assert_hits_async(1).await;
    reviews_mock.assert_hits_async(1).await;
    images_mock.assert_hits_async(3).await;

    assert_eq!(content.package_id, "11days");
    assert_eq!(content.locale, Locale::Es);
    assert_eq!(content.itinerary.origin, ContentOrigin::Live);
    assert_eq!(content.reviews.origin, ContentOrigin::Live);
    assert_eq!(content.images.origin, ContentOrigin::Fallback);
    assert_eq!(content.images.data.images.len(), 11);

    let value = serde_json::to_value(&content).unwrap();
    assert_eq!(value["images"]["origin"], "fallback");
    assert_eq!(value["itinerary"]["data"]["total_days"], 4);
}

#[tokio::test]
async fn test_unreachable_backend_serves_fallback_for_everything() {
    // 先綁定再釋放，取得一個沒有人監聽的埠
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let settings = settings_for(format!("http://127.0.0.1:{}", port), 5);
    let engine = ContentEngine::new(ContentClient::new(settings));
    let content = engine.load_all("11days", Locale::En).await;

    assert!(content.reviews.is_fallback());
    assert!(content.images.is_fallback());
    assert!(content.itinerary.is_fallback());
    assert_eq!(content.itinerary.data, fallback::itinerary(Locale::En));
}
