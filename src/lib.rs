pub mod config;
pub mod core;
pub mod domain;
pub mod fallback;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{environment::Environment, Settings};
pub use core::{
    engine::{ContentEngine, ContentOrigin, Resolved, TripContent},
    fetcher::ContentClient,
    transport::{Backoff, RawResponse, RequestOptions, RetryingTransport},
};
pub use domain::model::{
    FetchOutcome, Image, ImageCategory, ImagesResponse, ItineraryDay, ItineraryResponse, Locale,
    Review, ReviewsResponse, RetryPolicy, DEFAULT_PACKAGE_ID,
};
pub use domain::ports::{ConfigProvider, ContentSource};
pub use utils::error::{ContentError, Result};
