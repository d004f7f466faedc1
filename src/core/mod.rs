pub mod engine;
pub mod fetcher;
pub mod normalize;
pub mod transport;

pub use crate::domain::model::{FetchOutcome, Locale, RetryPolicy};
pub use crate::domain::ports::{ConfigProvider, ContentSource};
pub use crate::utils::error::Result;
