pub mod catalog;
pub mod classify;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod generate;
pub mod normalize;
pub mod parse;
#[cfg(feature = "remote")]
pub mod remote;
pub mod sanitize;
pub mod summary;

pub use catalog::{Catalog, TopicTags};
pub use classify::{ContentType, classify, classify_text};
pub use error::{DraftError, Result};
#[cfg(feature = "fetch")]
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::{fetch_file, fetch_stdin, fetch_url};
pub use generate::{
    Generator, GeneratorConfig, GeneratorConfigBuilder, Platform, PostDraft, Style, generate, generate_seeded,
};
pub use normalize::{normalize_color, normalize_url, rgb_to_hex};
pub use parse::Document;
#[cfg(feature = "remote")]
pub use remote::{RemoteConfig, remote_generate};
pub use sanitize::{sanitize_text, sanitize_url, validate_platform};
pub use summary::{ImageInfo, PageSummary};
