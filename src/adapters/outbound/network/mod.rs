/// Network adapters for the npm registry, npm downloads, GitHub,
/// Bundlephobia and npms.io
mod bundlephobia_client;
mod caching_registry_client;
mod github_client;
mod http_client;
mod npm_downloads_client;
mod npm_registry_client;
mod npms_client;

pub use bundlephobia_client::{BundlephobiaClient, DEFAULT_BUNDLEPHOBIA_URL};
pub use caching_registry_client::{CachingPackageRegistry, DEFAULT_CACHE_TTL};
pub use github_client::{GitHubClient, DEFAULT_GITHUB_API_URL};
pub use http_client::HttpClient;
pub use npm_downloads_client::{NpmDownloadsClient, DEFAULT_DOWNLOADS_URL};
pub use npm_registry_client::{NpmRegistryClient, DEFAULT_REGISTRY_URL};
pub use npms_client::{NpmsClient, DEFAULT_NPMS_URL};
