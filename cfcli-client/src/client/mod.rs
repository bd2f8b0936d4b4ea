//! Cloudflare API gateway client.

mod http;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::types::{
    CreateRecordRequest, DeleteRecordRequest, ListRecordsRequest, ResolveZoneRequest, ZoneRecord,
};

/// Production API endpoint.
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com";

/// Fixed page size for record listings.
pub(crate) const RECORDS_PER_PAGE: u32 = 50;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// The four operations the gateway client exposes.
///
/// Every operation is single-shot and stateless between calls: one outbound
/// request, no retries, no shared mutable state. Implementations are safe to
/// call from multiple tasks concurrently. Dropping the returned future (or
/// hitting the client timeout) aborts the in-flight request and surfaces as
/// a transport-class failure wrapped in the operation's error kind.
#[async_trait]
pub trait CloudflareApi: Send + Sync {
    /// Resolve a domain name to its zone id via the zone listing endpoint.
    ///
    /// Fails with [`ClientError::ZoneNotFound`](crate::ClientError::ZoneNotFound)
    /// when no zone name equals the domain exactly.
    async fn zone_by_domain(&self, request: &ResolveZoneRequest) -> Result<String>;

    /// List the records of a zone, optionally filtered by full record name
    /// (server-side) and record type (client-side).
    async fn zone_records(&self, request: &ListRecordsRequest) -> Result<Vec<ZoneRecord>>;

    /// Create a record and return it with its server-assigned id.
    async fn add_zone_record(&self, request: &CreateRecordRequest) -> Result<ZoneRecord>;

    /// Delete a record by id.
    async fn delete_zone_record(&self, request: &DeleteRecordRequest) -> Result<()>;
}

/// HTTP implementation of [`CloudflareApi`] over [`reqwest`].
///
/// Base URL and API key are fixed at construction and never mutated.
pub struct HttpCloudflareClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl HttpCloudflareClient {
    /// Build a client with the default timeout configuration.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self::with_client(client, api_key, base_url)
    }

    /// Build a client over a caller-supplied [`reqwest::Client`].
    pub fn with_client(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}
