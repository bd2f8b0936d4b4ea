//! # cfcli-client
//!
//! Typed client for the Cloudflare DNS API, used by the `cfcli` binary.
//!
//! The crate exposes one seam, the [`CloudflareApi`] trait, with four
//! operations: resolve a zone id from a domain, list the records of a zone,
//! create a record, delete a record. [`HttpCloudflareClient`] is the HTTP
//! implementation; command handlers depend on the trait so tests can swap
//! in a mock endpoint.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cfcli_client::{
//!     CloudflareApi, HttpCloudflareClient, ResolveZoneRequest, ListRecordsRequest,
//!     CLOUDFLARE_API_BASE,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpCloudflareClient::new("your-api-key", CLOUDFLARE_API_BASE);
//!
//!     let zone_id = client
//!         .zone_by_domain(&ResolveZoneRequest { domain: "example.com".into() })
//!         .await?;
//!
//!     let records = client
//!         .zone_records(&ListRecordsRequest { zone_id, ..Default::default() })
//!         .await?;
//!     for record in &records {
//!         println!("{} {} -> {}", record.record_type, record.name, record.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). Not-found
//! conditions map to [`ClientError::ZoneNotFound`] /
//! [`ClientError::RecordNotFound`]; every other failure is classified per
//! operation and wraps a [`FailureCause`] with the status code and body, the
//! transport error, or the decode error. An HTTP 403 on any operation keeps
//! the operation's kind but carries an explicit credential hint
//! ([`FailureCause::Unauthorized`]).
//!
//! The client never retries; each operation issues exactly one request.

mod client;
mod error;
mod types;

pub use client::{CloudflareApi, HttpCloudflareClient, CLOUDFLARE_API_BASE};
pub use error::{ClientError, FailureCause, Result};
pub use types::{
    CreateRecordRequest, DeleteRecordRequest, ListRecordsRequest, NewZoneRecord,
    ResolveZoneRequest, Zone, ZoneRecord, ZoneType,
};
