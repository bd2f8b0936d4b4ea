//! Request and response types for the Cloudflare DNS API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

// ============ Record types ============

/// The fixed set of DNS record types the client accepts.
///
/// Any other string is rejected with
/// [`ClientError::InvalidZoneType`] before a request is ever built, to
/// avoid sending obviously malformed payloads over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ZoneType {
    A,
    Aaaa,
    Cname,
    Txt,
    Srv,
    Mx,
    Ns,
    Soa,
}

impl ZoneType {
    /// All supported record types, in display order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Txt,
        Self::Srv,
        Self::Mx,
        Self::Ns,
        Self::Soa,
    ];

    /// The uppercase wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Soa => "SOA",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|zt| zt.as_str() == upper)
            .ok_or_else(|| ClientError::InvalidZoneType(s.to_string()))
    }
}

// ============ Wire shapes ============

/// A zone as returned by the zone listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// A DNS record as returned by the API.
///
/// Fields the API omits decode to their defaults. The record type is kept
/// as the raw wire string: zones routinely contain types outside the set
/// the client creates (CAA, PTR, HTTPS), and one unfamiliar record must
/// not poison a whole listing. [`ZoneType`] only constrains outbound
/// requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(default)]
    pub proxied: bool,
    #[serde(default)]
    pub proxiable: bool,
    pub ttl: u32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub zone_id: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub locked: bool,
    /// Provider metadata blob. Opaque to the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub modified_on: String,
}

/// The body of a record creation request.
#[derive(Debug, Clone, Serialize)]
pub struct NewZoneRecord {
    /// Optional caller-supplied id. Omitted from JSON when unset; the
    /// server assigns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: ZoneType,
    pub name: String,
    pub content: String,
    pub proxied: bool,
    pub ttl: u32,
    pub tags: Vec<String>,
    pub comment: String,
}

// ============ Operation requests ============

/// Request for [`CloudflareApi::zone_by_domain`](crate::CloudflareApi::zone_by_domain).
#[derive(Debug, Clone)]
pub struct ResolveZoneRequest {
    /// Domain to match exactly against zone names.
    pub domain: String,
}

/// Request for [`CloudflareApi::zone_records`](crate::CloudflareApi::zone_records).
#[derive(Debug, Clone, Default)]
pub struct ListRecordsRequest {
    pub zone_id: String,
    /// Optional server-side name filter (full record name).
    pub name: Option<String>,
    /// Optional record type filter, applied client-side after decoding
    /// (the server does not support filtering by type).
    pub record_type: Option<ZoneType>,
}

/// Request for [`CloudflareApi::add_zone_record`](crate::CloudflareApi::add_zone_record).
#[derive(Debug, Clone)]
pub struct CreateRecordRequest {
    pub zone_id: String,
    pub record: NewZoneRecord,
}

/// Request for [`CloudflareApi::delete_zone_record`](crate::CloudflareApi::delete_zone_record).
#[derive(Debug, Clone)]
pub struct DeleteRecordRequest {
    pub zone_id: String,
    pub record_id: String,
}

// ============ Response envelope ============

/// Cloudflare wraps every payload in `{"result": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultEnvelope<T> {
    pub result: T,
}
