//! HTTP request plumbing and status classification.

use async_trait::async_trait;
use reqwest::{header, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, FailureCause, Result};
use crate::types::{
    CreateRecordRequest, DeleteRecordRequest, ListRecordsRequest, ResolveZoneRequest,
    ResultEnvelope, Zone, ZoneRecord,
};

use super::{CloudflareApi, HttpCloudflareClient, RECORDS_PER_PAGE};

impl HttpCloudflareClient {
    /// Build a request with the auth and content-type headers every
    /// operation carries.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        log::debug!("{method} {url}");
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
    }

    /// Send the request and classify the response status.
    ///
    /// Status mapping, applied in order:
    /// - 404 → `not_found` (entity-specific, never the generic failure)
    /// - 403 → `wrap(Unauthorized)`, before any error-body handling
    /// - other non-success → `wrap(Status { code, body })`
    /// - transport failure anywhere → `wrap(Transport)`
    ///
    /// On success the body text is returned for decoding. reqwest drops the
    /// response on every path, so the connection is released even on errors.
    async fn execute<W>(&self, builder: RequestBuilder, wrap: W, not_found: ClientError) -> Result<String>
    where
        W: Fn(FailureCause) -> ClientError,
    {
        let response = builder
            .send()
            .await
            .map_err(|e| wrap(FailureCause::Transport(e)))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if status == StatusCode::NOT_FOUND {
            return Err(not_found);
        }
        if status == StatusCode::FORBIDDEN {
            return Err(wrap(FailureCause::Unauthorized));
        }

        let body = response
            .text()
            .await
            .map_err(|e| wrap(FailureCause::Transport(e)))?;

        if !status.is_success() {
            return Err(wrap(FailureCause::Status {
                code: status.as_u16(),
                body,
            }));
        }

        log::debug!("Response Body: {body}");
        Ok(body)
    }

    /// Decode a `{"result": ...}` envelope, wrapping decode failures into
    /// the operation's error kind.
    fn decode<T, W>(body: &str, wrap: W) -> Result<T>
    where
        T: DeserializeOwned,
        W: Fn(FailureCause) -> ClientError,
    {
        serde_json::from_str::<ResultEnvelope<T>>(body)
            .map(|envelope| envelope.result)
            .map_err(|e| {
                log::error!("JSON decode failed: {e}");
                wrap(FailureCause::Decode(e))
            })
    }
}

#[async_trait]
impl CloudflareApi for HttpCloudflareClient {
    async fn zone_by_domain(&self, request: &ResolveZoneRequest) -> Result<String> {
        let builder = self
            .request(Method::GET, "/client/v4/zones")
            .query(&[("name", request.domain.as_str())]);

        let body = self
            .execute(builder, ClientError::ZoneListFailed, ClientError::ZoneNotFound)
            .await?;
        let zones: Vec<Zone> = Self::decode(&body, ClientError::ZoneListFailed)?;

        // The server already filters by name, but it matches loosely in some
        // edge cases. Re-check for an exact match instead of trusting it.
        zones
            .into_iter()
            .find(|zone| zone.name == request.domain)
            .map(|zone| zone.id)
            .ok_or(ClientError::ZoneNotFound)
    }

    async fn zone_records(&self, request: &ListRecordsRequest) -> Result<Vec<ZoneRecord>> {
        let path = format!("/client/v4/zones/{}/dns_records", request.zone_id);
        let mut builder = self
            .request(Method::GET, &path)
            .query(&[("per_page", RECORDS_PER_PAGE)]);
        if let Some(name) = request.name.as_deref().filter(|n| !n.is_empty()) {
            builder = builder.query(&[("name", name)]);
        }

        let body = self
            .execute(builder, ClientError::ZoneRecordsFailed, ClientError::ZoneNotFound)
            .await?;
        let mut records: Vec<ZoneRecord> = Self::decode(&body, ClientError::ZoneRecordsFailed)?;

        // The API cannot filter by type; do it here, preserving order.
        if let Some(zone_type) = request.record_type {
            records.retain(|record| record.record_type == zone_type.as_str());
        }

        Ok(records)
    }

    async fn add_zone_record(&self, request: &CreateRecordRequest) -> Result<ZoneRecord> {
        let path = format!("/client/v4/zones/{}/dns_records", request.zone_id);
        let builder = self.request(Method::POST, &path).json(&request.record);

        let body = self
            .execute(builder, ClientError::RecordAddFailed, ClientError::ZoneNotFound)
            .await?;
        Self::decode(&body, ClientError::RecordAddFailed)
    }

    async fn delete_zone_record(&self, request: &DeleteRecordRequest) -> Result<()> {
        let path = format!(
            "/client/v4/zones/{}/dns_records/{}",
            request.zone_id, request.record_id
        );
        let builder = self.request(Method::DELETE, &path);

        self.execute(builder, ClientError::RecordDeleteFailed, ClientError::RecordNotFound)
            .await?;
        Ok(())
    }
}
