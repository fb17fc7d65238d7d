//! Request execution
//!
//! Low-level plumbing shared by every resource accessor: URL building, sending,
//! status checking and body decoding. Nothing here retries.

use reqwest::Method;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::InventoryClient;
use crate::config::ResourceKind;
use crate::error::ApiError;
use crate::error::Error;

/// Request payload.
pub(crate) enum Body {
    Empty,
    Json(String),
    Multipart(Form),
}

impl Body {
    pub(crate) fn json<B: Serialize + ?Sized>(value: &B) -> Result<Self, Error> {
        let json = serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self::Json(json))
    }
}

impl InventoryClient {
    /// `{base}` or `{base}/{path}` for a resource.
    pub(crate) fn resource_url(&self, kind: ResourceKind, path: &str) -> String {
        let base = self.inner.endpoints.url(kind);
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }

    /// Resource URL with query parameters appended.
    pub(crate) fn resource_url_with_query(
        &self,
        kind: ResourceKind,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<String, Error> {
        let raw = self.resource_url(kind, path);
        let mut url =
            Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url.into())
    }

    /// Sends a request and checks the status.
    ///
    /// Non-2xx responses become [`ApiError::Http`] carrying the response body.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &str,
        body: Body,
    ) -> Result<reqwest::Response, Error> {
        log::debug!("{} {}", method, url);

        let mut request = self
            .inner
            .http_client
            .request(method.clone(), url)
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        request = match body {
            Body::Empty => request,
            Body::Json(json) => request.header(CONTENT_TYPE, "application/json").body(json),
            Body::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = if text.trim().is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            text
        };
        log::warn!("{} {} -> {}", method, url, status.as_u16());
        Err(ApiError::http(status.as_u16(), message).into())
    }

    /// Sends a request and decodes the JSON response body.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Body,
    ) -> Result<T, Error> {
        let response = self.request(method, url, body).await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let text = response.text().await.map_err(ApiError::from)?;
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(e) => Err(ApiError::parse_with_body(e.to_string(), text).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;

    fn client() -> InventoryClient {
        let endpoints = Endpoints::new()
            .with(ResourceKind::Products, "http://shop.test/api/productos/")
            .unwrap();
        InventoryClient::builder().endpoints(endpoints).build().unwrap()
    }

    #[test]
    fn test_resource_url() {
        let client = client();
        assert_eq!(
            client.resource_url(ResourceKind::Products, ""),
            "http://shop.test/api/productos"
        );
        assert_eq!(
            client.resource_url(ResourceKind::Products, "42"),
            "http://shop.test/api/productos/42"
        );
        assert_eq!(
            client.resource_url(ResourceKind::Colors, "/7"),
            "http://localhost:8091/api/colores/7"
        );
    }

    #[test]
    fn test_query_is_encoded() {
        let client = client();
        let url = client
            .resource_url_with_query(
                ResourceKind::Products,
                "buscar",
                &[("nombre", "red shirt & tie")],
            )
            .unwrap();
        assert_eq!(
            url,
            "http://shop.test/api/productos/buscar?nombre=red+shirt+%26+tie"
        );
    }
}
