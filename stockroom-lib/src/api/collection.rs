//! Generic list/get/create/update/delete for one resource

use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;

use super::request::Body;
use crate::InventoryClient;
use crate::config::ResourceKind;
use crate::error::Error;
use crate::model::Resource;

/// CRUD access to one resource service.
///
/// | call             | request          |
/// |------------------|------------------|
/// | `list()`         | `GET {base}`     |
/// | `get(id)`        | `GET {base}/id`  |
/// | `create(draft)`  | `POST {base}`    |
/// | `update(id, r)`  | `PUT {base}/id`  |
/// | `delete(id)`     | `DELETE {base}/id` |
pub struct Collection<'a, T> {
    client: &'a InventoryClient,
    kind: ResourceKind,
    _record: PhantomData<fn() -> T>,
}

impl<'a, T> Collection<'a, T> {
    pub(crate) fn new(client: &'a InventoryClient, kind: ResourceKind) -> Self {
        Self {
            client,
            kind,
            _record: PhantomData,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn base_url(&self) -> &'a str {
        self.client.inner.endpoints.url(self.kind)
    }

    pub(crate) fn client(&self) -> &'a InventoryClient {
        self.client
    }

    pub(crate) fn item_url(&self, id: i64) -> String {
        self.client.resource_url(self.kind, &id.to_string())
    }

    /// Deletes a record.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client
            .request(Method::DELETE, &self.item_url(id), Body::Empty)
            .await?;
        log::info!("deleted {} {}", self.kind.singular(), id);
        Ok(())
    }
}

impl<'a, T: DeserializeOwned> Collection<'a, T> {
    /// Fetches every record.
    pub async fn list(&self) -> Result<Vec<T>, Error> {
        let url = self.client.resource_url(self.kind, "");
        self.client.request_json(Method::GET, &url, Body::Empty).await
    }

    /// Fetches one record by id.
    pub async fn get(&self, id: i64) -> Result<T, Error> {
        self.client
            .request_json(Method::GET, &self.item_url(id), Body::Empty)
            .await
    }
}

impl<'a, T: Resource> Collection<'a, T> {
    /// Creates a record and returns it as stored, id included.
    pub async fn create(&self, draft: &T::Draft) -> Result<T, Error> {
        let url = self.client.resource_url(self.kind, "");
        let created: T = self
            .client
            .request_json(Method::POST, &url, Body::json(draft)?)
            .await?;
        log::info!("created {} {}", self.kind.singular(), created.id());
        Ok(created)
    }

    /// Replaces a record.
    pub async fn update(&self, id: i64, record: &T) -> Result<T, Error> {
        self.client
            .request_json(Method::PUT, &self.item_url(id), Body::json(record)?)
            .await
    }
}

impl<T> std::fmt::Debug for Collection<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("kind", &self.kind)
            .field("base_url", &self.base_url())
            .finish()
    }
}
