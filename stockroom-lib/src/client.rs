//! Main InventoryClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::api::Collection;
use crate::api::Orders;
use crate::api::Products;
use crate::config::Endpoints;
use crate::config::ResourceKind;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Category;
use crate::model::Color;
use crate::model::Gender;
use crate::model::OrderEmail;
use crate::model::Size;
use crate::model::State;
use crate::model::Subcategory;

/// Client for the inventory microservices.
///
/// Cheap to clone (uses `Arc` internally) and safe to share across tasks.
///
/// # Example
///
/// ```ignore
/// use stockroom_lib::InventoryClient;
///
/// let client = InventoryClient::builder()
///     .endpoints(Endpoints::from_env()?)
///     .build()?;
/// for category in client.categories().list().await? {
///     println!("{} {}", category.id, category.name);
/// }
/// ```
#[derive(Clone)]
pub struct InventoryClient {
    pub(crate) inner: Arc<InventoryClientInner>,
}

pub(crate) struct InventoryClientInner {
    pub(crate) endpoints: Endpoints,
    pub(crate) http_client: Client,
    pub(crate) timeout: Option<Duration>,
}

impl InventoryClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> InventoryClientBuilder {
        InventoryClientBuilder::new()
    }

    /// Client for the default local endpoints.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    pub fn categories(&self) -> Collection<'_, Category> {
        Collection::new(self, ResourceKind::Categories)
    }

    pub fn subcategories(&self) -> Collection<'_, Subcategory> {
        Collection::new(self, ResourceKind::Subcategories)
    }

    pub fn colors(&self) -> Collection<'_, Color> {
        Collection::new(self, ResourceKind::Colors)
    }

    pub fn sizes(&self) -> Collection<'_, Size> {
        Collection::new(self, ResourceKind::Sizes)
    }

    pub fn genders(&self) -> Collection<'_, Gender> {
        Collection::new(self, ResourceKind::Genders)
    }

    pub fn states(&self) -> Collection<'_, State> {
        Collection::new(self, ResourceKind::States)
    }

    pub fn order_emails(&self) -> Collection<'_, OrderEmail> {
        Collection::new(self, ResourceKind::OrderEmails)
    }

    pub fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }

    /// Untyped access to any resource, records as raw JSON.
    ///
    /// Supports `list`, `get` and `delete`.
    pub fn records(&self, kind: ResourceKind) -> Collection<'_, serde_json::Value> {
        Collection::new(self, kind)
    }
}

impl std::fmt::Debug for InventoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryClient")
            .field("endpoints", &self.inner.endpoints)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing an [`InventoryClient`].
///
/// # Example
///
/// ```ignore
/// let client = InventoryClient::builder()
///     .endpoints(Endpoints::from_env()?)
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Default)]
pub struct InventoryClientBuilder {
    endpoints: Option<Endpoints>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl InventoryClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service endpoints.
    ///
    /// Defaults to [`Endpoints::new`].
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client, so it has no effect
    /// together with [`http_client`](Self::http_client).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`InventoryClient`].
    pub fn build(self) -> Result<InventoryClient, Error> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(InventoryClient {
            inner: Arc::new(InventoryClientInner {
                endpoints: self.endpoints.unwrap_or_default(),
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
