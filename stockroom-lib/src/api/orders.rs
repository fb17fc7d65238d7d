//! Orders service

use reqwest::Method;

use super::Collection;
use super::request::Body;
use crate::InventoryClient;
use crate::config::ResourceKind;
use crate::error::Error;
use crate::model::Order;
use crate::model::OrderItem;
use crate::model::OrderWithItems;

/// Access to the orders service.
///
/// Creates and updates send the order together with its line items.
#[derive(Debug)]
pub struct Orders<'a> {
    records: Collection<'a, Order>,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(client: &'a InventoryClient) -> Self {
        Self {
            records: Collection::new(client, ResourceKind::Orders),
        }
    }

    pub fn base_url(&self) -> &'a str {
        self.records.base_url()
    }

    /// `GET {base}`
    pub async fn list(&self) -> Result<Vec<Order>, Error> {
        self.records.list().await
    }

    /// `GET {base}/{id}`
    pub async fn get(&self, id: i64) -> Result<Order, Error> {
        self.records.get(id).await
    }

    /// `DELETE {base}/{id}`
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.records.delete(id).await
    }

    /// `POST {base}` with `{ pedido, productos }`
    pub async fn create(&self, payload: &OrderWithItems) -> Result<Order, Error> {
        let client = self.records.client();
        let url = client.resource_url(ResourceKind::Orders, "");
        let created: Order = client
            .request_json(Method::POST, &url, Body::json(payload)?)
            .await?;
        log::info!("created order {} with {} items", created.id, payload.items.len());
        Ok(created)
    }

    /// `PUT {base}/{id}` with `{ pedido, productos }`
    pub async fn update(&self, id: i64, payload: &OrderWithItems) -> Result<Order, Error> {
        let url = self.records.item_url(id);
        self.records
            .client()
            .request_json(Method::PUT, &url, Body::json(payload)?)
            .await
    }

    /// `GET {base}/{id}/productos`
    pub async fn items(&self, order_id: i64) -> Result<Vec<OrderItem>, Error> {
        let client = self.records.client();
        let url = client.resource_url(ResourceKind::Orders, &format!("{}/productos", order_id));
        client.request_json(Method::GET, &url, Body::Empty).await
    }
}
