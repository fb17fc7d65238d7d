//! Supplier orders and their line items

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::Money;
use super::Resource;
use crate::config::ResourceKind;

/// A supplier order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "idPedido")]
    pub id: i64,
    #[serde(flatten)]
    pub fields: OrderDraft,
}

/// The editable part of an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(rename = "numeroPedido")]
    pub number: String,
    #[serde(rename = "fechaPedido")]
    pub ordered_on: NaiveDate,
    #[serde(rename = "fechaLlegada", default, skip_serializing_if = "Option::is_none")]
    pub arrived_on: Option<NaiveDate>,
    #[serde(rename = "totalPedido", default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Money>,
    #[serde(rename = "nota", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Mailbox the order was placed from.
    #[serde(rename = "idCorreoPedido")]
    pub order_email_id: i64,
}

impl OrderDraft {
    pub fn new(number: impl Into<String>, ordered_on: NaiveDate, order_email_id: i64) -> Self {
        Self {
            number: number.into(),
            ordered_on,
            arrived_on: None,
            total: None,
            note: None,
            order_email_id,
        }
    }
}

impl Resource for Order {
    type Draft = OrderDraft;
    const KIND: ResourceKind = ResourceKind::Orders;

    fn id(&self) -> i64 {
        self.id
    }
}

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "idPedido", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(rename = "idProducto")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    /// Unit price.
    #[serde(rename = "precio")]
    pub price: Money,
}

impl OrderItem {
    pub fn new(product_id: i64, quantity: u32, price: Money) -> Self {
        Self {
            id: None,
            order_id: None,
            product_id,
            quantity,
            price,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Create/update payload of the orders service: the order plus all of its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWithItems {
    #[serde(rename = "pedido")]
    pub order: OrderDraft,
    #[serde(rename = "productos")]
    pub items: Vec<OrderItem>,
}

impl OrderWithItems {
    pub fn new(order: OrderDraft, items: Vec<OrderItem>) -> Self {
        Self { order, items }
    }

    /// Sets the order total from its lines when it was left empty.
    pub fn with_computed_total(mut self) -> Self {
        if self.order.total.is_none() {
            self.order.total = Some(self.items.iter().map(OrderItem::line_total).sum());
        }
        self
    }
}
