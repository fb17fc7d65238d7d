//! Product records and uploads

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use super::Money;
use super::Resource;
use crate::config::ResourceKind;

/// A stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "idProducto")]
    pub id: i64,
    #[serde(flatten)]
    pub fields: ProductFields,
    /// Stored image name or URL, assigned by the service.
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "fechaCreacion", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "fechaActualizacion", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// The editable part of a [`Product`].
///
/// This is what goes into the `producto` part of a create or update upload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductFields {
    #[serde(rename = "nombreProducto")]
    pub name: String,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(rename = "precioCompra")]
    pub purchase_price: Money,
    #[serde(rename = "precioSinDescuento", default, skip_serializing_if = "Option::is_none")]
    pub list_price: Option<Money>,
    #[serde(rename = "precioVenta")]
    pub sale_price: Money,
    #[serde(rename = "idCategoria")]
    pub category_id: i64,
    #[serde(rename = "idSubcategoria")]
    pub subcategory_id: i64,
    #[serde(rename = "idGenero")]
    pub gender_id: i64,
    #[serde(rename = "idColor")]
    pub color_id: i64,
    #[serde(rename = "idTalla")]
    pub size_id: i64,
    #[serde(rename = "idEstado")]
    pub state_id: i64,
    /// Supplier order the item arrived with.
    #[serde(rename = "idPedido", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
}

impl Resource for Product {
    type Draft = ProductFields;
    const KIND: ResourceKind = ResourceKind::Products;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Image attached to a product upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ProductImage {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Guesses the mime type from the file extension.
    pub fn from_file_name(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let mime_type = match extension.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        };
        Self::new(file_name, mime_type, bytes)
    }
}

/// Multipart payload for creating or replacing a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpload {
    pub fields: ProductFields,
    pub image: Option<ProductImage>,
}

impl ProductUpload {
    pub fn new(fields: ProductFields) -> Self {
        Self { fields, image: None }
    }

    pub fn image(mut self, image: ProductImage) -> Self {
        self.image = Some(image);
        self
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_product_from_service_json() {
        let product: Product = serde_json::from_value(json!({
            "idProducto": 12,
            "nombreProducto": "Denim jacket",
            "sku": "DJ-001",
            "imagen": "dj-001.png",
            "precioCompra": 20.5,
            "precioVenta": 49.99,
            "fechaCreacion": "2024-03-01T10:15:00",
            "idCategoria": 1,
            "idSubcategoria": 2,
            "idGenero": 3,
            "idColor": 4,
            "idTalla": 5,
            "idEstado": 6
        }))
        .unwrap();

        assert_eq!(product.id, 12);
        assert_eq!(product.fields.name, "Denim jacket");
        assert_eq!(product.fields.sku.as_deref(), Some("DJ-001"));
        assert_eq!(product.fields.sale_price, Money::new(Decimal::new(4999, 2)));
        assert_eq!(product.fields.list_price, None);
        assert_eq!(product.fields.order_id, None);
        assert_eq!(product.image.as_deref(), Some("dj-001.png"));
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_fields_omit_missing_optionals() {
        let fields = ProductFields {
            name: "Cap".into(),
            purchase_price: Money::from_int(3),
            sale_price: Money::from_int(10),
            ..Default::default()
        };
        let value = serde_json::to_value(&fields).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("descripcion"));
        assert!(!object.contains_key("idPedido"));
        assert_eq!(object["nombreProducto"], json!("Cap"));
        assert_eq!(object["precioVenta"], json!(10.0));
    }

    #[test]
    fn test_image_mime_guess() {
        assert_eq!(ProductImage::from_file_name("a.PNG", vec![1]).mime_type, "image/png");
        assert_eq!(ProductImage::from_file_name("a.jpeg", vec![1]).mime_type, "image/jpeg");
        assert_eq!(
            ProductImage::from_file_name("noext", vec![1]).mime_type,
            "application/octet-stream"
        );
    }
}
