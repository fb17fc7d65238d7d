//! Products service
//!
//! Creates and updates go out as `multipart/form-data` with a `producto` JSON
//! part and an optional `imagen` file part.

use reqwest::Method;
use reqwest::multipart::Form;
use reqwest::multipart::Part;

use super::Collection;
use super::request::Body;
use crate::InventoryClient;
use crate::config::ResourceKind;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Product;
use crate::model::ProductUpload;

/// Form field holding the product JSON.
const PRODUCT_PART: &str = "producto";
/// Form field holding the image file.
const IMAGE_PART: &str = "imagen";

/// Access to the products service.
#[derive(Debug)]
pub struct Products<'a> {
    records: Collection<'a, Product>,
}

impl<'a> Products<'a> {
    pub(crate) fn new(client: &'a InventoryClient) -> Self {
        Self {
            records: Collection::new(client, ResourceKind::Products),
        }
    }

    pub fn base_url(&self) -> &'a str {
        self.records.base_url()
    }

    /// `GET {base}`
    pub async fn list(&self) -> Result<Vec<Product>, Error> {
        self.records.list().await
    }

    /// `GET {base}/{id}`
    pub async fn get(&self, id: i64) -> Result<Product, Error> {
        self.records.get(id).await
    }

    /// `DELETE {base}/{id}`
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.records.delete(id).await
    }

    /// `POST {base}` (multipart)
    pub async fn create(&self, upload: ProductUpload) -> Result<Product, Error> {
        let client = self.records.client();
        let url = client.resource_url(ResourceKind::Products, "");
        let created: Product = client
            .request_json(Method::POST, &url, Body::Multipart(upload_form(upload)?))
            .await?;
        log::info!("created product {}", created.id);
        Ok(created)
    }

    /// `PUT {base}/{id}` (multipart)
    pub async fn update(&self, id: i64, upload: ProductUpload) -> Result<Product, Error> {
        let url = self.records.item_url(id);
        self.records
            .client()
            .request_json(Method::PUT, &url, Body::Multipart(upload_form(upload)?))
            .await
    }

    /// `GET {base}/buscar?nombre={name}`
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, Error> {
        let client = self.records.client();
        let url =
            client.resource_url_with_query(ResourceKind::Products, "buscar", &[("nombre", name)])?;
        client.request_json(Method::GET, &url, Body::Empty).await
    }

    /// `GET {base}/sku/{sku}`
    pub async fn get_by_sku(&self, sku: &str) -> Result<Product, Error> {
        let client = self.records.client();
        let path = format!("sku/{}", urlencoding::encode(sku));
        let url = client.resource_url(ResourceKind::Products, &path);
        client.request_json(Method::GET, &url, Body::Empty).await
    }
}

fn upload_form(upload: ProductUpload) -> Result<Form, Error> {
    let json = serde_json::to_string(&upload.fields).map_err(|e| ApiError::Encode(e.to_string()))?;
    let product = Part::text(json)
        .mime_str("application/json")
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    let mut form = Form::new().part(PRODUCT_PART, product);

    if let Some(image) = upload.image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)
            .map_err(|e| {
                ApiError::Encode(format!("image mime type '{}': {}", image.mime_type, e))
            })?;
        form = form.part(IMAGE_PART, part);
    }

    Ok(form)
}
