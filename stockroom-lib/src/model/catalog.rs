//! Name-only catalog records and subcategories

use serde::Deserialize;
use serde::Serialize;

use super::Named;
use super::Resource;
use crate::config::ResourceKind;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategoria")]
    pub id: i64,
    #[serde(rename = "nombreCategoria")]
    pub name: String,
}

/// Create payload for [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    #[serde(rename = "nombreCategoria")]
    pub name: String,
}

impl Resource for Category {
    type Draft = CategoryDraft;
    const KIND: ResourceKind = ResourceKind::Categories;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }

    fn draft(name: impl Into<String>) -> Self::Draft {
        CategoryDraft { name: name.into() }
    }
}

/// A product color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "idColor")]
    pub id: i64,
    #[serde(rename = "nombreColor")]
    pub name: String,
}

/// Create payload for [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDraft {
    #[serde(rename = "nombreColor")]
    pub name: String,
}

impl Resource for Color {
    type Draft = ColorDraft;
    const KIND: ResourceKind = ResourceKind::Colors;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for Color {
    fn name(&self) -> &str {
        &self.name
    }

    fn draft(name: impl Into<String>) -> Self::Draft {
        ColorDraft { name: name.into() }
    }
}

/// A garment size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    #[serde(rename = "idTalla")]
    pub id: i64,
    #[serde(rename = "nombreTalla")]
    pub name: String,
}

/// Create payload for [`Size`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeDraft {
    #[serde(rename = "nombreTalla")]
    pub name: String,
}

impl Resource for Size {
    type Draft = SizeDraft;
    const KIND: ResourceKind = ResourceKind::Sizes;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for Size {
    fn name(&self) -> &str {
        &self.name
    }

    fn draft(name: impl Into<String>) -> Self::Draft {
        SizeDraft { name: name.into() }
    }
}

/// The gender a product is aimed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gender {
    #[serde(rename = "idGenero")]
    pub id: i64,
    #[serde(rename = "nombreGenero")]
    pub name: String,
}

/// Create payload for [`Gender`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderDraft {
    #[serde(rename = "nombreGenero")]
    pub name: String,
}

impl Resource for Gender {
    type Draft = GenderDraft;
    const KIND: ResourceKind = ResourceKind::Genders;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for Gender {
    fn name(&self) -> &str {
        &self.name
    }

    fn draft(name: impl Into<String>) -> Self::Draft {
        GenderDraft { name: name.into() }
    }
}

/// Stock state of a product (new, used, reserved, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "idEstado")]
    pub id: i64,
    #[serde(rename = "nombreEstado")]
    pub name: String,
}

/// Create payload for [`State`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDraft {
    #[serde(rename = "nombreEstado")]
    pub name: String,
}

impl Resource for State {
    type Draft = StateDraft;
    const KIND: ResourceKind = ResourceKind::States;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for State {
    fn name(&self) -> &str {
        &self.name
    }

    fn draft(name: impl Into<String>) -> Self::Draft {
        StateDraft { name: name.into() }
    }
}

/// Mailbox that supplier orders are placed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEmail {
    #[serde(rename = "idCorreoPedido")]
    pub id: i64,
    #[serde(rename = "nombreCorreoPedido")]
    pub name: String,
}

/// Create payload for [`OrderEmail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEmailDraft {
    #[serde(rename = "nombreCorreoPedido")]
    pub name: String,
}

impl Resource for OrderEmail {
    type Draft = OrderEmailDraft;
    const KIND: ResourceKind = ResourceKind::OrderEmails;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Named for OrderEmail {
    fn name(&self) -> &str {
        &self.name
    }

    fn draft(name: impl Into<String>) -> Self::Draft {
        OrderEmailDraft { name: name.into() }
    }
}

/// A subcategory, always attached to a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(rename = "idSubcategoria")]
    pub id: i64,
    #[serde(rename = "nombreSubcategoria")]
    pub name: String,
    #[serde(rename = "idCategoria")]
    pub category_id: i64,
}

/// Create payload for [`Subcategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryDraft {
    #[serde(rename = "nombreSubcategoria")]
    pub name: String,
    #[serde(rename = "idCategoria")]
    pub category_id: i64,
}

impl Resource for Subcategory {
    type Draft = SubcategoryDraft;
    const KIND: ResourceKind = ResourceKind::Subcategories;

    fn id(&self) -> i64 {
        self.id
    }
}
