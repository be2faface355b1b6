use serde::{Deserialize, Serialize};

/// Brands with dedicated slug rules. Anything unrecognized falls back to
/// `Other`, which gets the plain truncate-only treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Tommy,
    Shein,
    Reiss,
    Next,
    Other,
}

impl Brand {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "tommy" => Self::Tommy,
            "shein" => Self::Shein,
            "reiss" => Self::Reiss,
            "next" => Self::Next,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: i64,
    pub sku: i64,
    pub brand: String,
    pub slug: String,
    pub title: String,
    pub quantity: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub sku: i64,
    pub brand: String,
    pub title: String,
    #[serde(default)]
    pub quantity: i64,
}

/// List view: id, SKU, brand, slug and title only.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: i64,
    pub sku: i64,
    pub brand: String,
    pub slug: String,
    pub title: String,
}
