use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product entity - represents a product document stored in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price in the store currency
    pub price: f64,
    /// Public URL of the product image, when one was uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with store-assigned id and timestamps.
    pub fn new(
        name: String,
        description: String,
        price: f64,
        image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            description,
            price,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from an UpdateProduct DTO.
    ///
    /// Name, description, and image are replaced only when supplied.
    /// The price is always rewritten: an update without a price field
    /// resets it to 0. That matches the form-driven contract this
    /// endpoint has always had, where every edit resubmits the price.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.price = update.price;
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        self.updated_at = Utc::now();
    }
}

/// DTO for creating a product, assembled from a multipart form.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Price exactly as typed into the form
    pub price: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating a product, assembled from a multipart form.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Already-coerced price; see [`coerce_price`]
    pub price: f64,
    pub image_url: Option<String>,
}

/// Coerce a form price field to a number.
///
/// Whitespace is trimmed; an absent, empty, or unparseable value
/// becomes 0.
pub fn coerce_price(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0)
}
