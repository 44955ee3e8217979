//! Products Domain
//!
//! Domain implementation for the product catalog backed by MongoDB,
//! including image uploads stored on local disk.
//!
//! Create and update are form-driven: fields arrive as multipart text
//! parts, the price is coerced from its raw string (defaulting to 0),
//! and an optional `image` file part is persisted through
//! [`uploads::UploadStore`] before the document is written.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod uploads;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ProductsApiDoc;
pub use models::{coerce_price, CreateProduct, Product, UpdateProduct};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
pub use uploads::UploadStore;
