//! Product HTTP Handlers - Axum route handlers
//!
//! Create and update accept `multipart/form-data` with text fields
//! `name`, `description`, `price` and an optional file field `image`.
//! All successful responses use 200 OK, including creation.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{InternalServerErrorResponse, NotFoundResponse};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{coerce_price, CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::uploads::UploadStore;

/// Message-only payload returned by delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// OpenAPI documentation for the product endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product, update_product, delete_product),
    components(
        schemas(Product, CreateProduct, MessageResponse),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags((name = "products", description = "Product catalog"))
)]
pub struct ProductsApiDoc;

/// Shared state: the service plus the image store.
pub struct ProductsState<R: ProductRepository> {
    pub service: ProductService<R>,
    pub uploads: UploadStore,
}

impl<R: ProductRepository> Clone for ProductsState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            uploads: self.uploads.clone(),
        }
    }
}

/// Router for the product endpoints, mounted under /api/products.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    uploads: UploadStore,
) -> Router {
    Router::new()
        .route("/", get(list_products::<R>).post(create_product::<R>))
        .route(
            "/{id}",
            get(get_product::<R>)
                .put(update_product::<R>)
                .delete(delete_product::<R>),
        )
        .with_state(Arc::new(ProductsState { service, uploads }))
}

// Ids arrive as raw path strings; a malformed id is reported as a
// store-level failure (500), not a client error.
fn parse_id(raw: &str) -> ProductResult<Uuid> {
    raw.parse::<Uuid>().map_err(|e| {
        ProductError::Database(format!("Cast to ObjectId failed for value \"{raw}\": {e}"))
    })
}

/// Text fields and the optional image file pulled from a product form.
#[derive(Default)]
struct ProductForm {
    name: Option<String>,
    description: Option<String>,
    price: Option<String>,
    image: Option<(String, Vec<u8>)>,
}

async fn read_form(mut multipart: Multipart) -> ProductResult<ProductForm> {
    let mut form = ProductForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProductError::Upload(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "name" => {
                form.name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ProductError::Upload(e.to_string()))?,
                )
            }
            "description" => {
                form.description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ProductError::Upload(e.to_string()))?,
                )
            }
            "price" => {
                form.price = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ProductError::Upload(e.to_string()))?,
                )
            }
            "image" => {
                // A file part with an empty filename counts as no file
                let file_name = field.file_name().unwrap_or_default().to_string();
                if file_name.is_empty() {
                    continue;
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ProductError::Upload(e.to_string()))?;
                form.image = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn store_image(
    uploads: &UploadStore,
    image: Option<(String, Vec<u8>)>,
) -> ProductResult<Option<String>> {
    match image {
        Some((file_name, bytes)) => Ok(Some(uploads.save(&file_name, &bytes).await?)),
        None => Ok(None),
    }
}

/// List all products, newest first
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "products"
)]
async fn list_products<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = state.service.list_products().await?;
    Ok(Json(products))
}

/// Create a product from a multipart form
#[utoipa::path(
    post,
    path = "/",
    request_body(content = CreateProduct, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created product", body = Product),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "products"
)]
async fn create_product<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
    multipart: Multipart,
) -> ProductResult<Json<Product>> {
    let form = read_form(multipart).await?;
    let image_url = store_image(&state.uploads, form.image).await?;

    let product = state
        .service
        .create_product(CreateProduct {
            name: form.name,
            description: form.description,
            price: form.price,
            image_url,
        })
        .await?;
    Ok(Json(product))
}

/// Fetch a single product
#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "products"
)]
async fn get_product<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = state.service.get_product(id).await?;
    Ok(Json(product))
}

/// Update a product from a multipart form
#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = String, Path, description = "Product id")),
    request_body(content = CreateProduct, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated product, or null when the id is unknown", body = Option<Product>),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "products"
)]
async fn update_product<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> ProductResult<Json<Option<Product>>> {
    let id = parse_id(&id)?;
    let form = read_form(multipart).await?;
    let image_url = store_image(&state.uploads, form.image).await?;

    let product = state
        .service
        .update_product(
            id,
            UpdateProduct {
                name: form.name,
                description: form.description,
                price: coerce_price(form.price.as_deref()),
                image_url,
            },
        )
        .await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted (also for unknown ids)", body = MessageResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "products"
)]
async fn delete_product<R: ProductRepository>(
    State(state): State<Arc<ProductsState<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.service.delete_product(id).await?;
    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}
