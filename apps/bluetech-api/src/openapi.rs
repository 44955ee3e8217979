//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BlueTech Backend API",
        version = "0.1.0",
        description = "REST API for the BlueTech storefront: auth, users, products, and orders",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api/auth", api = domain_users::AuthApiDoc),
        (path = "/api/users", api = domain_users::UsersApiDoc),
        (path = "/api/products", api = domain_products::ProductsApiDoc)
    ),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "users", description = "User management"),
        (name = "products", description = "Product catalog with image upload"),
        (name = "orders", description = "Order intake")
    )
)]
pub struct ApiDoc;
