//! HTTP handlers for the Products API

use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestBodyResponse, BadRequestIdResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    AppJson, IdPath,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, QuantityAdjustment, SearchQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        search_products,
        list_by_category,
        get_product,
        adjust_quantity,
    ),
    components(
        schemas(Product, QuantityAdjustment),
        responses(
            NotFoundResponse,
            BadRequestIdResponse,
            BadRequestBodyResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Shop", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products))
        .route("/search", get(search_products))
        .route("/category/{category}", get(list_by_category))
        .route("/{id}", get(get_product))
        .route("/{id}/quantity", put(adjust_quantity))
        .with_state(shared_service)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Shop",
    responses(
        (status = 200, description = "All products ordered by id", body = Vec<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Search product descriptions
#[utoipa::path(
    get,
    path = "/search",
    tag = "Shop",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching products ordered by id", body = Vec<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<SearchQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.search_products(&query.q).await?;
    Ok(Json(products))
}

/// List the products of one category
#[utoipa::path(
    get,
    path = "/category/{category}",
    tag = "Shop",
    params(
        ("category" = String, Path, description = "Exact, case-sensitive category name")
    ),
    responses(
        (status = 200, description = "Products in the category ordered by id", body = Vec<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_by_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(category): Path<String>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_by_category(&category).await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Shop",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Adjust the quantity on hand
#[utoipa::path(
    put,
    path = "/{id}/quantity",
    tag = "Shop",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = QuantityAdjustment,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, response = BadRequestBodyResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn adjust_quantity<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<QuantityAdjustment>,
) -> ProductResult<Json<Product>> {
    let product = service.adjust_quantity(id, input.delta).await?;
    Ok(Json(product))
}
