//! OpenAPI documentation configuration

use core_config::server::ServerConfig;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::server::ServerBuilder;
use utoipa::{Modify, OpenApi};

/// Combined OpenAPI documentation for the Shop API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "E-Commerce API",
        version = "1.0.0",
        description = "Basic e-commerce API with axum and postgres"
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Shop", description = "Product catalog endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Account", description = "Customer account endpoints"),
        (name = "Checkout", description = "Checkout endpoints")
    )
)]
pub struct ApiDoc;

/// Declares the JWT schemes clients may send. Nothing enforces them yet.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerJWT",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        components.add_security_scheme(
            "cookieJWT",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("access_token"))),
        );
    }
}

/// The document served at `/swagger.json`, with the local server entry for `server`.
pub fn openapi(server: &ServerConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers.get_or_insert_with(Vec::new).push(
        ServerBuilder::new()
            .url(server.local_url())
            .description(Some("Development Server"))
            .build(),
    );
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_metadata() {
        let doc = openapi(&ServerConfig::new("0.0.0.0", 4000));

        assert_eq!(doc.info.title, "E-Commerce API");
        assert_eq!(doc.info.version, "1.0.0");

        let servers = doc.servers.unwrap();
        assert_eq!(servers[0].url, "http://localhost:4000");
        assert_eq!(servers[0].description.as_deref(), Some("Development Server"));
    }

    #[test]
    fn test_product_paths_are_nested() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/products/{id}"));
        assert!(doc.paths.paths.contains_key("/api/products/{id}/quantity"));
        assert!(doc.paths.paths.contains_key("/api/products/search"));
    }

    #[test]
    fn test_security_schemes_are_declared() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();

        assert!(components.security_schemes.contains_key("bearerJWT"));
        assert!(components.security_schemes.contains_key("cookieJWT"));
    }
}
