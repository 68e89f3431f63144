// API layer - HTTP endpoints
pub mod bike;
pub mod error_translator;
pub mod root;

pub use bike::BikeApi;
pub use error_translator::translate_error;
pub use root::RootApi;

use poem::http::{HeaderValue, Method, header};
use poem::{Endpoint, EndpointExt, Request, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

pub const API_TITLE: &str = "Bike Library API Docs";
pub const API_VERSION: &str = "1.0";

/// Build the OpenAPI service describing every endpoint
pub fn api_service(app_data: &AppData, server_url: &str) -> OpenApiService<(RootApi, BikeApi), ()> {
    OpenApiService::new(
        (RootApi, BikeApi::new(app_data.bike_store.clone())),
        API_TITLE,
        API_VERSION,
    )
    .description("API Documentation for the Bike Library with GET, POST, PATCH, DELETE methods.")
    .server(server_url.to_string())
}

/// Compose the full application
///
/// Swagger UI is served under `/api`, the OpenAPI document at `/api-json`,
/// and every error leaving the app goes through [`translate_error`].
/// Write requests without a `Content-Type` are read as JSON.
pub fn build_app(app_data: &AppData, server_url: &str) -> impl Endpoint + use<> {
    let api_service = api_service(app_data, server_url);
    let ui = api_service.swagger_ui();
    let openapi_json = api_service.spec_endpoint();

    Route::new()
        .nest("/api", ui)
        .at("/api-json", openapi_json)
        .nest("/", api_service)
        .before(assume_json_body)
        .catch_all_error(translate_error)
}

/// Treat an untyped write body as JSON, and an empty one as `{}`
async fn assume_json_body(mut req: Request) -> poem::Result<Request> {
    let method = req.method();
    let writes = method == Method::POST || method == Method::PUT || method == Method::PATCH;
    if !writes || req.headers().contains_key(header::CONTENT_TYPE) {
        return Ok(req);
    }

    let body = req.take_body().into_bytes().await?;
    if body.is_empty() {
        req.set_body("{}");
    } else {
        req.set_body(body);
    }
    req.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Ok(req)
}
