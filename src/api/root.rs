use poem_openapi::{OpenApi, payload::PlainText};

pub const WELCOME_MESSAGE: &str =
    "Welcome to RideSense Bike Library. Head over to /api/ for swagger documentation";

/// Landing endpoint
pub struct RootApi;

#[OpenApi]
impl RootApi {
    /// Welcome message pointing at the API documentation
    #[oai(path = "/", method = "get")]
    async fn welcome(&self) -> PlainText<String> {
        PlainText(WELCOME_MESSAGE.to_string())
    }
}
