use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{parse_category_envelope, ApiError, ApiSuccess, Category};

pub mod session;

pub use session::{SessionStore, SessionView};

const API_BASE: &str = "/api/v1";

pub struct ApiClient;

impl ApiClient {
    async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
        let response = Self::send_get(path).await?;
        let result: ApiSuccess<T> = response.json().await.map_err(|e| e.to_string())?;
        Ok(result.data)
    }

    async fn send_get(path: &str) -> Result<Response, String> {
        let url = format!("{}{}", API_BASE, path);
        let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;

        if response.ok() {
            Ok(response)
        } else {
            Err(Self::error_message(response).await)
        }
    }

    async fn error_message(response: Response) -> String {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error.message,
            Err(_) => format!("Request failed with status {}", status),
        }
    }

    // Catalog endpoints

    /// Fetches the navbar categories, in server order.
    ///
    /// The body is checked by hand instead of deserialized into
    /// `ApiSuccess<Vec<Category>>` so that any unexpected shape ends up as a
    /// plain error string.
    pub async fn get_all_categories() -> Result<Vec<Category>, String> {
        let response = Self::send_get("/course/showAllCategories").await?;
        let body = response.text().await.map_err(|e| e.to_string())?;
        parse_category_envelope(&body).map_err(|e| e.to_string())
    }

    pub async fn get_category(slug: &str) -> Result<Category, String> {
        Self::get::<Category>(&format!("/course/categories/{}", slug)).await
    }
}
