// API service layer for the billing REST collaborator
use clientdesk_shared::ListResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::AppConfig;

// ============================================
// ERROR HANDLING
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl ApiError {
    fn network(err: impl std::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        }
    }

    fn parse(err: impl std::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
            code: Some("PARSE_ERROR".to_string()),
        }
    }

    fn serialize(err: impl std::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
            code: Some("SERIALIZE_ERROR".to_string()),
        }
    }

    fn http(status: u16) -> Self {
        Self {
            message: format!("HTTP Error: {}", status),
            code: Some(format!("HTTP_{}", status)),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// HTTP CLIENT
// ============================================

/// Verbs the billing API is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token_key: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            token_key: config.auth_token_key.clone(),
        }
    }

    fn auth_token(&self) -> Option<String> {
        LocalStorage::get::<String>(&self.token_key).ok()
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn builder(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);
        tracing::debug!(method = method.as_str(), %url, "api request");

        let req = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
        };

        match self.auth_token() {
            Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
            None => req,
        }
    }

    async fn request<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let response = self
            .builder(Method::Get, endpoint)
            .send()
            .await
            .map_err(ApiError::network)?;

        Self::read(response).await
    }

    async fn request_with_body<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .builder(method, endpoint)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(ApiError::serialize)?
            .send()
            .await
            .map_err(ApiError::network)?;

        Self::read(response).await
    }

    async fn read<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if response.ok() {
            response.json::<T>().await.map_err(ApiError::parse)
        } else {
            let status = response.status();
            Err(response.json::<ApiError>().await.unwrap_or_else(|_| ApiError::http(status)))
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint).await
    }

    /// GET for list endpoints, accepting bare arrays and `data` envelopes.
    pub async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<Vec<T>> {
        self.get::<ListResponse<T>>(endpoint).await.map(ListResponse::into_vec)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResult<T> {
        self.request_with_body(Method::Post, endpoint, body).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResult<T> {
        self.request_with_body(Method::Patch, endpoint, body).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

// ============================================
// DASHBOARD SERVICE
// ============================================

pub mod dashboard {
    use super::*;
    use clientdesk_shared::{Alert, DashboardStats};

    pub async fn stats(api: &ApiClient) -> ApiResult<DashboardStats> {
        api.get("/dashboard/stats").await
    }

    pub async fn alerts(api: &ApiClient) -> ApiResult<Vec<Alert>> {
        api.get_list("/dashboard/alerts").await
    }
}

// ============================================
// CUSTOMERS SERVICE
// ============================================

pub mod customers {
    use super::*;
    use clientdesk_shared::{Client, Message, Order, Transaction};

    pub async fn list(api: &ApiClient) -> ApiResult<Vec<Client>> {
        api.get_list("/customers").await
    }

    pub async fn get(api: &ApiClient, id: &str) -> ApiResult<Client> {
        api.get(&format!("/customers/{}", segment(id))).await
    }

    pub async fn orders(api: &ApiClient, id: &str) -> ApiResult<Vec<Order>> {
        api.get_list(&format!("/customers/{}/orders", segment(id))).await
    }

    pub async fn transactions(api: &ApiClient, id: &str) -> ApiResult<Vec<Transaction>> {
        api.get_list(&format!("/customers/{}/transactions", segment(id))).await
    }

    pub async fn messages(api: &ApiClient, id: &str) -> ApiResult<Vec<Message>> {
        api.get_list(&format!("/customers/{}/messages", segment(id))).await
    }
}

// ============================================
// ORDERS SERVICE
// ============================================

pub mod orders {
    use super::*;
    use clientdesk_shared::Order;

    pub async fn list(api: &ApiClient) -> ApiResult<Vec<Order>> {
        api.get_list("/orders").await
    }
}

// ============================================
// NOTES SERVICE
// ============================================

pub mod notes {
    use super::*;
    use clientdesk_shared::{NewNote, Note};

    pub async fn list(api: &ApiClient, client_id: &str) -> ApiResult<Vec<Note>> {
        api.get_list(&format!("/customers/{}/notes", segment(client_id))).await
    }

    pub async fn create(api: &ApiClient, client_id: &str, note: &NewNote) -> ApiResult<Note> {
        api.post(&format!("/customers/{}/notes", segment(client_id)), note).await
    }

    pub async fn mark_read(api: &ApiClient, note_id: &str) -> ApiResult<Note> {
        api.patch(&format!("/notes/{}/read", segment(note_id)), &()).await
    }
}

// ============================================
// MESSAGES SERVICE
// ============================================

pub mod messages {
    use super::*;
    use clientdesk_shared::Message;

    pub async fn mark_read(api: &ApiClient, message_id: &str) -> ApiResult<Message> {
        api.patch(&format!("/messages/{}/read", segment(message_id)), &()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_base_and_endpoint() {
        let config = AppConfig {
            api_base_url: "https://api.example.com/v2".to_string(),
            ..AppConfig::default()
        };
        let api = ApiClient::new(&config);

        assert_eq!(api.url("/customers"), "https://api.example.com/v2/customers");
        assert_eq!(ApiClient::default().url("/orders"), "/api/v1/orders");
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Patch.as_str(), "PATCH");
    }

    #[test]
    fn test_path_segments_are_encoded() {
        assert_eq!(segment("42"), "42");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::http(404).code.as_deref(), Some("HTTP_404"));
        assert_eq!(ApiError::network("offline").to_string(), "offline");
        assert_eq!(ApiError::parse("bad json").code.as_deref(), Some("PARSE_ERROR"));
    }

    #[test]
    fn test_error_body_shape() {
        let err: ApiError =
            serde_json::from_str(r#"{"message":"Cliente no encontrado","code":"NOT_FOUND"}"#).unwrap();

        assert_eq!(err.code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(err.to_string(), "Cliente no encontrado");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_bearer_token_comes_from_local_storage() {
        let config = AppConfig {
            auth_token_key: "clientdesk_test_token".to_string(),
            ..AppConfig::default()
        };
        let api = ApiClient::new(&config);

        LocalStorage::delete(&config.auth_token_key);
        assert_eq!(api.auth_token(), None);

        LocalStorage::set(&config.auth_token_key, "secret").unwrap();
        assert_eq!(api.auth_token().as_deref(), Some("secret"));

        LocalStorage::delete(&config.auth_token_key);
    }
}
