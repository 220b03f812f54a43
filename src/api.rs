//! HTTP API Client
//!
//! Reads degrade to `None` (logged) so the renderers can show a fixed
//! "unavailable" message; mutations return the server's error detail.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ApiError;
use crate::models::{
    DashboardSummary, Entrada, EntradaPayload, MesDisponivel, NovaSaida, Saida, SaidaUpdate,
};
use crate::view_state::{ListScope, YearMonth};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Entradas,
    Saidas,
}

impl ListKind {
    pub fn path(self) -> &'static str {
        match self {
            ListKind::Entradas => "entradas",
            ListKind::Saidas => "saidas",
        }
    }
}

/// Endpoint and query for a list read.
pub fn list_endpoint(kind: ListKind, scope: ListScope) -> (String, Vec<(&'static str, String)>) {
    match scope {
        ListScope::All => (format!("{}/todos", kind.path()), Vec::new()),
        ListScope::Month(ym) => (kind.path().to_string(), ym.query()),
    }
}

pub fn dashboard_endpoint(month: Option<YearMonth>) -> (String, Vec<(&'static str, String)>) {
    (
        "dashboard".to_string(),
        month.map(|ym| ym.query()).unwrap_or_default(),
    )
}

pub fn record_endpoint(kind: ListKind, id: i64) -> String {
    format!("{}/{}", kind.path(), id)
}

pub fn group_endpoint(group_id: i64) -> String {
    format!("saidas/grupo/{}", group_id)
}

pub fn build_url(base: &str, endpoint: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), endpoint);
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

#[async_trait(?Send)]
pub trait FinancasApi {
    async fn dashboard(&self, month: Option<YearMonth>) -> Option<DashboardSummary>;
    async fn list_entradas(&self, scope: ListScope) -> Option<Vec<Entrada>>;
    async fn list_saidas(&self, scope: ListScope) -> Option<Vec<Saida>>;
    async fn available_months(&self) -> Option<Vec<MesDisponivel>>;

    async fn create_entrada(&self, payload: &EntradaPayload) -> Result<(), ApiError>;
    async fn update_entrada(&self, id: i64, payload: &EntradaPayload) -> Result<(), ApiError>;
    async fn delete_entrada(&self, id: i64) -> Result<(), ApiError>;

    async fn create_saida(&self, payload: &NovaSaida) -> Result<(), ApiError>;
    async fn update_saida(&self, id: i64, payload: &SaidaUpdate) -> Result<(), ApiError>;
    async fn delete_saida(&self, id: i64) -> Result<(), ApiError>;
    async fn delete_saida_group(&self, group_id: i64) -> Result<(), ApiError>;
}

/// FastAPI error body; `detail` is a string for `HTTPException`s and a list
/// for validation failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(|m| m.as_str()))
            .map(str::to_string),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(config::api_base_url())
    }
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        build_url(&self.base_url, endpoint, params)
    }

    async fn fetch_data<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Option<T> {
        let url = self.url(endpoint, params);
        log::debug!("GET {}", url);
        match self.try_fetch(&url).await {
            Ok(data) => Some(data),
            Err(err) => {
                log::error!("Erro ao buscar {}: {}", endpoint, err);
                None
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<(), ApiError> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }

    async fn send_delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let url = self.url(endpoint, &[]);
        log::info!("DELETE {}", url);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => error_detail(&body),
        Err(_) => None,
    };
    Err(ApiError::Status { status, detail })
}

#[async_trait(?Send)]
impl FinancasApi for HttpApi {
    async fn dashboard(&self, month: Option<YearMonth>) -> Option<DashboardSummary> {
        let (endpoint, params) = dashboard_endpoint(month);
        self.fetch_data(&endpoint, &params).await
    }

    async fn list_entradas(&self, scope: ListScope) -> Option<Vec<Entrada>> {
        let (endpoint, params) = list_endpoint(ListKind::Entradas, scope);
        self.fetch_data(&endpoint, &params).await
    }

    async fn list_saidas(&self, scope: ListScope) -> Option<Vec<Saida>> {
        let (endpoint, params) = list_endpoint(ListKind::Saidas, scope);
        self.fetch_data(&endpoint, &params).await
    }

    async fn available_months(&self) -> Option<Vec<MesDisponivel>> {
        self.fetch_data("meses-disponiveis", &[]).await
    }

    async fn create_entrada(&self, payload: &EntradaPayload) -> Result<(), ApiError> {
        let url = self.url(ListKind::Entradas.path(), &[]);
        log::info!("POST {}", url);
        self.send_json(Request::post(&url), payload).await
    }

    async fn update_entrada(&self, id: i64, payload: &EntradaPayload) -> Result<(), ApiError> {
        let url = self.url(&record_endpoint(ListKind::Entradas, id), &[]);
        log::info!("PUT {}", url);
        self.send_json(Request::put(&url), payload).await
    }

    async fn delete_entrada(&self, id: i64) -> Result<(), ApiError> {
        self.send_delete(&record_endpoint(ListKind::Entradas, id)).await
    }

    async fn create_saida(&self, payload: &NovaSaida) -> Result<(), ApiError> {
        let url = self.url(ListKind::Saidas.path(), &[]);
        log::info!("POST {}", url);
        self.send_json(Request::post(&url), payload).await
    }

    async fn update_saida(&self, id: i64, payload: &SaidaUpdate) -> Result<(), ApiError> {
        let url = self.url(&record_endpoint(ListKind::Saidas, id), &[]);
        log::info!("PUT {}", url);
        self.send_json(Request::put(&url), payload).await
    }

    async fn delete_saida(&self, id: i64) -> Result<(), ApiError> {
        self.send_delete(&record_endpoint(ListKind::Saidas, id)).await
    }

    async fn delete_saida_group(&self, group_id: i64) -> Result<(), ApiError> {
        self.send_delete(&group_endpoint(group_id)).await
    }
}
