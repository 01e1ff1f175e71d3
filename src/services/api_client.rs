// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// One typed method per backend endpoint. No business rules live here.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::{AppError, Result};
use crate::models::economy::EconomyResponse;
use crate::models::pluvial::PluvialEconomyResponse;
use crate::models::{
    EconomyRequest, EconomyResult, LoginRequest, LoginResponse, Message, NewMessage, Person,
    PluvialEconomy, RegionsReport,
};

/// Shape of backend error bodies. Only `message` is used.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Picks the server's `message` out of an error body, falling back to the raw text
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(message) }) if !message.trim().is_empty() => message,
        _ => body.trim().to_string(),
    }
}

async fn status_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    let message = if message.is_empty() { response.status_text() } else { message };
    AppError::Status { status, message }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

async fn expect_ok(response: Response) -> Result<()> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(())
}

/// Client shared by every screen
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ---------------------------------------------------------------- reports

    /// Access counters for cities and states
    pub async fn regions_report(&self) -> Result<RegionsReport> {
        let url = self.url("relatorio/mais-acessados");
        log::debug!("📊 GET {}", url);
        let response = Request::get(&url).send().await?;
        read_json(response).await
    }

    // ----------------------------------------------------------------- people

    pub async fn create_person(&self, person: &Person) -> Result<Person> {
        let url = self.url("person");
        log::info!("📝 Registrando usuário: {}", person.email);
        let response = Request::post(&url).json(person)?.send().await?;
        read_json(response).await
    }

    pub async fn list_people(&self) -> Result<Vec<Person>> {
        let url = self.url("person");
        log::debug!("👥 GET {}", url);
        let response = Request::get(&url).send().await?;
        read_json(response).await
    }

    pub async fn get_person(&self, id: i64) -> Result<Person> {
        let url = self.url(&format!("person/{}", id));
        log::debug!("👤 GET {}", url);
        let response = Request::get(&url).send().await?;
        read_json(response).await
    }

    /// Response body is ignored; callers refetch with `get_person`
    pub async fn update_person(&self, id: i64, person: &Person) -> Result<()> {
        let url = self.url(&format!("person/{}", id));
        log::info!("💾 Atualizando usuário {}", id);
        let response = Request::put(&url).json(person)?.send().await?;
        expect_ok(response).await
    }

    pub async fn delete_person(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("person/{}", id));
        log::info!("🗑️ Removendo usuário {}", id);
        let response = Request::delete(&url).send().await?;
        expect_ok(response).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<i64> {
        let url = self.url("person/login");
        let request = LoginRequest { email: email.to_string(), password: password.to_string() };
        log::info!("🔐 Login para {}", email);
        let response = Request::post(&url).json(&request)?.send().await?;
        let body: LoginResponse = read_json(response).await?;
        log::info!("✅ Login ok, usuário {}", body.person.id);
        Ok(body.person.id)
    }

    // ------------------------------------------------------------ calculators

    pub async fn calc_economy(&self, request: &EconomyRequest) -> Result<EconomyResult> {
        let url = self.url("fotovoltaico/calc-economy");
        log::info!("☀️ Calculando economia ({})", request.connection.as_str());
        let response = Request::post(&url).json(request)?.send().await?;
        let body: EconomyResponse = read_json(response).await?;
        Ok(body.payload)
    }

    pub async fn pluvial_economy(&self, address_id: i64, roof_area: f64) -> Result<PluvialEconomy> {
        let url = self.url(&format!("pluvial/endereco/{}/{}", address_id, roof_area));
        log::info!("🌧️ Calculando captação para endereço {}", address_id);
        let response = Request::post(&url).send().await?;
        let body: PluvialEconomyResponse = read_json(response).await?;
        Ok(body.pluvial_economy)
    }

    // --------------------------------------------------------------- messages

    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        let url = self.url("mensagem");
        log::debug!("💬 GET {}", url);
        let response = Request::get(&url).send().await?;
        read_json(response).await
    }

    pub async fn post_message(&self, message: &NewMessage) -> Result<()> {
        let url = self.url("mensagem");
        log::info!("💬 Publicando história");
        let response = Request::post(&url).json(message)?.send().await?;
        expect_ok(response).await
    }

    pub async fn reply_to_message(&self, parent_id: i64, message: &NewMessage) -> Result<()> {
        let url = self.url(&format!("mensagem/{}/responder", parent_id));
        log::info!("↩️ Respondendo mensagem {}", parent_id);
        let response = Request::post(&url).json(message)?.send().await?;
        expect_ok(response).await
    }

    pub async fn like_message(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("mensagem/{}/curtir", id));
        log::debug!("👍 POST {}", url);
        let response = Request::post(&url).send().await?;
        expect_ok(response).await
    }

    pub async fn like_reply(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("mensagem/resposta/{}/curtir", id));
        log::debug!("👍 POST {}", url);
        let response = Request::post(&url).send().await?;
        expect_ok(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_single_slash() {
        let client = ApiClient::with_base_url("http://api.local/");
        assert_eq!(client.url("/person/3"), "http://api.local/person/3");
        assert_eq!(client.url("mensagem"), "http://api.local/mensagem");
    }

    #[test]
    fn test_error_message_prefers_server_text() {
        assert_eq!(error_message(r#"{"message": "Email já cadastrado"}"#), "Email já cadastrado");
        assert_eq!(error_message(r#"{"message": ""}"#), r#"{"message": ""}"#);
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_message(""), "");
    }
}
