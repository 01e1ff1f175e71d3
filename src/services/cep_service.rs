use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::error::{AppError, Result};
use crate::models::cep::ViaCepResponse;
use crate::models::CepAddress;

/// Strips everything but digits. A CEP is valid with exactly 8 digits.
pub fn normalize_cep(raw: &str) -> Result<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 8 {
        return Err(AppError::validation("CEP inválido. Informe 8 dígitos."));
    }
    Ok(digits)
}

/// Interprets a ViaCEP body
pub fn parse_lookup(body: ViaCepResponse) -> Result<CepAddress> {
    if body.is_not_found() {
        return Err(AppError::NotFound("CEP não encontrado.".to_string()));
    }
    Ok(CepAddress::from(body))
}

/// `GET {viacep}/{cep}/json/`
pub async fn lookup_cep(raw: &str) -> Result<CepAddress> {
    let cep = normalize_cep(raw)?;
    let url = format!("{}/{}/json/", CONFIG.viacep_base_url, cep);
    log::debug!("📮 Consultando CEP {}", cep);

    let response = Request::get(&url).send().await?;
    if !response.ok() {
        let status = response.status();
        log::error!("❌ ViaCEP respondeu {}", status);
        return Err(AppError::Status { status, message: response.status_text() });
    }
    let body = response.json::<ViaCepResponse>().await?;
    parse_lookup(body)
}
