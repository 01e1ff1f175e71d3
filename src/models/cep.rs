use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw ViaCEP body. A lookup miss comes back as 200 with `"erro": true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViaCepResponse {
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub localidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub erro: Option<Value>,
}

impl ViaCepResponse {
    pub fn is_not_found(&self) -> bool {
        match &self.erro {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => s != "false",
            Some(_) => true,
        }
    }
}

/// Successful lookup, missing parts as empty strings
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CepAddress {
    pub logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

impl From<ViaCepResponse> for CepAddress {
    fn from(resp: ViaCepResponse) -> Self {
        Self {
            logradouro: resp.logradouro.unwrap_or_default(),
            bairro: resp.bairro.unwrap_or_default(),
            cidade: resp.localidade.unwrap_or_default(),
            estado: resp.uf.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erro_variants() {
        let miss: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(miss.is_not_found());
        let miss: ViaCepResponse = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(miss.is_not_found());

        let hit: ViaCepResponse = serde_json::from_str(
            r#"{"cep": "01001-000", "logradouro": "Praça da Sé", "localidade": "São Paulo", "uf": "SP"}"#,
        )
        .unwrap();
        assert!(!hit.is_not_found());
        let address = CepAddress::from(hit);
        assert_eq!(address.cidade, "São Paulo");
        assert_eq!(address.bairro, "");
    }
}
