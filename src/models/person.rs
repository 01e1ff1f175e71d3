use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    Feminino,
    Masculino,
    #[default]
    Outros,
}

impl Gender {
    pub fn all() -> [Gender; 3] {
        [Gender::Feminino, Gender::Masculino, Gender::Outros]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Feminino => "Feminino",
            Gender::Masculino => "Masculino",
            Gender::Outros => "Outros",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "Feminino" => Gender::Feminino,
            "Masculino" => Gender::Masculino,
            _ => Gender::Outros,
        }
    }
}

/// Address nested inside a person (`enderecos`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco_id: Option<i64>,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
}

impl Address {
    /// One-line label used in selects: "Rua X, Cidade - UF"
    pub fn label(&self) -> String {
        format!("{}, {} - {}", self.logradouro, self.cidade, self.estado)
    }
}

/// Registered user. Fields the client does not know about are kept in `extra`
/// so a PUT sends them back untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, rename = "enderecos")]
    pub enderecos: Vec<Address>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonRef {
    pub id: i64,
}

/// `POST /person/login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub person: PersonRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_keeps_unknown_fields() {
        let json = r#"{
            "id": 7,
            "firstName": "Maria",
            "lastName": "Silva",
            "gender": "Feminino",
            "email": "maria@example.com",
            "createdAt": "2024-05-01",
            "enderecos": [{"endereco_id": 3, "logradouro": "Praça da Sé", "number": "1",
                           "cep": "01001000", "cidade": "São Paulo", "estado": "SP"}]
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.id, Some(7));
        assert_eq!(person.gender, Some(Gender::Feminino));
        assert_eq!(person.enderecos[0].endereco_id, Some(3));
        assert_eq!(person.full_name(), "Maria Silva");

        let back = serde_json::to_value(&person).unwrap();
        assert_eq!(back["createdAt"], "2024-05-01");
        assert_eq!(back["firstName"], "Maria");
        assert!(back.get("password").is_none());
    }

    #[test]
    fn test_login_response() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"person": {"id": 12, "firstName": "Ana"}}"#).unwrap();
        assert_eq!(resp.person.id, 12);
    }

    #[test]
    fn test_address_label() {
        let address = Address {
            logradouro: "Av. Paulista".into(),
            cidade: "São Paulo".into(),
            estado: "SP".into(),
            ..Default::default()
        };
        assert_eq!(address.label(), "Av. Paulista, São Paulo - SP");
    }
}
