// ============================================================================
// FORMS VIEWMODEL - field validation and request building
// ============================================================================
// Every function here runs before a request is issued. A `Validation` error
// means nothing is sent.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::error::{AppError, Result};
use crate::models::economy::CONSUMPTION_MONTHS;
use crate::models::{Address, CepAddress, Connection, EconomyRequest, Gender, NewMessage, Person};
use crate::viewmodels::address::apply_cep;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(String, String)> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::validation("Por favor, insira seu email!"));
        }
        if self.password.is_empty() {
            return Err(AppError::validation("Por favor, insira sua senha!"));
        }
        Ok((email.to_string(), self.password.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address: Address,
}

pub enum RegisterAction {
    Edit(fn(&mut RegisterForm, String), String),
    ApplyCep(CepAddress),
}

impl Reducible for RegisterForm {
    type Action = RegisterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RegisterAction::Edit(apply, value) => apply(&mut next, value),
            RegisterAction::ApplyCep(found) => next.address = apply_cep(&self.address, &found),
        }
        Rc::new(next)
    }
}

/// All address fields the backend needs
pub fn validate_address(address: &Address) -> Result<()> {
    let required = [
        &address.logradouro,
        &address.number,
        &address.cep,
        &address.cidade,
        &address.estado,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(AppError::validation("Por favor, preencha todos os campos do endereço."));
    }
    Ok(())
}

impl RegisterForm {
    /// Builds the person to create. Password mismatch is checked first.
    pub fn validate(&self) -> Result<Person> {
        if self.password != self.confirm_password {
            return Err(AppError::validation("As senhas não coincidem."));
        }
        validate_address(&self.address)?;
        if self.first_name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(AppError::validation("Por favor, preencha nome e email."));
        }
        if self.password.is_empty() {
            return Err(AppError::validation("Por favor, insira sua senha!"));
        }

        Ok(Person {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            gender: Some(self.gender),
            email: self.email.trim().to_string(),
            password: Some(self.password.clone()),
            enderecos: vec![self.address.clone()],
            ..Default::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EconomyForm {
    pub last_bill_value: String,
    pub last_bill_consumption: String,
    pub consumption_list: [String; CONSUMPTION_MONTHS],
    pub kw_value: String,
    pub connection: Connection,
}

/// Empty input counts as zero
fn parse_decimal(raw: &str, label: &str) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| AppError::validation(format!("Valor inválido para {}.", label)))
}

fn parse_integer(raw: &str, label: &str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    // "350.7" is accepted as 350
    let whole = raw.split(['.', ',']).next().unwrap_or(raw);
    whole
        .parse::<i64>()
        .ok()
        .filter(|v| *v >= 0)
        .ok_or_else(|| AppError::validation(format!("Valor inválido para {}.", label)))
}

impl EconomyForm {
    pub fn to_request(&self, user_id: Option<i64>) -> Result<EconomyRequest> {
        let user_id = user_id.ok_or_else(|| {
            AppError::validation("ID do usuário não encontrado. Faça login para continuar.")
        })?;
        if self.last_bill_consumption.trim().is_empty() {
            return Err(AppError::validation("Informe o consumo da última conta."));
        }

        let last_bill_value = parse_decimal(&self.last_bill_value, "o valor da última conta")?;
        let kw_value = parse_decimal(&self.kw_value, "o valor do kWh")?;
        let last_bill_consumption =
            parse_integer(&self.last_bill_consumption, "o consumo da última conta")?;

        let mut consumption_list = [0i64; CONSUMPTION_MONTHS];
        for (i, raw) in self.consumption_list.iter().enumerate() {
            consumption_list[i] = parse_integer(raw, &format!("o mês {}", i + 1))?;
        }

        Ok(EconomyRequest {
            last_bill_value: format!("{:.2}", last_bill_value),
            last_bill_consumption,
            consumption_list,
            kw_value: format!("{:.2}", kw_value),
            connection: self.connection,
            user_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PluvialForm {
    pub address_id: Option<i64>,
    pub roof_area: String,
}

impl PluvialForm {
    /// `(address id, roof area in m²)`
    pub fn validate(&self) -> Result<(i64, f64)> {
        let address_id = self
            .address_id
            .ok_or_else(|| AppError::validation("Selecione um endereço antes de continuar."))?;
        if self.roof_area.trim().is_empty() {
            return Err(AppError::validation("Insira a área do telhado para o cálculo."));
        }
        let area = parse_decimal(&self.roof_area, "a área do telhado")?;
        if area <= 0.0 {
            return Err(AppError::validation("A área do telhado deve ser maior que zero."));
        }
        Ok((address_id, area))
    }
}

pub fn build_story(user_id: Option<i64>, content: &str) -> Result<NewMessage> {
    let user_id = user_id.ok_or_else(|| {
        AppError::validation("Você precisa estar logado para publicar uma mensagem.")
    })?;
    if content.trim().is_empty() {
        return Err(AppError::validation("O conteúdo da mensagem não pode estar vazio."));
    }
    Ok(NewMessage::story(user_id, content.to_string()))
}

pub fn build_reply(user_id: Option<i64>, parent_id: Option<i64>, content: &str) -> Result<NewMessage> {
    let user_id = user_id.ok_or_else(|| {
        AppError::validation("Você precisa estar logado para responder a uma mensagem.")
    })?;
    if content.trim().is_empty() {
        return Err(AppError::validation("O conteúdo da resposta não pode estar vazio."));
    }
    let parent_id = parent_id
        .ok_or_else(|| AppError::validation("Nenhuma mensagem selecionada para responder."))?;
    Ok(NewMessage::reply(user_id, parent_id, content.to_string()))
}

/// First and last name edits from the profile tab and the user list
pub fn apply_name_change(person: &Person, first_name: &str, last_name: &str) -> Result<Person> {
    if first_name.trim().is_empty() {
        return Err(AppError::validation("Por favor, insira o primeiro nome"));
    }
    if last_name.trim().is_empty() {
        return Err(AppError::validation("Por favor, insira o último nome"));
    }
    let mut updated = person.clone();
    updated.first_name = first_name.trim().to_string();
    updated.last_name = last_name.trim().to_string();
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_address() -> Address {
        Address {
            logradouro: "Praça da Sé".into(),
            number: "100".into(),
            cep: "01001-000".into(),
            cidade: "São Paulo".into(),
            estado: "SP".into(),
            ..Default::default()
        }
    }

    fn register_form() -> RegisterForm {
        RegisterForm {
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            gender: Gender::Feminino,
            email: "ana@example.com".into(),
            password: "segredo".into(),
            confirm_password: "segredo".into(),
            address: full_address(),
        }
    }

    #[test]
    fn test_cep_autofill_after_typing_keeps_other_fields() {
        let form = Rc::new(RegisterForm::default())
            .reduce(RegisterAction::Edit(|f, v| f.address.cep = v, "01001-000".into()));
        let form = form.reduce(RegisterAction::Edit(|f, v| f.first_name = v, "Ana".into()));
        let form = form.reduce(RegisterAction::Edit(|f, v| f.address.number = v, "100".into()));
        let form = form.reduce(RegisterAction::ApplyCep(CepAddress {
            logradouro: "Praça da Sé".into(),
            bairro: "Sé".into(),
            cidade: "São Paulo".into(),
            estado: "SP".into(),
        }));

        assert_eq!(form.first_name, "Ana");
        assert_eq!(form.address.number, "100");
        assert_eq!(form.address.cidade, "São Paulo");
        assert_eq!(form.address.bairro.as_deref(), Some("Sé"));
    }

    #[test]
    fn test_register_password_mismatch() {
        let form = RegisterForm { confirm_password: "outra".into(), ..register_form() };
        assert_eq!(form.validate(), Err(AppError::validation("As senhas não coincidem.")));
    }

    #[test]
    fn test_register_missing_address_field() {
        let mut form = register_form();
        form.address.number = "  ".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err, AppError::validation("Por favor, preencha todos os campos do endereço."));
    }

    #[test]
    fn test_register_builds_person() {
        let person = register_form().validate().unwrap();
        assert_eq!(person.enderecos.len(), 1);
        assert_eq!(person.password.as_deref(), Some("segredo"));
        assert_eq!(person.gender, Some(Gender::Feminino));
        assert!(person.id.is_none());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm { email: " ".into(), password: "x".into() };
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));
        let form = LoginForm { email: "a@b.c".into(), password: "".into() };
        assert!(form.validate().is_err());
        let form = LoginForm { email: " a@b.c ".into(), password: "x".into() };
        assert_eq!(form.validate().unwrap().0, "a@b.c");
    }

    #[test]
    fn test_economy_request_formatting() {
        let form = EconomyForm {
            last_bill_value: "280".into(),
            last_bill_consumption: "350".into(),
            consumption_list: ["300".into(), "".into(), "320".into(), "330".into(), "340".into(), "350".into()],
            kw_value: "0,756".into(),
            connection: Connection::Bifasico,
        };
        let request = form.to_request(Some(9)).unwrap();
        assert_eq!(request.last_bill_value, "280.00");
        assert_eq!(request.kw_value, "0.76");
        assert_eq!(request.consumption_list, [300, 0, 320, 330, 340, 350]);
        assert_eq!(request.user_id, 9);
    }

    #[test]
    fn test_economy_requires_user_and_numbers() {
        let form = EconomyForm { last_bill_consumption: "350".into(), ..Default::default() };
        assert!(matches!(form.to_request(None), Err(AppError::Validation(_))));

        let form = EconomyForm {
            last_bill_consumption: "350".into(),
            kw_value: "abc".into(),
            ..Default::default()
        };
        assert!(form.to_request(Some(1)).is_err());
    }

    #[test]
    fn test_pluvial_validation() {
        let form = PluvialForm { address_id: None, roof_area: "50".into() };
        assert_eq!(
            form.validate(),
            Err(AppError::validation("Selecione um endereço antes de continuar."))
        );
        let form = PluvialForm { address_id: Some(3), roof_area: "".into() };
        assert!(form.validate().is_err());
        let form = PluvialForm { address_id: Some(3), roof_area: "0".into() };
        assert!(form.validate().is_err());
        let form = PluvialForm { address_id: Some(3), roof_area: "52.5".into() };
        assert_eq!(form.validate().unwrap(), (3, 52.5));
    }

    #[test]
    fn test_story_and_reply_builders() {
        assert!(build_story(None, "oi").is_err());
        assert!(build_story(Some(1), "   ").is_err());
        assert_eq!(build_story(Some(1), "oi").unwrap().mensagem_pai, None);

        assert!(build_reply(Some(1), None, "oi").is_err());
        let reply = build_reply(Some(1), Some(8), "oi").unwrap();
        assert_eq!(reply.mensagem_pai.unwrap().id, 8);
    }

    #[test]
    fn test_name_change_keeps_other_fields() {
        let mut person = register_form().validate().unwrap();
        person.id = Some(5);
        let updated = apply_name_change(&person, " Beatriz ", "Lima").unwrap();
        assert_eq!(updated.first_name, "Beatriz");
        assert_eq!(updated.enderecos, person.enderecos);
        assert!(apply_name_change(&person, "", "Lima").is_err());
    }
}
