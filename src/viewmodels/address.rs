use std::rc::Rc;

use yew::Reducible;

use crate::models::{Address, CepAddress};

/// Fills the looked-up parts, leaving cep, number and id as typed
pub fn apply_cep(address: &Address, found: &CepAddress) -> Address {
    Address {
        logradouro: found.logradouro.clone(),
        cidade: found.cidade.clone(),
        estado: found.estado.clone(),
        bairro: if found.bairro.is_empty() { address.bairro.clone() } else { Some(found.bairro.clone()) },
        ..address.clone()
    }
}

/// Address being edited in the modal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressDraft {
    pub address: Address,
}

pub enum AddressAction {
    Edit(fn(&mut Address, String), String),
    /// Lookup result, possibly arriving after more typing
    ApplyCep(CepAddress),
}

impl Reducible for AddressDraft {
    type Action = AddressAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let address = match action {
            AddressAction::Edit(apply, value) => {
                let mut next = self.address.clone();
                apply(&mut next, value);
                next
            }
            AddressAction::ApplyCep(found) => apply_cep(&self.address, &found),
        };
        Rc::new(AddressDraft { address })
    }
}

/// Replaces the entry with the same `endereco_id`, or appends with `fresh_id`
pub fn upsert_address(addresses: &[Address], address: Address, fresh_id: i64) -> Vec<Address> {
    match address.endereco_id {
        Some(id) if addresses.iter().any(|a| a.endereco_id == Some(id)) => addresses
            .iter()
            .map(|a| if a.endereco_id == Some(id) { address.clone() } else { a.clone() })
            .collect(),
        _ => {
            let mut next = addresses.to_vec();
            next.push(Address { endereco_id: Some(fresh_id), ..address });
            next
        }
    }
}

pub fn remove_address(addresses: &[Address], id: i64) -> Vec<Address> {
    addresses.iter().filter(|a| a.endereco_id != Some(id)).cloned().collect()
}

/// Id for a new address, unique enough within one person
pub fn fresh_address_id() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(id: Option<i64>, street: &str) -> Address {
        Address {
            endereco_id: id,
            logradouro: street.into(),
            number: "1".into(),
            cep: "01001000".into(),
            cidade: "São Paulo".into(),
            estado: "SP".into(),
            bairro: None,
        }
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let list = vec![address(Some(1), "Rua A"), address(Some(2), "Rua B")];
        let updated = upsert_address(&list, address(Some(2), "Rua C"), 99);
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[1].logradouro, "Rua C");
        assert_eq!(updated[0], list[0]);
    }

    #[test]
    fn test_upsert_appends_with_fresh_id() {
        let list = vec![address(Some(1), "Rua A")];
        let updated = upsert_address(&list, address(None, "Rua Nova"), 1700000000000);
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[1].endereco_id, Some(1700000000000));

        // unknown id is treated as new
        let updated = upsert_address(&list, address(Some(42), "Rua X"), 7);
        assert_eq!(updated[1].endereco_id, Some(7));
    }

    #[test]
    fn test_remove_filters_by_id() {
        let list = vec![address(Some(1), "Rua A"), address(Some(2), "Rua B")];
        let remaining = remove_address(&list, 1);
        assert_eq!(remaining, vec![address(Some(2), "Rua B")]);
        assert_eq!(remove_address(&list, 5).len(), 2);
    }

    #[test]
    fn test_late_cep_result_keeps_later_typing() {
        let draft = Rc::new(AddressDraft { address: address(None, "") });
        let draft = draft.reduce(AddressAction::Edit(|a, v| a.cep = v, "50000-000".into()));
        // typed while the lookup was in flight
        let draft = draft.reduce(AddressAction::Edit(|a, v| a.number = v, "120".into()));
        let draft = draft.reduce(AddressAction::ApplyCep(CepAddress {
            logradouro: "Rua da Aurora".into(),
            bairro: String::new(),
            cidade: "Recife".into(),
            estado: "PE".into(),
        }));

        assert_eq!(draft.address.number, "120");
        assert_eq!(draft.address.cep, "50000-000");
        assert_eq!(draft.address.logradouro, "Rua da Aurora");
        assert_eq!(draft.address.bairro, None);
    }

    #[test]
    fn test_apply_cep_keeps_typed_fields() {
        let mut typed = address(Some(3), "");
        typed.number = "45B".into();
        let found = CepAddress {
            logradouro: "Avenida Boa Viagem".into(),
            bairro: "Boa Viagem".into(),
            cidade: "Recife".into(),
            estado: "PE".into(),
        };
        let filled = apply_cep(&typed, &found);
        assert_eq!(filled.number, "45B");
        assert_eq!(filled.endereco_id, Some(3));
        assert_eq!(filled.cidade, "Recife");
        assert_eq!(filled.bairro.as_deref(), Some("Boa Viagem"));
    }
}
