use yew::prelude::*;

use crate::components::form_field::TextField;
use crate::hooks::use_notifier;
use crate::models::Address;
use crate::services::lookup_cep;
use crate::viewmodels::address::{AddressAction, AddressDraft};

#[derive(Properties, PartialEq)]
pub struct AddressModalProps {
    pub address: Address,
    pub on_save: Callback<Address>,
    pub on_cancel: Callback<()>,
}

/// Create/edit dialog. Leaving the CEP field fills street, district, city and state.
#[function_component(AddressModal)]
pub fn address_modal(props: &AddressModalProps) -> Html {
    let draft = use_reducer(|| AddressDraft { address: props.address.clone() });
    let notifier = use_notifier();

    let set_field = |apply: fn(&mut Address, String)| {
        let draft = draft.dispatcher();
        Callback::from(move |value: String| draft.dispatch(AddressAction::Edit(apply, value)))
    };

    let on_cep_blur = {
        let draft = draft.dispatcher();
        let notifier = notifier.clone();
        Callback::from(move |cep: String| {
            let draft = draft.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match lookup_cep(&cep).await {
                    Ok(found) => draft.dispatch(AddressAction::ApplyCep(found)),
                    Err(e) => notifier.app_error("Erro ao buscar CEP", &e),
                }
            });
        })
    };

    let on_save = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(draft.address.clone()))
    };

    let address = &draft.address;
    let title = if props.address.endereco_id.is_some() { "Editar Endereço" } else { "Novo Endereço" };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>{title}</h3>
                <TextField id="modal-cep" label="CEP" value={address.cep.clone()}
                    on_change={set_field(|a, v| a.cep = v)} on_blur={Some(on_cep_blur)} />
                <TextField id="modal-logradouro" label="Logradouro" value={address.logradouro.clone()}
                    on_change={set_field(|a, v| a.logradouro = v)} />
                <TextField id="modal-number" label="Número" value={address.number.clone()}
                    on_change={set_field(|a, v| a.number = v)} />
                <TextField id="modal-bairro" label="Bairro" value={address.bairro.clone().unwrap_or_default()}
                    on_change={set_field(|a, v| a.bairro = Some(v))} />
                <TextField id="modal-cidade" label="Cidade" value={address.cidade.clone()}
                    on_change={set_field(|a, v| a.cidade = v)} />
                <TextField id="modal-estado" label="Estado" value={address.estado.clone()}
                    on_change={set_field(|a, v| a.estado = v)} />
                <div class="modal-actions">
                    <button class="btn btn-default" onclick={props.on_cancel.reform(|_| ())}>{"Cancelar"}</button>
                    <button class="btn btn-primary" onclick={on_save}>{"Salvar"}</button>
                </div>
            </div>
        </div>
    }
}
