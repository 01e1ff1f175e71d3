// ============================================================================
// SETTINGS PAGE - profile and address book
// ============================================================================
// Every change is a full PUT of the person, then a refetch.
// ============================================================================

use yew::prelude::*;

use crate::components::{AddressModal, TextField};
use crate::hooks::{use_notifier, use_session};
use crate::models::{Address, Person};
use crate::services::ApiClient;
use crate::viewmodels::address::{fresh_address_id, remove_address, upsert_address};
use crate::viewmodels::forms::{apply_name_change, validate_address};
use crate::viewmodels::{Bump, Revision};

#[derive(Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Profile,
    Addresses,
}

/// What a PUT is for, used in the notices
#[derive(Clone, Copy)]
struct SaveLabels {
    success: &'static str,
    failure: &'static str,
}

const PROFILE_LABELS: SaveLabels =
    SaveLabels { success: "Perfil atualizado com sucesso!", failure: "Erro ao atualizar perfil" };
const ADDRESS_SAVE_LABELS: SaveLabels =
    SaveLabels { success: "Endereço salvo com sucesso!", failure: "Erro ao salvar endereço" };
const ADDRESS_DELETE_LABELS: SaveLabels =
    SaveLabels { success: "Endereço excluído com sucesso!", failure: "Erro ao excluir endereço" };

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let user_id = session.user_id();

    let tab = use_state(|| SettingsTab::Profile);
    let person = use_state(|| None::<Person>);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let modal = use_state(|| None::<Address>);
    let revision = use_reducer(Revision::default);

    {
        let person = person.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let notifier = notifier.clone();
        use_effect_with((user_id, *revision), move |(user_id, _)| {
            if let Some(id) = *user_id {
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().get_person(id).await {
                        Ok(loaded) => {
                            first_name.set(loaded.first_name.clone());
                            last_name.set(loaded.last_name.clone());
                            person.set(Some(loaded));
                        }
                        Err(e) => notifier.app_error("Erro ao carregar dados", &e),
                    }
                });
            }
            || ()
        });
    }

    let save_person = {
        let notifier = notifier.clone();
        let revision = revision.dispatcher();
        let modal = modal.clone();
        Callback::from(move |(updated, labels): (Person, SaveLabels)| {
            let Some(id) = user_id else {
                return notifier.warning("Usuário não autenticado.");
            };
            let notifier = notifier.clone();
            let revision = revision.clone();
            let modal = modal.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().update_person(id, &updated).await {
                    Ok(()) => {
                        notifier.success(labels.success);
                        modal.set(None);
                        revision.dispatch(Bump);
                    }
                    Err(e) => notifier.app_error(labels.failure, &e),
                }
            });
        })
    };

    let on_save_profile = {
        let person = person.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let notifier = notifier.clone();
        let save_person = save_person.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(current) = (*person).clone() else { return };
            match apply_name_change(&current, &first_name, &last_name) {
                Ok(updated) => save_person.emit((updated, PROFILE_LABELS)),
                Err(e) => notifier.app_error(PROFILE_LABELS.failure, &e),
            }
        })
    };

    let on_save_address = {
        let person = person.clone();
        let notifier = notifier.clone();
        let save_person = save_person.clone();
        Callback::from(move |address: Address| {
            let Some(current) = (*person).clone() else { return };
            if let Err(e) = validate_address(&address) {
                return notifier.app_error(ADDRESS_SAVE_LABELS.failure, &e);
            }
            let mut updated = current.clone();
            updated.enderecos = upsert_address(&current.enderecos, address, fresh_address_id());
            save_person.emit((updated, ADDRESS_SAVE_LABELS));
        })
    };

    let on_delete_address = {
        let person = person.clone();
        let save_person = save_person.clone();
        Callback::from(move |address_id: i64| {
            let Some(current) = (*person).clone() else { return };
            let mut updated = current.clone();
            updated.enderecos = remove_address(&current.enderecos, address_id);
            save_person.emit((updated, ADDRESS_DELETE_LABELS));
        })
    };

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |address: Address| modal.set(Some(address)))
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(None))
    };

    let tab_button = |target: SettingsTab, label: &'static str| {
        let tab = tab.clone();
        let class = classes!("tab", (*tab == target).then_some("active"));
        html! {
            <button {class} onclick={Callback::from(move |_| tab.set(target))}>{label}</button>
        }
    };

    let profile_tab = html! {
        if person.is_some() {
            <form class="profile-form" onsubmit={on_save_profile}>
                <TextField id="profile-first-name" label="Nome" placeholder="Seu nome"
                    value={(*first_name).clone()}
                    on_change={Callback::from({ let first_name = first_name.clone(); move |v| first_name.set(v) })} />
                <TextField id="profile-last-name" label="Sobrenome" placeholder="Seu sobrenome"
                    value={(*last_name).clone()}
                    on_change={Callback::from({ let last_name = last_name.clone(); move |v| last_name.set(v) })} />
                <button type="submit" class="btn btn-primary">{"Salvar"}</button>
            </form>
        } else {
            <p>{"Carregando..."}</p>
        }
    };

    let addresses = person.as_ref().map(|p| p.enderecos.clone()).unwrap_or_default();
    let addresses_tab = html! {
        <div class="addresses">
            <button class="btn btn-primary" onclick={open_modal.reform(|_| Address::default())}>
                {"Novo Endereço"}
            </button>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Cep"}</th>
                        <th>{"Logradouro"}</th>
                        <th>{"Número"}</th>
                        <th>{"Cidade"}</th>
                        <th>{"Estado"}</th>
                        <th>{"Ações"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for addresses.into_iter().map(|address| {
                        let edit = {
                            let address = address.clone();
                            open_modal.reform(move |_| address.clone())
                        };
                        let delete = address.endereco_id.map(|id| on_delete_address.reform(move |_: MouseEvent| id));
                        html! {
                            <tr>
                                <td>{&address.cep}</td>
                                <td>{&address.logradouro}</td>
                                <td>{&address.number}</td>
                                <td>{&address.cidade}</td>
                                <td>{&address.estado}</td>
                                <td>
                                    <button class="btn btn-link" onclick={edit}>{"Editar"}</button>
                                    <button class="btn btn-link danger" onclick={delete}>{"Excluir"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    };

    html! {
        <div class="page settings">
            <div class="tabs">
                { tab_button(SettingsTab::Profile, "Perfil") }
                { tab_button(SettingsTab::Addresses, "Endereços") }
            </div>
            { match *tab {
                SettingsTab::Profile => profile_tab,
                SettingsTab::Addresses => addresses_tab,
            } }
            if let Some(address) = (*modal).clone() {
                <AddressModal {address} on_save={on_save_address} on_cancel={close_modal} />
            }
        </div>
    }
}
