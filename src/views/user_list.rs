use yew::prelude::*;

use crate::components::{SelectField, TextField};
use crate::hooks::use_notifier;
use crate::models::{Gender, Person};
use crate::services::ApiClient;
use crate::viewmodels::forms::apply_name_change;
use crate::viewmodels::people::{PeopleAction, PeopleList};
use crate::viewmodels::{Bump, Revision};

#[derive(Clone, PartialEq, Default)]
struct EditDraft {
    person: Person,
    first_name: String,
    last_name: String,
    gender: Gender,
}

#[function_component(UserListPage)]
pub fn user_list_page() -> Html {
    let notifier = use_notifier();
    let users = use_reducer(|| PeopleList { loading: true, ..Default::default() });
    let revision = use_reducer(Revision::default);
    let editing = use_state(|| None::<EditDraft>);

    {
        let users = users.dispatcher();
        let notifier = notifier.clone();
        use_effect_with(*revision, move |_| {
            users.dispatch(PeopleAction::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().list_people().await {
                    Ok(list) => users.dispatch(PeopleAction::Loaded(list)),
                    Err(e) => {
                        users.dispatch(PeopleAction::LoadFailed);
                        notifier.app_error("Erro ao carregar a lista de usuários", &e);
                    }
                }
            });
            || ()
        });
    }

    let on_delete = {
        let users = users.dispatcher();
        let notifier = notifier.clone();
        Callback::from(move |id: i64| {
            let users = users.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().delete_person(id).await {
                    Ok(()) => {
                        users.dispatch(PeopleAction::Remove(id));
                        notifier.success("Usuário excluído com sucesso");
                    }
                    Err(e) => notifier.app_error("Erro ao excluir usuário", &e),
                }
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |person: Person| {
            editing.set(Some(EditDraft {
                first_name: person.first_name.clone(),
                last_name: person.last_name.clone(),
                gender: person.gender.unwrap_or_default(),
                person,
            }));
        })
    };

    let update_draft = |apply: fn(&mut EditDraft, String)| {
        let editing = editing.clone();
        Callback::from(move |value: String| {
            if let Some(mut draft) = (*editing).clone() {
                apply(&mut draft, value);
                editing.set(Some(draft));
            }
        })
    };

    let on_save = {
        let editing = editing.clone();
        let revision = revision.dispatcher();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(draft) = (*editing).clone() else { return };
            let Some(id) = draft.person.id else { return };
            let mut updated = match apply_name_change(&draft.person, &draft.first_name, &draft.last_name) {
                Ok(updated) => updated,
                Err(e) => return notifier.app_error("Erro ao atualizar usuário", &e),
            };
            updated.gender = Some(draft.gender);

            let editing = editing.clone();
            let revision = revision.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().update_person(id, &updated).await {
                    Ok(()) => {
                        notifier.success("Usuário atualizado com sucesso");
                        editing.set(None);
                        revision.dispatch(Bump);
                    }
                    Err(e) => notifier.app_error("Erro ao atualizar usuário", &e),
                }
            });
        })
    };

    let close = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let genders: Vec<(String, String)> = Gender::all()
        .iter()
        .map(|g| (g.as_str().to_string(), g.as_str().to_string()))
        .collect();

    html! {
        <div class="page user-list">
            <h3>{"Lista de Usuários"}</h3>
            if users.loading && users.people.is_empty() {
                <p>{"Carregando..."}</p>
            }
            <table class="table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Nome"}</th>
                        <th>{"Gênero"}</th>
                        <th>{"Ação"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for users.people.iter().map(|user| {
                        let edit = { let user = user.clone(); on_edit.reform(move |_: MouseEvent| user.clone()) };
                        let delete = user.id.map(|id| on_delete.reform(move |_: MouseEvent| id));
                        html! {
                            <tr>
                                <td>{user.id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                <td>{user.full_name()}</td>
                                <td>{user.gender.map(|g| g.as_str()).unwrap_or("")}</td>
                                <td>
                                    <button class="btn btn-primary" onclick={edit}>{"Editar"}</button>
                                    <button class="btn btn-danger" onclick={delete}>{"Excluir"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
            if let Some(draft) = (*editing).clone() {
                <div class="modal-backdrop">
                    <form class="modal" onsubmit={on_save}>
                        <h3>{"Editar Usuário"}</h3>
                        <TextField id="edit-first-name" label="Primeiro Nome" required=true
                            value={draft.first_name.clone()} on_change={update_draft(|d, v| d.first_name = v)} />
                        <TextField id="edit-last-name" label="Último Nome" required=true
                            value={draft.last_name.clone()} on_change={update_draft(|d, v| d.last_name = v)} />
                        <SelectField id="edit-gender" label="Gênero" value={draft.gender.as_str().to_string()}
                            options={genders} on_change={update_draft(|d, v| d.gender = Gender::parse(&v))} />
                        <div class="modal-actions">
                            <button type="button" class="btn btn-default" onclick={close}>{"Cancelar"}</button>
                            <button type="submit" class="btn btn-primary">{"Salvar"}</button>
                        </div>
                    </form>
                </div>
            }
        </div>
    }
}
