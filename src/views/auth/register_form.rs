use yew::prelude::*;

use crate::components::{SelectField, TextField};
use crate::hooks::use_notifier;
use crate::models::Gender;
use crate::services::lookup_cep;
use crate::viewmodels::forms::{RegisterAction, RegisterForm};

#[derive(Properties, PartialEq)]
pub struct RegisterFormViewProps {
    pub on_submit: Callback<RegisterForm>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(RegisterFormView)]
pub fn register_form_view(props: &RegisterFormViewProps) -> Html {
    let form = use_reducer(RegisterForm::default);
    let notifier = use_notifier();

    let update = |apply: fn(&mut RegisterForm, String)| {
        let form = form.dispatcher();
        Callback::from(move |value: String| form.dispatch(RegisterAction::Edit(apply, value)))
    };

    let on_cep_blur = {
        let form = form.dispatcher();
        let notifier = notifier.clone();
        Callback::from(move |cep: String| {
            let form = form.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match lookup_cep(&cep).await {
                    Ok(found) => form.dispatch(RegisterAction::ApplyCep(found)),
                    Err(e) => notifier.app_error("Não foi possível buscar o CEP", &e),
                }
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*form).clone());
        })
    };

    let genders: Vec<(String, String)> = Gender::all()
        .iter()
        .map(|g| (g.as_str().to_string(), g.as_str().to_string()))
        .collect();

    html! {
        <form class="register-form" {onsubmit}>
            <h4>{"Informações Pessoais"}</h4>
            <div class="form-row">
                <TextField id="reg-first-name" label="Nome" placeholder="Nome" required=true
                    value={form.first_name.clone()} on_change={update(|f, v| f.first_name = v)} />
                <TextField id="reg-last-name" label="Sobrenome" placeholder="Sobrenome" required=true
                    value={form.last_name.clone()} on_change={update(|f, v| f.last_name = v)} />
                <SelectField id="reg-gender" label="Gênero" value={form.gender.as_str().to_string()}
                    options={genders} on_change={update(|f, v| f.gender = Gender::parse(&v))} />
            </div>
            <TextField id="reg-email" label="Email" placeholder="Email" required=true
                value={form.email.clone()} on_change={update(|f, v| f.email = v)} />
            <div class="form-row">
                <TextField id="reg-password" label="Senha" input_type="password" required=true
                    value={form.password.clone()} on_change={update(|f, v| f.password = v)} />
                <TextField id="reg-confirm" label="Confirmar Senha" input_type="password" required=true
                    value={form.confirm_password.clone()} on_change={update(|f, v| f.confirm_password = v)} />
            </div>

            <h4>{"Endereço"}</h4>
            <div class="form-row">
                <TextField id="reg-cep" label="CEP" placeholder="CEP" required=true
                    value={form.address.cep.clone()} on_change={update(|f, v| f.address.cep = v)}
                    on_blur={Some(on_cep_blur)} />
                <TextField id="reg-cidade" label="Cidade" placeholder="Cidade" required=true
                    value={form.address.cidade.clone()} on_change={update(|f, v| f.address.cidade = v)} />
                <TextField id="reg-estado" label="Estado" placeholder="Estado" required=true
                    value={form.address.estado.clone()} on_change={update(|f, v| f.address.estado = v)} />
            </div>
            <div class="form-row">
                <TextField id="reg-logradouro" label="Logradouro" placeholder="Logradouro" required=true
                    value={form.address.logradouro.clone()} on_change={update(|f, v| f.address.logradouro = v)} />
                <TextField id="reg-number" label="Número" placeholder="Número" required=true
                    value={form.address.number.clone()} on_change={update(|f, v| f.address.number = v)} />
            </div>
            <button type="submit" class="btn btn-primary btn-block" disabled={props.busy}>{"Registrar"}</button>
        </form>
    }
}
