// ============================================================================
// LOGIN / REGISTER PAGE
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_notifier;
use crate::services::ApiClient;
use crate::viewmodels::forms::{LoginForm, RegisterForm};

use super::login_form::LoginFormView;
use super::register_form::RegisterFormView;

#[derive(Properties, PartialEq)]
pub struct LoginRegisterPageProps {
    /// Receives the authenticated user id
    pub on_login: Callback<i64>,
}

#[function_component(LoginRegisterPage)]
pub fn login_register_page(props: &LoginRegisterPageProps) -> Html {
    let is_login = use_state(|| true);
    let busy = use_state(|| false);
    let notifier = use_notifier();

    let on_login_submit = {
        let busy = busy.clone();
        let notifier = notifier.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |form: LoginForm| {
            let (email, password) = match form.validate() {
                Ok(credentials) => credentials,
                Err(e) => return notifier.app_error("Erro ao fazer login", &e),
            };
            let busy = busy.clone();
            let notifier = notifier.clone();
            let on_login = on_login.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().login(&email, &password).await {
                    Ok(user_id) => on_login.emit(user_id),
                    Err(e) => notifier.app_error("Erro ao fazer login", &e),
                }
                busy.set(false);
            });
        })
    };

    let on_register_submit = {
        let busy = busy.clone();
        let is_login = is_login.clone();
        let notifier = notifier.clone();
        Callback::from(move |form: RegisterForm| {
            let person = match form.validate() {
                Ok(person) => person,
                Err(e) => return notifier.app_error("Erro ao registrar o usuário", &e),
            };
            let busy = busy.clone();
            let is_login = is_login.clone();
            let notifier = notifier.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().create_person(&person).await {
                    Ok(_) => {
                        notifier.success("Registro realizado com sucesso!");
                        is_login.set(true);
                    }
                    Err(e) => notifier.app_error("Erro ao registrar o usuário", &e),
                }
                busy.set(false);
            });
        })
    };

    let toggle = {
        let is_login = is_login.clone();
        Callback::from(move |_: MouseEvent| is_login.set(!*is_login))
    };

    html! {
        <div class="page login-register">
            <div class="welcome">
                <h2>{"Bem-vindo ao Projeto GreenTech"}</h2>
                <p>{"Soluções sustentáveis para um futuro melhor. Cadastre-se para explorar as funcionalidades."}</p>
            </div>
            <div class="auth-card">
                <h3>{ if *is_login { "Login" } else { "Registrar" } }</h3>
                if *is_login {
                    <LoginFormView on_submit={on_login_submit} busy={*busy} />
                } else {
                    <RegisterFormView on_submit={on_register_submit} busy={*busy} />
                }
                <hr />
                <button class="btn btn-link btn-block" onclick={toggle}>
                    { if *is_login { "Não tem uma conta? Registre-se" } else { "Já tem uma conta? Faça login" } }
                </button>
            </div>
        </div>
    }
}
