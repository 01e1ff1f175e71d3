use yew::prelude::*;

use crate::components::TextField;
use crate::viewmodels::forms::LoginForm;

#[derive(Properties, PartialEq)]
pub struct LoginFormViewProps {
    pub on_submit: Callback<LoginForm>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(LoginFormView)]
pub fn login_form_view(props: &LoginFormViewProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(LoginForm { email: (*email).clone(), password: (*password).clone() });
        })
    };

    html! {
        <form class="login-form" {onsubmit}>
            <TextField id="login-email" label="Email" placeholder="Email" value={(*email).clone()}
                on_change={Callback::from({ let email = email.clone(); move |v| email.set(v) })} />
            <TextField id="login-password" label="Senha" placeholder="Senha" input_type="password"
                value={(*password).clone()}
                on_change={Callback::from({ let password = password.clone(); move |v| password.set(v) })} />
            <button type="submit" class="btn btn-primary btn-block" disabled={props.busy}>{"Entrar"}</button>
        </form>
    }
}
