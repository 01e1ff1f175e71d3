use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub is_authenticated: bool,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                <span class="logo">{"GreenTech"}</span>
                <span class="page-title">{props.title.clone()}</span>
            </div>
            if props.is_authenticated {
                <button class="btn btn-default" onclick={props.on_logout.reform(|_| ())}>{"Sair"}</button>
            } else {
                <button class="btn btn-primary" onclick={props.on_login.reform(|_| ())}>{"Entrar"}</button>
            }
        </header>
    }
}
