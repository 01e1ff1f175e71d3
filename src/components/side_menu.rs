use yew::prelude::*;

use crate::viewmodels::navigation::{menu_items, Page};

#[derive(Properties, PartialEq)]
pub struct SideMenuProps {
    pub current: Page,
    pub is_authenticated: bool,
    pub on_navigate: Callback<Page>,
}

#[function_component(SideMenu)]
pub fn side_menu(props: &SideMenuProps) -> Html {
    html! {
        <nav class="side-menu">
            <ul>
                { for menu_items(props.is_authenticated).into_iter().map(|page| {
                    let class = classes!("menu-item", (page == props.current).then_some("active"));
                    html! {
                        <li {class} onclick={props.on_navigate.reform(move |_| page)}>
                            <span class="menu-icon">{page.icon()}</span>
                            <span>{page.title()}</span>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}
