// ============================================================================
// APP - providers plus the navigation shell
// ============================================================================

use yew::prelude::*;

use crate::components::{Header, NotificationList, SideMenu};
use crate::hooks::{use_notifier, use_session, NotificationProvider, SessionProvider};
use crate::viewmodels::Page;
use crate::views::{
    DashboardPage, EconomyCalculatorPage, HomePage, LoginRegisterPage, PluvialCalculatorPage,
    SettingsPage, SuccessStoriesPage, UserListPage,
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <NotificationProvider>
            <SessionProvider>
                <Shell />
                <NotificationList />
            </SessionProvider>
        </NotificationProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let requested = use_state(Page::default);

    let is_authenticated = session.is_authenticated();
    let page = requested.resolve(is_authenticated);

    let navigate = {
        let requested = requested.clone();
        Callback::from(move |page: Page| {
            log::debug!("🧭 Navegando para {:?}", page);
            requested.set(page);
        })
    };

    let on_login = {
        let login = session.login.clone();
        let notifier = notifier.clone();
        let requested = requested.clone();
        Callback::from(move |user_id: i64| {
            login.emit(user_id);
            notifier.success("Login realizado com sucesso!");
            requested.set(Page::Home);
        })
    };

    let on_logout = {
        let logout = session.logout.clone();
        let notifier = notifier.clone();
        let requested = requested.clone();
        Callback::from(move |_| {
            logout.emit(());
            requested.set(Page::Home);
            notifier.info("Você foi desconectado.");
        })
    };

    let content = match page {
        Page::Home => html! { <HomePage /> },
        Page::SuccessStories => html! { <SuccessStoriesPage /> },
        Page::Login => html! { <LoginRegisterPage {on_login} /> },
        Page::Dashboard => html! { <DashboardPage /> },
        Page::EconomyCalculator => html! { <EconomyCalculatorPage /> },
        Page::PluvialEconomyCalculator => html! { <PluvialCalculatorPage /> },
        Page::Settings => html! { <SettingsPage /> },
        Page::Users => html! { <UserListPage /> },
    };

    html! {
        <div class="app-layout">
            <Header
                title={page.title()}
                {is_authenticated}
                on_login={navigate.reform(|_| Page::Login)}
                {on_logout}
            />
            <div class="app-body">
                <SideMenu current={page} {is_authenticated} on_navigate={navigate} />
                <main class="app-content">{content}</main>
            </div>
        </div>
    }
}
