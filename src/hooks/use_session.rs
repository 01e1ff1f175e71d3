// ============================================================================
// USE SESSION HOOK - login state shared through a Yew context
// ============================================================================

use yew::prelude::*;

use crate::state::{BrowserStorage, Session};

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub session: Session,
    pub login: Callback<i64>,
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.current_user()
    }
}

/// Owns the session. Only `SessionProvider` calls this.
#[hook]
fn use_session_state() -> UseSessionHandle {
    let session = use_state(|| {
        let loaded = Session::load(&BrowserStorage);
        log::info!("🔑 Sessão carregada (autenticado: {})", loaded.is_authenticated);
        loaded
    });

    // Keyed on the setter, which never changes, so consumers see equal handles
    // until the session itself changes.
    let login = use_callback(session.setter(), |user_id: i64, setter| {
        let next = Session::logged_in(user_id);
        if let Err(e) = next.save(&BrowserStorage) {
            log::error!("❌ Erro salvando sessão: {}", e);
        }
        log::info!("✅ Usuário {} autenticado", user_id);
        setter.set(next);
    });

    let logout = use_callback(session.setter(), |_: (), setter| {
        if let Err(e) = Session::clear(&BrowserStorage) {
            log::error!("❌ Erro limpando sessão: {}", e);
        }
        log::info!("👋 Sessão encerrada");
        setter.set(Session::default());
    });

    UseSessionHandle { session: (*session).clone(), login, logout }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let handle = use_session_state();

    html! {
        <ContextProvider<UseSessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

/// Session of the surrounding `SessionProvider`
#[hook]
pub fn use_session() -> UseSessionHandle {
    use_context::<UseSessionHandle>().expect("use_session called outside SessionProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_equality_follows_session_when_callbacks_are_reused() {
        let login = Callback::from(|_: i64| ());
        let logout = Callback::from(|_: ()| ());
        let handle = |session| UseSessionHandle { session, login: login.clone(), logout: logout.clone() };

        assert!(handle(Session::logged_in(3)) == handle(Session::logged_in(3)));
        assert!(handle(Session::logged_in(3)) != handle(Session::default()));

        // a rebuilt callback breaks equality, which would re-render every consumer
        let rebuilt = UseSessionHandle { login: Callback::from(|_: i64| ()), ..handle(Session::logged_in(3)) };
        assert!(rebuilt != handle(Session::logged_in(3)));
    }
}
