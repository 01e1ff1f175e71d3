/// Top-level pages. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    SuccessStories,
    Login,
    Dashboard,
    EconomyCalculator,
    PluvialEconomyCalculator,
    Settings,
    Users,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::SuccessStories => "Casos de Sucesso",
            Page::Login => "Login",
            Page::Dashboard => "Dashboard",
            Page::EconomyCalculator => "Economia Solar",
            Page::PluvialEconomyCalculator => "Economia Pluvial",
            Page::Settings => "Configurações",
            Page::Users => "Usuários",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::SuccessStories => "🔔",
            Page::Login => "🔑",
            Page::Dashboard => "📊",
            Page::EconomyCalculator => "☀️",
            Page::PluvialEconomyCalculator => "🌧️",
            Page::Settings => "⚙️",
            Page::Users => "👥",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Home | Page::SuccessStories | Page::Login)
    }

    /// Page actually shown for a request
    pub fn resolve(self, is_authenticated: bool) -> Page {
        if self.requires_auth() && !is_authenticated {
            Page::Login
        } else {
            self
        }
    }
}

/// Side menu entries, in display order
pub fn menu_items(is_authenticated: bool) -> Vec<Page> {
    let mut items = vec![Page::Home, Page::SuccessStories];
    if is_authenticated {
        items.extend([
            Page::Dashboard,
            Page::EconomyCalculator,
            Page::PluvialEconomyCalculator,
            Page::Settings,
            Page::Users,
        ]);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_pages_resolve_to_login() {
        for page in [Page::Dashboard, Page::EconomyCalculator, Page::PluvialEconomyCalculator, Page::Settings, Page::Users] {
            assert_eq!(page.resolve(false), Page::Login);
            assert_eq!(page.resolve(true), page);
        }
        assert_eq!(Page::SuccessStories.resolve(false), Page::SuccessStories);
        assert_eq!(Page::Home.resolve(false), Page::Home);
    }

    #[test]
    fn test_menu_items() {
        assert_eq!(menu_items(false), vec![Page::Home, Page::SuccessStories]);
        let items = menu_items(true);
        assert_eq!(items.len(), 7);
        assert!(items.contains(&Page::Dashboard));
        assert!(!items.contains(&Page::Login));
    }

    #[test]
    fn test_titles() {
        assert_eq!(Page::default().title(), "Home");
        assert_eq!(Page::Settings.title(), "Configurações");
    }
}
