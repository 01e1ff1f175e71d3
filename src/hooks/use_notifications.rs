// ============================================================================
// USE NOTIFICATIONS - transient toast messages
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Warning => "notice notice-warning",
            NoticeKind::Error => "notice notice-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✅",
            NoticeKind::Info => "ℹ️",
            NoticeKind::Warning => "⚠️",
            NoticeKind::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

pub enum NoticeAction {
    Push(Notice),
    Dismiss(u64),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeList {
    pub items: Vec<Notice>,
}

impl Reducible for NoticeList {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NoticeAction::Push(notice) => {
                let mut items = self.items.clone();
                items.push(notice);
                Rc::new(NoticeList { items })
            }
            NoticeAction::Dismiss(id) => {
                if !self.items.iter().any(|n| n.id == id) {
                    return self;
                }
                let items = self.items.iter().filter(|n| n.id != id).cloned().collect();
                Rc::new(NoticeList { items })
            }
        }
    }
}

/// Handle given to screens through context
#[derive(Clone)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<NoticeList>,
    next_id: Rc<Cell<u64>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Notifier {
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.dispatcher.dispatch(NoticeAction::Push(Notice { id, kind, text: text.into() }));

        let dispatcher = self.dispatcher.clone();
        Timeout::new(CONFIG.notification_timeout_ms, move || {
            dispatcher.dispatch(NoticeAction::Dismiss(id));
        })
        .forget();
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Info, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Error, text);
    }

    /// Validation problems show as warnings, everything else as errors
    pub fn app_error(&self, context: &str, err: &AppError) {
        let text = err.user_message(context);
        match err {
            AppError::Validation(_) => self.warning(text),
            _ => {
                log::error!("❌ {}", text);
                self.error(text)
            }
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.dispatcher.dispatch(NoticeAction::Dismiss(id));
    }
}

#[derive(Clone, PartialEq)]
pub struct NotificationContext {
    pub notices: Rc<NoticeList>,
    pub notifier: Notifier,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let list = use_reducer(NoticeList::default);
    let next_id = use_memo((), |_| Cell::new(0u64));

    let context = NotificationContext {
        notices: Rc::new((*list).clone()),
        notifier: Notifier { dispatcher: list.dispatcher(), next_id },
    };

    html! {
        <ContextProvider<NotificationContext> context={context}>
            {props.children.clone()}
        </ContextProvider<NotificationContext>>
    }
}

#[hook]
pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>().expect("use_notifications called outside NotificationProvider")
}

/// Shortcut for screens that only push notices
#[hook]
pub fn use_notifier() -> Notifier {
    use_notifications().notifier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u64, text: &str) -> Notice {
        Notice { id, kind: NoticeKind::Info, text: text.to_string() }
    }

    #[test]
    fn test_push_and_dismiss() {
        let list = Rc::new(NoticeList::default());
        let list = list.reduce(NoticeAction::Push(notice(0, "a")));
        let list = list.reduce(NoticeAction::Push(notice(1, "b")));
        assert_eq!(list.items.len(), 2);

        let list = list.reduce(NoticeAction::Dismiss(0));
        assert_eq!(list.items, vec![notice(1, "b")]);
    }

    #[test]
    fn test_dismiss_unknown_keeps_rc() {
        let list = Rc::new(NoticeList::default()).reduce(NoticeAction::Push(notice(4, "x")));
        let same = list.clone().reduce(NoticeAction::Dismiss(99));
        assert!(Rc::ptr_eq(&list, &same));
    }
}
