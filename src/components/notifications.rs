use yew::prelude::*;

use crate::hooks::use_notifications;

/// Toast stack in the top-right corner
#[function_component(NotificationList)]
pub fn notification_list() -> Html {
    let ctx = use_notifications();

    html! {
        <div class="notifications">
            { for ctx.notices.items.iter().map(|notice| {
                let id = notice.id;
                let notifier = ctx.notifier.clone();
                html! {
                    <div key={id} class={notice.kind.css_class()}>
                        <span>{format!("{} {}", notice.kind.icon(), notice.text)}</span>
                        <button class="notice-close" onclick={Callback::from(move |_| notifier.dismiss(id))}>
                            {"×"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
