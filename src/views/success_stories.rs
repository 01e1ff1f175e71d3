// ============================================================================
// SUCCESS STORIES - message board with replies and likes
// ============================================================================

use yew::prelude::*;

use crate::components::TextAreaField;
use crate::hooks::{use_notifier, use_session};
use crate::models::message::author_name;
use crate::models::Message;
use crate::services::ApiClient;
use crate::viewmodels::forms::{build_reply, build_story};
use crate::viewmodels::messages::{like_label, BoardAction, LikeTarget, MessageBoard};
use crate::viewmodels::{Bump, Revision};

#[function_component(SuccessStoriesPage)]
pub fn success_stories_page() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let user_id = session.user_id();

    let board = use_reducer(|| MessageBoard { loading: true, ..Default::default() });
    let revision = use_reducer(Revision::default);
    let new_content = use_state(String::new);
    let reply_to = use_state(|| None::<i64>);
    let reply_content = use_state(String::new);

    {
        let board = board.dispatcher();
        let notifier = notifier.clone();
        use_effect_with(*revision, move |_| {
            board.dispatch(BoardAction::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().list_messages().await {
                    Ok(list) => board.dispatch(BoardAction::Loaded(list)),
                    Err(e) => {
                        board.dispatch(BoardAction::LoadFailed);
                        notifier.app_error("Erro ao carregar mensagens", &e);
                    }
                }
            });
            || ()
        });
    }

    let on_publish = {
        let new_content = new_content.clone();
        let revision = revision.dispatcher();
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            let message = match build_story(user_id, &new_content) {
                Ok(message) => message,
                Err(e) => return notifier.app_error("Erro ao criar mensagem", &e),
            };
            let new_content = new_content.clone();
            let revision = revision.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().post_message(&message).await {
                    Ok(()) => {
                        notifier.success("Mensagem criada com sucesso!");
                        new_content.set(String::new());
                        revision.dispatch(Bump);
                    }
                    Err(e) => notifier.app_error("Erro ao criar mensagem", &e),
                }
            });
        })
    };

    let on_reply = {
        let reply_to = reply_to.clone();
        let reply_content = reply_content.clone();
        let revision = revision.dispatcher();
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            let parent_id = *reply_to;
            let message = match build_reply(user_id, parent_id, &reply_content) {
                Ok(message) => message,
                Err(e) => return notifier.app_error("Erro ao enviar resposta", &e),
            };
            let Some(parent_id) = parent_id else { return };
            let reply_to = reply_to.clone();
            let reply_content = reply_content.clone();
            let revision = revision.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().reply_to_message(parent_id, &message).await {
                    Ok(()) => {
                        notifier.success("Resposta enviada com sucesso!");
                        reply_content.set(String::new());
                        reply_to.set(None);
                        revision.dispatch(Bump);
                    }
                    Err(e) => notifier.app_error("Erro ao enviar resposta", &e),
                }
            });
        })
    };

    let on_like = {
        let board = board.dispatcher();
        let notifier = notifier.clone();
        Callback::from(move |target: LikeTarget| {
            if user_id.is_none() {
                return notifier.warning("Você precisa estar logado para curtir.");
            }
            let board = board.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new();
                let outcome = match target {
                    LikeTarget::Message(id) => client.like_message(id).await,
                    LikeTarget::Reply(id) => client.like_reply(id).await,
                };
                match outcome {
                    Ok(()) => board.dispatch(BoardAction::ToggleLike(target)),
                    Err(e) => {
                        log::error!("❌ Erro ao curtir: {}", e);
                        notifier.error("Erro ao curtir/descurtir.");
                    }
                }
            });
        })
    };

    let open_reply = {
        let reply_to = reply_to.clone();
        Callback::from(move |id: i64| reply_to.set(Some(id)))
    };

    let close_reply = {
        let reply_to = reply_to.clone();
        Callback::from(move |_: MouseEvent| reply_to.set(None))
    };

    let render_message = |message: &Message| {
        let id = message.id;
        html! {
            <div class="card message" key={id}>
                <div class="message-author">{format!("Por: {}", author_name(&message.usuario))}</div>
                <p>{&message.conteudo}</p>
                { for message.respostas.iter().map(|reply| {
                    let reply_id = reply.id;
                    html! {
                        <div class="card reply" key={reply_id}>
                            <strong>{author_name(&reply.usuario)}</strong>
                            <p>{&reply.conteudo}</p>
                            <button class="btn btn-link" onclick={on_like.reform(move |_| LikeTarget::Reply(reply_id))}>
                                {like_label(reply.curtido, reply.contador_curtidas)}
                            </button>
                        </div>
                    }
                }) }
                <div class="message-actions">
                    <button class="btn btn-link" onclick={open_reply.reform(move |_| id)}>{"Responder"}</button>
                    <button class="btn btn-link" onclick={on_like.reform(move |_| LikeTarget::Message(id))}>
                        {like_label(message.curtido, message.contador_curtidas)}
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <div class="page success-stories">
            <h3>{"Casos de Sucesso"}</h3>
            <div class="card">
                <TextAreaField placeholder="Compartilhe sua história de sucesso..."
                    value={(*new_content).clone()}
                    on_change={Callback::from({ let new_content = new_content.clone(); move |v| new_content.set(v) })} />
                <button class="btn btn-primary" onclick={on_publish} disabled={user_id.is_none()}>{"Publicar"}</button>
            </div>
            if board.loading && board.messages.is_empty() {
                <p>{"Carregando..."}</p>
            } else if board.messages.is_empty() {
                <p class="empty">
                    {"Nenhuma mensagem cadastrada ainda. Seja o primeiro a compartilhar sua história de sucesso!"}
                </p>
            } else {
                <div class="message-list">
                    { for board.messages.iter().map(render_message) }
                </div>
            }
            if reply_to.is_some() {
                <div class="modal-backdrop">
                    <div class="modal">
                        <h3>{"Responder Mensagem"}</h3>
                        <TextAreaField placeholder="Digite sua resposta..." value={(*reply_content).clone()}
                            on_change={Callback::from({ let reply_content = reply_content.clone(); move |v| reply_content.set(v) })} />
                        <div class="modal-actions">
                            <button class="btn btn-default" onclick={close_reply}>{"Cancelar"}</button>
                            <button class="btn btn-primary" onclick={on_reply}>{"OK"}</button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
