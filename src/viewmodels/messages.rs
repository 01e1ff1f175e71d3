use std::rc::Rc;

use yew::Reducible;

use crate::models::Message;

/// What a like button points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Message(i64),
    Reply(i64),
}

fn flip(curtido: &mut bool, contador: &mut i64) {
    *contador += if *curtido { -1 } else { 1 };
    *curtido = !*curtido;
}

/// Local update after a like request: flips `curtido` and moves the counter by one
pub fn toggle_like(messages: &[Message], target: LikeTarget) -> Vec<Message> {
    let mut next = messages.to_vec();
    match target {
        LikeTarget::Message(id) => {
            if let Some(message) = next.iter_mut().find(|m| m.id == id) {
                flip(&mut message.curtido, &mut message.contador_curtidas);
            }
        }
        LikeTarget::Reply(id) => {
            if let Some(reply) = next.iter_mut().flat_map(|m| m.respostas.iter_mut()).find(|r| r.id == id) {
                flip(&mut reply.curtido, &mut reply.contador_curtidas);
            }
        }
    }
    next
}

/// Story list of the success-stories page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageBoard {
    pub messages: Vec<Message>,
    pub loading: bool,
}

pub enum BoardAction {
    Loading,
    Loaded(Vec<Message>),
    LoadFailed,
    /// Server accepted a like on `target`
    ToggleLike(LikeTarget),
}

impl Reducible for MessageBoard {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BoardAction::Loading if self.loading => self,
            BoardAction::Loading => Rc::new(MessageBoard { loading: true, ..(*self).clone() }),
            BoardAction::Loaded(messages) => Rc::new(MessageBoard { messages, loading: false }),
            BoardAction::LoadFailed => Rc::new(MessageBoard { loading: false, ..(*self).clone() }),
            BoardAction::ToggleLike(target) => Rc::new(MessageBoard {
                messages: toggle_like(&self.messages, target),
                loading: self.loading,
            }),
        }
    }
}

pub fn like_label(curtido: bool, count: i64) -> String {
    format!("{} ({})", if curtido { "Descurtir" } else { "Curtir" }, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reply;

    fn board() -> Vec<Message> {
        vec![
            Message {
                id: 1,
                conteudo: "Instalei painéis".into(),
                contador_curtidas: 2,
                respostas: vec![Reply { id: 1, conteudo: "Boa!".into(), ..Default::default() }],
                ..Default::default()
            },
            Message { id: 2, curtido: true, contador_curtidas: 5, ..Default::default() },
        ]
    }

    #[test]
    fn test_like_message() {
        let next = toggle_like(&board(), LikeTarget::Message(1));
        assert!(next[0].curtido);
        assert_eq!(next[0].contador_curtidas, 3);
        // reply with the same id is untouched
        assert!(!next[0].respostas[0].curtido);
        assert_eq!(next[1], board()[1]);
    }

    #[test]
    fn test_unlike_message() {
        let next = toggle_like(&board(), LikeTarget::Message(2));
        assert!(!next[1].curtido);
        assert_eq!(next[1].contador_curtidas, 4);
    }

    #[test]
    fn test_like_reply_only() {
        let next = toggle_like(&board(), LikeTarget::Reply(1));
        assert!(next[0].respostas[0].curtido);
        assert_eq!(next[0].respostas[0].contador_curtidas, 1);
        assert!(!next[0].curtido);
        assert_eq!(next[0].contador_curtidas, 2);
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        assert_eq!(toggle_like(&board(), LikeTarget::Reply(77)), board());
    }

    #[test]
    fn test_overlapping_likes_both_apply() {
        let state = Rc::new(MessageBoard::default()).reduce(BoardAction::Loaded(board()));
        // both requests were sent from the same render; completions arrive in turn
        let state = state.reduce(BoardAction::ToggleLike(LikeTarget::Message(1)));
        let state = state.reduce(BoardAction::ToggleLike(LikeTarget::Message(2)));

        assert!(state.messages[0].curtido);
        assert_eq!(state.messages[0].contador_curtidas, 3);
        assert!(!state.messages[1].curtido);
        assert_eq!(state.messages[1].contador_curtidas, 4);
    }

    #[test]
    fn test_load_failure_keeps_previous_list() {
        let state = Rc::new(MessageBoard::default()).reduce(BoardAction::Loaded(board()));
        let state = state.reduce(BoardAction::Loading);
        assert!(state.loading);
        let state = state.reduce(BoardAction::LoadFailed);
        assert!(!state.loading);
        assert_eq!(state.messages, board());
    }

    #[test]
    fn test_like_label() {
        assert_eq!(like_label(false, 0), "Curtir (0)");
        assert_eq!(like_label(true, 3), "Descurtir (3)");
    }
}
