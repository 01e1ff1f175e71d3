use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
}

/// Reply to a success story
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: i64,
    #[serde(default)]
    pub conteudo: String,
    #[serde(default)]
    pub usuario: Option<Author>,
    #[serde(default)]
    pub curtido: bool,
    #[serde(default)]
    pub contador_curtidas: i64,
}

/// Success story posted on the message board
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    #[serde(default)]
    pub conteudo: String,
    #[serde(default)]
    pub usuario: Option<Author>,
    #[serde(default)]
    pub curtido: bool,
    #[serde(default)]
    pub contador_curtidas: i64,
    #[serde(default)]
    pub respostas: Vec<Reply>,
}

pub fn author_name(author: &Option<Author>) -> String {
    author
        .as_ref()
        .and_then(|a| a.first_name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Anônimo".to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdRef {
    pub id: i64,
}

/// Body for `POST /mensagem` and `POST /mensagem/{id}/responder`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub conteudo: String,
    pub curtidas: i64,
    pub usuario: IdRef,
    pub mensagem_pai: Option<IdRef>,
}

impl NewMessage {
    pub fn story(user_id: i64, conteudo: String) -> Self {
        Self { conteudo, curtidas: 0, usuario: IdRef { id: user_id }, mensagem_pai: None }
    }

    pub fn reply(user_id: i64, parent_id: i64, conteudo: String) -> Self {
        Self {
            conteudo,
            curtidas: 0,
            usuario: IdRef { id: user_id },
            mensagem_pai: Some(IdRef { id: parent_id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_story_sends_null_parent() {
        let json = serde_json::to_value(NewMessage::story(3, "Economizei 40%".into())).unwrap();
        assert_eq!(json["mensagemPai"], serde_json::Value::Null);
        assert_eq!(json["usuario"]["id"], 3);
        assert_eq!(json["curtidas"], 0);

        let json = serde_json::to_value(NewMessage::reply(3, 10, "Parabéns!".into())).unwrap();
        assert_eq!(json["mensagemPai"]["id"], 10);
    }

    #[test]
    fn test_message_defaults_and_author() {
        let json = r#"[{"id": 1, "conteudo": "Painéis instalados", "usuario": {"id": 2, "firstName": "João"},
                        "respostas": [{"id": 5, "conteudo": "Top", "curtido": true, "contadorCurtidas": 3}]},
                       {"id": 2, "conteudo": "Cisterna"}]"#;
        let messages: Vec<Message> = serde_json::from_str(json).unwrap();
        assert_eq!(author_name(&messages[0].usuario), "João");
        assert_eq!(author_name(&messages[1].usuario), "Anônimo");
        assert_eq!(messages[0].respostas[0].contador_curtidas, 3);
        assert!(!messages[1].curtido);
        assert!(messages[1].respostas.is_empty());
    }
}
