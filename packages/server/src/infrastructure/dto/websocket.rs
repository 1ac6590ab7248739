//! WebSocket payload DTOs.
//!
//! Every server→client frame is a JSON array of [`ChatMessageDto`]: the full
//! history once on join, then one single-element array per broadcast.

use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;

/// One history entry on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub name: String,
    pub message: String,
    #[serde(rename = "chatedAt")]
    pub chated_at: String,
}

impl From<&ChatMessage> for ChatMessageDto {
    fn from(model: &ChatMessage) -> Self {
        Self {
            name: model.sender.as_str().to_string(),
            message: model.body.as_str().to_string(),
            chated_at: model.sent_at.to_rfc3339(),
        }
    }
}

/// Serialize a frame into the JSON text sent over the socket
pub fn frame_to_json(frame: &[ChatMessage]) -> serde_json::Result<String> {
    let dtos: Vec<ChatMessageDto> = frame.iter().map(ChatMessageDto::from).collect();
    serde_json::to_string(&dtos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayName, MessageBody, Timestamp};

    fn message(sender: &str, body: &str, millis: i64) -> ChatMessage {
        ChatMessage::new(
            DisplayName::from_query(Some(sender.to_string())),
            MessageBody::new(body.to_string()).unwrap(),
            Timestamp::new(millis),
        )
    }

    #[test]
    fn test_empty_frame_is_empty_array() {
        // テスト項目: 空のフレームは "[]" になる
        // when (操作):
        let json = frame_to_json(&[]).unwrap();

        // then (期待する結果):
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_frame_uses_wire_field_names() {
        // テスト項目: name / message / chatedAt のフィールド名で出力される
        // given (前提条件):
        let frame = vec![message("alice", "hi", 1672531200123)];

        // when (操作):
        let json = frame_to_json(&frame).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            r#"[{"name":"alice","message":"hi","chatedAt":"2023-01-01T00:00:00.123Z"}]"#
        );
    }

    #[test]
    fn test_frame_keeps_order() {
        // テスト項目: 複数件のフレームは古い順のまま出力される
        // given (前提条件):
        let frame = vec![message("alice", "first", 0), message("bob", "second", 1)];

        // when (操作):
        let json = frame_to_json(&frame).unwrap();
        let parsed: Vec<ChatMessageDto> = serde_json::from_str(&json).unwrap();

        // then (期待する結果):
        let bodies: Vec<&str> = parsed.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second"]);
        assert_eq!(parsed[1].name, "bob");
    }

    #[test]
    fn test_body_is_escaped() {
        // テスト項目: 本文中の引用符や改行が JSON として正しくエスケープされる
        // given (前提条件):
        let frame = vec![message("alice", "say \"hi\"\n", 0)];

        // when (操作):
        let json = frame_to_json(&frame).unwrap();
        let parsed: Vec<ChatMessageDto> = serde_json::from_str(&json).unwrap();

        // then (期待する結果):
        assert_eq!(parsed[0].message, "say \"hi\"\n");
    }
}
