//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `Room` を `tokio::sync::Mutex` で保護し、プロセス内のメモリだけで保持します。
//! 全ての操作は同じロックを取るため、登録・削除・ブロードキャストは互いに排他です。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    BroadcastReport, ChatMessage, ConnectionChannel, ConnectionId, DisplayName, JoinReport, Room,
    RoomRepository,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    room: Arc<Mutex<Room>>,
}

impl InMemoryRoomRepository {
    pub fn new(room: Arc<Mutex<Room>>) -> Self {
        Self { room }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn join(&self, display_name: DisplayName, channel: ConnectionChannel) -> JoinReport {
        let mut room = self.room.lock().await;
        room.join(display_name, channel)
    }

    async fn leave(&self, id: &ConnectionId) -> Option<DisplayName> {
        let mut room = self.room.lock().await;
        room.leave(id).map(|connection| connection.display_name)
    }

    async fn post(&self, message: ChatMessage) -> BroadcastReport {
        let mut room = self.room.lock().await;
        room.post(message)
    }

    async fn history(&self) -> Vec<ChatMessage> {
        let room = self.room.lock().await;
        room.history()
    }

    async fn connection_count(&self) -> usize {
        let room = self.room.lock().await;
        room.connection_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Frame, MessageBody, Timestamp};
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryRoomRepository が Room の操作をロック越しに正しく委譲すること
    // - 並行な登録・送信・切断でも状態が壊れないこと
    //
    // 【どのようなシナリオをテストするか】
    // 1. join → post → leave の基本的な流れ
    // 2. 二重の leave
    // 3. 複数タスクからの並行 post（件数と送信者ごとの順序）
    // ========================================

    fn create_test_repository(capacity: usize) -> Arc<InMemoryRoomRepository> {
        let room = Arc::new(Mutex::new(Room::new(capacity).unwrap()));
        Arc::new(InMemoryRoomRepository::new(room))
    }

    fn message(sender: &str, body: String) -> ChatMessage {
        ChatMessage::new(
            DisplayName::from_query(Some(sender.to_string())),
            MessageBody::new(body).unwrap(),
            Timestamp::new(0),
        )
    }

    #[tokio::test]
    async fn test_join_post_leave() {
        // テスト項目: 参加・送信・退出がルームに反映される
        // given (前提条件):
        let repository = create_test_repository(100);
        let (tx, mut rx) = mpsc::unbounded_channel::<Frame>();

        // when (操作):
        let joined = repository
            .join(DisplayName::from_query(Some("alice".to_string())), tx)
            .await;
        let report = repository.post(message("alice", "hi".to_string())).await;
        let left = repository.leave(&joined.id).await;

        // then (期待する結果):
        assert_eq!(joined.history_len, 0);
        assert_eq!(report.delivered, vec![joined.id]);
        assert_eq!(left.map(DisplayName::into_string), Some("alice".to_string()));
        assert_eq!(repository.connection_count().await, 0);
        assert_eq!(repository.history().await.len(), 1);
        assert_eq!(rx.recv().await, Some(vec![]));
        assert_eq!(rx.recv().await.map(|f| f.len()), Some(1));
    }

    #[tokio::test]
    async fn test_leave_twice_returns_none() {
        // テスト項目: 二重の退出は 2 回目が None になり、エラーにならない
        // given (前提条件):
        let repository = create_test_repository(100);
        let (tx, _rx) = mpsc::unbounded_channel::<Frame>();
        let joined = repository.join(DisplayName::unknown(), tx).await;

        // when (操作):
        let first = repository.leave(&joined.id).await;
        let second = repository.leave(&joined.id).await;

        // then (期待する結果):
        assert!(first.is_some());
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_posts_keep_per_sender_order() {
        // テスト項目: 並行に送信しても全件が届き、送信者ごとの順序が保たれる
        // given (前提条件):
        let repository = create_test_repository(1000);
        let (tx, mut rx) = mpsc::unbounded_channel::<Frame>();
        repository.join(DisplayName::unknown(), tx).await;
        assert_eq!(rx.recv().await, Some(vec![]));

        // when (操作):
        let mut handles = Vec::new();
        for sender in ["alice", "bob", "charlie"] {
            let repository = repository.clone();
            handles.push(tokio::spawn(async move {
                for n in 0..50 {
                    repository.post(message(sender, n.to_string())).await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // then (期待する結果):
        let mut received = Vec::new();
        while let Ok(frame) = rx.try_recv() {
            assert_eq!(frame.len(), 1);
            received.extend(frame);
        }
        assert_eq!(received.len(), 150);
        assert_eq!(repository.history().await, received);
        for sender in ["alice", "bob", "charlie"] {
            let bodies: Vec<String> = received
                .iter()
                .filter(|m| m.sender.as_str() == sender)
                .map(|m| m.body.as_str().to_string())
                .collect();
            let expected: Vec<String> = (0..50).map(|n: i32| n.to_string()).collect();
            assert_eq!(bodies, expected);
        }
    }
}
