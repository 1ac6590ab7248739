//! UseCase: ルーム状態の取得（ヘルスチェック用）

use std::sync::Arc;

use crate::domain::RoomRepository;

/// Counts exposed by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomState {
    pub connections: usize,
    pub history_len: usize,
}

pub struct GetRoomStateUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomStateUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> RoomState {
        RoomState {
            connections: self.repository.connection_count().await,
            history_len: self.repository.history().await.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::MockRoomRepository;

    #[tokio::test]
    async fn test_get_room_state() {
        // テスト項目: 接続数と履歴件数がそのまま返される
        // given (前提条件):
        let mut repository = MockRoomRepository::new();
        repository.expect_connection_count().returning(|| 2);
        repository.expect_history().returning(Vec::new);
        let usecase = GetRoomStateUseCase::new(Arc::new(repository));

        // when (操作):
        let state = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(
            state,
            RoomState {
                connections: 2,
                history_len: 0
            }
        );
    }
}
