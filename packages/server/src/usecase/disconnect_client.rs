//! UseCase: クライアント切断処理 (OPEN → CLOSED)

use std::sync::Arc;

use crate::domain::{ConnectionId, DisplayName, RoomRepository};
use hiroba_shared::time::now_rfc3339;

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl DisconnectClientUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 接続を登録解除する
    ///
    /// 既に削除済みの ID でもエラーにはしない（重複した close 通知を許容する）。
    ///
    /// # Returns
    ///
    /// * `Some(DisplayName)` - 削除した接続の表示名
    /// * `None` - 既に削除済み、または未登録
    pub async fn execute(&self, id: &ConnectionId) -> Option<DisplayName> {
        let removed = self.repository.leave(id).await;

        match &removed {
            Some(name) => {
                tracing::info!(connection_id = %id, "{} User {} disconnected.", now_rfc3339(), name)
            }
            None => tracing::debug!(connection_id = %id, "Connection already removed"),
        }

        removed
    }
}
