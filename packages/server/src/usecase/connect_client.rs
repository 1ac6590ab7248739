//! UseCase: クライアント接続処理 (CONNECTING → OPEN)

use std::sync::Arc;

use crate::domain::{ConnectionChannel, ConnectionId, DisplayName, RoomRepository};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl ConnectClientUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 接続を登録し、履歴フレームを送信キューに積む
    ///
    /// 履歴が空でも空のフレームが積まれるため、クライアントは常に
    /// 最初に履歴フレームを受け取る。
    pub async fn execute(
        &self,
        display_name: DisplayName,
        channel: ConnectionChannel,
    ) -> ConnectionId {
        let report = self.repository.join(display_name.clone(), channel).await;

        match &report.history_push {
            Ok(()) => tracing::info!(
                connection_id = %report.id,
                "Client '{}' connected, queued {} history message(s)",
                display_name,
                report.history_len
            ),
            Err(e) => tracing::warn!(
                connection_id = %report.id,
                "Client '{}' connected but history could not be queued: {}",
                display_name,
                e
            ),
        }

        report.id
    }
}
