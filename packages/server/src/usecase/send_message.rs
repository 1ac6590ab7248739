//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 受信テキストから ChatMessage を作り、履歴追加とブロードキャストを行うこと
//!
//! ### どのような状況を想定しているか
//! - 正常系：送信者を含む全接続へのブロードキャスト
//! - 異常系：空のテキスト（破棄される）
//! - エッジケース：閉じた接続が混ざっている場合

use std::sync::Arc;

use crate::domain::{
    BroadcastReport, ChatMessage, DisplayName, MessageBody, RoomRepository, Timestamp,
};
use hiroba_shared::time::Clock;

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - 送信した接続の表示名
    /// * `text` - 受信したテキストフレームの内容
    ///
    /// # Returns
    ///
    /// * `Ok(BroadcastReport)` - 履歴に追加し、ブロードキャストした結果
    /// * `Err(SendMessageError)` - テキストが不正で破棄された
    pub async fn execute(
        &self,
        sender: DisplayName,
        text: String,
    ) -> Result<BroadcastReport, SendMessageError> {
        let body = MessageBody::try_from(text)?;
        let message = ChatMessage::new(sender, body, Timestamp::new(self.clock.now_millis()));

        tracing::debug!(
            "Broadcasting message from '{}': {}",
            message.sender,
            message.body.as_str()
        );
        let report = self.repository.post(message).await;

        // ブロードキャストでは一部の送信失敗を許容
        for (id, e) in &report.failed {
            tracing::warn!(connection_id = %id, "Failed to push message: {}", e);
        }

        Ok(report)
    }
}
