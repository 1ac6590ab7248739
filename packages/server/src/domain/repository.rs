//! Repository trait 定義
//!
//! ドメイン層が必要とするルーム状態へのアクセスを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは 1 回の呼び出しの中で排他的に実行されることを実装側が保証します。
//! 登録・削除・ブロードキャストが途中の状態を観測し合うことはありません。

use async_trait::async_trait;

use super::{
    entity::{ChatMessage, ConnectionChannel},
    room::{BroadcastReport, JoinReport},
    value_object::{ConnectionId, DisplayName},
};

/// Room Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 接続を登録し、現在の履歴を最初のフレームとして送る
    async fn join(&self, display_name: DisplayName, channel: ConnectionChannel) -> JoinReport;

    /// 接続を削除する（存在しない場合は `None`）
    async fn leave(&self, id: &ConnectionId) -> Option<DisplayName>;

    /// 履歴に追加し、全接続にブロードキャストする
    async fn post(&self, message: ChatMessage) -> BroadcastReport;

    /// 現在の履歴（古い順）
    async fn history(&self) -> Vec<ChatMessage>;

    /// 接続中のクライアント数
    async fn connection_count(&self) -> usize;
}
