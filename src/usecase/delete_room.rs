//! UseCase: ルーム削除処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DeleteRoomUseCase::execute() メソッド
//! - ルーム削除処理（名前検証、ストアバックエンドへの委譲）
//!
//! ### なぜこのテストが必要か
//! - 名前検証が I/O の前に行われることを保証
//! - 削除は両カテゴリともストアバックエンドに委譲されることを確認
//! - DeletionUnverified を含むストアのエラーが正規化されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：public / private ルームの削除
//! - 異常系：空／空白のみの名前、削除後も残存するルーム
//! - エッジケース：存在しない名前の削除（検証クエリが 0 を返すため成功）

use std::sync::Arc;

use crate::domain::{RoomCategory, RoomName, RoomStore};

use super::error::RoomCommandError;

/// ルーム削除のユースケース
pub struct DeleteRoomUseCase {
    /// Store backend（データアクセス層の抽象化）
    store: Arc<dyn RoomStore>,
}

impl DeleteRoomUseCase {
    /// 新しい DeleteRoomUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self { store }
    }

    /// ルーム削除を実行
    ///
    /// # Arguments
    ///
    /// * `category` - 削除するルームのカテゴリ（表示用。削除は名前のみで一致）
    /// * `raw_name` - 検証前のルーム名
    ///
    /// # Returns
    ///
    /// * `Ok(RoomName)` - 削除成功（検証済みの名前）
    /// * `Err(RoomCommandError)` - 削除失敗
    pub async fn execute(
        &self,
        category: RoomCategory,
        raw_name: &str,
    ) -> Result<RoomName, RoomCommandError> {
        // 1. 名前検証（I/O の前）
        let name = RoomName::new(raw_name.to_string())?;

        // 2. Store backend へ委譲（両カテゴリ共通）
        self.store.delete(&name, category).await?;
        tracing::info!(%category, room = name.as_str(), "room deleted");

        Ok(name)
    }
}
