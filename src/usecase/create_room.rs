//! UseCase: ルーム作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//! - ルーム作成処理（カテゴリ制約チェック、名前検証、REST への委譲）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：private ルームはどのバックエンドにも到達せずに
//!   拒否される（ストアへのフォールバックも行わない）
//! - 名前検証が I/O の前に行われることを保証
//! - バックエンドのエラーが façade のエラー分類に正規化されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：public ルームの作成
//! - 異常系：private ルームの作成試行、空／空白のみの名前
//! - エッジケース：既存名での作成（409）

use std::sync::Arc;

use crate::domain::{RoomCategory, RoomDirectory, RoomName};

use super::error::RoomCommandError;

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// REST backend（データアクセス層の抽象化）
    directory: Arc<dyn RoomDirectory>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(directory: Arc<dyn RoomDirectory>) -> Self {
        Self { directory }
    }

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `category` - 作成するルームのカテゴリ
    /// * `raw_name` - 検証前のルーム名
    ///
    /// # Returns
    ///
    /// * `Ok(RoomName)` - 作成成功（検証済みの名前）
    /// * `Err(RoomCommandError)` - 作成失敗
    pub async fn execute(
        &self,
        category: RoomCategory,
        raw_name: &str,
    ) -> Result<RoomName, RoomCommandError> {
        // 1. カテゴリ制約: private ルームは REST API では作成できない。
        //    どのバックエンドにも接触せずに拒否する。
        if category == RoomCategory::Private {
            tracing::warn!("refusing private room creation, not supported by the server");
            return Err(RoomCommandError::UnsupportedOperation);
        }

        // 2. 名前検証（I/O の前）
        let name = RoomName::new(raw_name.to_string())?;

        // 3. REST backend へ委譲
        self.directory.create(category, &name).await?;
        tracing::info!(%category, room = name.as_str(), "room created");

        Ok(name)
    }
}
