//! UseCase: ルーム一覧取得処理

use std::sync::Arc;

use crate::domain::{Room, RoomCategory, RoomDirectory};

use super::error::RoomCommandError;

/// ルーム一覧取得のユースケース
pub struct ListRoomsUseCase {
    /// REST backend（データアクセス層の抽象化）
    directory: Arc<dyn RoomDirectory>,
}

impl ListRoomsUseCase {
    /// 新しい ListRoomsUseCase を作成
    pub fn new(directory: Arc<dyn RoomDirectory>) -> Self {
        Self { directory }
    }

    /// ルーム一覧取得を実行
    ///
    /// # Arguments
    ///
    /// * `category` - 取得するルームのカテゴリ
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Room>)` - サーバの返却順のままのルーム一覧（空も正常）
    /// * `Err(RoomCommandError)` - 取得失敗
    pub async fn execute(&self, category: RoomCategory) -> Result<Vec<Room>, RoomCommandError> {
        let rooms = self.directory.list(category).await?;
        tracing::info!(%category, count = rooms.len(), "retrieved room list");
        Ok(rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectoryError, repository::MockRoomDirectory};

    #[tokio::test]
    async fn test_list_rooms_success() {
        // テスト項目: ルーム一覧がサーバの順序のまま返される
        // given (前提条件):
        let mut directory = MockRoomDirectory::new();
        directory.expect_list().times(1).returning(|category| {
            Ok(vec![
                Room::new(category, "Lounge"),
                Room::new(category, "Arcade"),
            ])
        });
        let usecase = ListRoomsUseCase::new(Arc::new(directory));

        // when (操作):
        let result = usecase.execute(RoomCategory::Public).await;

        // then (期待する結果):
        let rooms = result.unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "Lounge");
        assert_eq!(rooms[1].name, "Arcade");
    }

    #[tokio::test]
    async fn test_list_rooms_empty_is_not_an_error() {
        // テスト項目: 空のルーム一覧はエラーではなく空の Vec として返される
        // given (前提条件):
        let mut directory = MockRoomDirectory::new();
        directory.expect_list().times(1).returning(|_| Ok(vec![]));
        let usecase = ListRoomsUseCase::new(Arc::new(directory));

        // when (操作):
        let result = usecase.execute(RoomCategory::Public).await;

        // then (期待する結果):
        assert_eq!(result.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_rooms_unreachable_is_normalized() {
        // テスト項目: 接続失敗が Unreachable に正規化される
        // given (前提条件):
        let mut directory = MockRoomDirectory::new();
        directory.expect_list().times(1).returning(|_| {
            Err(DirectoryError::Unreachable {
                base_url: "http://localhost:8080".to_string(),
            })
        });
        let usecase = ListRoomsUseCase::new(Arc::new(directory));

        // when (操作):
        let result = usecase.execute(RoomCategory::Private).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RoomCommandError::Unreachable {
                base_url: "http://localhost:8080".to_string()
            })
        );
    }
}
