//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Room name value object.
///
/// Represents a validated chat room name. Constructing a `RoomName` is the
/// shared validation rule for both create and delete: it must happen before
/// any network or process call is issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomName(String);

impl RoomName {
    /// Create a new RoomName.
    ///
    /// # Arguments
    ///
    /// * `name` - The room name string, kept verbatim (no trimming)
    ///
    /// # Returns
    ///
    /// A Result containing the RoomName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::RoomNameEmpty);
        }
        if name.trim().is_empty() {
            return Err(ValueObjectError::RoomNameWhitespaceOnly);
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chat room category.
///
/// Immutable once set; determines which backend operations are legal
/// (private rooms cannot be created through the REST API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Public,
    Private,
}

impl RoomCategory {
    /// Category name as used in the REST path segment and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Public => "public",
            RoomCategory::Private => "private",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_name_new_success() {
        // テスト項目: 有効なルーム名を作成できる
        // given (前提条件):
        let name = "General Chat".to_string();

        // when (操作):
        let result = RoomName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "General Chat");
    }

    #[test]
    fn test_room_name_new_empty_fails() {
        // テスト項目: 空のルーム名は作成できない
        // given (前提条件):
        let name = "".to_string();

        // when (操作):
        let result = RoomName::new(name);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::RoomNameEmpty);
    }

    #[test]
    fn test_room_name_new_whitespace_only_fails() {
        // テスト項目: 空白のみのルーム名は作成できない
        // given (前提条件):
        let name = "   \t  ".to_string();

        // when (操作):
        let result = RoomName::new(name);

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), ValueObjectError::RoomNameWhitespaceOnly);
    }

    #[test]
    fn test_room_name_keeps_surrounding_whitespace() {
        // テスト項目: 前後に空白があっても名前はそのまま保持される
        // given (前提条件):
        let name = " Lounge ".to_string();

        // when (操作):
        let result = RoomName::new(name);

        // then (期待する結果): トリムされない
        assert_eq!(result.unwrap().as_str(), " Lounge ");
    }

    #[test]
    fn test_room_name_equality() {
        // テスト項目: 同じ値を持つ RoomName は等価
        // given (前提条件):
        let name1 = RoomName::new("Lounge".to_string()).unwrap();
        let name2 = RoomName::new("Lounge".to_string()).unwrap();
        let name3 = RoomName::new("Lobby".to_string()).unwrap();

        // then (期待する結果):
        assert_eq!(name1, name2);
        assert_ne!(name1, name3);
    }

    #[test]
    fn test_room_category_as_str() {
        // テスト項目: カテゴリ名が REST パスセグメントと一致する
        assert_eq!(RoomCategory::Public.as_str(), "public");
        assert_eq!(RoomCategory::Private.as_str(), "private");
    }

    #[test]
    fn test_room_category_display() {
        // テスト項目: Display 実装が as_str と一致する
        assert_eq!(RoomCategory::Public.to_string(), "public");
        assert_eq!(RoomCategory::Private.to_string(), "private");
    }
}
