//! 語彙表の補正ルール
//!
//! 補正ルールには2種類あります。
//!
//! - [`Augmentation`]: 単語を1つのカテゴリに追加します。追加のみなので
//!   適用順序に依存せず、冪等です。
//! - [`ExceptionRule`]: より具体的なカテゴリが持つ単語を一般的なカテゴリから
//!   取り除く集合差です。定義順に一度だけ評価されます。

use serde::Deserialize;

use crate::category::Category;

/// 単語をカテゴリに追加するルール
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    /// 追加する単語
    pub word: String,
    /// 追加先のカテゴリ
    pub category: Category,
}

impl Augmentation {
    /// 新しいルールを作成します。
    pub fn new<S>(word: S, category: Category) -> Self
    where
        S: Into<String>,
    {
        Self {
            word: word.into(),
            category,
        }
    }
}

/// `remove_from ← remove_from \ claimed_by` を表すルール
///
/// 逆方向 (`claimed_by` から `remove_from` の単語を除く) には適用されません。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExceptionRule {
    /// 単語を取り除かれる一般的なカテゴリ
    pub remove_from: Category,
    /// 単語を保持する具体的なカテゴリ
    pub claimed_by: Category,
}

impl ExceptionRule {
    /// 新しいルールを作成します。
    pub const fn new(remove_from: Category, claimed_by: Category) -> Self {
        Self {
            remove_from,
            claimed_by,
        }
    }
}
