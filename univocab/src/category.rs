//! 品詞カテゴリの定義
//!
//! 語彙表のキーとなる8つの品詞を閉じた列挙型で表します。
//! 文字列キーではなく列挙型を使うため、存在しないカテゴリの指定は
//! パース時点でエラーになります。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::VocabError;

/// 品詞カテゴリ
///
/// 順序に意味はありませんが、列挙順 (`ADV, N, V, ADJ, PRON, D, P, CONJ`) を
/// 出力や検索結果の並びとして使用します。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// 副詞
    #[serde(rename = "ADV")]
    Adv,
    /// 名詞
    #[serde(rename = "N")]
    Noun,
    /// 動詞
    #[serde(rename = "V")]
    Verb,
    /// 形容詞
    #[serde(rename = "ADJ")]
    Adj,
    /// 代名詞
    #[serde(rename = "PRON")]
    Pron,
    /// 限定詞
    #[serde(rename = "D")]
    Det,
    /// 前置詞・後置詞
    #[serde(rename = "P")]
    Prep,
    /// 接続詞
    #[serde(rename = "CONJ")]
    Conj,
}

impl Category {
    /// カテゴリの総数
    pub const COUNT: usize = 8;

    /// すべてのカテゴリ（列挙順）
    pub const ALL: [Self; Self::COUNT] = [
        Self::Adv,
        Self::Noun,
        Self::Verb,
        Self::Adj,
        Self::Pron,
        Self::Det,
        Self::Prep,
        Self::Conj,
    ];

    /// WordNetから抽出される開いた語類
    pub const OPEN_CLASS: [Self; 4] = [Self::Adv, Self::Noun, Self::Verb, Self::Adj];

    /// 手作業で管理される閉じた語類
    pub const CLOSED_CLASS: [Self; 4] = [Self::Pron, Self::Det, Self::Prep, Self::Conj];

    /// 出力ドキュメントで使用する識別子を返します。
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adv => "ADV",
            Self::Noun => "N",
            Self::Verb => "V",
            Self::Adj => "ADJ",
            Self::Pron => "PRON",
            Self::Det => "D",
            Self::Prep => "P",
            Self::Conj => "CONJ",
        }
    }

    /// 開いた語類かどうかを返します。
    pub const fn is_open_class(self) -> bool {
        matches!(self, Self::Adv | Self::Noun | Self::Verb | Self::Adj)
    }

    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = VocabError;

    /// 識別子 (`"ADV"`, `"N"` など) からカテゴリをパースします。
    ///
    /// 大文字小文字は区別します。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                VocabError::invalid_argument("category", format!("unknown category {s:?}"))
            })
    }
}
