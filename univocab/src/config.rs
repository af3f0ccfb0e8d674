//! 開いた語類のソースファイルの設定

use std::path::{Path, PathBuf};

use crate::category::Category;

/// 副詞インデックスの既定ファイル名
pub const ADV_INDEX_FILE: &str = "index.adv";
/// 名詞インデックスの既定ファイル名
pub const NOUN_INDEX_FILE: &str = "index.noun";
/// 動詞インデックスの既定ファイル名
pub const VERB_INDEX_FILE: &str = "index.verb";
/// 形容詞インデックスの既定ファイル名
pub const ADJ_INDEX_FILE: &str = "index.adj";

/// コンパイル済み語彙表の既定ファイル名
pub const DEFAULT_VOCABULARY_FILE: &str = "UniversalVocabulary.json";

/// 4つの開いた語類それぞれのインデックスファイルのパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// 副詞 (`index.adv`)
    pub adv: PathBuf,
    /// 名詞 (`index.noun`)
    pub noun: PathBuf,
    /// 動詞 (`index.verb`)
    pub verb: PathBuf,
    /// 形容詞 (`index.adj`)
    pub adj: PathBuf,
}

impl SourceConfig {
    /// WordNetの `dict` ディレクトリから既定のファイル名で設定を作成します。
    pub fn from_dir<P>(dir: P) -> Self
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        Self {
            adv: dir.join(ADV_INDEX_FILE),
            noun: dir.join(NOUN_INDEX_FILE),
            verb: dir.join(VERB_INDEX_FILE),
            adj: dir.join(ADJ_INDEX_FILE),
        }
    }

    /// 開いた語類のパスを返します。
    ///
    /// 閉じた語類にはソースファイルがないため `None` を返します。
    pub fn path(&self, category: Category) -> Option<&Path> {
        match category {
            Category::Adv => Some(self.adv.as_path()),
            Category::Noun => Some(self.noun.as_path()),
            Category::Verb => Some(self.verb.as_path()),
            Category::Adj => Some(self.adj.as_path()),
            _ => None,
        }
    }
}
