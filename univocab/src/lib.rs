//! # univocab
//!
//! 英語の品詞語彙表（品詞カテゴリ → 単語集合）をコンパイルするライブラリです。
//!
//! ## 概要
//!
//! 名詞・動詞・形容詞・副詞の開いた語類はWordNetのインデックスファイル
//! (`index.noun` など) から機械的に抽出し、代名詞・限定詞・前置詞・接続詞の
//! 閉じた語類は手作業で管理されたデータ表から読み込みます。その後、
//! 複数の品詞にまたがる既知の用法を追加ルールで補い、例外ルールで
//! 一般的なカテゴリから具体的なカテゴリと重複する単語を取り除きます。
//!
//! 1つの単語が複数のカテゴリに属すること（語彙的曖昧性）は正常な状態であり、
//! 例外ルールが明示的に定めた場合を除いて解消しません。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use univocab::{Category, Registry, VocabularyBuilder};
//!
//! let index_adv = "  1 This software and database is being provided to you\nquickly r 1 1 \\ 1 0 00085811";
//! let index_noun = "  1 This software and database is being provided to you\ndog n 7 5 @ ~ #m #p %p 7 1 02086723";
//! let index_verb = "  1 This software and database is being provided to you\nbreak v 59 4 ! @ ~ * 59 18 00334186";
//! let index_adj = "  1 This software and database is being provided to you\na_la_mode a 1 0 1 0 01454636";
//!
//! let registry = Registry::builtin()?;
//! let vocab = VocabularyBuilder::from_readers(
//!     index_adv.as_bytes(),
//!     index_noun.as_bytes(),
//!     index_verb.as_bytes(),
//!     index_adj.as_bytes(),
//!     &registry,
//! )?;
//!
//! assert_eq!(vocab.possible_categories("dog"), vec![Category::Noun]);
//! assert_eq!(vocab.possible_categories("a la mode"), vec![Category::Adj]);
//! assert_eq!(
//!     vocab.possible_categories("broken"),
//!     vec![Category::Verb, Category::Adj],
//! );
//!
//! let mut json = vec![];
//! vocab.write_json(&mut json, true)?;
//! # Ok(())
//! # }
//! ```

/// 語彙表の構築
pub mod builder;

/// 品詞カテゴリ
pub mod category;

/// ソースファイルの設定
pub mod config;

/// エラー型の定義
pub mod errors;

/// 開いた語類のソースファイルの読み込み
pub mod lexicon;

/// 閉じた語類と補正ルールのデータ表
pub mod registry;

/// 補正ルールの型
pub mod rules;

/// コンパイル済みの語彙表
pub mod vocabulary;

#[cfg(test)]
mod test_utils;

// Re-exports
pub use builder::VocabularyBuilder;
pub use category::Category;
pub use config::SourceConfig;
pub use registry::Registry;
pub use vocabulary::Vocabulary;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
