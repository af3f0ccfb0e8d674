//! エラー型の定義
//!
//! このモジュールは、univocabライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::category::Category;

/// univocab専用のResult型
///
/// エラー型としてデフォルトで[`VocabError`]を使用します。
pub type Result<T, E = VocabError> = std::result::Result<T, E>;

/// univocabのエラー型
///
/// 語彙のコンパイル中に発生する可能性のあるすべてのエラーを表現します。
/// 語彙の検索 ([`Vocabulary::possible_categories`](crate::Vocabulary::possible_categories))
/// はこのエラーを返しません。
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    /// 開いた語類のソースファイルが読めないエラー
    ///
    /// 該当する語類を空として扱うことはせず、コンパイル全体を中断します。
    #[error("The source for {category} is unavailable: '{}': {source}", .path.display())]
    SourceUnavailable {
        /// 読み込もうとした語類
        category: Category,
        /// ソースファイルのパス
        path: PathBuf,
        /// 原因となったI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// データ行の形式が不正なエラー
    ///
    /// [`MalformedLineError`]のエラーバリアント。
    #[error(transparent)]
    MalformedLine(MalformedLineError),

    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// レジストリのデータファイルが読めないエラー
    #[error("The registry table '{}' is unavailable: {source}", .path.display())]
    RegistryUnavailable {
        /// データファイルのパス
        path: PathBuf,
        /// 原因となったI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// TOMLパースエラー
    ///
    /// [`toml::de::Error`]のエラーバリアント。
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSONシリアライゼーションエラー
    ///
    /// [`serde_json::Error`]のエラーバリアント。
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl VocabError {
    /// データ行の形式エラーを生成します
    ///
    /// # 引数
    ///
    /// * `category` - 読み込み中の語類
    /// * `line_no` - 1始まりの行番号
    /// * `msg` - エラーメッセージ
    pub(crate) fn malformed_line<S>(category: Category, line_no: usize, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::MalformedLine(MalformedLineError {
            category,
            line_no,
            msg: msg.into(),
        })
    }

    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }
}

/// ソースファイルのデータ行が不正な場合に使用されるエラー
#[derive(Debug)]
pub struct MalformedLineError {
    /// 読み込み中の語類
    pub(crate) category: Category,

    /// 1始まりの行番号
    pub(crate) line_no: usize,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl MalformedLineError {
    /// エラーが発生した語類を返します。
    pub fn category(&self) -> Category {
        self.category
    }

    /// エラーが発生した行番号（1始まり）を返します。
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl fmt::Display for MalformedLineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MalformedLineError: {}: line {}: {}",
            self.category, self.line_no, self.msg
        )
    }
}

impl Error for MalformedLineError {}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}
