//! 開いた語類のソースファイルを読み込むモジュール
//!
//! WordNetの `index.*` ファイルは行指向のテキストで、先頭が空白の行は
//! 著作権表示などのヘッダー、それ以外はデータ行です。データ行の最初の
//! フィールドが見出し語で、残りはWordNet内部のメタデータです。

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use hashbrown::HashSet;

use crate::category::Category;
use crate::errors::{Result, VocabError};

/// 複数語からなる見出し語の区切り文字
const WORD_SEPARATOR: char = '_';

/// 1つの開いた語類について読み込んだ単語集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    category: Category,
    words: HashSet<String>,
}

impl Lexicon {
    /// インデックスファイルのリーダーから単語集合を構築します。
    ///
    /// 重複した見出し語は1つにまとめられます。
    ///
    /// # 引数
    ///
    /// * `rdr` - インデックスファイルのリーダー
    /// * `category` - 読み込む語類（開いた語類のみ）
    ///
    /// # エラー
    ///
    /// `category` が閉じた語類の場合、または空行・フィールドのない行・
    /// 不正な見出し語・UTF-8として不正な行が含まれる場合に [`VocabError`] を返します。
    pub fn from_reader<R>(rdr: R, category: Category) -> Result<Self>
    where
        R: Read,
    {
        if !category.is_open_class() {
            return Err(VocabError::invalid_argument(
                "category",
                format!("{category} is a closed-class category and has no source file"),
            ));
        }

        let reader = BufReader::new(rdr);
        let mut words = HashSet::new();
        let mut header_lines = 0;

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => {
                    VocabError::malformed_line(category, i + 1, "invalid UTF-8")
                }
                _ => VocabError::from(e),
            })?;
            if line.starts_with(' ') {
                header_lines += 1;
                continue;
            }
            let word = Self::parse_headword(&line)
                .ok_or_else(|| {
                    VocabError::malformed_line(category, i + 1, "missing or malformed headword")
                })?;
            words.insert(word);
        }

        tracing::debug!(
            category = %category,
            header_lines,
            words = words.len(),
            "read lexicon"
        );

        Ok(Self { category, words })
    }

    /// インデックスファイルのパスから単語集合を構築します。
    ///
    /// # エラー
    ///
    /// ファイルが開けない、または読み込み途中で失敗した場合は
    /// [`VocabError::SourceUnavailable`] を返します。内容が不正な場合は
    /// [`VocabError::MalformedLine`] を返します。
    pub fn from_path<P>(path: P, category: Category) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let unavailable = |source| VocabError::SourceUnavailable {
            category,
            path: path.to_path_buf(),
            source,
        };
        if path.is_dir() {
            return Err(unavailable(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "is a directory",
            )));
        }
        let file = File::open(path).map_err(unavailable)?;
        Self::from_reader(file, category).map_err(|e| match e {
            VocabError::IoError(source) => unavailable(source),
            e => e,
        })
    }

    /// データ行から見出し語を取り出します。
    ///
    /// アンダースコアで連結された見出し語は空白区切りの複数語に変換します。
    /// 例: `a_la_mode` → `a la mode`
    ///
    /// フィールドがない場合や、`_` で区切られた部分に空のものがある場合
    /// (`_`, `_dog`, `hot__dog` など) は `None` を返します。
    pub(crate) fn parse_headword(line: &str) -> Option<String> {
        let headword = line.split_ascii_whitespace().next()?;
        if headword.split(WORD_SEPARATOR).any(str::is_empty) {
            return None;
        }
        Some(headword.replace(WORD_SEPARATOR, " "))
    }

    /// 語類を返します。
    pub fn category(&self) -> Category {
        self.category
    }

    /// 単語集合を返します。
    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    /// 単語数を返します。
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 単語集合が空かどうかを返します。
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) fn into_words(self) -> HashSet<String> {
        self.words
    }
}
