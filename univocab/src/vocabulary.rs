//! コンパイル済みの語彙表
//!
//! [`Vocabulary`] は構築後に変更できません。単語の検索と、人間が読める
//! JSONドキュメントへの書き出しを提供します。

use std::collections::BTreeMap;
use std::io::{BufReader, Read, Write};

use hashbrown::HashSet;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::category::Category;
use crate::errors::{Result, VocabError};

/// 品詞カテゴリから単語集合への対応表
///
/// 8つのカテゴリすべてのキーを必ず持ちます（空の集合を含む）。
/// 1つの単語が複数のカテゴリに属することがあります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    sets: [HashSet<String>; Category::COUNT],
}

impl Vocabulary {
    pub(crate) fn new(sets: [HashSet<String>; Category::COUNT]) -> Self {
        Self { sets }
    }

    /// 単語が属しうるカテゴリを列挙順で返します。
    ///
    /// 比較は大文字小文字を区別する完全一致です。未知の単語には空のベクターを返します。
    ///
    /// # 例
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use univocab::{Category, Registry, VocabularyBuilder};
    ///
    /// let registry = Registry::builtin()?;
    /// let vocab = VocabularyBuilder::from_readers(
    ///     "  1 header\nquickly r 1 1 \\ 1 0 00085811\n".as_bytes(),
    ///     "  1 header\ndog n 7 5 @ ~ #m #p %p 7 1 02086723\n".as_bytes(),
    ///     "  1 header\nbark v 4 2 @ ~ 4 1 01047745\n".as_bytes(),
    ///     "  1 header\nred a 3 1 & 3 1 00381097\n".as_bytes(),
    ///     &registry,
    /// )?;
    ///
    /// assert_eq!(vocab.possible_categories("dog"), vec![Category::Noun]);
    /// assert_eq!(vocab.possible_categories("because of"), vec![Category::Prep]);
    /// assert!(vocab.possible_categories("zzzznotaword").is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn possible_categories(&self, word: &str) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.contains(*c, word))
            .collect()
    }

    /// カテゴリに単語が含まれるかどうかを返します。
    #[inline(always)]
    pub fn contains(&self, category: Category, word: &str) -> bool {
        self.sets[category.index()].contains(word)
    }

    /// カテゴリの単語数を返します。
    pub fn len(&self, category: Category) -> usize {
        self.sets[category.index()].len()
    }

    /// カテゴリの単語を任意の順で返します。
    pub fn words(&self, category: Category) -> impl Iterator<Item = &str> + '_ {
        self.sets[category.index()].iter().map(String::as_str)
    }

    /// カテゴリの単語を辞書順で返します。
    pub fn sorted_words(&self, category: Category) -> Vec<&str> {
        let mut words: Vec<_> = self.words(category).collect();
        words.sort_unstable();
        words
    }

    /// 2つのカテゴリの両方に含まれる単語を辞書順で返します。
    pub fn overlap(&self, a: Category, b: Category) -> Vec<&str> {
        let other = &self.sets[b.index()];
        let mut words: Vec<_> = self
            .words(a)
            .filter(|w| other.contains(*w))
            .collect();
        words.sort_unstable();
        words
    }

    /// 語彙表をJSONドキュメントとして書き出します。
    ///
    /// キーは列挙順、各カテゴリの単語は辞書順に並ぶため、同じ語彙表からは
    /// 常に同じバイト列が得られます。
    ///
    /// # 引数
    ///
    /// * `wtr` - 書き込み先
    /// * `pretty` - `true` の場合はインデント付きで出力します
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合に [`VocabError`] を返します。
    pub fn write_json<W>(&self, mut wtr: W, pretty: bool) -> Result<()>
    where
        W: Write,
    {
        if pretty {
            serde_json::to_writer_pretty(&mut wtr, self)?;
        } else {
            serde_json::to_writer(&mut wtr, self)?;
        }
        wtr.write_all(b"\n")?;
        wtr.flush()?;
        Ok(())
    }

    /// [`write_json`](Self::write_json) で書き出したドキュメントを読み込みます。
    ///
    /// # エラー
    ///
    /// JSONが不正な場合や、カテゴリのキーに過不足がある場合に
    /// [`VocabError`] を返します。
    pub fn from_json_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(BufReader::new(rdr))?;

        let mut sets: [Option<HashSet<String>>; Category::COUNT] = Default::default();
        for (name, words) in raw {
            let category: Category = name.parse().map_err(|_| {
                VocabError::invalid_format("vocabulary", format!("unknown category {name:?}"))
            })?;
            sets[category.index()] = Some(words.into_iter().collect());
        }

        let mut complete: [HashSet<String>; Category::COUNT] = Default::default();
        for category in Category::ALL {
            complete[category.index()] = sets[category.index()].take().ok_or_else(|| {
                VocabError::invalid_format("vocabulary", format!("missing category {category}"))
            })?;
        }
        Ok(Self::new(complete))
    }
}

impl Serialize for Vocabulary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for category in Category::ALL {
            map.serialize_entry(category.as_str(), &self.sorted_words(category))?;
        }
        map.end()
    }
}
