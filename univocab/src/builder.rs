//! 語彙表の構築
//!
//! 構築は次の3段階を固定順で1回ずつ実行します。各段階は前段の集合を
//! 所有権ごと受け取り、次段へ渡します。構築途中の集合は外部に公開されません。
//!
//! 1. seed: 開いた語類は [`Lexicon`]、閉じた語類は [`Registry`] から初期化
//! 2. augment: [`Augmentation`] をすべて挿入
//! 3. except: [`ExceptionRule`] を定義順に集合差として適用

use std::io::Read;

use hashbrown::HashSet;

use crate::category::Category;
use crate::config::SourceConfig;
use crate::errors::{Result, VocabError};
use crate::lexicon::Lexicon;
use crate::registry::Registry;
use crate::rules::{Augmentation, ExceptionRule};
use crate::vocabulary::Vocabulary;

/// カテゴリごとの単語集合（構築途中）
///
/// 単語を削除できるのは [`WordSets::subtract`] だけです。
struct WordSets([HashSet<String>; Category::COUNT]);

impl WordSets {
    fn new() -> Self {
        Self(std::array::from_fn(|_| HashSet::new()))
    }

    fn get(&self, category: Category) -> &HashSet<String> {
        &self.0[category.index()]
    }

    fn get_mut(&mut self, category: Category) -> &mut HashSet<String> {
        &mut self.0[category.index()]
    }

    /// `from ← from \ by` を計算し、取り除いた単語数を返します。
    fn subtract(&mut self, from: Category, by: Category) -> usize {
        let claimed = std::mem::take(self.get_mut(by));
        let target = self.get_mut(from);
        let before = target.len();
        target.retain(|w| !claimed.contains(w));
        let removed = before - target.len();
        *self.get_mut(by) = claimed;
        removed
    }
}

/// 開いた語類のソースとレジストリから [`Vocabulary`] を構築するビルダー
pub struct VocabularyBuilder {}

impl VocabularyBuilder {
    /// 読み込み済みの開いた語類とレジストリから語彙表を構築します。
    ///
    /// # 引数
    ///
    /// * `lexicons` - ADV, N, V, ADJ の各語類を1つずつ含む単語集合（順不同）
    /// * `registry` - 閉じた語類と補正ルール
    ///
    /// # エラー
    ///
    /// 開いた語類が欠けている、または重複している場合に [`VocabError`] を返します。
    pub fn build<I>(lexicons: I, registry: &Registry) -> Result<Vocabulary>
    where
        I: IntoIterator<Item = Lexicon>,
    {
        let sets = Self::seed(lexicons, registry)?;
        let (sets, _) = Self::augment(sets, registry.augmentations());
        let sets = Self::apply_exceptions(sets, registry.exceptions());
        let vocab = Vocabulary::new(sets.0);

        for category in Category::ALL {
            tracing::info!(category = %category, words = vocab.len(category), "compiled");
        }
        Ok(vocab)
    }

    /// 4つのインデックスファイルのリーダーから語彙表を構築します。
    ///
    /// # 引数
    ///
    ///  - `adv_rdr`: `index.adv` のリーダー
    ///  - `noun_rdr`: `index.noun` のリーダー
    ///  - `verb_rdr`: `index.verb` のリーダー
    ///  - `adj_rdr`: `index.adj` のリーダー
    ///  - `registry`: 閉じた語類と補正ルール
    ///
    /// # エラー
    ///
    /// 入力フォーマットが不正な場合に [`VocabError`] を返します。
    pub fn from_readers<A, N, V, J>(
        adv_rdr: A,
        noun_rdr: N,
        verb_rdr: V,
        adj_rdr: J,
        registry: &Registry,
    ) -> Result<Vocabulary>
    where
        A: Read,
        N: Read,
        V: Read,
        J: Read,
    {
        let lexicons = [
            Lexicon::from_reader(adv_rdr, Category::Adv)?,
            Lexicon::from_reader(noun_rdr, Category::Noun)?,
            Lexicon::from_reader(verb_rdr, Category::Verb)?,
            Lexicon::from_reader(adj_rdr, Category::Adj)?,
        ];
        Self::build(lexicons, registry)
    }

    /// 設定されたパスのインデックスファイルから語彙表を構築します。
    ///
    /// ファイルは ADV, N, V, ADJ の順に1つずつ読み込まれます。
    ///
    /// # エラー
    ///
    /// いずれかのファイルが読めない場合は [`VocabError::SourceUnavailable`] を返し、
    /// 部分的な語彙表は生成しません。
    pub fn from_config(config: &SourceConfig, registry: &Registry) -> Result<Vocabulary> {
        let mut lexicons = Vec::with_capacity(Category::OPEN_CLASS.len());
        for category in Category::OPEN_CLASS {
            let path = config.path(category).ok_or_else(|| {
                VocabError::invalid_argument("config", format!("no source path for {category}"))
            })?;
            tracing::info!(category = %category, path = %path.display(), "reading source");
            lexicons.push(Lexicon::from_path(path, category)?);
        }
        Self::build(lexicons, registry)
    }

    fn seed<I>(lexicons: I, registry: &Registry) -> Result<WordSets>
    where
        I: IntoIterator<Item = Lexicon>,
    {
        let mut sets = WordSets::new();
        let mut seeded = [false; Category::COUNT];

        for lexicon in lexicons {
            let category = lexicon.category();
            if seeded[category.index()] {
                return Err(VocabError::invalid_argument(
                    "lexicons",
                    format!("{category} is supplied more than once"),
                ));
            }
            seeded[category.index()] = true;
            *sets.get_mut(category) = lexicon.into_words();
        }
        if let Some(missing) = Category::OPEN_CLASS
            .into_iter()
            .find(|c| !seeded[c.index()])
        {
            return Err(VocabError::invalid_argument(
                "lexicons",
                format!("no source for {missing}"),
            ));
        }

        for category in Category::CLOSED_CLASS {
            // Registry guarantees a table for every closed class.
            let words = registry.closed_class(category).unwrap_or_default();
            sets.get_mut(category).extend(words.iter().cloned());
        }

        for category in Category::ALL {
            tracing::info!(category = %category, words = sets.get(category).len(), "seeded");
        }
        Ok(sets)
    }

    /// 追加ルールを適用し、カテゴリごとに新たに挿入された単語数も返します。
    fn augment(
        mut sets: WordSets,
        rules: &[Augmentation],
    ) -> (WordSets, [usize; Category::COUNT]) {
        let mut added = [0; Category::COUNT];
        for rule in rules {
            if sets.get_mut(rule.category).insert(rule.word.clone()) {
                added[rule.category.index()] += 1;
            }
        }
        for category in Category::ALL {
            tracing::debug!(
                category = %category,
                rules = rules.iter().filter(|r| r.category == category).count(),
                added = added[category.index()],
                "applied augmentations"
            );
        }
        (sets, added)
    }

    fn apply_exceptions(mut sets: WordSets, rules: &[ExceptionRule]) -> WordSets {
        for rule in rules {
            let removed = sets.subtract(rule.remove_from, rule.claimed_by);
            tracing::info!(
                remove_from = %rule.remove_from,
                claimed_by = %rule.claimed_by,
                removed,
                "applied exception rule"
            );
        }
        sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::registry::EXCEPTION_RULES;

    fn closed_class() -> Vec<(Category, Vec<String>)> {
        vec![
            (Category::Pron, vec!["it".into()]),
            (Category::Det, vec!["the".into(), "much".into()]),
            (Category::Prep, vec!["over".into()]),
            (Category::Conj, vec!["and".into()]),
        ]
    }

    fn lexicons(adv: &str, noun: &str, verb: &str, adj: &str) -> Vec<Lexicon> {
        vec![
            Lexicon::from_reader(adv.as_bytes(), Category::Adv).unwrap(),
            Lexicon::from_reader(noun.as_bytes(), Category::Noun).unwrap(),
            Lexicon::from_reader(verb.as_bytes(), Category::Verb).unwrap(),
            Lexicon::from_reader(adj.as_bytes(), Category::Adj).unwrap(),
        ]
    }

    #[test]
    fn test_subtract_one_direction() {
        let mut sets = WordSets::new();
        sets.get_mut(Category::Adv).insert("over".into());
        sets.get_mut(Category::Adv).insert("quickly".into());
        sets.get_mut(Category::Prep).insert("over".into());
        assert_eq!(1, sets.subtract(Category::Adv, Category::Prep));
        assert!(!sets.get(Category::Adv).contains("over"));
        assert!(sets.get(Category::Adv).contains("quickly"));
        assert!(sets.get(Category::Prep).contains("over"));
    }

    #[test]
    fn test_augment_counts_per_category() {
        let mut sets = WordSets::new();
        sets.get_mut(Category::Noun).insert("dog".into());
        let (sets, added) = VocabularyBuilder::augment(
            sets,
            &[
                Augmentation::new("dog", Category::Noun),
                Augmentation::new("dog", Category::Verb),
                Augmentation::new("broken", Category::Verb),
                Augmentation::new("broken", Category::Adj),
            ],
        );
        assert_eq!(0, added[Category::Noun.index()]);
        assert_eq!(2, added[Category::Verb.index()]);
        assert_eq!(1, added[Category::Adj.index()]);
        assert_eq!(0, added[Category::Adv.index()]);
        assert!(sets.get(Category::Verb).contains("dog"));
    }

    #[test]
    fn test_idempotent_augmentation() {
        let registry = Registry::from_parts(
            closed_class(),
            vec![
                Augmentation::new("dog", Category::Noun),
                Augmentation::new("dog", Category::Noun),
            ],
            EXCEPTION_RULES.to_vec(),
        )
        .unwrap();
        let vocab = VocabularyBuilder::build(
            lexicons("", "dog n 1\ncat n 1\n", "", ""),
            &registry,
        )
        .unwrap();
        assert_eq!(2, vocab.len(Category::Noun));
    }

    #[test]
    fn test_exceptions_after_augmentation() {
        let registry = Registry::from_parts(
            closed_class(),
            vec![
                Augmentation::new("over", Category::Adv),
                Augmentation::new("much", Category::Adj),
            ],
            EXCEPTION_RULES.to_vec(),
        )
        .unwrap();
        let vocab = VocabularyBuilder::build(
            lexicons("quickly r 1\n", "", "", "red a 1\n"),
            &registry,
        )
        .unwrap();
        assert!(!vocab.contains(Category::Adv, "over"));
        assert!(vocab.contains(Category::Prep, "over"));
        assert!(!vocab.contains(Category::Adj, "much"));
        assert!(vocab.contains(Category::Det, "much"));
        assert!(vocab.contains(Category::Adv, "quickly"));
        assert!(vocab.contains(Category::Adj, "red"));
    }

    #[test]
    fn test_exceptions_are_not_chained() {
        // Each rule runs once, in order: ADV \ P sees P after P \ D emptied it.
        let mut sets = WordSets::new();
        sets.get_mut(Category::Adv).insert("over".into());
        sets.get_mut(Category::Prep).insert("over".into());
        sets.get_mut(Category::Det).insert("over".into());
        let sets = VocabularyBuilder::apply_exceptions(
            sets,
            &[
                ExceptionRule::new(Category::Prep, Category::Det),
                ExceptionRule::new(Category::Adv, Category::Prep),
            ],
        );
        assert!(!sets.get(Category::Prep).contains("over"));
        assert!(sets.get(Category::Adv).contains("over"));
        assert!(sets.get(Category::Det).contains("over"));
    }

    #[test]
    fn test_missing_lexicon() {
        let registry =
            Registry::from_parts(closed_class(), vec![], EXCEPTION_RULES.to_vec()).unwrap();
        let mut lexs = lexicons("", "", "", "");
        lexs.pop();
        let result = VocabularyBuilder::build(lexs, &registry);
        assert!(matches!(result, Err(VocabError::InvalidArgument(_))));
    }

    #[test]
    fn test_duplicated_lexicon() {
        let registry =
            Registry::from_parts(closed_class(), vec![], EXCEPTION_RULES.to_vec()).unwrap();
        let mut lexs = lexicons("", "", "", "");
        lexs.push(Lexicon::from_reader("dog n 1\n".as_bytes(), Category::Noun).unwrap());
        let result = VocabularyBuilder::build(lexs, &registry);
        assert!(matches!(result, Err(VocabError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_readers() {
        let registry =
            Registry::from_parts(closed_class(), vec![], EXCEPTION_RULES.to_vec()).unwrap();
        let vocab = VocabularyBuilder::from_readers(
            " header\nquickly r 1\n".as_bytes(),
            " header\ndog n 1\n".as_bytes(),
            " header\nbark v 1\n".as_bytes(),
            " header\nred a 1\n".as_bytes(),
            &registry,
        )
        .unwrap();
        assert_eq!(vec![Category::Adv], vocab.possible_categories("quickly"));
        assert_eq!(vec![Category::Noun], vocab.possible_categories("dog"));
        assert_eq!(vec![Category::Verb], vocab.possible_categories("bark"));
        assert_eq!(vec![Category::Adj], vocab.possible_categories("red"));
        assert_eq!(vec![Category::Conj], vocab.possible_categories("and"));
    }

    #[test]
    fn test_from_readers_malformed() {
        let registry =
            Registry::from_parts(closed_class(), vec![], EXCEPTION_RULES.to_vec()).unwrap();
        let result = VocabularyBuilder::from_readers(
            "quickly r 1\n".as_bytes(),
            "dog n 1\n\n".as_bytes(),
            "".as_bytes(),
            "".as_bytes(),
            &registry,
        );
        assert!(matches!(result, Err(VocabError::MalformedLine(_))));
    }
}
