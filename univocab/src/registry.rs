//! 閉じた語類と補正ルールのレジストリ
//!
//! 機能語（代名詞・限定詞・前置詞・接続詞）のリストと、追加・例外ルールの表は
//! コードではなくデータとして `data/` 以下のTOMLファイルで管理します。
//! 組み込み版はコンパイル時に埋め込まれ、[`Registry::from_dir`] で
//! 外部ディレクトリから差し替えることもできます。
//!
//! | ファイル              | 内容                                      |
//! |-----------------------|-------------------------------------------|
//! | `closed_class.toml`   | `PRON`, `D`, `P`, `CONJ` の単語リスト      |
//! | `rules.toml`          | `[augment]` 追加ルールと `[[except]]` 例外ルール |
//! | `irregular.toml`      | 不規則動詞の過去形・過去分詞、不規則複数形 |

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::category::Category;
use crate::errors::{Result, VocabError};
use crate::rules::{Augmentation, ExceptionRule};

/// 閉じた語類の表のファイル名
pub const CLOSED_CLASS_FILE: &str = "closed_class.toml";
/// 追加・例外ルールの表のファイル名
pub const RULES_FILE: &str = "rules.toml";
/// 不規則変化形の表のファイル名
pub const IRREGULAR_FILE: &str = "irregular.toml";

const BUILTIN_CLOSED_CLASS: &str = include_str!("../data/closed_class.toml");
const BUILTIN_RULES: &str = include_str!("../data/rules.toml");
const BUILTIN_IRREGULAR: &str = include_str!("../data/irregular.toml");

/// 例外ルール（この順に適用されます）
///
/// `rules.toml` の `[[except]]` はこの2つをこの順に並べたものでなければなりません。
pub const EXCEPTION_RULES: [ExceptionRule; 2] = [
    ExceptionRule::new(Category::Adv, Category::Prep),
    ExceptionRule::new(Category::Adj, Category::Det),
];

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ClosedClassTable {
    #[serde(rename = "PRON")]
    pron: Vec<String>,
    #[serde(rename = "D")]
    det: Vec<String>,
    #[serde(rename = "P")]
    prep: Vec<String>,
    #[serde(rename = "CONJ")]
    conj: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesTable {
    #[serde(default)]
    augment: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    except: Vec<ExceptionRule>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct IrregularTable {
    #[serde(default)]
    past_simple: Vec<String>,
    #[serde(default)]
    past_participle: Vec<String>,
    #[serde(default)]
    plural_nouns: Vec<String>,
}

/// 閉じた語類の単語リストと補正ルールの集まり
///
/// 構築時に検証済みで、以後は変更できません。
#[derive(Debug, Clone)]
pub struct Registry {
    closed_class: Vec<(Category, Vec<String>)>,
    augmentations: Vec<Augmentation>,
    exceptions: Vec<ExceptionRule>,
}

impl Registry {
    /// 組み込みのデータ表からレジストリを構築します。
    ///
    /// # エラー
    ///
    /// 埋め込まれた表が不正な場合に [`VocabError`] を返します。
    pub fn builtin() -> Result<Self> {
        Self::from_toml_strs(BUILTIN_CLOSED_CLASS, BUILTIN_RULES, BUILTIN_IRREGULAR)
    }

    /// ディレクトリ内の3つのTOMLファイルからレジストリを構築します。
    ///
    /// # 引数
    ///
    /// * `dir` - [`CLOSED_CLASS_FILE`], [`RULES_FILE`], [`IRREGULAR_FILE`] を含むディレクトリ
    ///
    /// # エラー
    ///
    /// ファイルが読めない場合は [`VocabError::RegistryUnavailable`] を、
    /// 内容が不正な場合はその他の [`VocabError`] を返します。
    pub fn from_dir<P>(dir: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path)
                .map_err(|source| VocabError::RegistryUnavailable { path, source })
        };
        let closed_class = read(CLOSED_CLASS_FILE)?;
        let rules = read(RULES_FILE)?;
        let irregular = read(IRREGULAR_FILE)?;
        Self::from_toml_strs(&closed_class, &rules, &irregular)
    }

    /// TOML文字列からレジストリを構築します。
    ///
    /// # エラー
    ///
    /// TOMLの構文が不正な場合、未知のカテゴリ名が含まれる場合、
    /// 検証に失敗した場合に [`VocabError`] を返します。
    pub fn from_toml_strs(closed_class: &str, rules: &str, irregular: &str) -> Result<Self> {
        let closed: ClosedClassTable = toml::from_str(closed_class)?;
        let rules: RulesTable = toml::from_str(rules)?;
        let irregular: IrregularTable = toml::from_str(irregular)?;

        let closed_class = vec![
            (Category::Pron, closed.pron),
            (Category::Det, closed.det),
            (Category::Prep, closed.prep),
            (Category::Conj, closed.conj),
        ];

        let mut augmentations = vec![];
        for (name, words) in rules.augment {
            let category: Category = name.parse().map_err(|_| {
                VocabError::invalid_format(RULES_FILE, format!("unknown category {name:?}"))
            })?;
            augmentations.extend(words.into_iter().map(|w| Augmentation::new(w, category)));
        }
        for word in irregular.past_simple {
            augmentations.push(Augmentation::new(word, Category::Verb));
        }
        for word in irregular.past_participle {
            augmentations.push(Augmentation::new(word.clone(), Category::Verb));
            augmentations.push(Augmentation::new(word, Category::Adj));
        }
        for word in irregular.plural_nouns {
            augmentations.push(Augmentation::new(word, Category::Noun));
        }

        Self::from_parts(closed_class, augmentations, rules.except)
    }

    /// 検証済みのレジストリを各部品から構築します。
    ///
    /// # 引数
    ///
    /// * `closed_class` - 閉じた語類ごとの単語リスト（4つすべてが必要）
    /// * `augmentations` - 追加ルール
    /// * `exceptions` - 例外ルール（[`EXCEPTION_RULES`] と同じ内容・順序が必要）
    ///
    /// # エラー
    ///
    /// 閉じた語類の過不足、空のリスト、空の単語がある場合、または例外ルールが
    /// [`EXCEPTION_RULES`] と一致しない場合に [`VocabError`] を返します。
    pub fn from_parts(
        mut closed_class: Vec<(Category, Vec<String>)>,
        augmentations: Vec<Augmentation>,
        exceptions: Vec<ExceptionRule>,
    ) -> Result<Self> {
        closed_class.sort_by_key(|(c, _)| *c);
        let categories: Vec<_> = closed_class.iter().map(|(c, _)| *c).collect();
        if categories != Category::CLOSED_CLASS {
            return Err(VocabError::invalid_format(
                CLOSED_CLASS_FILE,
                format!(
                    "exactly one table for each of PRON, D, P, CONJ is required, got {categories:?}"
                ),
            ));
        }
        for (category, words) in &closed_class {
            if words.is_empty() {
                return Err(VocabError::invalid_format(
                    CLOSED_CLASS_FILE,
                    format!("the {category} table must not be empty"),
                ));
            }
            if let Some(word) = words.iter().find(|w| !is_valid_word(w)) {
                return Err(VocabError::invalid_format(
                    CLOSED_CLASS_FILE,
                    format!("invalid word {word:?} in the {category} table"),
                ));
            }
        }
        if let Some(aug) = augmentations.iter().find(|a| !is_valid_word(&a.word)) {
            return Err(VocabError::invalid_format(
                RULES_FILE,
                format!("invalid word {:?} added to {}", aug.word, aug.category),
            ));
        }
        if exceptions != EXCEPTION_RULES {
            let got: Vec<_> = exceptions
                .iter()
                .map(|r| format!("{} \\ {}", r.remove_from, r.claimed_by))
                .collect();
            return Err(VocabError::invalid_format(
                RULES_FILE,
                format!("the exception rules must be [ADV \\ P, ADJ \\ D], got {got:?}"),
            ));
        }

        Ok(Self {
            closed_class,
            augmentations,
            exceptions,
        })
    }

    /// 閉じた語類の単語リストを返します。
    ///
    /// 開いた語類を指定した場合は `None` を返します。
    pub fn closed_class(&self, category: Category) -> Option<&[String]> {
        self.closed_class
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, words)| words.as_slice())
    }

    /// 追加ルールを返します。
    pub fn augmentations(&self) -> &[Augmentation] {
        &self.augmentations
    }

    /// 例外ルールを適用順に返します。
    pub fn exceptions(&self) -> &[ExceptionRule] {
        &self.exceptions
    }
}

/// 単語は空ではなく、前後に空白を持たない。
fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.trim() == word
}
