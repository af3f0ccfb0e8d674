//! データ表とコンパイル済み語彙表の検証モジュール

use std::fs::File;
use std::path::PathBuf;

use univocab::errors::VocabError;
use univocab::{Category, Registry, Vocabulary};

use clap::Parser;

use crate::build::load_registry;

/// 検証コマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "check",
    about = "A program to validate the registry tables and a compiled vocabulary."
)]
pub struct Args {
    /// Directory containing closed_class.toml, rules.toml and irregular.toml.
    /// The built-in tables are checked when omitted.
    #[clap(short = 'r', long)]
    registry_dir: Option<PathBuf>,

    /// Compiled vocabulary (in JSON) to verify against the exception rules.
    #[clap(short = 'i', long)]
    vocab_in: Option<PathBuf>,
}

/// 検証中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// 語彙表が例外ルールを満たしていない
    #[error("{remove_from} and {claimed_by} still share {count} word(s), e.g. {example:?}")]
    ExceptionViolated {
        remove_from: Category,
        claimed_by: Category,
        count: usize,
        example: String,
    },

    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// データ表や語彙表の読み込みエラー
    #[error(transparent)]
    Vocab(#[from] VocabError),
}

/// 検証コマンドを実行する
///
/// レジストリの各表の大きさを表示し、語彙表が指定されている場合は
/// すべての例外ルールについて両カテゴリの共通部分が空であることを確認します。
pub fn run(args: Args) -> Result<(), CheckError> {
    let registry = load_registry(args.registry_dir.as_ref())?;
    print_summary(&registry);

    if let Some(path) = &args.vocab_in {
        println!("Verifying {}...", path.display());
        let vocab = Vocabulary::from_json_reader(File::open(path)?)?;
        verify_exceptions(&vocab, &registry)?;
        for category in Category::ALL {
            println!("{}\t{}", category, vocab.len(category));
        }
    }

    println!("OK");
    Ok(())
}

fn print_summary(registry: &Registry) {
    for category in Category::CLOSED_CLASS {
        let n = registry.closed_class(category).map_or(0, <[String]>::len);
        println!("closed class {category}\t{n}");
    }
    for category in Category::ALL {
        let n = registry
            .augmentations()
            .iter()
            .filter(|a| a.category == category)
            .count();
        println!("augment {category}\t{n}");
    }
    for rule in registry.exceptions() {
        println!("except {} \\ {}", rule.remove_from, rule.claimed_by);
    }
}

/// 語彙表がすべての例外ルールを満たしているか確認する
fn verify_exceptions(vocab: &Vocabulary, registry: &Registry) -> Result<(), CheckError> {
    for rule in registry.exceptions() {
        let shared = vocab.overlap(rule.remove_from, rule.claimed_by);
        if let Some(example) = shared.first() {
            return Err(CheckError::ExceptionViolated {
                remove_from: rule.remove_from,
                claimed_by: rule.claimed_by,
                count: shared.len(),
                example: example.to_string(),
            });
        }
    }
    Ok(())
}
