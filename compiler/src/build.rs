//! 語彙表のビルドモジュール
//!
//! WordNetのインデックスファイル (`index.adv`, `index.noun`, `index.verb`,
//! `index.adj`) とレジストリのデータ表から語彙表を構築し、
//! JSONドキュメントとして出力します。

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use univocab::config::DEFAULT_VOCABULARY_FILE;
use univocab::errors::VocabError;
use univocab::{Registry, SourceConfig, Vocabulary, VocabularyBuilder};

use clap::Parser;

/// ビルドコマンドの引数
#[derive(Parser, Debug)]
#[clap(
    name = "build",
    about = "A program to compile the part-of-speech vocabulary."
)]
pub struct Args {
    /// WordNet `dict` directory containing index.adv, index.noun, index.verb and index.adj.
    ///
    /// If this argument is not specified, all of `--adv-in`, `--noun-in`,
    /// `--verb-in` and `--adj-in` must be given.
    #[clap(short = 'w', long)]
    wordnet_dir: Option<PathBuf>,

    /// Adverb index file (index.adv). Overrides the one in `--wordnet-dir`.
    #[clap(long)]
    adv_in: Option<PathBuf>,

    /// Noun index file (index.noun). Overrides the one in `--wordnet-dir`.
    #[clap(long)]
    noun_in: Option<PathBuf>,

    /// Verb index file (index.verb). Overrides the one in `--wordnet-dir`.
    #[clap(long)]
    verb_in: Option<PathBuf>,

    /// Adjective index file (index.adj). Overrides the one in `--wordnet-dir`.
    #[clap(long)]
    adj_in: Option<PathBuf>,

    /// Directory containing closed_class.toml, rules.toml and irregular.toml.
    /// The built-in tables are used when omitted.
    #[clap(short = 'r', long)]
    registry_dir: Option<PathBuf>,

    /// File to which the vocabulary is output (in JSON).
    #[clap(short = 'o', long, default_value = DEFAULT_VOCABULARY_FILE)]
    vocab_out: PathBuf,

    /// Writes the JSON document on a single line instead of indenting it.
    #[clap(long)]
    compact: bool,
}

/// ビルド処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// 不正な引数の組み合わせ
    ///
    /// `--wordnet-dir`または`--{adv,noun,verb,adj}-in`のすべてが
    /// 指定されている必要があります。
    #[error(
        "Invalid argument combination: Either --wordnet-dir or all of \
        --{{adv,noun,verb,adj}}-in must be specified."
    )]
    InvalidSourceArguments,

    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 語彙表の構築エラー
    #[error("Vocabulary compilation failed: {0}")]
    Vocab(#[from] VocabError),
}

/// コマンドライン引数からソースファイルの設定を決定する
///
/// # エラー
///
/// 不正な引数の組み合わせの場合、`BuildError::InvalidSourceArguments`を返します。
fn get_source_from_args(args: &Args) -> Result<SourceConfig, BuildError> {
    let mut config = match (
        &args.wordnet_dir,
        &args.adv_in,
        &args.noun_in,
        &args.verb_in,
        &args.adj_in,
    ) {
        (Some(dir), ..) => SourceConfig::from_dir(dir),
        (None, Some(adv), Some(noun), Some(verb), Some(adj)) => {
            return Ok(SourceConfig {
                adv: adv.clone(),
                noun: noun.clone(),
                verb: verb.clone(),
                adj: adj.clone(),
            });
        }
        _ => return Err(BuildError::InvalidSourceArguments),
    };
    if let Some(adv) = &args.adv_in {
        config.adv = adv.clone();
    }
    if let Some(noun) = &args.noun_in {
        config.noun = noun.clone();
    }
    if let Some(verb) = &args.verb_in {
        config.verb = verb.clone();
    }
    if let Some(adj) = &args.adj_in {
        config.adj = adj.clone();
    }
    Ok(config)
}

/// レジストリを読み込む
///
/// ディレクトリが指定されていない場合は組み込みのデータ表を使用します。
pub fn load_registry(registry_dir: Option<&PathBuf>) -> Result<Registry, VocabError> {
    match registry_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading registry tables");
            Registry::from_dir(dir)
        }
        None => Registry::builtin(),
    }
}

/// ビルドコマンドを実行する
///
/// 語彙表を構築し、JSONドキュメントとして出力します。
/// 構築に失敗した場合は出力ファイルを作成しません。
///
/// # エラー
///
/// ファイルの読み書きや語彙表の構築に失敗した場合、`BuildError`を返します。
pub fn run(args: Args) -> Result<(), BuildError> {
    let source = get_source_from_args(&args)?;
    let registry = load_registry(args.registry_dir.as_ref())?;

    println!("Compiling the vocabulary...");
    let vocab = build_vocabulary(&source, &registry)?;

    println!("Writing the vocabulary...");
    let file = File::create(&args.vocab_out)?;
    vocab.write_json(BufWriter::new(file), !args.compact)?;

    println!("Successfully built the vocabulary to {}", args.vocab_out.display());
    Ok(())
}

/// 指定されたソースファイルから語彙表を構築する
///
/// CLIに依存しないコアのビルドロジックです。
pub fn build_vocabulary(
    source: &SourceConfig,
    registry: &Registry,
) -> Result<Vocabulary, BuildError> {
    Ok(VocabularyBuilder::from_config(source, registry)?)
}
