//! 単語の品詞候補を表示するユーティリティ
//!
//! このバイナリは、コンパイル済みの語彙表を読み込み、標準入力から1行に1語
//! （または空白区切りの成句）ずつ読み込んで、属しうる品詞を出力します。
//!
//! 出力形式は `word<TAB>CAT,CAT,...` です。未知の単語はタブの後が空になります。

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use univocab::config::DEFAULT_VOCABULARY_FILE;
use univocab::{Category, Vocabulary};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "lookup", about = "Lists the possible parts of speech of words")]
struct Args {
    /// Compiled vocabulary (in JSON).
    #[clap(short = 'i', long, default_value = DEFAULT_VOCABULARY_FILE)]
    vocab: PathBuf,
}

fn format_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// メイン関数
///
/// 語彙表をロードし、標準入力から読み込んだ各行の品詞候補を標準出力に出力します。
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    eprintln!("Loading the vocabulary...");
    let vocab = Vocabulary::from_json_reader(File::open(&args.vocab)?)?;
    tracing::info!(path = %args.vocab.display(), "loaded vocabulary");

    eprintln!("Ready to look up");

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let lines = std::io::stdin().lock().lines();
    for line in lines {
        let line = line?;
        let word = line.trim();
        let categories = vocab.possible_categories(word);
        writeln!(&mut out, "{}\t{}", word, format_categories(&categories))?;
        if is_tty {
            out.flush()?;
        }
    }
    out.flush()?;

    Ok(())
}
