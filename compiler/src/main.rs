//! 語彙表コンパイラのメインエントリーポイント
//!
//! WordNetのインデックスファイルと組み込みのデータ表から品詞語彙表を
//! コンパイルする `build` と、データ表やコンパイル済み語彙表を検証する
//! `check` のサブコマンドを提供します。

mod build;
mod check;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::{build::BuildError, check::CheckError};

/// コマンドライン引数の構造体
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// WordNetのインデックスファイルから語彙表を構築します
    Build(build::Args),

    /// データ表とコンパイル済み語彙表を検証します
    Check(check::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
///
/// 各サブコマンドで発生したエラーをラップします。
#[derive(Debug, Error)]
pub enum CompileError {
    /// 語彙表の構築中のエラー
    #[error(transparent)]
    BuildError(#[from] BuildError),
    /// 検証中のエラー
    #[error(transparent)]
    CheckError(#[from] CheckError),
}

/// メイン関数
///
/// ログ出力を初期化し、指定されたサブコマンドを実行します。
/// ログレベルは `RUST_LOG` で変更できます（既定は `info`）。
fn main() -> Result<(), CompileError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => Ok(build::run(args)?),
        Command::Check(args) => Ok(check::run(args)?),
    }
}
