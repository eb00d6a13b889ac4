// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliAveragePolicy, CliLineJoin, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "readability",
    version = crate::VERSION,
    about = "テキストの可読性スコア計測ツール (ARI, FK, SMOG, CL)"
)]
pub struct Args {
    /// 対象のテキストファイル (.txt)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// 計算するスコア (ARI, FK, SMOG, CL, all; カンマ/空白区切り)。省略時は対話的に入力
    #[arg(long, short, help_heading = "スコア")]
    pub score: Option<String>,

    /// 平均年齢の計算方法 (reference: 24+ を 99 として扱う / exclude: 24+ と不明を除外)
    #[arg(long, value_enum, default_value = "reference", help_heading = "スコア")]
    pub average: CliAveragePolicy,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 入力テキストを出力しない
    #[arg(long, help_heading = "出力")]
    pub no_echo: bool,

    /// 行の連結方法 (space: 空白で連結 / none: そのまま連結 / keep: 改行を保持)
    #[arg(long, value_enum, default_value = "space", help_heading = "入力")]
    pub line_join: CliLineJoin,

    /// ログを詳細化 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
