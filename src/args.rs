// src/args.rs
use crate::options::HeaderSource;
use crate::parsers;
use clap::{Args, Parser};
use srcbundle_engine::config::{
    DEFAULT_CONFIG_FILE, DEFAULT_PROJECT_OUTPUT, DEFAULT_ROOT_TOKEN, DEFAULT_SCAN_DIRS,
    DEFAULT_SCAN_EXTENSIONS, DEFAULT_SCAN_OUTPUT,
};
use std::path::PathBuf;

/// Options shared by both binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct ConsoleOptions {
    /// 進捗・完了メッセージを表示しない（警告とエラーは表示）
    #[arg(long, short = 'q', help_heading = "表示")]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "collect_cpp",
    version = crate::VERSION,
    about = "src/ と include/ 以下の .cpp/.h を1つのテキストファイルに連結する"
)]
pub struct ScanArgs {
    /// プロジェクトのルートディレクトリ
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// 出力ファイル
    #[arg(long, short = 'o', default_value = DEFAULT_SCAN_OUTPUT)]
    pub output: PathBuf,

    /// 探索するサブディレクトリ（複数可）
    #[arg(long = "dir", value_parser = parsers::parse_subdir, default_values = DEFAULT_SCAN_DIRS)]
    pub dirs: Vec<String>,

    /// 対象の拡張子（複数可, 例: --ext cpp --ext h）
    #[arg(long = "ext", value_parser = parsers::parse_extension, default_values = DEFAULT_SCAN_EXTENSIONS)]
    pub extensions: Vec<String>,

    /// 除外する gitignore 形式のパターン（ルートからの相対, 複数可）
    #[arg(long)]
    pub exclude: Vec<String>,

    #[command(flatten)]
    pub console: ConsoleOptions,
}

#[derive(Parser, Debug)]
#[command(
    name = "collect_project",
    version = crate::VERSION,
    about = "CMakeLists.txt が参照するソースと include 以下のヘッダーを1つのテキストファイルに連結する"
)]
pub struct ProjectArgs {
    /// ビルド設定ファイル
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// 出力ファイル
    #[arg(long, short = 'o', default_value = DEFAULT_PROJECT_OUTPUT)]
    pub output: PathBuf,

    /// ヘッダーを探すディレクトリ
    #[arg(long, value_enum, default_value = "fixed")]
    pub headers: HeaderSource,

    /// include_directories 内で設定ファイルのディレクトリに置換するトークン
    #[arg(long, default_value = DEFAULT_ROOT_TOKEN)]
    pub root_token: String,

    #[command(flatten)]
    pub console: ConsoleOptions,
}
