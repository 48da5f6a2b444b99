// src/options.rs
use clap::ValueEnum;

/// ヘッダー探索の対象ディレクトリ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum HeaderSource {
    /// 設定ファイル隣の include ディレクトリのみ
    #[default]
    Fixed,
    /// include_directories(...) で宣言されたディレクトリのみ
    Declared,
    /// 両方（固定ディレクトリが先）
    Both,
}
