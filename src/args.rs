// src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};

use crate::presentation::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "codestat",
    version,
    about = "ワークスペースのコード統計ツール (行数/拡張子別集計と履歴)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// 履歴ファイルの保存先ディレクトリ
    #[arg(long, global = true, value_hint = ValueHint::DirPath, help_heading = "共通")]
    pub state_dir: Option<PathBuf>,

    /// ログを詳細に (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, help_heading = "共通")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "共通")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// ワークスペースを走査して統計を記録
    Analyze(AnalyzeArgs),
    /// 直近の統計レポートを表示
    Report(ReportArgs),
    /// ステータス表示の有効/無効を切り替え
    ToggleStatus(WorkspaceArg),
    /// 一行ステータスを表示
    Status(StatusArgs),
    /// 保存済みスナップショットの一覧/削除
    History(HistoryArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct WorkspaceArg {
    /// ワークスペースのルート
    #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
    pub path: PathBuf,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArg,

    /// HTML レポートの出力先
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub report: Option<PathBuf>,

    /// 進捗表示
    #[arg(long, help_heading = "出力")]
    pub progress: bool,

    /// ワークスペース名 (既定: ルートのディレクトリ名)
    #[arg(long, help_heading = "出力")]
    pub name: Option<String>,

    /// 除外するファイル/ディレクトリ名 (`*` のみワイルドカード)
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub exclude: Vec<String>,

    /// 対象とする拡張子
    #[arg(long = "ext", value_delimiter = ',', help_heading = "フィルタ")]
    pub extensions: Vec<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArg,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: ReportFormat,

    /// 出力先ファイル (省略時は標準出力)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArg,

    /// 合計行数/ファイル数/更新時間を複数行で表示
    #[arg(long)]
    pub detail: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub workspace: WorkspaceArg,

    /// 履歴をすべて削除
    #[arg(long)]
    pub clear: bool,
}

impl Command {
    pub fn workspace(&self) -> &WorkspaceArg {
        match self {
            Self::Analyze(args) => &args.workspace,
            Self::Report(args) => &args.workspace,
            Self::ToggleStatus(args) => args,
            Self::Status(args) => &args.workspace,
            Self::History(args) => &args.workspace,
        }
    }
}
