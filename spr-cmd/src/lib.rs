//! Command implementations for the shogi roster CLI.
//!
//! Each subcommand loads the roster once, from a file or an HTTP(S) URL,
//! derives it against a reference day and prints a plain-text report.

use clap::Subcommand;
use spr_roster::{SortOrder, DEFAULT_MIN_NUM};

pub mod average;
pub mod export;
pub mod render;
pub mod search;
pub mod source;

use average::AverageSort;
use export::ExportFormat;
use search::SearchArgs;
use source::SourceArgs;

/// Fixed text printed when the roster cannot be loaded or derived.
pub const LOAD_FAILURE_TEXT: &str =
    "データ読み込みに失敗しました。--source に指定した profile.csv のパス/URL を確認してください。";

/// The failure state line: fixed text plus the underlying cause.
pub fn failure_message(err: &anyhow::Error) -> String {
    format!("{LOAD_FAILURE_TEXT}（詳細：{err:#}）")
}

#[derive(Subcommand)]
pub enum Command {
    /// Search players by name, number, rank, status and age
    Search {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        args: SearchArgs,
    },

    /// Average and median four-dan promotion age of a player-number cohort
    Average {
        #[command(flatten)]
        source: SourceArgs,

        /// Smallest player number in the cohort
        #[arg(long, default_value_t = DEFAULT_MIN_NUM)]
        min_num: u32,

        /// Table order
        #[arg(long, value_enum, default_value_t = AverageSort::Num)]
        sort: AverageSort,

        /// asc or desc
        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },

    /// Write every derived player as CSV or JSON
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Search { source, args } => search::run_search(&source, &args).await,
        Command::Average {
            source,
            min_num,
            sort,
            order,
        } => average::run_average(&source, min_num, sort, order).await,
        Command::Export {
            source,
            format,
            output,
        } => export::run_export(&source, format, output.as_deref()).await,
    }
}
