//! The `search` subcommand: filter, sort and tabulate the roster.

use crate::render::TextTable;
use crate::source::{load_roster, SourceArgs};
use clap::Args;
use log::{info, warn};
use spr_calendar::{CalendarDate, SpanStyle};
use spr_roster::{
    average_promotion_age, sort_by_metric, sort_by_seat, Dan, Filters, Metric, NumFilter, Player,
    Roster, SortOrder, Status, BLANK_TEXT,
};

const EMPTY_TEXT: &str = "（該当する棋士はいません）";

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Part of the player name (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Player number, or a range such as 184-200, 184- or -200
    #[arg(long)]
    pub num: Option<NumFilter>,

    /// Rank, e.g. 9, nine or 九段
    #[arg(long)]
    pub dan: Option<Dan>,

    /// active, retired, deceased or withdrawn; active when omitted
    #[arg(long)]
    pub status: Option<Status>,

    /// Search every player regardless of status
    #[arg(long, conflicts_with = "status")]
    pub all: bool,

    /// Minimum age in whole years
    #[arg(long)]
    pub age_min: Option<u32>,

    /// Maximum age in whole years
    #[arg(long)]
    pub age_max: Option<u32>,

    /// Sort metric: age, four-age or active-span
    #[arg(short, long, default_value = "age")]
    pub metric: Metric,

    /// Sort direction of the metric: asc or desc
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,

    /// Sort by seat order instead of the metric
    #[arg(long)]
    pub seat: bool,
}

impl SearchArgs {
    /// Status the search is restricted to; `None` with `--all`.
    pub fn status(&self) -> Option<Status> {
        if self.all {
            None
        } else {
            Some(self.status.unwrap_or(Status::Active))
        }
    }

    pub fn filters(&self) -> Filters {
        Filters {
            name: self
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            num: self.num,
            dan: self.dan,
            status: self.status(),
            age_min: self.age_min,
            age_max: self.age_max,
        }
    }

    /// Label of the searched population in the summary line.
    fn target(&self) -> String {
        match self.status() {
            Some(status) => format!("{}棋士", status.label()),
            None => "全棋士".to_string(),
        }
    }
}

/// Summary line: target, reference day, hit count and the average four-dan
/// promotion age of the hits that have both dates.
pub fn summary_line(args: &SearchArgs, today: CalendarDate, hits: &[&Player]) -> String {
    let (average, contributors) = match average_promotion_age(hits.iter().copied()) {
        Ok(avg) => (avg.average_age.format(SpanStyle::Age), avg.count),
        Err(_) => (BLANK_TEXT.to_string(), 0),
    };
    format!(
        "対象：{} / 今日：{} / 件数：{} / 四段昇段平均年齢：{}（算出対象：{}名）",
        args.target(),
        today,
        hits.len(),
        average,
        contributors
    )
}

/// The 8-column result table.
pub fn result_table(metric: Metric, players: &[&Player]) -> TextTable {
    let [metric_header, header_a, header_b] = metric.headers();
    let mut table = TextTable::new(&[
        "順",
        "棋士名",
        "段位",
        metric_header,
        header_a,
        header_b,
        "棋士番号",
        "区分",
    ]);
    for (i, player) in players.iter().enumerate() {
        let [value, a, b] = metric.cells(player);
        table.push_row(vec![
            (i + 1).to_string(),
            player.display_name().to_string(),
            player.dan.label().to_string(),
            value,
            a,
            b,
            player.num_text(),
            player.status.label().to_string(),
        ]);
    }
    table
}

pub fn render_search(roster: &Roster, args: &SearchArgs) -> String {
    if args.age_min.zip(args.age_max).is_some_and(|(lo, hi)| lo > hi) {
        warn!("Age range {:?}..{:?} is empty", args.age_min, args.age_max);
    }
    let hits = args.filters().apply(roster.players());
    let sorted = if args.seat {
        sort_by_seat(&hits)
    } else {
        sort_by_metric(&hits, args.metric, args.order)
    };
    info!("Search matched {} of {} players", sorted.len(), roster.len());

    let mut out = summary_line(args, roster.today(), &sorted);
    out.push('\n');
    out.push_str(&result_table(args.metric, &sorted).render(EMPTY_TEXT));
    out
}

pub async fn run_search(source: &SourceArgs, args: &SearchArgs) -> anyhow::Result<()> {
    let roster = load_roster(&source.source, source.today()).await?;
    print!("{}", render_search(&roster, args));
    Ok(())
}
