//! The `average` subcommand: four-dan promotion age of a player-number cohort.

use crate::render::TextTable;
use crate::source::{load_roster, SourceArgs};
use clap::ValueEnum;
use log::{info, warn};
use spr_calendar::SpanStyle;
use spr_roster::{
    average_promotion_age, by_min_num, is_median, median_promotion_age, Player, Roster,
    SortOrder,
};

const EMPTY_TEXT: &str = "（対象者なし）";

/// Row order of the cohort table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AverageSort {
    /// Player number
    #[default]
    Num,
    /// Four-dan promotion age, ties by player number
    Age,
}

fn sort_cohort<'a>(cohort: &[&'a Player], sort: AverageSort, order: SortOrder) -> Vec<&'a Player> {
    let mut sorted = cohort.to_vec();
    let num = |p: &Player| p.num.unwrap_or(u32::MAX);
    match sort {
        AverageSort::Num => sorted.sort_by_key(|p| num(*p)),
        AverageSort::Age => sorted.sort_by_key(|p| (p.four_age_days, num(*p))),
    }
    if order == SortOrder::Desc {
        sorted.reverse();
    }
    sorted
}

pub fn render_average(
    roster: &Roster,
    min_num: u32,
    sort: AverageSort,
    order: SortOrder,
) -> anyhow::Result<String> {
    let all = by_min_num(roster.players(), min_num);
    let cohort: Vec<&Player> = all
        .iter()
        .copied()
        .filter(|p| p.four_age_days.is_some())
        .collect();
    if cohort.len() < all.len() {
        warn!(
            "{} players numbered {} or higher lack a birthday or four-dan date",
            all.len() - cohort.len(),
            min_num
        );
    }

    let average = average_promotion_age(cohort.iter().copied())?;
    let median = median_promotion_age(cohort.iter().copied());
    info!(
        "Cohort {}+: {} players, average birthday {}, average four-dan {}",
        min_num, average.count, average.average_birthday, average.average_four_day
    );

    let mut out = format!(
        "棋士番号{}以降の棋士の四段昇段平均年齢：{}（算出対象：{}名）\n",
        min_num,
        average.average_age.format(SpanStyle::Age),
        average.count
    );
    if let Some(m) = median {
        out.push_str(&format!(
            "中央値：{}（{} {}）\n",
            m.four_age_text(),
            m.display_name(),
            m.num_text()
        ));
    }

    let mut table = TextTable::new(&["順", "棋士名", "四段昇段年齢", "棋士番号"]);
    for (i, player) in sort_cohort(&cohort, sort, order).iter().enumerate() {
        table.push_marked_row(
            vec![
                (i + 1).to_string(),
                player.display_name().to_string(),
                player.four_age_text(),
                player.num_text(),
            ],
            is_median(player, median),
        );
    }
    out.push_str(&table.render(EMPTY_TEXT));
    Ok(out)
}

pub async fn run_average(
    source: &SourceArgs,
    min_num: u32,
    sort: AverageSort,
    order: SortOrder,
) -> anyhow::Result<()> {
    let roster = load_roster(&source.source, source.today()).await?;
    print!("{}", render_average(&roster, min_num, sort, order)?);
    Ok(())
}
