//! The `export` subcommand: derived players as CSV or JSON.

use crate::source::{load_roster, SourceArgs};
use anyhow::Context;
use clap::ValueEnum;
use log::info;
use serde::Serialize;
use spr_calendar::CalendarDate;
use spr_roster::Player;
use std::fs::File;
use std::io::{self, BufWriter, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// One exported player; dates and spans are pre-rendered text.
#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub num: Option<u32>,
    pub name: &'a str,
    pub dan: &'static str,
    pub status: &'static str,
    pub birthday: Option<CalendarDate>,
    pub four_day: Option<CalendarDate>,
    pub age: Option<String>,
    pub four_age: Option<String>,
    pub active_span: Option<String>,
    pub age_days: Option<i64>,
    pub four_age_days: Option<i64>,
    pub active_span_days: Option<i64>,
}

impl<'a> From<&'a Player> for ExportRow<'a> {
    fn from(p: &'a Player) -> Self {
        Self {
            num: p.num,
            name: &p.name,
            dan: p.dan.label(),
            status: p.status.label(),
            birthday: p.birthday,
            four_day: p.four_day,
            age: p.age.map(|_| p.age_text()),
            four_age: p.four_age.map(|_| p.four_age_text()),
            active_span: p.active_span.map(|_| p.active_span_text()),
            age_days: p.age_days,
            four_age_days: p.four_age_days,
            active_span_days: p.active_span_days,
        }
    }
}

pub fn write_csv<W: Write>(players: &[Player], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for player in players {
        wtr.serialize(ExportRow::from(player))
            .context("Failed to write CSV row")?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(players: &[Player], mut writer: W) -> anyhow::Result<()> {
    let rows: Vec<ExportRow> = players.iter().map(ExportRow::from).collect();
    serde_json::to_writer_pretty(&mut writer, &rows).context("Failed to write JSON")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn write_players<W: Write>(players: &[Player], format: ExportFormat, writer: W) -> anyhow::Result<()> {
    match format {
        ExportFormat::Csv => write_csv(players, writer),
        ExportFormat::Json => write_json(players, writer),
    }
}

/// Export the roster to `output`, or to stdout when no path is given.
pub async fn run_export(
    source: &SourceArgs,
    format: ExportFormat,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let roster = load_roster(&source.source, source.today()).await?;
    match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
            write_players(roster.players(), format, BufWriter::new(file))?;
            info!("Exported {} players to {}", roster.len(), path);
        }
        None => {
            let stdout = io::stdout();
            write_players(roster.players(), format, stdout.lock())?;
        }
    }
    Ok(())
}
