//! Loading the roster CSV from a local path or an HTTP(S) URL.

use chrono::Local;
use clap::Args;
use log::info;
use reqwest::{Client, StatusCode};
use spr_calendar::CalendarDate;
use spr_csv::CsvTable;
use spr_roster::{Roster, Rules};
use std::path::PathBuf;
use thiserror::Error;

/// Roster asset read when `--source` is not given.
pub const DEFAULT_SOURCE: &str = "fixtures/profile.csv";

/// Where the roster comes from and the day ages are computed for.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Roster CSV: a file path or an http(s):// URL
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Reference day (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    pub today: Option<CalendarDate>,
}

impl SourceArgs {
    pub fn today(&self) -> CalendarDate {
        self.today.unwrap_or_else(local_today)
    }
}

/// Current local date, truncated to the day.
pub fn local_today() -> CalendarDate {
    CalendarDate::from_naive_date(Local::now().naive_local().date())
}

#[derive(Error, Debug)]
pub enum SourceError {
    /// The server answered with a non-success status.
    #[error("Failed to fetch {url}: HTTP {status}")]
    FetchFailure { url: String, status: StatusCode },

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Raw text of the roster CSV.
pub async fn load_text(source: &str) -> Result<String, SourceError> {
    if is_url(source) {
        let client = Client::new();
        info!("Fetching roster from {}", source);
        let response = client.get(source).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::FetchFailure {
                url: source.to_string(),
                status,
            });
        }
        Ok(response.text().await?)
    } else {
        info!("Reading roster from {}", source);
        tokio::fs::read_to_string(source)
            .await
            .map_err(|source_err| SourceError::Io {
                path: PathBuf::from(source),
                source: source_err,
            })
    }
}

/// Load and derive the roster as of `today`.
pub async fn load_roster(source: &str, today: CalendarDate) -> anyhow::Result<Roster> {
    let text = load_text(source).await?;
    let table = CsvTable::from_text(&text);
    let roster = Roster::derive(&table, &Rules::default(), today)?;
    info!("Loaded {} players from {}", roster.len(), source);
    Ok(roster)
}
