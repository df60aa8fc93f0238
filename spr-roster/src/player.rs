use crate::error::RosterError;
use crate::rules::Rules;
use crate::seat::{derive_seat, Seat};
use crate::status::{Dan, Status};
use log::{debug, warn};
use serde::Serialize;
use spr_calendar::{diff_ymd, CalendarDate, DateDifference, SpanStyle};
use spr_csv::{CsvTable, Record};

/// Text shown for a value that cannot be derived.
pub const UNKNOWN_TEXT: &str = "不明";

/// Text shown for a missing name or number.
pub const BLANK_TEXT: &str = "—";

/// One roster row with every derived field computed against a reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub num: Option<u32>,
    pub name: String,
    pub dan: Dan,
    pub status: Status,
    pub birthday: Option<CalendarDate>,
    /// Promotion date to four-dan, the start of a professional career.
    pub four_day: Option<CalendarDate>,
    #[serde(skip)]
    pub seat: Seat,
    /// Age on the reference day.
    pub age: Option<DateDifference>,
    /// Age at promotion to four-dan.
    pub four_age: Option<DateDifference>,
    /// Time from four-dan promotion to the reference day.
    pub active_span: Option<DateDifference>,
    pub age_days: Option<i64>,
    pub four_age_days: Option<i64>,
    pub active_span_days: Option<i64>,
}

impl Player {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            BLANK_TEXT
        } else {
            &self.name
        }
    }

    pub fn num_text(&self) -> String {
        self.num
            .map(|n| n.to_string())
            .unwrap_or_else(|| BLANK_TEXT.to_string())
    }

    pub fn birthday_text(&self) -> String {
        date_text(self.birthday)
    }

    pub fn four_day_text(&self) -> String {
        date_text(self.four_day)
    }

    pub fn age_text(&self) -> String {
        span_text(self.age, SpanStyle::Age)
    }

    pub fn four_age_text(&self) -> String {
        span_text(self.four_age, SpanStyle::Age)
    }

    pub fn active_span_text(&self) -> String {
        span_text(self.active_span, SpanStyle::Elapsed)
    }

    /// Whole years of age, used by the age range filter.
    pub fn age_years(&self) -> Option<u32> {
        self.age.map(|a| a.years)
    }
}

fn date_text(date: Option<CalendarDate>) -> String {
    date.map(|d| d.format())
        .unwrap_or_else(|| UNKNOWN_TEXT.to_string())
}

fn span_text(span: Option<DateDifference>, style: SpanStyle) -> String {
    span.map(|s| s.format(style))
        .unwrap_or_else(|| UNKNOWN_TEXT.to_string())
}

/// Immutable snapshot of the derived roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
    today: CalendarDate,
}

impl Roster {
    /// Derive every player of `table` against the reference day `today`.
    ///
    /// An empty date cell is "not recorded" and leaves the dependent fields
    /// empty. A non-empty cell that is not a valid `YYYY-MM-DD` date fails
    /// the whole derivation. Players come out ordered by name, then number.
    pub fn derive(table: &CsvTable, rules: &Rules, today: CalendarDate) -> Result<Roster, RosterError> {
        let has_birthday = rules.columns.birthday.iter().any(|c| table.has_column(c));
        if !has_birthday {
            warn!("Roster has no birthday column; ages will be unknown");
        }

        let mut players = table
            .records()
            .enumerate()
            .map(|(i, record)| derive_player(&record, i + 1, rules, today))
            .collect::<Result<Vec<Player>, RosterError>>()?;

        players.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.num.unwrap_or(u32::MAX).cmp(&b.num.unwrap_or(u32::MAX)))
        });
        debug!("Derived {} players as of {}", players.len(), today);

        Ok(Roster { players, today })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }
}

pub(crate) fn parse_date_cell(row: usize, column: &str, raw: &str) -> Result<Option<CalendarDate>, RosterError> {
    if raw.is_empty() {
        return Ok(None);
    }
    CalendarDate::parse(raw)
        .map(Some)
        .map_err(|source| RosterError::InvalidDate {
            row,
            column: column.to_string(),
            source,
        })
}

fn derive_player(
    record: &Record<'_>,
    row: usize,
    rules: &Rules,
    today: CalendarDate,
) -> Result<Player, RosterError> {
    let c = &rules.columns;

    let num_raw = record.get(&c.num);
    let num = match num_raw.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) if num_raw.is_empty() => None,
        Err(_) => {
            warn!("Row {row}: player number {num_raw:?} is not an integer");
            None
        }
    };
    let name = record.get(&c.name).to_string();
    let dan = rules.derive_dan(record);
    let status = rules.classify(record);

    let birthday = match rules.birthday_column(record) {
        Some(col) => parse_date_cell(row, col, record.get(col))?,
        None => None,
    };
    let four_day = parse_date_cell(row, &c.four, record.get(&c.four))?;

    let seat = derive_seat(rules, record, row, dan, &name, num)?;

    let age = birthday.map(|b| diff_ymd(b, today));
    let four_age = birthday.zip(four_day).map(|(b, f)| diff_ymd(b, f));
    let active_span = four_day.map(|f| diff_ymd(f, today));

    let age_days = birthday.map(|b| today.day_count() - b.day_count());
    let four_age_days = birthday
        .zip(four_day)
        .map(|(b, f)| f.day_count() - b.day_count());
    let active_span_days = four_day.map(|f| today.day_count() - f.day_count());

    Ok(Player {
        num,
        name,
        dan,
        status,
        birthday,
        four_day,
        seat,
        age,
        four_age,
        active_span,
        age_days,
        four_age_days,
        active_span_days,
    })
}
