use std::time::Instant;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use laptime::{DurationUnit, Timer};
use serde::Serialize;

/// Summary of one timer, in the unit the timer recorded.
#[derive(Debug, Serialize)]
pub struct TimerReport {
    pub title: String,
    pub unit: &'static str,
    pub samples: usize,
    pub total: Option<u64>,
    pub average: Option<u64>,
    pub mean_lap: Option<u64>,
    #[serde(skip)]
    pub started: Option<Instant>,
}

impl TimerReport {
    pub fn new<U: DurationUnit>(title: &str, timer: &Timer<U>) -> Self {
        Self {
            title: title.to_owned(),
            unit: U::SUFFIX,
            samples: timer.len(),
            total: timer.latest_duration().ok().map(|ticks| ticks.count()),
            average: timer.average_time().ok().map(|ticks| ticks.count()),
            mean_lap: timer.mean_lap().ok().map(|ticks| ticks.count()),
            started: timer.start_timestamp(),
        }
    }
}

/// Builds one report per timer, in the order the timers were started.
/// Timers never started come last, ordered by title.
pub fn collect_reports<'a, U, I>(timers: I) -> Vec<TimerReport>
where
    U: DurationUnit,
    I: IntoIterator<Item = (&'a String, &'a Timer<U>)>,
{
    let mut reports: Vec<TimerReport> = timers
        .into_iter()
        .map(|(title, timer)| TimerReport::new(title, timer))
        .collect();
    reports.sort_by(|a, b| {
        a.started
            .is_none()
            .cmp(&b.started.is_none())
            .then_with(|| a.started.cmp(&b.started))
            .then_with(|| a.title.cmp(&b.title))
    });
    reports
}

pub fn print(reports: &[TimerReport], json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        println!("{}", render_table(reports));
    }

    Ok(())
}

pub fn render_table(reports: &[TimerReport]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Timer").add_attribute(Attribute::Bold),
            Cell::new("Samples").add_attribute(Attribute::Bold),
            Cell::new("Total").add_attribute(Attribute::Bold),
            Cell::new("Average").add_attribute(Attribute::Bold),
            Cell::new("Mean lap").add_attribute(Attribute::Bold),
        ]);

    for report in reports {
        let display = |value: Option<u64>| match value {
            Some(count) => format!("{count}{}", report.unit),
            None => String::from("-"),
        };

        table.add_row(vec![
            Cell::new(&report.title),
            Cell::new(report.samples).set_alignment(CellAlignment::Right),
            Cell::new(display(report.total)).set_alignment(CellAlignment::Right),
            Cell::new(display(report.average)).set_alignment(CellAlignment::Right),
            Cell::new(display(report.mean_lap)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
