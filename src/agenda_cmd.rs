//! Agenda command: list expanded occurrences without rendering.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use chrono::{Days, Local, NaiveDate};
use tracing::info_span;

use almanac_events::{Expander, Occurrences};

use crate::cli::AgendaArgs;
use crate::events_file;

pub fn run(args: AgendaArgs) -> Result<()> {
    let _cmd = info_span!("agenda").entered();
    if args.days == 0 {
        bail!("--days must be at least 1");
    }
    let start = args.date.unwrap_or_else(|| Local::now().date_naive());
    let end = start
        .checked_add_days(Days::new(u64::from(args.days) - 1))
        .with_context(|| {
            format!("{} days from {start} run past the last supported date", args.days)
        })?;
    let rules = events_file::load(&args.events)?;
    let occurrences = Expander::default().expand_all(&rules, start, end);

    let stdout = io::stdout();
    write_agenda(&mut stdout.lock(), &occurrences)?;
    Ok(())
}

/// Writes one `date<TAB>text` line per occurrence, in date order.
fn write_agenda(out: &mut impl Write, occurrences: &Occurrences) -> io::Result<()> {
    for (date, texts) in occurrences.iter() {
        for text in texts {
            writeln!(out, "{}\t{text}", format_date(date))?;
        }
    }
    Ok(())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d %a").to_string()
}
