//! Render command: lay out consecutive four-week pages and write them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Days, Local};
use tracing::{debug, info, info_span};

use almanac_events::Expander;
use almanac_layout::{PAGE_DAYS, Page, compose_page};

use crate::cli::{OutputFormat, RenderArgs};
use crate::{config, convert, events_file, svg};

/// Run the render pipeline. Every page is laid out before the output
/// directory is touched.
pub fn run(args: RenderArgs) -> Result<()> {
    let _cmd = info_span!("render").entered();
    if args.pages == 0 {
        bail!("--pages must be at least 1");
    }

    let config = config::load(args.config.as_deref())?;
    let geometry = convert::build_page_geometry(&config.page)?;
    let annotator = convert::build_annotator(&config.location)?;
    let layout_cfg = convert::build_layout_config(&config.layout, &config.labels, &geometry)?;
    let rules = events_file::load(&args.events)?;
    let expander = Expander::default();

    let start = args.date.unwrap_or_else(|| Local::now().date_naive());
    let pages = (0..args.pages)
        .map(|i| {
            let page_start = PAGE_DAYS
                .checked_mul(i)
                .and_then(|offset| u64::try_from(offset).ok())
                .and_then(|offset| start.checked_add_days(Days::new(offset)))
                .with_context(|| {
                    format!("page {} from {start} runs past the last supported date", i + 1)
                })?;
            compose_page(&geometry, page_start, &rules, &expander, &annotator, &layout_cfg)
                .with_context(|| format!("failed to lay out page starting {page_start}"))
        })
        .collect::<Result<Vec<Page>>>()?;
    info!(n_pages = pages.len(), "pages laid out");

    prepare_output_dir(&args.output, args.format)?;
    for page in &pages {
        let path = write_page(&args.output, page, args.format)?;
        println!("{}", path.display());
    }
    Ok(())
}

/// Creates `dir` if needed and removes earlier pages of `format` from it.
fn prepare_output_dir(dir: &Path, format: OutputFormat) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to list output directory: {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        let stale = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == format.extension());
        if stale {
            debug!(path = %path.display(), "removing stale page");
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }
    }
    Ok(())
}

fn write_page(dir: &Path, page: &Page, format: OutputFormat) -> Result<PathBuf> {
    let path = dir.join(format!("{}.{}", page.start, format.extension()));
    let body = match format {
        OutputFormat::Svg => svg::render(page).context("failed to render page")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(page).context("failed to serialise page")?
        }
    };
    fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), elements = page.elements.len(), "page written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const EVENTS: &str = "\
# birthdays
🎂 Ona {age} ; bday ; 1990-03-05 ; FREQ=YEARLY
Yoga ; event ; FREQ=WEEKLY;BYDAY=WE
";

    fn args(dir: &Path, pages: usize, format: OutputFormat) -> RenderArgs {
        let events = dir.join("events.txt");
        fs::write(&events, EVENTS).unwrap();
        let config = dir.join("almanac.toml");
        fs::write(&config, "[location]\nname = \"Vilnius\"\n").unwrap();
        RenderArgs {
            events,
            date: NaiveDate::from_ymd_opt(2024, 3, 4),
            pages,
            config: Some(config),
            output: dir.join("out"),
            format,
        }
    }

    #[test]
    fn renders_consecutive_pages() {
        let dir = tempfile::tempdir().unwrap();
        run(args(dir.path(), 2, OutputFormat::Svg)).unwrap();
        let out = dir.path().join("out");
        let first = fs::read_to_string(out.join("2024-03-04.svg")).unwrap();
        assert!(out.join("2024-04-01.svg").is_file());
        assert!(first.starts_with("<svg "));
        assert!(first.contains(">Ona 34</text>"));
        assert!(first.contains(">Yoga</text>"));
    }

    #[test]
    fn removes_stale_pages_of_the_same_format() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("2000-01-01.svg"), "old").unwrap();
        fs::write(out.join("notes.txt"), "keep").unwrap();

        run(args(dir.path(), 1, OutputFormat::Svg)).unwrap();
        assert!(!out.join("2000-01-01.svg").exists());
        assert!(out.join("notes.txt").exists());
        assert!(out.join("2024-03-04.svg").exists());
    }

    #[test]
    fn json_dump() {
        let dir = tempfile::tempdir().unwrap();
        run(args(dir.path(), 1, OutputFormat::Json)).unwrap();
        let text = fs::read_to_string(dir.path().join("out/2024-03-04.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["start"], "2024-03-04");
        assert_eq!(value["width"], 297.0);
        assert!(value["elements"].as_array().unwrap().len() > 28);
    }

    #[test]
    fn parse_error_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), 1, OutputFormat::Svg);
        fs::write(&args.events, "Broken ; someday ; 2024-01-01\n").unwrap();
        let out = args.output.clone();
        let err = run(args).unwrap_err();
        assert!(format!("{err:#}").contains("line 1"));
        assert!(!out.exists());
    }

    #[test]
    fn zero_pages_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(args(dir.path(), 0, OutputFormat::Svg)).is_err());
    }

    #[test]
    fn pages_past_the_last_date_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(dir.path(), 3, OutputFormat::Svg);
        args.date = NaiveDate::MAX.checked_sub_days(Days::new(10));
        let out = args.output.clone();
        let err = run(args).unwrap_err();
        assert!(
            format!("{err:#}").contains("runs past the last supported date"),
            "{err:#}"
        );
        assert!(!out.exists());
    }
}
