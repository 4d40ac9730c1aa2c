//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use almanac_astro::{Annotator, Location, parse_timezone};
use almanac_layout::{Labels, LayoutConfig, MonthFit, PageGeometry};

use crate::config::{LabelsToml, LayoutToml, LocationToml, PageToml};

/// Builds the page geometry, rejecting margins that leave no canvas.
pub fn build_page_geometry(page: &PageToml) -> Result<PageGeometry> {
    let geometry = PageGeometry {
        width: page.width,
        height: page.height,
        margin_left: page.margin_left,
        margin_right: page.margin_right,
        margin_top: page.margin_top,
        margin_bottom: page.margin_bottom,
        markers: page.markers,
    };
    let canvas = geometry.canvas();
    if !(canvas.width() > 0.0 && canvas.height() > 0.0) {
        bail!(
            "page {}x{} mm leaves no canvas inside its margins",
            page.width,
            page.height
        );
    }
    Ok(geometry)
}

/// Resolves the location and optional time zone override.
pub fn build_annotator(location: &LocationToml) -> Result<Annotator> {
    let place = Location::named(&location.name).with_context(|| {
        let known: Vec<&str> = Location::known_names().collect();
        format!("known locations: {}", known.join(", "))
    })?;
    let mut annotator = Annotator::new(place);
    if let Some(ref name) = location.timezone {
        annotator = annotator.with_timezone(parse_timezone(name)?);
    }
    Ok(annotator)
}

/// Converts the `[layout]` section into a [`MonthFit`].
///
/// `months` and `fit = true` are mutually exclusive; with neither, seven
/// months are shown.
pub fn parse_month_fit(layout: &LayoutToml) -> Result<MonthFit> {
    match (layout.months, layout.fit) {
        (Some(_), true) => bail!("layout.months and layout.fit = true are mutually exclusive"),
        (Some(months), false) => Ok(MonthFit::Fixed(months)),
        (None, true) => Ok(MonthFit::Fit {
            day_width: layout.day_width,
        }),
        (None, false) => Ok(MonthFit::default()),
    }
}

/// Applies label overrides on top of the English defaults.
pub fn build_labels(labels: &LabelsToml) -> Result<Labels> {
    let mut out = Labels::default();
    if let Some(ref v) = labels.months {
        out.months = fixed_list("months", v)?;
    }
    if let Some(ref v) = labels.weekdays_short {
        out.weekdays_short = fixed_list("weekdays_short", v)?;
    }
    if let Some(ref v) = labels.weekdays {
        out.weekdays = fixed_list("weekdays", v)?;
    }
    if let Some(ref v) = labels.moon {
        out.moon = fixed_list("moon", v)?;
    }
    if let Some(ref v) = labels.sunrise {
        out.sunrise.clone_from(v);
    }
    if let Some(ref v) = labels.sunset {
        out.sunset.clone_from(v);
    }
    if let Some(ref v) = labels.daylight {
        out.daylight.clone_from(v);
    }
    Ok(out)
}

/// Builds a [`LayoutConfig`] and checks its month fit against the canvas.
pub fn build_layout_config(
    layout: &LayoutToml,
    labels: &LabelsToml,
    geometry: &PageGeometry,
) -> Result<LayoutConfig> {
    let fit = parse_month_fit(layout)?;
    fit.resolve(geometry.canvas().width())
        .context("invalid [layout] section")?;
    Ok(LayoutConfig::new()
        .with_fit(fit)
        .with_split_icons(layout.split_icons)
        .with_labels(build_labels(labels)?))
}

fn fixed_list<const N: usize>(name: &str, values: &[String]) -> Result<[String; N]> {
    match <[String; N]>::try_from(values.to_vec()) {
        Ok(list) => Ok(list),
        Err(v) => bail!("labels.{name} needs {N} entries, got {}", v.len()),
    }
}
