//! Page assembly: canvas placement, the overview, the detail grid and the
//! page markers.

use almanac_astro::Annotator;
use almanac_events::{EventRule, Expander};
use almanac_geometry::Region;
use almanac_calendar::date_sequence;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info_span};

use crate::config::LayoutConfig;
use crate::detail::DetailGrid;
use crate::element::Element;
use crate::error::LayoutError;
use crate::overview::{Overview, PAGE_DAYS, overview_months};

/// Height of the marker lines at the top of the page.
const MARKER_LENGTH: f64 = 20.0;

/// Horizontal distance of the side markers from the centre marker.
const MARKER_SPREAD: f64 = 40.0;

/// Paper size and the canvas margins, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    /// Draw fold markers at the top edge.
    pub markers: bool,
}

impl Default for PageGeometry {
    /// A4 landscape with room for the markers above the canvas.
    fn default() -> Self {
        Self {
            width: 297.0,
            height: 210.0,
            margin_left: 10.0,
            margin_right: 10.0,
            margin_top: 20.0,
            margin_bottom: 10.0,
            markers: true,
        }
    }
}

impl PageGeometry {
    pub fn page(&self) -> Region {
        Region::root(self.width, self.height)
    }

    /// The region inside the margins.
    pub fn canvas(&self) -> Region {
        Region::within(
            &self.page(),
            self.margin_left,
            self.margin_top,
            self.width - self.margin_left - self.margin_right,
            self.height - self.margin_top - self.margin_bottom,
        )
    }
}

/// One laid out page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// First day of the four paged weeks.
    pub start: NaiveDate,
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Element>,
}

/// Lays out the overview and the detail grid of the 28 days from `start`
/// inside `canvas`.
///
/// Elements are returned in paint order. The result depends only on the
/// arguments.
///
/// # Errors
///
/// Returns [`LayoutError`] for an invalid month fit, when the page runs past
/// the last representable date, or when a day cannot be annotated.
pub fn layout(
    canvas: &Region,
    start: NaiveDate,
    rules: &[EventRule],
    expander: &Expander<'_>,
    annotator: &Annotator,
    config: &LayoutConfig,
) -> Result<Vec<Element>, LayoutError> {
    // The page days plus the day after them, which closes the highlight.
    let days = date_sequence(start, PAGE_DAYS + 1);
    if days.len() <= PAGE_DAYS {
        return Err(LayoutError::DateOutOfRange { start });
    }
    let (page_days, end) = (&days[..PAGE_DAYS], days[PAGE_DAYS]);
    let (month_count, day_width) = config.fit().resolve(canvas.width())?;
    let months = overview_months(start, month_count)?;
    debug!(%start, month_count, day_width, "overview");

    let mut elements = Vec::new();
    let overview = Overview {
        left: canvas.left(),
        top: canvas.top(),
        day_width,
        line_height: config.line_height(),
        labels: config.labels(),
    };
    let first_day_row = overview.emit(&months, start, end, &mut elements);

    // Six week rows plus a spacer row.
    let detail_top = first_day_row + 7.0 * config.line_height();
    let detail = DetailGrid {
        left: canvas.left() - 0.5,
        top: detail_top,
        cell_width: canvas.width() / 7.0,
        cell_height: (canvas.bottom() - detail_top) / 4.0,
        labels: config.labels(),
        split_icons: config.split_icons(),
    };
    let last = page_days[PAGE_DAYS - 1];
    let events = expander.expand_all(rules, start, last);
    debug!(occurrences = events.len(), "events expanded");
    detail.emit(page_days, annotator, &events, &mut elements)?;

    Ok(elements)
}

/// Three short vertical lines at the top edge: the centre and 40 mm either
/// side of it.
pub fn page_markers(page: &Region) -> Vec<Element> {
    let centre = page.left() + page.width() / 2.0;
    [centre, centre - MARKER_SPREAD, centre + MARKER_SPREAD]
        .into_iter()
        .map(|x| Element::line(x, page.top(), x, page.top() + MARKER_LENGTH))
        .collect()
}

/// Lays out a full page: markers (if enabled) painted first, then the
/// calendar on the canvas.
///
/// # Errors
///
/// See [`layout`].
pub fn compose_page(
    geometry: &PageGeometry,
    start: NaiveDate,
    rules: &[EventRule],
    expander: &Expander<'_>,
    annotator: &Annotator,
    config: &LayoutConfig,
) -> Result<Page, LayoutError> {
    let _span = info_span!("page", %start).entered();
    let page = geometry.page();
    let mut elements = if geometry.markers {
        page_markers(&page)
    } else {
        Vec::new()
    };
    elements.extend(layout(
        &geometry.canvas(),
        start,
        rules,
        expander,
        annotator,
        config,
    )?);
    Ok(Page {
        start,
        width: page.width(),
        height: page.height(),
        elements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_canvas() {
        let canvas = PageGeometry::default().canvas();
        assert_abs_diff_eq!(canvas.left(), 10.0);
        assert_abs_diff_eq!(canvas.top(), 20.0);
        assert_abs_diff_eq!(canvas.width(), 277.0);
        assert_abs_diff_eq!(canvas.bottom(), 200.0);
    }

    #[test]
    fn markers_at_centre() {
        let markers = page_markers(&Region::root(297.0, 210.0));
        let xs: Vec<f64> = markers
            .iter()
            .map(|m| match m {
                Element::Line { x1, x2, y1, y2 } => {
                    assert_abs_diff_eq!(*x1, *x2);
                    assert_abs_diff_eq!(*y1, 0.0);
                    assert_abs_diff_eq!(*y2, 20.0);
                    *x1
                }
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(xs, vec![148.5, 108.5, 188.5]);
    }
}
