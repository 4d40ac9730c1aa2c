//! Layout configuration.

use crate::error::LayoutError;
use crate::labels::Labels;

/// Largest number of month columns in the overview.
pub const MAX_MONTHS: usize = 12;

/// Columns reserved per month: seven days plus a gap.
pub const COLUMNS_PER_MONTH: usize = 8;

/// How many months the overview shows and how wide a day column is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonthFit {
    /// Exactly this many months, stretched to the canvas width.
    Fixed(usize),
    /// As many whole months as fit at this day column width (mm).
    Fit { day_width: f64 },
}

impl Default for MonthFit {
    fn default() -> Self {
        MonthFit::Fixed(7)
    }
}

impl MonthFit {
    /// Resolves to `(months, day_width)` for a canvas `width` mm wide.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the fixed count is outside `1..=12`, the
    /// day width is not positive, or no whole month fits.
    pub fn resolve(&self, width: f64) -> Result<(usize, f64), LayoutError> {
        match *self {
            MonthFit::Fixed(months) => {
                if months == 0 || months > MAX_MONTHS {
                    return Err(LayoutError::InvalidMonthCount {
                        months,
                        max: MAX_MONTHS,
                    });
                }
                let columns = (months * COLUMNS_PER_MONTH) as f64;
                // The trailing gap of the last month is given back to the days.
                let gap = width / columns;
                Ok((months, (width + gap) / columns))
            }
            MonthFit::Fit { day_width } => {
                if !day_width.is_finite() || day_width <= 0.0 {
                    return Err(LayoutError::InvalidDayWidth { day_width });
                }
                let month_width = COLUMNS_PER_MONTH as f64 * day_width;
                let mut months = 0;
                while months < MAX_MONTHS && (months + 1) as f64 * month_width <= width + 1e-9 {
                    months += 1;
                }
                if months == 0 {
                    return Err(LayoutError::CanvasTooNarrow { width, day_width });
                }
                Ok((months, day_width))
            }
        }
    }
}

/// Configuration for [`layout`](crate::layout).
///
/// # Example
///
/// ```
/// use almanac_layout::{LayoutConfig, MonthFit};
///
/// let config = LayoutConfig::new()
///     .with_fit(MonthFit::Fit { day_width: 5.0 })
///     .with_split_icons(false);
/// assert_eq!(config.fit().resolve(120.0).unwrap(), (3, 5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    fit: MonthFit,
    split_icons: bool,
    labels: Labels,
    line_height: f64,
}

impl LayoutConfig {
    /// Defaults: seven fixed months, icon splitting on, English labels and
    /// a 4 mm overview line height.
    pub fn new() -> Self {
        Self {
            fit: MonthFit::default(),
            split_icons: true,
            labels: Labels::default(),
            line_height: 4.0,
        }
    }

    pub fn with_fit(mut self, fit: MonthFit) -> Self {
        self.fit = fit;
        self
    }

    /// Draws a leading one-character icon of an event separately from its
    /// text.
    pub fn with_split_icons(mut self, split_icons: bool) -> Self {
        self.split_icons = split_icons;
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn fit(&self) -> &MonthFit {
        &self.fit
    }

    pub fn split_icons(&self) -> bool {
        self.split_icons
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Row height of the month overview in millimetres.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fixed_stretches_days() {
        let (months, w) = MonthFit::Fixed(7).resolve(277.0).unwrap();
        assert_eq!(months, 7);
        let gap = 277.0 / 56.0;
        assert_abs_diff_eq!(w, (277.0 + gap) / 56.0, epsilon = 1e-12);
        // The right-aligned Sunday column of the last month ends at the canvas edge.
        let last_sunday = (6 * COLUMNS_PER_MONTH + 7) as f64 * w;
        assert!(last_sunday <= 277.0);
        assert!(277.0 - last_sunday < 0.1);
    }

    #[test]
    fn fit_counts_whole_months() {
        let fit = MonthFit::Fit { day_width: 5.0 };
        assert_eq!(fit.resolve(120.0).unwrap(), (3, 5.0));
        assert_eq!(fit.resolve(116.0).unwrap(), (2, 5.0));
        assert_eq!(fit.resolve(10_000.0).unwrap(), (MAX_MONTHS, 5.0));
    }

    #[test]
    fn fit_rejects_narrow_canvas() {
        assert_eq!(
            MonthFit::Fit { day_width: 5.0 }.resolve(39.0),
            Err(LayoutError::CanvasTooNarrow {
                width: 39.0,
                day_width: 5.0
            })
        );
    }

    #[test]
    fn invalid_settings() {
        assert!(matches!(
            MonthFit::Fixed(0).resolve(100.0),
            Err(LayoutError::InvalidMonthCount { months: 0, .. })
        ));
        assert!(matches!(
            MonthFit::Fixed(13).resolve(100.0),
            Err(LayoutError::InvalidMonthCount { months: 13, .. })
        ));
        assert!(matches!(
            MonthFit::Fit { day_width: 0.0 }.resolve(100.0),
            Err(LayoutError::InvalidDayWidth { .. })
        ));
    }

    #[test]
    fn builder_chaining() {
        let config = LayoutConfig::new()
            .with_fit(MonthFit::Fixed(3))
            .with_split_icons(false);
        assert_eq!(config.fit(), &MonthFit::Fixed(3));
        assert!(!config.split_icons());
        assert_eq!(config.labels().month(3), "March");
        assert_abs_diff_eq!(config.line_height(), 4.0);
    }
}
