//! Positioned drawing primitives, the only output of the layout.

use serde::Serialize;

/// Horizontal alignment of a text element relative to its `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// One positioned shape. Coordinates and sizes are millimetres from the
/// page's top-left corner.
///
/// Sequence order is paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    /// Text whose baseline starts (or centres, or ends) at `(x, y)`.
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        anchor: Anchor,
    },
    /// Outlined rectangle.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Straight line segment.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Element {
    /// Start-anchored text.
    pub fn text(x: f64, y: f64, content: impl Into<String>, font_size: f64) -> Self {
        Self::anchored_text(x, y, content, font_size, Anchor::Start)
    }

    pub fn anchored_text(
        x: f64,
        y: f64,
        content: impl Into<String>,
        font_size: f64,
        anchor: Anchor,
    ) -> Self {
        Self::Text {
            x,
            y,
            content: content.into(),
            font_size,
            anchor,
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Line { x1, y1, x2, y2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_defaults_to_start_anchor() {
        let e = Element::text(1.0, 2.0, "x", 3.0);
        assert!(matches!(
            e,
            Element::Text {
                anchor: Anchor::Start,
                ..
            }
        ));
        assert!(matches!(e, Element::Text { ref content, .. } if content == "x"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Element::line(0.0, 0.0, 0.0, 20.0)).unwrap();
        assert_eq!(json["kind"], "line");
        assert_eq!(json["y2"], 20.0);

        let json =
            serde_json::to_value(Element::anchored_text(0.0, 0.0, "5", 3.0, Anchor::End))
                .unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["anchor"], "end");
    }
}
