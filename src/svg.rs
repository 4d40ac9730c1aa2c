//! SVG serialisation of laid out pages.

use std::fmt::{self, Write};

use almanac_layout::{Anchor, Element, Page};

const FONT_FAMILY: &str = "Open Sans Condensed";
const STROKE_WIDTH: &str = "0.3";

/// Renders `page` as a standalone SVG document in millimetre units.
pub fn render(page: &Page) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_document(&mut out, page)?;
    Ok(out)
}

/// Writes the SVG document of `page` to `out`.
pub fn write_document(out: &mut impl Write, page: &Page) -> fmt::Result {
    writeln!(
        out,
        r#"<svg version="1.1" baseProfile="full" width="{}mm" height="{}mm" xmlns="http://www.w3.org/2000/svg">"#,
        mm(page.width),
        mm(page.height)
    )?;
    writeln!(out, r#"  <rect width="100%" height="100%" fill="white" />"#)?;
    for element in &page.elements {
        out.write_str("  ")?;
        write_element(out, element)?;
        out.write_char('\n')?;
    }
    writeln!(out, "</svg>")
}

fn write_element(out: &mut impl Write, element: &Element) -> fmt::Result {
    match element {
        Element::Text {
            x,
            y,
            content,
            font_size,
            anchor,
        } => {
            let anchor = match anchor {
                Anchor::Start => String::new(),
                other => format!(r#" text-anchor="{}""#, other.as_str()),
            };
            write!(
                out,
                r#"<text x="{}mm" y="{}mm" font-size="{}mm" font-family="{FONT_FAMILY}"{anchor}>{}</text>"#,
                mm(*x),
                mm(*y),
                mm(*font_size),
                escape(content)
            )
        }
        Element::Rect {
            x,
            y,
            width,
            height,
        } => write!(
            out,
            r#"<rect x="{}mm" y="{}mm" width="{}mm" height="{}mm" stroke="black" stroke-width="{STROKE_WIDTH}" fill="white" />"#,
            mm(*x),
            mm(*y),
            mm(*width),
            mm(*height)
        ),
        Element::Line { x1, y1, x2, y2 } => write!(
            out,
            r#"<line x1="{}mm" y1="{}mm" x2="{}mm" y2="{}mm" stroke="black" stroke-width="{STROKE_WIDTH}" />"#,
            mm(*x1),
            mm(*y1),
            mm(*x2),
            mm(*y2)
        ),
    }
}

/// Formats a length with at most three decimals and no trailing zeros.
fn mm(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
