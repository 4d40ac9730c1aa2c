//! Event titles with an optional `{age}` placeholder.

use std::fmt::Display;

use crate::error::TemplateError;

/// A parsed event title.
///
/// `{{` and `}}` stand for literal braces; `{age}` is the only placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleTemplate {
    /// A title with no placeholder.
    Plain(String),
    /// A title split around one or more `{age}` placeholders. There is always
    /// one more segment than placeholders.
    WithAge(Vec<String>),
}

impl TitleTemplate {
    /// Parses a title template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] for unknown placeholders and unbalanced
    /// braces.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut segments = vec![String::new()];
        let mut chars = text.char_indices().peekable();
        while let Some((position, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    push_char(&mut segments, '{');
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    push_char(&mut segments, '}');
                }
                '{' => {
                    let rest = &text[position + 1..];
                    let end = rest
                        .find('}')
                        .ok_or(TemplateError::UnbalancedBrace { position })?;
                    let name = &rest[..end];
                    if name != "age" {
                        return Err(TemplateError::UnknownPlaceholder {
                            name: name.to_string(),
                        });
                    }
                    // Skip the name and the closing brace.
                    for _ in 0..=name.chars().count() {
                        chars.next();
                    }
                    segments.push(String::new());
                }
                '}' => return Err(TemplateError::UnbalancedBrace { position }),
                _ => push_char(&mut segments, c),
            }
        }
        if segments.len() == 1 {
            Ok(Self::Plain(segments.pop().unwrap_or_default()))
        } else {
            Ok(Self::WithAge(segments))
        }
    }

    /// Renders the title, substituting `age` for every placeholder.
    pub fn render(&self, age: impl Display) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::WithAge(segments) => segments.join(&age.to_string()),
        }
    }
}

fn push_char(segments: &mut [String], c: char) {
    if let Some(last) = segments.last_mut() {
        last.push(c);
    }
}
