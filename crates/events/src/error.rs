//! Error types for the almanac-events crate.

/// Error returned when recurrence pattern text cannot be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    /// The pattern text is empty.
    #[error("empty recurrence pattern")]
    Empty,

    /// No `FREQ` part was given.
    #[error("recurrence pattern has no FREQ")]
    MissingFrequency,

    /// `FREQ` names an unsupported frequency.
    #[error("unknown frequency {value:?}")]
    UnknownFrequency {
        /// The unrecognised frequency value.
        value: String,
    },

    /// A part is not of the form `KEY=VALUE`.
    #[error("malformed pattern part {part:?} (expected KEY=VALUE)")]
    MalformedPart {
        /// The offending part.
        part: String,
    },

    /// A key is not supported.
    #[error("unsupported pattern key {key:?}")]
    UnknownKey {
        /// The unsupported key.
        key: String,
    },

    /// The same key appears twice.
    #[error("duplicate pattern key {key:?}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// A value cannot be parsed or is out of range for its key.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue {
        /// The key whose value is invalid.
        key: &'static str,
        /// The rejected value.
        value: String,
    },

    /// `COUNT` and `UNTIL` were both given.
    #[error("COUNT and UNTIL are mutually exclusive")]
    CountWithUntil,

    /// A `BYDAY` ordinal was used with a frequency that does not allow it.
    #[error("BYDAY ordinal {value:?} is only allowed with MONTHLY or YEARLY")]
    OrdinalNotAllowed {
        /// The offending `BYDAY` entry.
        value: String,
    },
}

/// Error returned when a title template is malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateError {
    /// A `{name}` placeholder other than `{age}` was used.
    #[error("unknown placeholder {{{name}}}")]
    UnknownPlaceholder {
        /// Placeholder name between the braces.
        name: String,
    },

    /// A brace is not closed or not escaped.
    #[error("unbalanced brace at byte {position}")]
    UnbalancedBrace {
        /// Byte offset of the brace.
        position: usize,
    },
}

/// Error returned when an event definition file cannot be parsed.
///
/// Every variant carries the 1-based line number of the offending line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The line does not split into `title ; kind ; fields`.
    #[error("line {line}: expected `title ; kind ; fields`, found {found} field(s)")]
    FieldCount {
        /// Line number.
        line: usize,
        /// Number of fields found.
        found: usize,
    },

    /// A kind-specific field is missing.
    #[error("line {line}: missing {field}")]
    MissingField {
        /// Line number.
        line: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// The kind token is not recognised.
    #[error("line {line}: unknown event kind {kind:?}")]
    UnknownKind {
        /// Line number.
        line: usize,
        /// The unrecognised kind token.
        kind: String,
    },

    /// The start date is not an ISO calendar date.
    #[error("line {line}: invalid date {value:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// Line number.
        line: usize,
        /// The rejected date text.
        value: String,
    },

    /// The recurrence pattern cannot be parsed.
    #[error("line {line}: {source}")]
    InvalidPattern {
        /// Line number.
        line: usize,
        /// Underlying pattern error.
        source: PatternError,
    },

    /// The title template cannot be parsed.
    #[error("line {line}: invalid title: {source}")]
    InvalidTemplate {
        /// Line number.
        line: usize,
        /// Underlying template error.
        source: TemplateError,
    },
}

impl ParseError {
    /// Returns the 1-based line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::FieldCount { line, .. }
            | Self::MissingField { line, .. }
            | Self::UnknownKind { line, .. }
            | Self::InvalidDate { line, .. }
            | Self::InvalidPattern { line, .. }
            | Self::InvalidTemplate { line, .. } => *line,
        }
    }
}
