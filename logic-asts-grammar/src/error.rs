use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// The grammar rejected the input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at {line}:{column}: {message}")]
pub struct SyntaxError {
    /// Byte range of the offending input.
    pub span: Range<usize>,
    /// 1-based line of the start of `span`.
    pub line: usize,
    /// 1-based column (in characters) of the start of `span`.
    pub column: usize,
    pub message: String,
}

impl SyntaxError {
    /// Build an error located at `span` within `source`.
    pub fn new(source: &str, span: Range<usize>, message: impl Into<String>) -> Self {
        let offset = span.start.min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |tail| tail.chars().count())
            + 1;
        Self {
            span,
            line,
            column,
            message: message.into(),
        }
    }

    /// Render a plain-text diagnostic pointing into `source`.
    pub fn report(&self, source: &str) -> String {
        let mut buf = Vec::new();
        let _ = Report::build(ReportKind::Error, self.span.clone())
            .with_config(Config::default().with_color(false))
            .with_message(&self.message)
            .with_label(Label::new(self.span.clone()).with_message("the error occurred here"))
            .finish()
            .write(Source::from(source), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
