//! TextSink - 描画した `TextMessage` を任意の `io::Write` に書き出す

use std::io::{self, Write};

use crate::domain::{Severity, SinkError, TextMessage};
use crate::ports::Sink;

/// TextSink は `"{severity}: file logger: {描画済みテンプレート}"` を出力
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Sink for TextSink<W> {
    type Message = TextMessage;
    const KIND: &'static str = "text";

    fn output(&mut self, level: Severity, message: &TextMessage) -> Result<(), SinkError> {
        writeln!(self.writer, "{level}: file logger: {message}")?;
        Ok(())
    }
}
