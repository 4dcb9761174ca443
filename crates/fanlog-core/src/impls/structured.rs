//! StructuredSink - `StructuredMessage` のレコードを任意の `io::Write` に書き出す

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::domain::{ChannelId, PAYLOAD_CAPACITY, Severity, SinkError, StructuredMessage};
use crate::ports::Sink;

/// 構造化レコードの行フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// `info: can logger: can id: 10, data: [1, 2, 3, 0, 0, 0]`
    #[default]
    Plain,
    /// `{"severity":"info","can_id":10,"data":[1,2,3,0,0,0]}`
    Json,
}

#[derive(Serialize)]
struct Record<'a> {
    severity: Severity,
    can_id: ChannelId,
    data: &'a [u64; PAYLOAD_CAPACITY],
}

/// StructuredSink はレコードごとに 1 行出力（severity, id, payload）
pub struct StructuredSink<W> {
    writer: W,
    format: RecordFormat,
}

impl<W: Write> StructuredSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_format(writer, RecordFormat::Plain)
    }

    pub fn with_format(writer: W, format: RecordFormat) -> Self {
        Self { writer, format }
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StructuredSink<io::Stdout> {
    pub fn stdout(format: RecordFormat) -> Self {
        Self::with_format(io::stdout(), format)
    }
}

impl<W: Write> Sink for StructuredSink<W> {
    type Message = StructuredMessage;
    const KIND: &'static str = "structured";

    fn output(&mut self, level: Severity, message: &StructuredMessage) -> Result<(), SinkError> {
        match self.format {
            RecordFormat::Plain => writeln!(
                self.writer,
                "{}: can logger: can id: {}, data: {:?}",
                level,
                message.identifier(),
                message.payload()
            )?,
            RecordFormat::Json => {
                let record = Record {
                    severity: level,
                    can_id: message.identifier(),
                    data: message.payload(),
                };
                let mut line = serde_json::to_vec(&record)?;
                line.push(b'\n');
                self.writer.write_all(&line)?;
            }
        }
        Ok(())
    }
}
