//! Component - `process(event)` のエントリポイント

use crate::domain::{DispatchError, InputEvent, Severity};
use crate::ports::DynSink;

use super::builder::ComponentBuilder;
use super::dispatch::dispatch;

/// Component は builder を所有し、順序固定の sink 集合を借用する
///
/// sink は `&'a mut` の借用なので、component が生成・破棄することはない。
/// sink は component より長く生きる必要があり、同じ sink を生きている 2 つの
/// component に同時に登録することはできない。
///
/// # 使用例
/// ```
/// use fanlog_core::{ChannelBuilder, Component, InputEvent, StructuredSink, TextSink};
///
/// let mut records = StructuredSink::new(Vec::new());
/// let mut lines = TextSink::new(Vec::new());
///
/// let mut component = Component::builder(ChannelBuilder::default())
///     .sink(&mut records)
///     .sink(&mut lines)
///     .build()
///     .unwrap();
/// component.process(&InputEvent::new(1, 2, 3)).unwrap();
/// drop(component);
///
/// assert_eq!(
///     String::from_utf8(lines.into_inner()).unwrap(),
///     "info: file logger: input data: length: 1, width: 2, height: 3\n"
/// );
/// ```
pub struct Component<'a, B, E: ?Sized = InputEvent> {
    builder: B,
    severity: Severity,
    sinks: Box<[&'a mut (dyn DynSink<B, E> + 'a)]>,
}

impl<'a, B, E: ?Sized> Component<'a, B, E> {
    pub fn builder(builder: B) -> ComponentBuilder<'a, B, E> {
        ComponentBuilder::new(builder)
    }

    pub(crate) fn from_parts(
        builder: B,
        severity: Severity,
        sinks: Box<[&'a mut (dyn DynSink<B, E> + 'a)]>,
    ) -> Self {
        Self {
            builder,
            severity,
            sinks,
        }
    }

    /// component の severity で `event` を全 sink に配送
    pub fn process(&mut self, event: &E) -> Result<(), DispatchError> {
        self.process_at(self.severity, event)
    }

    /// この呼び出しに限り `level` で `event` を全 sink に配送
    pub fn process_at(&mut self, level: Severity, event: &E) -> Result<(), DispatchError> {
        dispatch(level, event, &self.builder, &mut self.sinks)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message_builder(&self) -> &B {
        &self.builder
    }

    /// 登録済み sink の kind（登録順）
    pub fn sink_kinds(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|sink| sink.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}
