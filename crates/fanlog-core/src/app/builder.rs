//! ComponentBuilder - Component のワイヤリング
//!
//! # Fail-fast 設計
//! - builder が構築できない形状の sink はコンパイルが通らない
//! - `build()` は sink が空なら拒否
//! - `build()` は `expect_kinds()` の kind が欠けていれば拒否

use log::trace;

use crate::domain::{BuildError, InputEvent, Severity};
use crate::ports::DynSink;

use super::component::Component;

/// ComponentBuilder は Component の builder, severity, sink を集める
///
/// # 使用例
/// ```ignore
/// let component = ComponentBuilder::new(ChannelBuilder::default())
///     .severity(Severity::Warning)
///     .sink(&mut structured)
///     .sink(&mut text)
///     .expect_kinds(&["structured", "text"])
///     .build()?;
/// ```
pub struct ComponentBuilder<'a, B, E: ?Sized = InputEvent> {
    builder: B,
    severity: Severity,
    sinks: Vec<&'a mut (dyn DynSink<B, E> + 'a)>,
    expected_kinds: Option<Vec<String>>,
}

impl<'a, B, E: ?Sized> ComponentBuilder<'a, B, E> {
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            severity: Severity::default(),
            sinks: Vec::new(),
            expected_kinds: None,
        }
    }

    /// `Component::process` で使う severity（デフォルトは `Severity::Info`）
    pub fn severity(mut self, level: Severity) -> Self {
        self.severity = level;
        self
    }

    /// sink を登録。登録順がそのまま配送順
    ///
    /// sink のメッセージ形状に対応するルールが builder に必要:
    ///
    /// ```compile_fail
    /// use fanlog_core::{ChannelBuilder, ComponentBuilder, Severity, Sink, SinkError};
    ///
    /// struct ByteSink;
    ///
    /// impl Sink for ByteSink {
    ///     type Message = u8;
    ///     const KIND: &'static str = "byte";
    ///
    ///     fn output(&mut self, _level: Severity, _message: &u8) -> Result<(), SinkError> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut sink = ByteSink;
    /// let _ = ComponentBuilder::new(ChannelBuilder::default()).sink(&mut sink);
    /// ```
    pub fn sink<S>(mut self, sink: &'a mut S) -> Self
    where
        S: DynSink<B, E> + 'a,
    {
        self.sinks.push(sink);
        self
    }

    /// 型消去済みの sink を登録（設定から選んだ sink など）
    pub fn sink_dyn(mut self, sink: &'a mut (dyn DynSink<B, E> + 'a)) -> Self {
        self.sinks.push(sink);
        self
    }

    /// `build()` 時に存在すべき sink の kind を設定
    pub fn expect_kinds(mut self, kinds: &[&str]) -> Self {
        self.expected_kinds = Some(kinds.iter().map(|kind| kind.to_string()).collect());
        self
    }

    /// 登録されていない期待 kind（`expect_kinds()` の順）
    fn unregistered_kinds(&self) -> Vec<String> {
        let Some(expected) = &self.expected_kinds else {
            return Vec::new();
        };
        expected
            .iter()
            .filter(|kind| !self.sinks.iter().any(|sink| sink.kind() == kind.as_str()))
            .cloned()
            .collect()
    }

    pub fn build(self) -> Result<Component<'a, B, E>, BuildError> {
        if self.sinks.is_empty() {
            return Err(BuildError::NoSinks);
        }
        let unregistered = self.unregistered_kinds();
        if !unregistered.is_empty() {
            return Err(BuildError::MissingSinkKinds(unregistered));
        }

        let component = Component::from_parts(
            self.builder,
            self.severity,
            self.sinks.into_boxed_slice(),
        );
        trace!(
            "component built: severity={} sinks={:?}",
            component.severity(),
            component.sink_kinds()
        );
        Ok(component)
    }
}
