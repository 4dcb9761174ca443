//! fanlog-core
//!
//! Fan-out logging core: one input event is observed by several sinks, and each
//! sink receives the message shape it declares, tagged with a severity.
//!
//! # Modules
//! - **domain**: value types (Severity, InputEvent, StructuredMessage, TextMessage, errors)
//! - **ports**: abstractions (`Sink`, `DynSink`, `BuildMessage`)
//! - **impls**: concrete sinks and the channel builder
//! - **app**: dispatch, Component, ComponentBuilder
//!
//! # Flow
//! `Component::process(event)` → `dispatch` walks the sinks in registration
//! order → for each sink the builder produces `S::Message` from the event →
//! `Sink::output(level, &message)`.

pub mod domain;
pub mod ports;
pub mod impls;
pub mod app;

pub use crate::app::{Component, ComponentBuilder, dispatch};
pub use crate::domain::{
    Argument, BuildError, ChannelId, DispatchError, InputEvent, PAYLOAD_CAPACITY, Severity,
    ShapeError, SinkError, SinkFailure, StructuredMessage, TextMessage,
};
pub use crate::impls::{ChannelBuilder, RecordFormat, StructuredSink, TextSink};
pub use crate::ports::{BuildMessage, DynSink, Sink};
