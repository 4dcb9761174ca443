//! Domain model (severity, input event, message shapes, errors).

pub mod severity;
pub mod event;
pub mod message;
pub mod errors;

pub use self::severity::Severity;
pub use self::event::InputEvent;
pub use self::message::{Argument, ChannelId, PAYLOAD_CAPACITY, StructuredMessage, TextMessage};
pub use self::errors::{BuildError, DispatchError, ShapeError, SinkError, SinkFailure};
