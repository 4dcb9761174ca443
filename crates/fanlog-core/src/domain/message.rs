//! Message shapes accepted by sinks.
//!
//! Each sink declares exactly one of these as its `Sink::Message`:
//! - **StructuredMessage**: channel identifier + fixed-capacity numeric payload
//! - **TextMessage**: `{}` template + ordered argument list
//!
//! Both shapes check their invariants when they are built. The static
//! constructors (`StructuredMessage::from_array`, `text_message!`) reject a bad
//! shape at compile time; the slice/`Vec` constructors return `ShapeError`.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::ShapeError;

/// Number of payload slots in a `StructuredMessage`.
pub const PAYLOAD_CAPACITY: usize = 6;

/// Identifier of a structured channel (the CAN id of a bus frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(i32);

impl ChannelId {
    /// Channel used when nothing else is configured.
    pub const DEFAULT: ChannelId = ChannelId(10);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Default for ChannelId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for ChannelId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-shape record: identifier plus `PAYLOAD_CAPACITY` unsigned slots.
///
/// Unused slots are zero-filled, never omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredMessage {
    identifier: ChannelId,
    payload: [u64; PAYLOAD_CAPACITY],
}

impl StructuredMessage {
    /// Build from a fixed-size array; `N > PAYLOAD_CAPACITY` does not compile.
    ///
    /// ```
    /// use fanlog_core::{ChannelId, StructuredMessage};
    ///
    /// let msg = StructuredMessage::from_array(ChannelId::DEFAULT, [1, 2, 3]);
    /// assert_eq!(msg.payload(), &[1, 2, 3, 0, 0, 0]);
    /// ```
    ///
    /// ```compile_fail
    /// use fanlog_core::{ChannelId, StructuredMessage};
    ///
    /// let _ = StructuredMessage::from_array(ChannelId::DEFAULT, [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn from_array<const N: usize>(identifier: ChannelId, values: [u64; N]) -> Self {
        const {
            assert!(N <= PAYLOAD_CAPACITY, "payload exceeds PAYLOAD_CAPACITY");
        }
        let mut payload = [0; PAYLOAD_CAPACITY];
        payload[..N].copy_from_slice(&values);
        Self {
            identifier,
            payload,
        }
    }

    /// Build from a slice of any length up to `PAYLOAD_CAPACITY`.
    pub fn from_slice(identifier: ChannelId, values: &[u64]) -> Result<Self, ShapeError> {
        if values.len() > PAYLOAD_CAPACITY {
            return Err(ShapeError::PayloadOverflow {
                capacity: PAYLOAD_CAPACITY,
                found: values.len(),
            });
        }
        let mut payload = [0; PAYLOAD_CAPACITY];
        payload[..values.len()].copy_from_slice(values);
        Ok(Self {
            identifier,
            payload,
        })
    }

    pub fn identifier(&self) -> ChannelId {
        self.identifier
    }

    pub fn payload(&self) -> &[u64; PAYLOAD_CAPACITY] {
        &self.payload
    }
}

/// One positional value of a `TextMessage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Unsigned(u64),
    Signed(i64),
    Text(Cow<'static, str>),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Unsigned(v) => write!(f, "{v}"),
            Argument::Signed(v) => write!(f, "{v}"),
            Argument::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Argument {
    fn from(value: u64) -> Self {
        Argument::Unsigned(value)
    }
}

impl From<u32> for Argument {
    fn from(value: u32) -> Self {
        Argument::Unsigned(u64::from(value))
    }
}

impl From<usize> for Argument {
    fn from(value: usize) -> Self {
        Argument::Unsigned(value as u64)
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Signed(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Argument::Signed(i64::from(value))
    }
}

impl From<&'static str> for Argument {
    fn from(value: &'static str) -> Self {
        Argument::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Text(Cow::Owned(value))
    }
}

/// Scan a template: `Ok(placeholder count)` or `Err(byte offset)` of the
/// first brace that is neither `{}`, `{{` nor `}}`.
const fn scan_template(template: &str) -> Result<usize, usize> {
    let bytes = template.as_bytes();
    let mut i = 0;
    let mut count = 0;
    while i < bytes.len() {
        let next = if i + 1 < bytes.len() { bytes[i + 1] } else { 0 };
        match bytes[i] {
            b'{' if next == b'{' => i += 2,
            b'{' if next == b'}' => {
                count += 1;
                i += 2;
            }
            b'}' if next == b'}' => i += 2,
            b'{' | b'}' => return Err(i),
            _ => i += 1,
        }
    }
    Ok(count)
}

/// Number of `{}` placeholders in `template`.
///
/// Panics on a malformed template; in a const context that panic is a
/// compile error, which is how `text_message!` uses it.
pub const fn placeholder_count(template: &str) -> usize {
    match scan_template(template) {
        Ok(count) => count,
        Err(_) => panic!("malformed template: stray brace"),
    }
}

/// Template with positional `{}` placeholders and exactly as many arguments.
///
/// Build it with [`text_message!`](crate::text_message) when the template is a
/// literal (arity checked at compile time), or with [`TextMessage::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    template: &'static str,
    arguments: Vec<Argument>,
}

impl TextMessage {
    pub fn new(template: &'static str, arguments: Vec<Argument>) -> Result<Self, ShapeError> {
        let expected = scan_template(template)
            .map_err(|offset| ShapeError::MalformedTemplate { template, offset })?;
        if expected != arguments.len() {
            return Err(ShapeError::ArityMismatch {
                expected,
                found: arguments.len(),
            });
        }
        Ok(Self {
            template,
            arguments,
        })
    }

    /// Constructor behind `text_message!`.
    ///
    /// The macro sizes `arguments` from the template at compile time; called
    /// directly with a mismatched array this panics instead of building a
    /// message that cannot render.
    #[doc(hidden)]
    pub fn from_checked<const N: usize>(template: &'static str, arguments: [Argument; N]) -> Self {
        assert!(
            matches!(scan_template(template), Ok(count) if count == N),
            "template {template:?} does not take {N} arguments"
        );
        Self {
            template,
            arguments: Vec::from(arguments),
        }
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Template with each `{}` replaced by the next argument.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TextMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arguments = self.arguments.iter();
        let mut rest = self.template;
        while let Some(pos) = rest.find(['{', '}']) {
            f.write_str(&rest[..pos])?;
            let tail = &rest[pos..];
            if tail.starts_with("{{") {
                f.write_str("{")?;
            } else if tail.starts_with("}}") {
                f.write_str("}")?;
            } else if tail.starts_with("{}") {
                // both constructors check arity, so a missing argument is a bug
                let arg = arguments.next().ok_or(fmt::Error)?;
                write!(f, "{arg}")?;
            } else {
                return f.write_str(tail);
            }
            rest = &tail[2..];
        }
        f.write_str(rest)
    }
}

/// Build a [`TextMessage`] from a literal template, checking at compile time
/// that the number of arguments matches the number of `{}` placeholders.
///
/// ```
/// use fanlog_core::text_message;
///
/// let msg = text_message!("{} of {}", 1u64, 2u64);
/// assert_eq!(msg.render(), "1 of 2");
/// ```
///
/// ```compile_fail
/// use fanlog_core::text_message;
///
/// let _ = text_message!("{} of {}", 1u64);
/// ```
#[macro_export]
macro_rules! text_message {
    ($template:literal $(, $arg:expr)* $(,)?) => {{
        const ARITY: usize = $crate::domain::message::placeholder_count($template);
        let arguments: [$crate::domain::Argument; ARITY] =
            [$($crate::domain::Argument::from($arg)),*];
        $crate::domain::TextMessage::from_checked($template, arguments)
    }};
}
