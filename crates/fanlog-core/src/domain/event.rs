/// The observed input: three unsigned magnitudes.
///
/// Passed by reference to every per-sink construction of one dispatch;
/// nothing in the core mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEvent {
    pub length: u64,
    pub width: u64,
    pub height: u64,
}

impl InputEvent {
    pub const fn new(length: u64, width: u64, height: u64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}
