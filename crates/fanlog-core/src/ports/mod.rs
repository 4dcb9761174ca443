//! Ports - dispatcher と協調者の間の抽象化層
//!
//! - **Sink**: 受け付けるメッセージ形状がちょうど 1 つの出力先
//! - **DynSink**: builder と組にした Sink のオブジェクト安全版。型の違う sink を
//!   1 つの順序付きコレクションに並べられる
//! - **BuildMessage**: 構築ルール 1 つ（event → メッセージ形状）

pub mod sink;
pub mod builder;

pub use self::sink::{DynSink, Sink};
pub use self::builder::BuildMessage;
