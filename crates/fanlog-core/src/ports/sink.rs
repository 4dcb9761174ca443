//! Sink port - 出力先とそのオブジェクト安全版
//!
//! # 2 層構造
//! - **Typed**: 関連型 `Message` を持つ `Sink`。sink には自分の形状のメッセージしか
//!   渡らない
//! - **Dyn**: `DynSink<B, E>`。builder `B` が `E` から形状を構築できる `Sink` すべてに
//!   実装される。dispatcher が保持するのはこちら

use crate::domain::{Severity, SinkError};

use super::builder::BuildMessage;

/// Sink は 1 つのメッセージ形状を受け付ける出力先
///
/// # 使用例
/// ```ignore
/// struct ConsoleSink;
///
/// impl Sink for ConsoleSink {
///     type Message = TextMessage;
///     const KIND: &'static str = "console";
///
///     fn output(&mut self, level: Severity, message: &TextMessage) -> Result<(), SinkError> {
///         println!("{level}: {message}");
///         Ok(())
///     }
/// }
/// ```
pub trait Sink {
    /// この sink が受け付ける唯一のメッセージ形状
    type Message;

    /// ログ、エラー、`ComponentBuilder::expect_kinds` で使う短い名前
    const KIND: &'static str;

    fn output(&mut self, level: Severity, message: &Self::Message) -> Result<(), SinkError>;
}

/// DynSink は builder `B` と組にした `Sink` のオブジェクト安全版
///
/// 下の blanket impl は `B: BuildMessage<S::Message, E>` を要求するため、
/// builder が扱えない sink との組み合わせは dispatch 時の失敗ではなく
/// コンパイルエラーになる
pub trait DynSink<B: ?Sized, E: ?Sized> {
    fn kind(&self) -> &'static str;

    /// `event` からこの sink のメッセージを構築し、`level` で出力
    fn deliver(&mut self, level: Severity, event: &E, builder: &B) -> Result<(), SinkError>;
}

impl<S, B, E> DynSink<B, E> for S
where
    S: Sink,
    B: BuildMessage<S::Message, E> + ?Sized,
    E: ?Sized,
{
    fn kind(&self) -> &'static str {
        S::KIND
    }

    fn deliver(&mut self, level: Severity, event: &E, builder: &B) -> Result<(), SinkError> {
        let message = builder.build(event);
        self.output(level, &message)
    }
}
