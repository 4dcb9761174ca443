//! Impls - 具体的な sink と builder
//!
//! # 含まれる実装
//! - **StructuredSink**: 固定形状のレコード（プレーン行または JSON 行）
//! - **TextSink**: テンプレートを描画した行
//! - **ChannelBuilder**: `InputEvent` から両方の形状を構築

pub mod structured;
pub mod text;
pub mod channel;

pub use self::structured::{RecordFormat, StructuredSink};
pub use self::text::TextSink;
pub use self::channel::ChannelBuilder;
