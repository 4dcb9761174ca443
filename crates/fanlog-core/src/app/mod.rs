//! App - dispatch とそれを持つ component
//!
//! # 主要コンポーネント
//! - **dispatch**: 登録順に sink ごとにメッセージを 1 つ
//! - **Component**: sink を借用し builder を所有、`process` を公開
//! - **ComponentBuilder**: Fail-fast 検証付きのワイヤリング

pub mod dispatch;
pub mod component;
pub mod builder;

pub use self::dispatch::dispatch;
pub use self::component::Component;
pub use self::builder::ComponentBuilder;
