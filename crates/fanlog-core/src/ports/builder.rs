//! BuildMessage port - event からメッセージ形状への構築ルール

/// 構築ルール 1 つ: event `E` をメッセージ形状 `M` に変換
///
/// builder 型はサポートする形状ごとに 1 回ずつ実装する。dispatcher は sink の
/// `Sink::Message` からルールを選ぶので、新しい形状の sink を足すときは impl を
/// 1 つ追加するだけで dispatcher は変わらない。
///
/// # 契約
/// - 純粋かつ全域: 検証なし、失敗なし、同じ event → 同じメッセージ
/// - event のフィールド順はメッセージでも保たれる
pub trait BuildMessage<M, E: ?Sized> {
    fn build(&self, event: &E) -> M;
}
