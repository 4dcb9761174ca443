use log::{debug, warn};

use crate::domain::{DispatchError, Severity, SinkFailure};
use crate::ports::DynSink;

/// スライス順に sink ごとにメッセージを 1 つ構築して配送
///
/// すべての sink は同じ `level` と、同じ `event` から作られたメッセージを受け取る。
/// 各 sink の呼び出しが返ってから次の sink を呼ぶ。
///
/// # 失敗ポリシー（best-effort）
/// - 失敗した sink はログに出して記録し、残りの sink は続行
/// - 1 つでも失敗すれば `Err`
pub fn dispatch<B, E>(
    level: Severity,
    event: &E,
    builder: &B,
    sinks: &mut [&mut (dyn DynSink<B, E> + '_)],
) -> Result<(), DispatchError>
where
    B: ?Sized,
    E: ?Sized,
{
    let mut failures = Vec::new();

    for (position, sink) in sinks.iter_mut().enumerate() {
        let kind = sink.kind();
        match sink.deliver(level, event, builder) {
            Ok(()) => debug!("delivered {level} message to sink #{position} ({kind})"),
            Err(source) => {
                warn!("sink #{position} ({kind}) failed: {source}");
                failures.push(SinkFailure {
                    position,
                    kind,
                    source,
                });
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(DispatchError {
            attempted: sinks.len(),
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io;

    use super::*;
    use crate::domain::{InputEvent, SinkError, StructuredMessage, TextMessage};
    use crate::impls::ChannelBuilder;
    use crate::ports::Sink;

    type Journal = RefCell<Vec<String>>;

    /// 呼び出しを他の sink と共有する journal に記録
    struct Recorder<'j, M> {
        name: &'static str,
        journal: &'j Journal,
        fail: bool,
        _shape: std::marker::PhantomData<M>,
    }

    impl<'j, M> Recorder<'j, M> {
        fn new(name: &'static str, journal: &'j Journal) -> Self {
            Self {
                name,
                journal,
                fail: false,
                _shape: std::marker::PhantomData,
            }
        }

        fn failing(name: &'static str, journal: &'j Journal) -> Self {
            Self {
                fail: true,
                ..Self::new(name, journal)
            }
        }
    }

    impl Sink for Recorder<'_, StructuredMessage> {
        type Message = StructuredMessage;
        const KIND: &'static str = "recorder-structured";

        fn output(&mut self, level: Severity, message: &StructuredMessage) -> Result<(), SinkError> {
            self.journal.borrow_mut().push(format!(
                "{} {level} {} {:?}",
                self.name,
                message.identifier(),
                message.payload()
            ));
            if self.fail {
                return Err(io::Error::other("unplugged").into());
            }
            Ok(())
        }
    }

    impl Sink for Recorder<'_, TextMessage> {
        type Message = TextMessage;
        const KIND: &'static str = "recorder-text";

        fn output(&mut self, level: Severity, message: &TextMessage) -> Result<(), SinkError> {
            self.journal
                .borrow_mut()
                .push(format!("{} {level} {message}", self.name));
            if self.fail {
                return Err(io::Error::other("unplugged").into());
            }
            Ok(())
        }
    }

    #[test]
    fn sinks_run_in_slice_order_with_one_level() {
        let journal = Journal::default();
        let mut a = Recorder::<TextMessage>::new("a", &journal);
        let mut b = Recorder::<StructuredMessage>::new("b", &journal);
        let mut c = Recorder::<TextMessage>::new("c", &journal);

        let mut sinks: [&mut dyn DynSink<ChannelBuilder, InputEvent>; 3] = [&mut a, &mut b, &mut c];
        dispatch(
            Severity::Warning,
            &InputEvent::new(1, 2, 3),
            &ChannelBuilder::default(),
            &mut sinks,
        )
        .unwrap();

        assert_eq!(
            *journal.borrow(),
            vec![
                "a warning input data: length: 1, width: 2, height: 3",
                "b warning 10 [1, 2, 3, 0, 0, 0]",
                "c warning input data: length: 1, width: 2, height: 3",
            ]
        );
    }

    #[test]
    fn failing_sink_does_not_stop_later_sinks() {
        let journal = Journal::default();
        let mut a = Recorder::<StructuredMessage>::failing("a", &journal);
        let mut b = Recorder::<TextMessage>::new("b", &journal);
        let mut c = Recorder::<TextMessage>::failing("c", &journal);

        let mut sinks: [&mut dyn DynSink<ChannelBuilder, InputEvent>; 3] = [&mut a, &mut b, &mut c];
        let err = dispatch(
            Severity::Error,
            &InputEvent::default(),
            &ChannelBuilder::default(),
            &mut sinks,
        )
        .unwrap_err();

        assert_eq!(journal.borrow().len(), 3);
        assert_eq!(err.attempted, 3);
        let positions: Vec<usize> = err.failures.iter().map(|f| f.position).collect();
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(err.failures[0].kind, "recorder-structured");
        assert_eq!(err.to_string(), "2 of 3 sinks failed");
    }

    #[test]
    fn empty_sink_list_is_a_no_op() {
        let mut sinks: [&mut dyn DynSink<ChannelBuilder, InputEvent>; 0] = [];
        assert!(
            dispatch(
                Severity::Info,
                &InputEvent::default(),
                &ChannelBuilder::default(),
                &mut sinks
            )
            .is_ok()
        );
    }
}
