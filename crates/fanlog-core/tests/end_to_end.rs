use std::cell::RefCell;

use fanlog_core::{
    ChannelBuilder, ChannelId, Component, InputEvent, Severity, Sink, SinkError, StructuredMessage,
    StructuredSink, TextMessage, TextSink,
};
use rstest::rstest;

/// One observed sink call: severity plus the fields the sink was driven with.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Structured(Severity, i32, Vec<u64>),
    Text(Severity, String),
}

struct StructuredSpy<'j>(&'j RefCell<Vec<Call>>);

impl Sink for StructuredSpy<'_> {
    type Message = StructuredMessage;
    const KIND: &'static str = "structured-spy";

    fn output(&mut self, level: Severity, message: &StructuredMessage) -> Result<(), SinkError> {
        self.0.borrow_mut().push(Call::Structured(
            level,
            message.identifier().get(),
            message.payload().to_vec(),
        ));
        Ok(())
    }
}

struct TextSpy<'j>(&'j RefCell<Vec<Call>>);

impl Sink for TextSpy<'_> {
    type Message = TextMessage;
    const KIND: &'static str = "text-spy";

    fn output(&mut self, level: Severity, message: &TextMessage) -> Result<(), SinkError> {
        self.0.borrow_mut().push(Call::Text(level, message.render()));
        Ok(())
    }
}

#[test]
fn structured_and_text_sinks_receive_their_own_shapes() {
    let calls = RefCell::new(Vec::new());
    let mut structured = StructuredSpy(&calls);
    let mut text = TextSpy(&calls);

    let mut component = Component::builder(ChannelBuilder::new(ChannelId::DEFAULT))
        .sink(&mut structured)
        .sink(&mut text)
        .build()
        .unwrap();
    component.process(&InputEvent::new(1, 2, 3)).unwrap();

    assert_eq!(
        *calls.borrow(),
        vec![
            Call::Structured(Severity::Info, 10, vec![1, 2, 3, 0, 0, 0]),
            Call::Text(
                Severity::Info,
                "input data: length: 1, width: 2, height: 3".to_string()
            ),
        ]
    );
}

#[rstest]
#[case::structured_first(true)]
#[case::text_first(false)]
fn calls_follow_registration_order(#[case] structured_first: bool) {
    let calls = RefCell::new(Vec::new());
    let mut structured = StructuredSpy(&calls);
    let mut text = TextSpy(&calls);

    let builder = Component::builder(ChannelBuilder::default());
    let builder = if structured_first {
        builder.sink(&mut structured).sink(&mut text)
    } else {
        builder.sink(&mut text).sink(&mut structured)
    };
    let mut component = builder.build().unwrap();
    component.process(&InputEvent::new(7, 8, 9)).unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(matches!(calls[0], Call::Structured(..)), structured_first);
    assert_eq!(matches!(calls[1], Call::Text(..)), structured_first);
}

#[test]
fn processing_twice_repeats_the_same_sequence() {
    let calls = RefCell::new(Vec::new());
    let mut structured = StructuredSpy(&calls);
    let mut text = TextSpy(&calls);

    let mut component = Component::builder(ChannelBuilder::default())
        .severity(Severity::Warning)
        .sink(&mut structured)
        .sink(&mut text)
        .build()
        .unwrap();
    let event = InputEvent::new(3, 1, 4);
    component.process(&event).unwrap();
    component.process(&event).unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[..2], calls[2..]);
    assert!(calls.iter().all(|call| match call {
        Call::Structured(level, ..) | Call::Text(level, _) => *level == Severity::Warning,
    }));
}

#[test]
fn all_zero_event_renders_zeros() {
    let calls = RefCell::new(Vec::new());
    let mut structured = StructuredSpy(&calls);
    let mut text = TextSpy(&calls);

    let mut component = Component::builder(ChannelBuilder::default())
        .sink(&mut structured)
        .sink(&mut text)
        .build()
        .unwrap();
    component.process(&InputEvent::default()).unwrap();

    assert_eq!(
        *calls.borrow(),
        vec![
            Call::Structured(Severity::Info, 10, vec![0; 6]),
            Call::Text(
                Severity::Info,
                "input data: length: 0, width: 0, height: 0".to_string()
            ),
        ]
    );
}

#[test]
fn writer_sinks_print_expected_lines() {
    let mut structured = StructuredSink::new(Vec::new());
    let mut text = TextSink::new(Vec::new());

    let mut component = Component::builder(ChannelBuilder::default())
        .sink(&mut structured)
        .sink(&mut text)
        .build()
        .unwrap();
    component.process(&InputEvent::new(1, 2, 3)).unwrap();
    drop(component);

    assert_eq!(
        String::from_utf8(structured.into_inner()).unwrap(),
        "info: can logger: can id: 10, data: [1, 2, 3, 0, 0, 0]\n"
    );
    assert_eq!(
        String::from_utf8(text.into_inner()).unwrap(),
        "info: file logger: input data: length: 1, width: 2, height: 3\n"
    );
}
