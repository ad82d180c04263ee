//! Keystroke bursts, settling and duplicate suppression.

use crate::common::*;
use snipsearch::Phase;

#[tokio::test(start_paused = true)]
async fn burst_settles_once_with_last_value() {
    let source = StaticSource::new(make_docs(3, "fox"));
    let counters = source.counters();
    let widget = mount(source);

    type_burst(&widget, &["f", "fo", "fox"], KEYSTROKE).await;
    widget.flush().await;

    assert_eq!(widget.evaluations(), 1);
    assert_eq!(widget.last_query(), "fox");
    assert_eq!(counters.searches(), 1);
    assert_eq!(widget.phase(), Phase::Rendered);
}

#[tokio::test(start_paused = true)]
async fn spaced_inputs_each_settle() {
    let widget = mount(StaticSource::new(make_docs(2, "fox")));

    type_burst(&widget, &["fox", "hen"], SETTLE).await;
    widget.flush().await;

    assert_eq!(widget.evaluations(), 2);
    assert_eq!(widget.last_query(), "hen");
}

#[tokio::test(start_paused = true)]
async fn keystroke_restarts_the_delay() {
    let widget = mount(StaticSource::new(make_docs(1, "fox")));

    // 4 × 100ms spans 400ms, yet no delay of 150ms ever elapses uninterrupted
    for value in ["f", "fo", "fox", "foxe"] {
        widget.on_input(value);
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert_eq!(widget.evaluations(), 0);
        assert_eq!(widget.phase(), Phase::Debouncing);
    }

    widget.flush().await;
    assert_eq!(widget.evaluations(), 1);
}

#[tokio::test(start_paused = true)]
async fn unchanged_query_is_not_searched_again() {
    let source = StaticSource::new(make_docs(2, "fox"));
    let counters = source.counters();
    let widget = mount(source);

    type_and_settle(&widget, "fox").await;
    let before = widget.view().snapshot();

    type_and_settle(&widget, " fox  ").await;
    let after = widget.view().snapshot();

    assert_eq!(widget.evaluations(), 2);
    assert_eq!(counters.searches(), 1);
    assert_eq!(counters.loads(), 1);
    assert_eq!(before, after);
    assert_eq!(widget.phase(), Phase::Idle);
}

#[tokio::test(start_paused = true)]
async fn edit_and_restore_searches_again() {
    let source = StaticSource::new(make_docs(2, "fox"));
    let counters = source.counters();
    let widget = mount(source);

    type_and_settle(&widget, "fox").await;
    type_and_settle(&widget, "fo").await;
    type_and_settle(&widget, "fox").await;

    assert_eq!(counters.searches(), 3);
    assert_eq!(counters.loads(), 1);
}

#[tokio::test(start_paused = true)]
async fn burst_returning_to_previous_query_is_suppressed() {
    let source = StaticSource::new(make_docs(2, "fox"));
    let counters = source.counters();
    let widget = mount(source);

    type_and_settle(&widget, "fox").await;
    type_burst(&widget, &["fo", "f", "fo", "fox"], KEYSTROKE).await;
    widget.flush().await;

    assert_eq!(widget.evaluations(), 2);
    assert_eq!(counters.searches(), 1);
}
