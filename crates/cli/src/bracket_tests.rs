// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

type Log = Rc<RefCell<Vec<String>>>;

fn recorder(log: &Log, label: &str) -> BracketCallback {
    let log = Rc::clone(log);
    let label = label.to_string();
    Box::new(move |text: &str, event: BracketEvent| {
        let dir = if event.is_opening() { "open" } else { "close" };
        log.borrow_mut().push(format!("{label}:{dir}:{text}"));
    })
}

fn feed_all(tracker: &mut BracketTracker, input: &str) -> Vec<BracketOutcome> {
    input.chars().map(|c| tracker.feed(c, "")).collect()
}

#[test]
fn duplicate_opening_is_rejected() {
    let log = Log::default();
    let mut tracker = BracketTracker::new();
    tracker.register('{', '}', recorder(&log, "a")).unwrap();
    let err = tracker.register('{', ']', recorder(&log, "b")).unwrap_err();
    assert!(matches!(err, Error::DuplicatePair { opening: '{' }));
}

#[test]
fn open_then_close() {
    let log = Log::default();
    let mut tracker = BracketTracker::new();
    tracker.register('(', ')', recorder(&log, "paren")).unwrap();

    assert_eq!(
        feed_all(&mut tracker, "(x)"),
        vec![BracketOutcome::Opened, BracketOutcome::Idle, BracketOutcome::Closed]
    );
    assert_eq!(*log.borrow(), vec!["paren:open:", "paren:close:"]);
    assert_eq!(tracker.open_len(), 0);
}

#[test]
fn closing_without_open_is_idle() {
    let log = Log::default();
    let mut tracker = BracketTracker::new();
    tracker.register('(', ')', recorder(&log, "paren")).unwrap();

    assert_eq!(tracker.feed(')', ""), BracketOutcome::Idle);
    assert!(log.borrow().is_empty());
}

#[test]
fn same_kind_instances_close_one_per_symbol() {
    let log = Log::default();
    let mut tracker = BracketTracker::new();
    tracker.register('{', '}', recorder(&log, "brace")).unwrap();

    feed_all(&mut tracker, "{{");
    assert_eq!(tracker.open_len(), 2);

    assert_eq!(tracker.feed('}', ""), BracketOutcome::Closed);
    assert_eq!(tracker.open_len(), 1);
    assert_eq!(log.borrow().len(), 3);

    assert_eq!(tracker.feed('}', ""), BracketOutcome::Closed);
    assert_eq!(tracker.open_len(), 0);
    assert_eq!(
        *log.borrow(),
        vec!["brace:open:", "brace:open:", "brace:close:", "brace:close:"]
    );
}

#[test]
fn shared_closing_symbol_fires_each_rule_once() {
    let log = Log::default();
    let mut tracker = BracketTracker::new();
    tracker.register('<', '|', recorder(&log, "angle")).unwrap();
    tracker.register('[', '|', recorder(&log, "square")).unwrap();

    feed_all(&mut tracker, "[<<");
    log.borrow_mut().clear();

    assert_eq!(tracker.feed('|', ""), BracketOutcome::Closed);
    // Oldest open instance decides the order.
    assert_eq!(*log.borrow(), vec!["square:close:", "angle:close:"]);
    assert_eq!(tracker.open_len(), 1);
}

#[test]
fn opening_wins_over_unrelated_close() {
    let log = Log::default();
    let mut tracker = BracketTracker::new();
    tracker.register('a', 'b', recorder(&log, "ab")).unwrap();
    tracker.register('b', 'c', recorder(&log, "bc")).unwrap();

    tracker.feed('a', "");
    assert_eq!(tracker.feed('b', ""), BracketOutcome::Opened);
    assert_eq!(*log.borrow(), vec!["ab:open:", "ab:close:", "bc:open:"]);
    assert_eq!(tracker.open_len(), 1);
}

#[test]
fn callback_receives_text() {
    let log = Log::default();
    let mut tracker = BracketTracker::new();
    tracker.register('{', '}', recorder(&log, "brace")).unwrap();

    tracker.feed('{', "before");
    tracker.feed('}', "inside");
    assert_eq!(*log.borrow(), vec!["brace:open:before", "brace:close:inside"]);
}

#[test]
fn reset_forgets_open_instances() {
    let log = Log::default();
    let mut tracker = BracketTracker::new();
    tracker.register('{', '}', recorder(&log, "brace")).unwrap();

    feed_all(&mut tracker, "{{");
    tracker.reset();
    assert_eq!(tracker.open_len(), 0);
    assert_eq!(tracker.feed('}', ""), BracketOutcome::Idle);
}

#[test]
fn event_direction_helper() {
    assert!(BracketEvent::Open.is_opening());
    assert!(!BracketEvent::Close.is_opening());
    assert!(BracketOutcome::Opened.fired());
    assert!(BracketOutcome::Closed.fired());
    assert!(!BracketOutcome::Idle.fired());
}
