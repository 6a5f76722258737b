use handler_rail::adapter::{adapt_predicate, adapt_procedure};
use handler_rail::types::{Deferred, Handler, HandlerChain};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
struct Wrapped(String);

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wrapped: {}", self.0)
    }
}

impl std::error::Error for Wrapped {}

fn failing_store(calls: &Rc<Cell<u32>>) -> Deferred<&'static str, String> {
    let calls = Rc::clone(calls);
    let (chain, store) = adapt_procedure(move |key: u32| {
        calls.set(calls.get() + 1);
        Err(format!("cannot store {key}"))
    })
    .into_parts();

    Deferred::of_with_effect("stored", chain, move || store(7))
}

#[test]
fn terminate_without_effect_never_escalates() {
    let mut deferred = Deferred::<_, String>::of(vec![1, 2], HandlerChain::new());

    assert_eq!(deferred.terminate().unwrap(), vec![1, 2]);
}

#[test]
fn escalating_effect_skips_the_producer() {
    let produced = Rc::new(Cell::new(false));
    let flag = Rc::clone(&produced);
    let (chain, check) = adapt_predicate(|n: i32| Err::<bool, _>(format!("bad {n}"))).into_parts();

    let mut deferred = Deferred::lazy_with_effect(
        move || flag.set(true),
        chain,
        move || check(1).map(|_| ()),
    )
    .throw_runtime(|e: &String| Wrapped(e.clone()));

    let escalation = deferred.terminate().unwrap_err();

    assert_eq!(escalation.downcast_ref::<Wrapped>(), Some(&Wrapped("bad 1".into())));
    assert!(!produced.get());
}

#[test]
fn rethrow_with_raises_the_wrapped_error() {
    let calls = Rc::new(Cell::new(0));

    let escalation = failing_store(&calls)
        .rethrow_with(|e: &String| Wrapped(e.clone()))
        .unwrap_err();

    assert_eq!(escalation.to_string(), "wrapped: cannot store 7");
    assert_eq!(calls.get(), 1);
}

#[test]
fn rethrow_without_handlers_is_unhandled() {
    let calls = Rc::new(Cell::new(0));

    let escalation = failing_store(&calls).rethrow().unwrap_err();

    assert_eq!(escalation.cause().map(String::as_str), Some("cannot store 7"));
}

#[test]
fn print_alone_is_still_fatal() {
    let calls = Rc::new(Cell::new(0));

    let escalation = failing_store(&calls).print().terminate().unwrap_err();

    assert!(escalation.is_unhandled());
}

#[test]
fn print_then_absorb_is_non_fatal() {
    let calls = Rc::new(Cell::new(0));

    let value = failing_store(&calls).print().handle(Handler::absorb()).terminate();

    assert_eq!(value.unwrap(), "stored");
}

#[test]
fn every_terminate_fires_the_effect_again() {
    let calls = Rc::new(Cell::new(0));
    let mut deferred = failing_store(&calls).handle(Handler::absorb());

    assert_eq!(deferred.terminate().unwrap(), "stored");
    assert_eq!(deferred.terminate().unwrap(), "stored");
    assert_eq!(calls.get(), 2);
}

#[test]
fn handlers_appended_after_construction_reach_the_adapter() {
    let calls = Rc::new(Cell::new(0));
    let deferred = failing_store(&calls);
    let before = deferred.chain().len();

    let deferred = deferred.print().throw_runtime(|e: &String| e.to_uppercase());

    assert_eq!(before, 0);
    assert_eq!(deferred.chain().len(), 2);
    assert!(deferred.has_effect());
}

#[cfg(feature = "tracing")]
#[test]
fn trace_is_non_terminal() {
    let calls = Rc::new(Cell::new(0));

    let escalation = failing_store(&calls).trace().terminate().unwrap_err();
    assert!(escalation.is_unhandled());

    let value = failing_store(&calls).trace().handle(Handler::absorb()).terminate();
    assert_eq!(value.unwrap(), "stored");
}
