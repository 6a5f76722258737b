use handler_rail::traits::Classified;
use handler_rail::types::{BoxedError, Handler};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Io,
    Parse,
}

#[derive(Debug)]
struct LoadError {
    kind: Kind,
}

impl Classified for LoadError {
    type Kind = Kind;

    fn kind(&self) -> Kind {
        self.kind
    }
}

#[derive(Debug)]
struct Timeout(u64);

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.0)
    }
}

impl std::error::Error for Timeout {}

#[test]
fn handler_defaults_to_terminal_catch_all() {
    let handler = Handler::<&str>::absorb();

    assert!(handler.is_terminal());
    assert!(handler.can_handle(&"anything"));
    assert!(handler.handle(&"anything").is_ok());
}

#[test]
fn terminal_flag_can_be_toggled() {
    let handler = Handler::<&str>::absorb().non_terminal();
    assert!(!handler.is_terminal());

    let handler = handler.terminal(true);
    assert!(handler.is_terminal());
}

#[test]
fn for_kind_matches_by_classification() {
    let handler = Handler::<LoadError>::for_kind(Kind::Parse, |_: &LoadError| {});

    assert!(handler.can_handle(&LoadError { kind: Kind::Parse }));
    assert!(!handler.can_handle(&LoadError { kind: Kind::Io }));
}

#[test]
fn downcast_handler_receives_concrete_error() {
    let waited = Rc::new(Cell::new(0));
    let sink = Rc::clone(&waited);
    let handler = Handler::downcast(move |t: &Timeout| sink.set(t.0));

    let timeout: BoxedError = Box::new(Timeout(250));
    let other: BoxedError = "connection reset".into();

    assert!(handler.can_handle(&timeout));
    assert!(!handler.can_handle(&other));

    handler.handle(&timeout).unwrap();
    assert_eq!(waited.get(), 250);
}

#[test]
fn try_new_action_error_is_returned_from_handle() {
    let handler = Handler::<i32>::try_new(|n| Err(format!("rejected {n}").into()));

    let err = handler.handle(&3).unwrap_err();
    assert_eq!(err.to_string(), "rejected 3");
}

#[test]
fn debug_output_shows_terminal_flag() {
    let handler = Handler::<i32>::absorb().non_terminal();

    assert_eq!(format!("{handler:?}"), "Handler { terminal: false, .. }");
}
