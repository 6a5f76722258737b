use handler_rail::traits::Classified;
use handler_rail::types::{Handler, HandlerChain};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Network,
    Storage,
    Input,
}

#[derive(Debug)]
struct AppError {
    kind: Kind,
    detail: &'static str,
}

impl Classified for AppError {
    type Kind = Kind;

    fn kind(&self) -> Kind {
        self.kind
    }
}

#[test]
fn is_kind_compares_classification() {
    let err = AppError { kind: Kind::Storage, detail: "disk full" };

    assert!(err.is_kind(&Kind::Storage));
    assert!(!err.is_kind(&Kind::Network));
}

#[test]
fn kind_handlers_route_by_classification() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let network = Rc::clone(&log);
    let storage = Rc::clone(&log);

    let chain = HandlerChain::new()
        .with(Handler::<AppError>::for_kind(Kind::Network, move |e: &AppError| {
            network.borrow_mut().push(format!("net: {}", e.detail))
        }))
        .with(Handler::<AppError>::for_kind(Kind::Storage, move |e: &AppError| {
            storage.borrow_mut().push(format!("disk: {}", e.detail))
        }));

    assert!(chain.dispatch(AppError { kind: Kind::Network, detail: "reset" }).is_ok());
    assert!(chain.dispatch(AppError { kind: Kind::Storage, detail: "full" }).is_ok());
    assert!(chain
        .dispatch(AppError { kind: Kind::Input, detail: "empty" })
        .unwrap_err()
        .is_unhandled());
    assert_eq!(*log.borrow(), ["net: reset", "disk: full"]);
}

#[test]
fn io_errors_classify_by_error_kind() {
    let err = io::Error::from(io::ErrorKind::PermissionDenied);

    assert_eq!(Classified::kind(&err), io::ErrorKind::PermissionDenied);
    assert!(err.is_kind(&io::ErrorKind::PermissionDenied));
}
