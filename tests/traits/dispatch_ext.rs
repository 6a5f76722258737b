use handler_rail::traits::DispatchExt;
use handler_rail::types::{Handler, HandlerChain};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn ok_values_never_touch_the_chain() {
    let touched = Rc::new(Cell::new(false));
    let flag = Rc::clone(&touched);
    let chain = HandlerChain::<&str>::new().with(Handler::new(move |_| flag.set(true)));

    assert_eq!(Ok::<_, &str>(3).dispatch_to(&chain).unwrap(), Some(3));
    assert_eq!(Ok::<_, &str>(3).dispatch_or(&chain, 0).unwrap(), 3);
    assert!(!touched.get());
}

#[test]
fn absorbed_errors_become_fallbacks() {
    let chain = HandlerChain::<&str>::new().with(Handler::absorb());

    assert_eq!(Err::<i32, _>("bad").dispatch_to(&chain).unwrap(), None);
    assert_eq!(Err::<i32, _>("bad").dispatch_or(&chain, -1).unwrap(), -1);
}

#[test]
fn escalated_errors_keep_their_cause() {
    let chain = HandlerChain::<&str>::new();

    let escalation = Err::<i32, _>("bad").dispatch_or(&chain, -1).unwrap_err();

    assert_eq!(escalation.cause(), Some(&"bad"));
}
