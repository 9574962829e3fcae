use exprstack::eval::{Value, evaluate};
use exprstack::lexer::tokenize;

struct Session {
    stack: Vec<Value>,
    output: Vec<u8>,
}

impl Session {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            output: Vec::new(),
        }
    }

    fn eval(&mut self, expr: &str) -> &mut Self {
        if let Err(err) = evaluate(&tokenize(expr), &mut self.stack, &mut self.output) {
            self.output.extend(format!("error: {err}\n").bytes());
        }
        self
    }

    fn output(&self) -> &str {
        std::str::from_utf8(&self.output).unwrap()
    }
}

#[test]
fn one_shot_arithmetic() {
    let mut session = Session::new();
    session.eval("3 4 + 2 * .");

    assert_eq!(session.output(), "14\n");
    assert!(session.stack.is_empty());
}

#[test]
fn stack_survives_across_lines() {
    let mut session = Session::new();
    session.eval("2 3").eval("+").eval("dup *").eval(".");

    assert_eq!(session.output(), "25\n");
    assert!(session.stack.is_empty());
}

#[test]
fn division_prints_with_decimal_point() {
    let mut session = Session::new();
    session.eval("1 2 / .").eval("10 5 / .");

    assert_eq!(session.output(), "0.5\n2.0\n");
}

#[test]
fn errors_are_reported_and_session_continues() {
    let mut session = Session::new();
    session.eval("10 0 /").eval("1 2 + .");

    assert_eq!(session.output(), "error: cannot divide by 0\n3\n");
    assert!(session.stack.is_empty());
}

#[test]
fn abort_leaves_partial_state() {
    let mut session = Session::new();
    session.eval("1 2 3 + + + .");

    assert_eq!(
        session.output(),
        "error: operator '+' requires two numerical arguments\n"
    );
    assert_eq!(session.stack, vec![Value::Integer(6)]);
}

#[test]
fn illegal_tokens_do_not_stop_the_line() {
    let mut session = Session::new();
    session.eval("2 swap 3 @ * .");

    assert_eq!(
        session.output(),
        "Got illegal token: swap\nGot illegal token: @\n6\n"
    );
}

#[test]
fn float_literals_round_trip_through_print() {
    let mut session = Session::new();
    session.eval("12. .").eval("3.14 .");

    assert_eq!(session.output(), "12.0\n3.14\n");
}

#[test]
fn power_tower() {
    let mut session = Session::new();
    session.eval("2 2 2 ^ ^ .");

    assert_eq!(session.output(), "16\n");
}
