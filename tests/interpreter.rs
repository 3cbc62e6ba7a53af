use std::{cell::RefCell, io::Write, rc::Rc};

use calcscript::{Config, Interpreter, Value};
use pretty_assertions::assert_eq;

/// A `Write` sink whose contents stay readable after it is boxed.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("print output is UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capturing_interpreter() -> (Interpreter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let interpreter = Interpreter::new().with_output(Box::new(buffer.clone()));
    (interpreter, buffer)
}

/// Runs `test` on a thread with a 2 MiB stack, the size an embedder's worker
/// thread typically gets.
fn on_small_stack(test: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new().stack_size(2 * 1024 * 1024)
                               .spawn(test)
                               .expect("thread spawns")
                               .join()
                               .expect("test thread finishes");
}

#[test]
fn state_persists_between_executions() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.execute("x = 5"), "5");
    assert_eq!(interpreter.execute("y = x * 2"), "10");
    assert_eq!(interpreter.execute("function inc(v) { return v + 1 }"), "");
    assert_eq!(interpreter.execute("inc(y)"), "11");
}

#[test]
fn last_error_is_cleared_on_next_execute() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.execute("1 / 0"), "");
    assert_eq!(interpreter.last_error(), "Error on line 1: Division by zero.");

    assert_eq!(interpreter.execute("1 + 1"), "2");
    assert_eq!(interpreter.last_error(), "");
}

#[test]
fn error_messages_carry_the_source_line() {
    let mut interpreter = Interpreter::new();

    interpreter.execute("a = 1\nb = 2\nc = missing");
    assert_eq!(interpreter.last_error(), "Error on line 3: Unknown variable 'missing'.");

    interpreter.execute("a = 1\n  b = )");
    assert_eq!(interpreter.last_error(), "Error on line 2, column 7: Unexpected token ')'.");
}

#[test]
fn parse_errors_prevent_all_side_effects() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.execute("x = 1; y = (2"), "");
    assert!(!interpreter.last_error().is_empty());
    assert_eq!(interpreter.available_identifiers(), Vec::<String>::new());
}

#[test]
fn runtime_errors_keep_completed_effects() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.execute("x = 1; y = x / 0; z = 3"), "");
    assert_eq!(interpreter.available_identifiers(), vec!["x"]);
}

#[test]
fn execute_multiple_trims_and_skips_blank_lines() {
    let mut interpreter = Interpreter::new();

    let results = interpreter.execute_multiple(&["  a = 2 ", "", "\t", "a ^ 3", "print a", "a / 0"]);

    assert_eq!(results, vec!["2", "8", "", ""]);
    assert!(interpreter.last_error().contains("Division by zero"));
}

#[test]
fn is_valid_syntax_does_not_evaluate() {
    let mut interpreter = Interpreter::new();

    assert!(interpreter.is_valid_syntax("x = 1"));
    assert!(interpreter.is_valid_syntax("x = 1"));
    assert!(interpreter.is_valid_syntax("undefined_function(1, 2)"));
    assert!(interpreter.is_valid_syntax("1 / 0"));
    assert!(!interpreter.is_valid_syntax("x = "));
    assert!(!interpreter.is_valid_syntax("for (i = 0; i < 3) 1"));
    assert!(!interpreter.is_valid_syntax("'unterminated"));

    assert_eq!(interpreter.execute("x"), "");
    assert!(interpreter.last_error().contains("Unknown variable 'x'"));
}

#[test]
fn clear_context_forgets_everything() {
    let mut interpreter = Interpreter::new();

    interpreter.execute("a = 1");
    interpreter.execute("function f() { return 2 }");
    assert_eq!(interpreter.available_identifiers(), vec!["a", "f"]);
    assert!(interpreter.context().has_variable("a"));
    assert!(interpreter.context().has_function("f"));

    interpreter.clear_context();

    assert!(!interpreter.context().has_variable("a"));
    assert!(!interpreter.context().has_function("f"));
    assert_eq!(interpreter.available_identifiers(), Vec::<String>::new());
    assert_eq!(interpreter.execute("f()"), "");
    assert!(interpreter.last_error().contains("Unknown function 'f'"));
}

#[test]
fn available_identifiers_are_sorted_and_unique() {
    let mut interpreter = Interpreter::new();

    interpreter.execute("zeta = 1");
    interpreter.execute("alpha = 2");
    interpreter.execute("function mid() { return 0 }");
    interpreter.execute("Alpha = 3");

    assert_eq!(interpreter.available_identifiers(),
               vec!["Alpha", "alpha", "mid", "zeta"]);
}

#[test]
fn builtin_catalog_lists_every_builtin() {
    let builtins = Interpreter::builtin_functions();

    for name in ["sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "log10", "log2", "exp",
                 "sqrt", "cbrt", "root", "pow", "abs", "min", "max", "floor", "ceil", "round"]
    {
        assert!(builtins.contains(&name), "missing builtin {name}");
    }
    assert_eq!(builtins.len(), 21);
}

#[test]
fn print_writes_concatenated_values_to_the_sink() {
    let (mut interpreter, output) = capturing_interpreter();

    interpreter.execute("x = 3");
    assert_eq!(interpreter.execute("print \"x = \", x, \"; half = \", x / 2"), "");
    interpreter.execute("print(\"paren\", 1)");
    interpreter.execute("print (1 + 2) * 3");
    interpreter.execute("print");
    interpreter.execute("print true, null_var_missing");

    assert_eq!(output.contents(), "x = 3; half = 1.5\nparen1\n9\n\n");
    assert!(interpreter.last_error().contains("Unknown variable 'null_var_missing'"));
}

#[test]
fn print_inside_loops_and_functions() {
    let (mut interpreter, output) = capturing_interpreter();

    interpreter.execute("function countdown(n) { while (n > 0) { print n; n-- } return \"liftoff\" }");
    assert_eq!(interpreter.execute("countdown(3)"), "liftoff");

    assert_eq!(output.contents(), "3\n2\n1\n");
}

#[test]
fn evaluate_returns_typed_values() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.evaluate("1 < 2").unwrap(), Some(Value::Bool(true)));
    assert_eq!(interpreter.evaluate("'a' + 1").unwrap(), Some(Value::from("a1")));
    assert_eq!(interpreter.evaluate("function f() { return }\nf()").unwrap(), Some(Value::Null));
    assert_eq!(interpreter.evaluate("x = 1; if (x) x = 2").unwrap(), None);
    assert_eq!(interpreter.evaluate("").unwrap(), None);
}

#[test]
fn top_level_return_stops_the_program() {
    let (mut interpreter, output) = capturing_interpreter();

    assert_eq!(interpreter.execute("a = 1; return a + 1; print \"unreachable\"; a = 5"), "2");
    assert_eq!(interpreter.execute("a"), "1");
    assert_eq!(output.contents(), "");
}

#[test]
fn recursion_limit_is_reported_and_state_recovers() {
    let config = Config { max_call_depth: 32,
                          ..Config::default() };
    let mut interpreter = Interpreter::with_config(config);
    assert_eq!(interpreter.config().max_call_depth, 32);

    interpreter.execute("function down(n) { return down(n + 1) }");
    assert_eq!(interpreter.execute("down(0)"), "");
    assert_eq!(interpreter.last_error(), "Error on line 1: Maximum call depth of 32 exceeded.");

    interpreter.execute("function depth(n) { if (n == 0) return 0; return 1 + depth(n - 1) }");
    assert_eq!(interpreter.execute("depth(31)"), "31");
    assert_eq!(interpreter.execute("depth(32)"), "");
    assert_eq!(interpreter.context().scope_depth(), 1);
}

#[test]
fn step_limit_stops_runaway_loops() {
    let config = Config { step_limit: Some(100),
                          ..Config::default() };
    let mut interpreter = Interpreter::with_config(config);

    assert_eq!(interpreter.execute("i = 0; while (i < 100) i++"), "");
    assert_eq!(interpreter.last_error(), "");

    assert_eq!(interpreter.execute("i = 0; while (true) i++"), "");
    assert_eq!(interpreter.last_error(), "Error on line 1: Step limit of 100 exceeded.");
    assert_eq!(interpreter.execute("i"), "100");
}

#[test]
fn interpreters_do_not_share_state() {
    let mut first = Interpreter::new();
    let mut second = Interpreter::new();

    first.execute("shared = 1");

    assert_eq!(second.execute("shared"), "");
    assert!(second.last_error().contains("Unknown variable 'shared'"));
}

#[test]
fn deeply_nested_input_is_a_parse_error() {
    on_small_stack(|| {
        let mut interpreter = Interpreter::new();

        let parens = format!("{}1{}", "(".repeat(3000), ")".repeat(3000));
        assert_eq!(interpreter.execute(&parens), "");
        assert_eq!(interpreter.last_error(),
                   "Error on line 1, column 257: Nesting deeper than 256 levels.");

        let negations = format!("{}1", "- ".repeat(5000));
        assert_eq!(interpreter.execute(&negations), "");
        assert!(interpreter.last_error().contains("Nesting deeper than 256 levels"));

        assert!(!interpreter.is_valid_syntax(&"{".repeat(10_000)));
    });
}

#[test]
fn nesting_within_the_limit_runs_on_a_small_stack() {
    on_small_stack(|| {
        let mut interpreter = Interpreter::new();

        let parens = format!("{}1 + 1{}", "(".repeat(250), ")".repeat(250));
        assert_eq!(interpreter.execute(&parens), "2");

        let blocks = format!("{}x = 7{}", "{ ".repeat(200), " }".repeat(200));
        assert_eq!(interpreter.execute(&format!("x = 0\n{blocks}\nx")), "7");

        assert_eq!(interpreter.execute(&format!("{}1", "- ".repeat(200))), "1");

        let sum = format!("0{}", " + 1".repeat(2_000));
        assert_eq!(interpreter.execute(&sum), "2000");

        let powers = format!("1{}", " ^ 1".repeat(1_000));
        assert_eq!(interpreter.execute(&powers), "1");
    });
}

#[test]
fn recursion_up_to_the_default_limit_runs_on_a_small_stack() {
    on_small_stack(|| {
        let mut interpreter = Interpreter::new();

        interpreter.execute("function down(n) { if (n <= 0) { return 0 } else { while (true) { \
                             return down(n - 1) + 1 } } }");
        assert_eq!(interpreter.execute("down(127)"), "127");
        assert_eq!(interpreter.last_error(), "");

        assert_eq!(interpreter.execute("down(500)"), "");
        assert_eq!(interpreter.last_error(),
                   "Error on line 1: Maximum call depth of 128 exceeded.");
        assert_eq!(interpreter.context().scope_depth(), 1);
    });
}
