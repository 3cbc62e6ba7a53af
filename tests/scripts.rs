use std::{cell::RefCell, fs, io::Write, path::Path, rc::Rc};

use calcscript::{Interpreter, script::run_script};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_calc_file(path: &Path) -> String {
    let source = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

    let buffer = SharedBuffer::default();
    let mut interpreter = Interpreter::new().with_output(Box::new(buffer.clone()));

    if let Err(e) = run_script(&mut interpreter, &source) {
        panic!("Script {path:?} failed: {e}");
    }

    let output = buffer.0.borrow().clone();
    String::from_utf8(output).expect("print output is UTF-8")
}

#[test]
fn script_corpus_produces_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Missing {expected_path:?}: {e}")
                                                         });

        count += 1;
        assert_eq!(run_calc_file(path), expected, "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn failing_script_reports_the_statement_start_line() {
    let mut interpreter = Interpreter::new().with_output(Box::new(std::io::sink()));
    let source = "x = 1\n\n# comment\nfunction broken(n) {\n    return n / 0\n}\nbroken(x)\nx = 2\n";

    let error = run_script(&mut interpreter, source).unwrap_err();

    assert_eq!(error.line, 7);
    assert_eq!(error.error_line, 5);
    assert_eq!(error.message, "Error on line 5: Division by zero.");
    assert_eq!(error.to_string(),
               "Script failed at line 7: Error on line 5: Division by zero.");
    assert_eq!(interpreter.execute("x"), "1");
}

#[test]
fn lines_inside_a_multi_line_statement_keep_their_script_numbers() {
    let mut interpreter = Interpreter::new().with_output(Box::new(std::io::sink()));
    let source = "\n# helpers\nfunction check(n) {\n\n    # guard\n    if (n > 2) {\n        \
                  return missing\n    }\n    return n\n}\ncheck(1)\ncheck(3)\n";

    let error = run_script(&mut interpreter, source).unwrap_err();

    assert_eq!(error.line, 12);
    assert_eq!(error.error_line, 7);
    assert_eq!(error.message, "Error on line 7: Unknown variable 'missing'.");

    let error = run_script(&mut interpreter, "a = 1\n\nb = (a +\n    )\n").unwrap_err();

    assert_eq!(error.line, 3);
    assert_eq!(error.error_line, 4);
    assert_eq!(error.message, "Error on line 4, column 5: Unexpected token ')'.");
}

#[test]
fn script_results_skip_statements_without_values() {
    let mut interpreter = Interpreter::new().with_output(Box::new(std::io::sink()));
    let source = "a = 2\nprint a\nwhile (a < 10) {\n    a *= a\n}\na\n";

    assert_eq!(run_script(&mut interpreter, source).unwrap(), vec!["2", "16"]);
}

#[test]
fn unbalanced_script_tail_is_a_parse_error() {
    let mut interpreter = Interpreter::new().with_output(Box::new(std::io::sink()));

    let error = run_script(&mut interpreter, "ok = 1\nif (ok) {\n    print ok\n").unwrap_err();

    assert_eq!(error.line, 2);
    assert_eq!(error.error_line, 3);
    assert!(error.message.contains("Unexpected end of input"));
}
