use calcscript::Interpreter;
use pretty_assertions::assert_eq;

fn run(src: &str) -> (String, String) {
    let mut interpreter = Interpreter::new().with_output(Box::new(std::io::sink()));
    let mut result = String::new();
    for statement in src.split('\n') {
        result = interpreter.execute(statement);
        if !interpreter.last_error().is_empty() {
            return (result, interpreter.last_error().to_string());
        }
    }
    (result, String::new())
}

fn assert_result(src: &str, expected: &str) {
    let (result, error) = run(src);
    if !error.is_empty() {
        panic!("Script failed: {error}");
    }
    assert_eq!(result, expected, "script: {src}");
}

fn assert_failure(src: &str, message: &str) {
    let (_, error) = run(src);
    if error.is_empty() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
    assert!(error.contains(message), "expected '{message}' in '{error}'");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_result("x = 1 + 2\nx", "3");
    assert_result("x = 7 * 9\nx", "63");
    assert_result("x = 8 - 5\nx", "3");
    assert_result("x = 10 / 4\nx", "2.5");
    assert_result("x = y = 4\nx + y", "8");
}

#[test]
fn numbers_display_with_six_significant_digits() {
    assert_result("0.1 + 0.2", "0.3");
    assert_result("1 / 3", "0.333333");
    assert_result("2 ^ 100", "1.26765e+30");
    assert_result("2 ^ -20", "9.53674e-07");
    assert_result("999999", "999999");
    assert_result("999999.7", "1e+06");
    assert_result("0.0001", "0.0001");
    assert_result("1 / 0.00001", "100000");
    assert_result("'third: ' + 1 / 3", "third: 0.333333");
    assert_result("sqrt(2) ^ 2", "2");
    assert_result("sqrt(2) ^ 2 == 2", "false");
}

#[test]
fn precedence_and_associativity() {
    assert_result("2 + 3 * 4", "14");
    assert_result("(2 + 3) * 4", "20");
    assert_result("2 ^ 3 ^ 2", "512");
    assert_result("2 ** 10", "1024");
    assert_result("-2 ^ 2", "-4");
    assert_result("10 - 4 - 3", "3");
    assert_result("1 + 2 < 4 and 3 == 3", "true");
    assert_result("not (1 > 2)", "true");
    assert_result("not 1 > 2", "false");
}

#[test]
fn integer_division_and_modulo() {
    assert_result("17 mod 5", "2");
    assert_result("17 % 5", "2");
    assert_result("-7 % 3", "-1");
    assert_result("17 div 5", "3");
    assert_result("-17 div 5", "-3");
}

#[test]
fn compound_assignments() {
    assert_result("x = 2\nx += 3\nx", "5");
    assert_result("x = 7\nx -= 2\nx", "5");
    assert_result("x = 4\nx *= 2\nx", "8");
    assert_result("x = 9\nx /= 3\nx", "3");
    assert_failure("nope += 1", "Unknown variable 'nope'");
}

#[test]
fn increment_and_decrement() {
    assert_result("i = 5\ni++", "5");
    assert_result("i = 5\ni++\ni", "6");
    assert_result("i = 5\n++i", "6");
    assert_result("i = 5\ni--\ni", "4");
    assert_result("i = 5\n--i", "4");
    assert_failure("++missing", "Unknown variable 'missing'");
    assert_failure("5++", "Increment and decrement need a variable");
}

#[test]
fn division_and_modulo_by_zero() {
    assert_failure("1 / 0", "Division by zero");
    assert_failure("1 div 0", "Division by zero");
    assert_failure("1 mod 0", "Modulo by zero");
    assert_failure("1 % 0", "Modulo by zero");
}

#[test]
fn strings_and_concatenation() {
    assert_result("\"foo\" + \"bar\"", "foobar");
    assert_result("'n = ' + 3", "n = 3");
    assert_result("1 + \"2\"", "12");
    assert_result("\"10\" * 2", "20");
    assert_result("\"a\\tb\"", "a\tb");
    assert_result("\"line\\n\" + 'it\\'s'", "line\nit's");
    assert_result("\"abc\" < \"abd\"", "true");
    assert_result("\"5\" == 5", "true");
}

#[test]
fn booleans_and_truthiness() {
    assert_result("true", "true");
    assert_result("TRUE and False", "false");
    assert_result("0 or \"\"", "false");
    assert_result("!0", "true");
    assert_result("x = if (\"text\") 1 else 2\nx", "1");
}

#[test]
fn short_circuit_logic() {
    assert_result("false and undefined_name", "false");
    assert_result("true or undefined_name", "true");
    assert_result("hits = 0\nfalse and (hits = 1)\nhits", "0");
    assert_failure("true and undefined_name", "Unknown variable 'undefined_name'");
}

#[test]
fn comparisons() {
    assert_result("2 < 3", "true");
    assert_result("3 > 2", "true");
    assert_result("2 <= 2", "true");
    assert_result("3 >= 4", "false");
    assert_result("2 != 3", "true");
    assert_result("2 == 2", "true");
}

#[test]
fn constants_and_keywords_ignore_case() {
    assert_result("pi == PI", "true");
    assert_result("round(E * 1000)", "2718");
    assert_result("tau / pi", "2");
    assert_result("If (1) y = 2 ELSE y = 3\ny", "2");
    assert_result("x = 3\nX = 4\nx", "3");
}

#[test]
fn builtin_functions() {
    assert_result("sin(0)", "0");
    assert_result("cos(0)", "1");
    assert_result("abs(-5)", "5");
    assert_result("sqrt(81)", "9");
    assert_result("cbrt(27)", "3");
    assert_result("round(3.7)", "4");
    assert_result("floor(-3.2)", "-4");
    assert_result("ceil(3.2)", "4");
    assert_result("pow(2, 8)", "256");
    assert_result("log10(100)", "2");
    assert_result("log2(8)", "3");
    assert_result("ln(1)", "0");
    assert_result("log(1)", "0");
    assert_result("exp(0)", "1");
    assert_result("root(3, -8)", "-2");
    assert_result("min(4, -1, 7)", "-1");
    assert_result("max(4, -1, 7)", "7");
    assert_result("asin(0)", "0");
    assert_result("atan(0)", "0");
}

#[test]
fn builtin_domain_errors() {
    assert_failure("sqrt(-1)", "Domain error in 'sqrt'");
    assert_failure("ln(0)", "Domain error in 'ln'");
    assert_failure("log10(-2)", "Domain error in 'log10'");
    assert_failure("acos(2)", "Domain error in 'acos'");
    assert_failure("root(2, -4)", "Domain error in 'root'");
    assert_failure("root(0, 4)", "Division by zero");
}

#[test]
fn builtin_arity_errors() {
    assert_failure("sin(1, 2)", "Function 'sin' expects 1 argument(s), but 2 were given");
    assert_failure("pow(2)", "Function 'pow' expects 2 argument(s), but 1 were given");
    assert_failure("min()", "expects at least 1 argument(s), but 0 were given");
}

#[test]
fn user_defined_functions() {
    assert_result("function square(x) { return x * x }\nsquare(3)", "9");
    assert_result("function add(a, b) { return a + b }\nadd(2, 5)", "7");
    assert_result("procedure hello() { print \"hi\" }\nhello()", "null");
    assert_result("function noreturn(x) { x * 2 }\nnoreturn(4)", "null");
    assert_result("function early(x) { if (x > 0) return 1; return -1 }\nearly(-3)", "-1");
    assert_result("function f(x) { return x }\nfunction f(x) { return x + 1 }\nf(1)", "2");
}

#[test]
fn function_errors() {
    assert_failure("function f(a, b) { return a }\nf(1)",
                   "Function 'f' expects 2 argument(s), but 1 were given");
    assert_failure("nothing(1)", "Unknown function 'nothing'");
    assert_failure("function sqrt(x) { return x }", "Cannot redefine built-in function 'sqrt'");
    assert_failure("(1 + 2)(3)", "Only named functions can be called");
}

#[test]
fn recursion() {
    assert_result("function fib(n) { if (n < 2) return n else return fib(n - 1) + fib(n - 2) }\nfib(15)",
                  "610");
    assert_result("function fact(n) { if (n <= 1) return 1; return n * fact(n - 1) }\nfact(12)",
                  "4.79002e+08");
}

#[test]
fn scoping() {
    assert_result("x = 1\n{ x = 2 }\nx", "2");
    assert_failure("{ fresh = 2 }\nfresh", "Unknown variable 'fresh'");
    assert_result("g = 10\nfunction read() { return g }\nread()", "10");
    assert_result("g = 10\nfunction write() { g = 11 }\nwrite()\ng", "11");
    assert_failure("function local(p) { inner = p }\nlocal(3)\ninner", "Unknown variable 'inner'");
    assert_failure("{ hidden = 1; function peek() { return hidden } }\n{ hidden = 2; peek() }",
                   "Unknown variable 'hidden'");
}

#[test]
fn if_statements_and_expressions() {
    assert_result("x = 5\nif (x > 3) y = 1 else y = 2\ny", "1");
    assert_result("x = 1\nif (x > 3) y = 1 else y = 2\ny", "2");
    assert_result("if (false) 1", "");
    assert_result("x = if (true) 10 else 20\nx", "10");
    assert_result("if (1) { 2 }; else { 3 }", "");
    assert_result("a = 0\nif (0) a = 1; else a = 2\na", "2");
}

#[test]
fn loops() {
    assert_result("i = 0\nwhile (i < 10) i++\ni", "10");
    assert_result("s = 0\nfor (i = 1; i <= 100; i++) s += i\ns", "5050");
    assert_result("s = 0\nfor (i = 0; i < 3; i += 1) { s = s + i }\ni", "3");
    assert_result("n = 1\nwhile (n < 1000) { n *= 2 }\nn", "1024");
    assert_result("function first_over(limit) { i = 0; while (true) { if (i * i > limit) return i; i++ } }\nfirst_over(50)",
                  "8");
}

#[test]
fn statements_yield_no_display_value() {
    assert_result("print 1", "");
    assert_result("while (false) 1", "");
    assert_result("{ 1 + 1 }", "");
    assert_result("function f() { return 1 }", "");
    assert_result("return 42", "42");
    assert_result("1; 2; 3", "3");
}

#[test]
fn parse_errors() {
    assert_failure("1 +", "Unexpected end of input");
    assert_failure("(1 + 2 3", "Expected ')' after expression, found '3'");
    assert_failure("(1 + 2", "Unexpected end of input");
    assert_failure("3 = 4", "Invalid assignment target");
    assert_failure("x = 1 @ 2", "Unexpected token '@'");
    assert_failure("\"open", "Unterminated string literal");
    assert_failure("{ 1", "Unexpected end of input");
    assert_failure("if (1) 2 else", "Unexpected end of input");
}

#[test]
fn comments_are_ignored() {
    assert_result("1 + 1 # two", "2");
    assert_result("# nothing here", "");
}
