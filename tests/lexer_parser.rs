use calcscript::{
    ast::{BinaryOperator, Expr, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, tokenize, tokenize_from_line},
        parser::{MAX_NESTING_DEPTH, parse},
        value::core::Value,
    },
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).expect("source lexes")
                    .iter()
                    .map(|token| token.kind)
                    .collect()
}

fn parse_source(source: &str) -> Result<Vec<Statement>, ParseError> {
    tokenize(source).and_then(|tokens| parse(&tokens))
}

fn single_expression(source: &str) -> Expr {
    let mut program = parse_source(source).expect("source parses");
    assert_eq!(program.len(), 1, "expected one statement in {source}");
    match program.remove(0) {
        Statement::Expression { expr, .. } => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn number(value: f64) -> Expr {
    Expr::Literal { value: Value::Number(value),
                    line:  1, }
}

fn ident(name: &str) -> Expr {
    Expr::Identifier { name: name.to_string(),
                       line: 1, }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

#[test]
fn operators_prefer_the_longest_match() {
    use TokenKind::*;

    assert_eq!(kinds("++ -- += -= *= /= ** == != <= >= + - * / ^ % = < > ! ( ) { } , ;"),
               vec![PlusPlus, MinusMinus, PlusAssign, MinusAssign, StarAssign, SlashAssign,
                    StarStar, EqualEqual, BangEqual, LessEqual, GreaterEqual, Plus, Minus, Star,
                    Slash, Caret, Percent, Equals, Less, Greater, Not, LParen, RParen, LBrace,
                    RBrace, Comma, Semicolon, EndOfFile]);
}

#[test]
fn keywords_ignore_case_and_identifiers_keep_it() {
    let tokens = tokenize("While wHiLe FUNCTION Procedure MOD Div myVar").unwrap();
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();

    assert_eq!(kinds,
               vec![TokenKind::While,
                    TokenKind::While,
                    TokenKind::Function,
                    TokenKind::Procedure,
                    TokenKind::Mod,
                    TokenKind::Div,
                    TokenKind::Identifier,
                    TokenKind::EndOfFile]);
    assert_eq!(tokens[6].text, "myVar");
}

#[test]
fn constants_become_numbers() {
    let tokens = tokenize("pi E Tau phi sqrt2 SQRT3 ln2 ln10 pie").unwrap();

    let numbers = tokens.iter()
                        .take(8)
                        .map(|t| t.text.parse::<f64>().unwrap())
                        .collect::<Vec<_>>();
    assert_eq!(numbers,
               vec![std::f64::consts::PI,
                    std::f64::consts::E,
                    std::f64::consts::TAU,
                    1.618_033_988_749_895,
                    std::f64::consts::SQRT_2,
                    3_f64.sqrt(),
                    std::f64::consts::LN_2,
                    std::f64::consts::LN_10]);
    assert!(tokens[..8].iter().all(|t| t.kind == TokenKind::Number));
    assert_eq!(tokens[8].kind, TokenKind::Identifier);
}

#[test]
fn numbers_and_strings() {
    let tokens = tokenize("42 3.25 7. \"double\" 'single' \"esc\\\"aped\"").unwrap();
    let texts = tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();

    assert_eq!(texts, vec!["42", "3.25", "7.", "double", "single", "esc\"aped", ""]);
    assert_eq!(tokens[3].kind, TokenKind::String);
}

#[test]
fn tokens_record_line_and_column() {
    let tokens = tokenize("a = 1\n  # comment\n    b += 'x'").unwrap();

    let positions = tokens.iter()
                          .map(|Token { kind, line, column, .. }| (*kind, *line, *column))
                          .collect::<Vec<_>>();
    assert_eq!(positions,
               vec![(TokenKind::Identifier, 1, 1),
                    (TokenKind::Equals, 1, 3),
                    (TokenKind::Number, 1, 5),
                    (TokenKind::Identifier, 3, 5),
                    (TokenKind::PlusAssign, 3, 7),
                    (TokenKind::String, 3, 10),
                    (TokenKind::EndOfFile, 3, 13)]);
}

#[test]
fn unknown_characters_become_invalid_tokens() {
    let tokens = tokenize("1 @ 2").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].text, "@");
}

#[test]
fn unterminated_strings_are_lex_errors() {
    assert_eq!(tokenize("x = \"abc").unwrap_err(),
               ParseError::UnterminatedString { line: 1, column: 5 });
    assert_eq!(tokenize("'ab\\'").unwrap_err(),
               ParseError::UnterminatedString { line: 1, column: 1 });
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(single_expression("1 + 2 * 3"),
               binary(number(1.0),
                      BinaryOperator::Add,
                      binary(number(2.0), BinaryOperator::Mul, number(3.0))));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(single_expression("a - b - c"),
               binary(binary(ident("a"), BinaryOperator::Sub, ident("b")),
                      BinaryOperator::Sub,
                      ident("c")));
}

#[test]
fn power_and_assignment_are_right_associative() {
    assert_eq!(single_expression("a ^ b ** c"),
               binary(ident("a"),
                      BinaryOperator::Pow,
                      binary(ident("b"), BinaryOperator::Pow, ident("c"))));
    assert_eq!(single_expression("a = b += 1"),
               binary(ident("a"),
                      BinaryOperator::Assign,
                      binary(ident("b"), BinaryOperator::AddAssign, number(1.0))));
}

#[test]
fn logical_operators_have_lowest_binary_precedence() {
    assert_eq!(single_expression("a or b and c == 1"),
               binary(ident("a"),
                      BinaryOperator::Or,
                      binary(ident("b"),
                             BinaryOperator::And,
                             binary(ident("c"), BinaryOperator::Equal, number(1.0)))));
}

#[test]
fn word_operators() {
    assert_eq!(single_expression("a mod b div c"),
               binary(binary(ident("a"), BinaryOperator::Mod, ident("b")),
                      BinaryOperator::IntDiv,
                      ident("c")));
}

#[test]
fn unary_and_postfix_operators() {
    assert_eq!(single_expression("-x++"),
               Expr::UnaryOp { op:      UnaryOperator::Negate,
                               operand: Box::new(Expr::UnaryOp { op:      UnaryOperator::PostIncrement,
                                                                 operand: Box::new(ident("x")),
                                                                 line:    1, }),
                               line:    1, });
    assert_eq!(single_expression("not --y"),
               Expr::UnaryOp { op:      UnaryOperator::Not,
                               operand: Box::new(Expr::UnaryOp { op:      UnaryOperator::PreDecrement,
                                                                 operand: Box::new(ident("y")),
                                                                 line:    1, }),
                               line:    1, });
}

#[test]
fn calls_take_any_number_of_arguments() {
    assert_eq!(single_expression("f()"),
               Expr::FunctionCall { callee:    Box::new(ident("f")),
                                    arguments: vec![],
                                    line:      1, });
    assert_eq!(single_expression("max(1, x, 2 + 3)"),
               Expr::FunctionCall { callee:    Box::new(ident("max")),
                                    arguments: vec![number(1.0),
                                                    ident("x"),
                                                    binary(number(2.0),
                                                           BinaryOperator::Add,
                                                           number(3.0))],
                                    line:      1, });
}

#[test]
fn statements_are_separated_by_semicolons_or_newlines() {
    let program = parse_source("a = 1; b = 2\nc = 3;;\n\n").unwrap();

    assert_eq!(program.len(), 3);
    assert_eq!(program.iter().map(Statement::line_number).collect::<Vec<_>>(), vec![1, 1, 2]);
}

#[test]
fn if_else_may_follow_a_semicolon() {
    let program = parse_source("if (x) y = 1; else y = 2").unwrap();

    assert_eq!(program.len(), 1);
    assert!(matches!(&program[0], Statement::If { else_branch: Some(_), .. }));
}

#[test]
fn if_without_else_leaves_following_statement_alone() {
    let program = parse_source("if (x) y = 1; z = 2").unwrap();

    assert_eq!(program.len(), 2);
    assert!(matches!(&program[0], Statement::If { else_branch: None, .. }));
}

#[test]
fn loops_and_blocks() {
    let program = parse_source("while (i < 3) { i++ }\nfor (i = 0; i < 3; i++) print i").unwrap();

    assert!(matches!(&program[0], Statement::While { body, .. }
                     if matches!(**body, Statement::Block { ref statements, .. } if statements.len() == 1)));
    assert!(matches!(&program[1], Statement::For { line: 2, .. }));
}

#[test]
fn function_definitions() {
    let program = parse_source("function add(a, b) { return a + b }\nprocedure log_it() { print 1 }")
        .unwrap();

    let Statement::Function(add) = &program[0] else {
        panic!("expected a function definition");
    };
    assert_eq!(add.name, "add");
    assert_eq!(add.params, vec!["a", "b"]);

    let Statement::Function(log_it) = &program[1] else {
        panic!("expected a procedure definition");
    };
    assert!(log_it.params.is_empty());
    assert_eq!(log_it.line, 2);
}

#[test]
fn return_with_and_without_value() {
    let program = parse_source("function f() { return }\nfunction g() { return 1; }").unwrap();

    let bodies = program.iter()
                        .map(|statement| match statement {
                            Statement::Function(def) => def.body.clone(),
                            other => panic!("unexpected {other:?}"),
                        })
                        .collect::<Vec<_>>();

    assert!(matches!(&bodies[0], Statement::Block { statements, .. }
                     if matches!(statements[0], Statement::Return { value: None, .. })));
    assert!(matches!(&bodies[1], Statement::Block { statements, .. }
                     if matches!(statements[0], Statement::Return { value: Some(_), .. })));
}

#[test]
fn print_argument_forms() {
    let argument_counts = |source: &str| match parse_source(source).unwrap().remove(0) {
        Statement::Print { arguments, .. } => arguments.len(),
        other => panic!("expected print, got {other:?}"),
    };

    assert_eq!(argument_counts("print"), 0);
    assert_eq!(argument_counts("print 1, 2, 3"), 3);
    assert_eq!(argument_counts("print(1, 2)"), 2);
    assert_eq!(argument_counts("print()"), 0);
    assert_eq!(argument_counts("print (1) + 2, 3"), 2);
}

#[test]
fn invalid_targets_are_rejected() {
    assert_eq!(parse_source("1 = 2").unwrap_err(),
               ParseError::InvalidAssignmentTarget { line: 1, column: 3 });
    assert_eq!(parse_source("f(x) += 1").unwrap_err(),
               ParseError::InvalidAssignmentTarget { line: 1, column: 6 });
    assert_eq!(parse_source("f()++").unwrap_err(),
               ParseError::InvalidIncrementTarget { line: 1, column: 4 });
    assert_eq!(parse_source("--3").unwrap_err(),
               ParseError::InvalidIncrementTarget { line: 1, column: 1 });
}

#[test]
fn syntax_errors_report_positions() {
    assert_eq!(parse_source("x = (1 + 2").unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 1, column: 11 });
    assert_eq!(parse_source("if x) 1").unwrap_err(),
               ParseError::ExpectedToken { expected: "'(' after 'if'".to_string(),
                                           found:    "x".to_string(),
                                           line:     1,
                                           column:   4, });
    assert_eq!(parse_source("a = 1 }").unwrap_err(),
               ParseError::UnexpectedToken { token:  "}".to_string(),
                                             line:   1,
                                             column: 7, });
}

#[test]
fn nesting_beyond_the_limit_is_rejected() {
    let too_deep = format!("x = {}1{}",
                           "(".repeat(MAX_NESTING_DEPTH + 1),
                           ")".repeat(MAX_NESTING_DEPTH + 1));
    assert_eq!(parse_source(&too_deep).unwrap_err(),
               ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                            line:   1,
                                            column: 5 + MAX_NESTING_DEPTH, });

    let at_limit = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert!(parse_source(&at_limit).is_ok());

    let mixed = format!("{}1", "-(".repeat(MAX_NESTING_DEPTH + 1));
    assert!(matches!(parse_source(&mixed), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn tokens_can_be_numbered_from_a_later_line() {
    let tokens = tokenize_from_line("a = 1\n\n  b = 'x\ny'\nc", 20).unwrap();

    let positions = tokens.iter()
                          .map(|token| (token.text.as_str(), token.line, token.column))
                          .collect::<Vec<_>>();
    assert_eq!(positions,
               vec![("a", 20, 1),
                    ("=", 20, 3),
                    ("1", 20, 5),
                    ("b", 22, 3),
                    ("=", 22, 5),
                    ("x\ny", 22, 7),
                    ("c", 24, 1),
                    ("", 24, 2)]);
    assert_eq!(tokenize_from_line("'open", 9).unwrap_err(),
               ParseError::UnterminatedString { line: 9, column: 1 });
}
