use std::f64::consts::{E, LN_2, LN_10, PI, SQRT_2, TAU};

use logos::Logos;

use crate::error::ParseError;

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Words are scanned as `Identifier` and then reclassified by [`tokenize`]
/// into keywords or named constants, since both are matched without regard
/// to case.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// String literal tokens in double or single quotes.
    #[regex(r#""([^"\\]|\\.)*"?"#, allow_greedy = true)]
    #[regex(r"'([^'\\]|\\.)*'?", allow_greedy = true)]
    String,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks. Never emitted; they only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,

    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `for`
    For,
    /// `function`
    Function,
    /// `procedure`
    Procedure,
    /// `return`
    Return,
    /// `print`
    Print,
    /// `true`
    True,
    /// `false`
    False,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not` or `!`
    #[token("!")]
    Not,
    /// `mod`
    Mod,
    /// `div`
    Div,

    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `**`
    #[token("**")]
    StarStar,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Synthetic marker appended after the last real token.
    EndOfFile,
    /// Characters that do not start any token.
    Invalid,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, so that every token can be given a line and a column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A token together with its text and source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The token text. For strings this is the decoded content without the
    /// quotes; for named constants it is the constant's decimal value.
    pub text:   String,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based source column, counted in characters.
    pub column: usize,
}

/// Named numeric constants, recognized without regard to case.
const CONSTANTS: &[(&str, f64)] = &[("pi", PI),
                                    ("e", E),
                                    ("tau", TAU),
                                    ("phi", 1.618_033_988_749_895),
                                    ("sqrt2", SQRT_2),
                                    ("sqrt3", 1.732_050_807_568_877_2),
                                    ("ln2", LN_2),
                                    ("ln10", LN_10)];

/// Reserved words, recognized without regard to case.
const KEYWORDS: &[(&str, TokenKind)] = &[("if", TokenKind::If),
                                         ("else", TokenKind::Else),
                                         ("while", TokenKind::While),
                                         ("for", TokenKind::For),
                                         ("function", TokenKind::Function),
                                         ("procedure", TokenKind::Procedure),
                                         ("return", TokenKind::Return),
                                         ("print", TokenKind::Print),
                                         ("true", TokenKind::True),
                                         ("false", TokenKind::False),
                                         ("and", TokenKind::And),
                                         ("or", TokenKind::Or),
                                         ("not", TokenKind::Not),
                                         ("mod", TokenKind::Mod),
                                         ("div", TokenKind::Div)];

/// Converts source text into a token stream.
///
/// Whitespace and `#` comments are skipped. Words are matched against the
/// named constants first (producing `Number` tokens), then against the
/// keywords, and otherwise become identifiers that keep their original
/// spelling. Characters that start no token become `Invalid` tokens, which the
/// parser rejects. The stream always ends with an `EndOfFile` token.
///
/// # Parameters
/// - `source`: The text to tokenize.
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// Returns `ParseError::UnterminatedString` if a string literal has no closing
/// quote.
///
/// # Example
/// ```
/// use calcscript::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("IF (x) print PI").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::If,
///                 TokenKind::LParen,
///                 TokenKind::Identifier,
///                 TokenKind::RParen,
///                 TokenKind::Print,
///                 TokenKind::Number,
///                 TokenKind::EndOfFile]);
/// assert_eq!(tokens[5].text, "3.141592653589793");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    tokenize_from_line(source, 1)
}

/// Converts source text that begins on line `first_line` of a larger file
/// into a token stream.
///
/// Behaves like [`tokenize`], but every token's line is counted from
/// `first_line`. Scripts run piece by piece use this so that positions in
/// error messages refer to the whole file.
///
/// # Example
/// ```
/// use calcscript::interpreter::lexer::tokenize_from_line;
///
/// let tokens = tokenize_from_line("a\n  b", 10).unwrap();
///
/// assert_eq!((tokens[0].line, tokens[0].column), (10, 1));
/// assert_eq!((tokens[1].line, tokens[1].column), (11, 3));
/// ```
pub fn tokenize_from_line(source: &str, first_line: usize) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source,
                                                 LexerExtras { line:       first_line,
                                                               line_start: 0, });

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let line = lexer.extras.line;
        let column = source[lexer.extras.line_start..span.start].chars().count() + 1;

        let (kind, text) = match result {
            Ok(TokenKind::String) => {
                let text = decode_string(slice).ok_or(ParseError::UnterminatedString { line,
                                                                                       column })?;
                if let Some(last_newline) = slice.rfind('\n') {
                    lexer.extras.line += slice.matches('\n').count();
                    lexer.extras.line_start = span.start + last_newline + 1;
                }
                (TokenKind::String, text)
            },
            Ok(TokenKind::Identifier) => classify_word(slice),
            Ok(kind) => (kind, slice.to_string()),
            Err(()) => (TokenKind::Invalid, slice.to_string()),
        };

        tokens.push(Token { kind,
                            text,
                            line,
                            column });
    }

    let line = lexer.extras.line;
    let column = source[lexer.extras.line_start..].chars().count() + 1;
    tokens.push(Token { kind: TokenKind::EndOfFile,
                        text: String::new(),
                        line,
                        column });

    Ok(tokens)
}

/// Reclassifies a scanned word as a named constant, a keyword, or an
/// identifier.
fn classify_word(word: &str) -> (TokenKind, String) {
    let lower = word.to_ascii_lowercase();

    if let Some((_, value)) = CONSTANTS.iter().find(|(name, _)| *name == lower) {
        return (TokenKind::Number, value.to_string());
    }
    if let Some((_, kind)) = KEYWORDS.iter().find(|(name, _)| *name == lower) {
        return (*kind, word.to_string());
    }

    (TokenKind::Identifier, word.to_string())
}

/// Strips the quotes from a scanned string literal and resolves its escape
/// sequences.
///
/// `\n`, `\t` and `\r` stand for their control characters; any other escaped
/// character stands for itself.
///
/// # Returns
/// The decoded content, or `None` if the literal is missing its closing quote.
fn decode_string(slice: &str) -> Option<String> {
    let mut chars = slice.chars();
    let quote = chars.next()?;
    let mut decoded = String::with_capacity(slice.len());

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                'n' => decoded.push('\n'),
                't' => decoded.push('\t'),
                'r' => decoded.push('\r'),
                other => decoded.push(other),
            },
            c if c == quote => return Some(decoded),
            c => decoded.push(c),
        }
    }

    None
}
