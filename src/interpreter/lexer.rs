use std::collections::VecDeque;
use std::fmt;

use logos::Logos;

/// Number of leading spaces that make up one indentation level.
const INDENT_WIDTH: usize = 2;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language, including the
/// virtual `Indent` and `Dedent` tokens that are synthesized from changes in
/// leading whitespace rather than read from the input directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Number(i64),
    /// Identifier tokens; variable, class, field, or method names.
    Id(String),
    /// String literal tokens with escapes already resolved.
    String(String),
    /// Any single punctuation character without a dedicated token, such as
    /// `(`, `.`, `+` or `=`.
    Char(char),
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// `print`
    Print,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `None`
    None,
    /// `True`
    True,
    /// `False`
    False,
    /// End of a logical line.
    Newline,
    /// The indentation level grew by one unit.
    Indent,
    /// The indentation level shrank by one unit.
    Dedent,
    /// End of the input stream.
    Eof,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Id(name) => write!(f, "{name}"),
            Self::String(value) => write!(f, "\"{value}\""),
            Self::Char(c) => write!(f, "{c}"),
            Self::Class => write!(f, "class"),
            Self::Return => write!(f, "return"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::Def => write!(f, "def"),
            Self::Print => write!(f, "print"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::None => write!(f, "None"),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Newline => write!(f, "newline"),
            Self::Indent => write!(f, "indent"),
            Self::Dedent => write!(f, "dedent"),
            Self::Eof => write!(f, "end of input"),
            Self::Eq => write!(f, "=="),
            Self::NotEq => write!(f, "!="),
            Self::LessOrEq => write!(f, "<="),
            Self::GreaterOrEq => write!(f, ">="),
        }
    }
}

/// Raw lexical shapes recognized by the scanner.
///
/// This layer knows nothing about indentation: a `Newline` carries the width
/// of the leading whitespace of the following physical line, and [`Lexer`]
/// turns those widths into `Indent`/`Dedent` tokens. Comments are kept as
/// tokens so that a comment ending the input can be detected.
#[derive(Logos, Debug, Clone, PartialEq)]
enum RawToken {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),

    /// `class`
    #[token("class")]
    Class,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `def`
    #[token("def")]
    Def,
    /// `print`
    #[token("print")]
    Print,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `None`
    #[token("None")]
    None,
    /// `True`
    #[token("True")]
    True,
    /// `False`
    #[token("False")]
    False,

    /// Identifier tokens, such as `x` or `_count2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Id(String),

    /// String literals in single or double quotes. Strings do not span lines.
    #[regex(r#""([^"\\\n]|\\.)*""#, unescape_string)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#, unescape_string)]
    String(String),

    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<=`
    #[token("<=")]
    LessOrEq,
    /// `>=`
    #[token(">=")]
    GreaterOrEq,

    /// A physical line break together with the leading spaces of the next
    /// line. The payload is the number of those spaces.
    #[regex(r"\n[ ]*", |lex| lex.slice().len() - 1)]
    Newline(usize),

    /// `# Comments.` The terminating line break is not part of the match.
    #[regex(r"#[^\n]*")]
    Comment,

    /// Whitespace inside a line separates tokens and produces nothing.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Whitespace,

    /// Any other single character.
    #[regex(r".", |lex| lex.slice().chars().next(), priority = 0)]
    Char(char),
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice does not fit into an `i64`.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Resolves the escape sequences of a quoted string literal.
///
/// The surrounding quotes are stripped. `\'`, `\"`, `\n` and `\t` produce
/// the escaped character; any other escape is dropped.
fn unescape_string(lex: &logos::Lexer<RawToken>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some(quote @ ('\'' | '"')) => value.push(quote),
            _ => {}
        }
    }
    value
}

/// A pull-model token stream with indentation synthesis.
///
/// The lexer tracks two counters: `target_indent`, the level implied by the
/// leading whitespace of the current logical line, and `current_indent`, the
/// level already communicated to the consumer. At the start of every
/// non-blank line the gap between the two is closed by emitting `Indent` or
/// `Dedent` tokens before the first real token of the line. One indentation
/// unit is two spaces.
///
/// Construction advances to the first token, so [`Lexer::current_token`]
/// never fails. The lexer itself never fails either: input that matches no
/// rule is elided or becomes a [`Token::Char`], and syntax errors are left to
/// the parser.
///
/// # Example
/// ```
/// use pyrite::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 7");
///
/// assert_eq!(*lexer.current_token(), Token::Id("x".to_string()));
/// assert_eq!(*lexer.next_token(), Token::Char('='));
/// assert_eq!(*lexer.next_token(), Token::Number(7));
/// ```
pub struct Lexer<'a> {
    raw: logos::Lexer<'a, RawToken>,
    pending: VecDeque<Token>,
    current: Token,
    at_line_start: bool,
    current_indent: usize,
    target_indent: usize,
    reached_eof: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` and advances to the first token.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        // The scanner only reports leading whitespace after a line break, so
        // the first line's indentation is measured here.
        let first_indent = source.chars().take_while(|&c| c == ' ').count();

        let mut lexer = Self { raw: RawToken::lexer(source),
                               pending: VecDeque::new(),
                               current: Token::Eof,
                               at_line_start: true,
                               current_indent: 0,
                               target_indent: first_indent / INDENT_WIDTH,
                               reached_eof: false, };
        lexer.next_token();
        lexer
    }

    /// Returns the most recently produced token.
    #[must_use]
    pub const fn current_token(&self) -> &Token {
        &self.current
    }

    /// Advances the stream and returns the new current token.
    ///
    /// Once the end of the input has been reached, every further call keeps
    /// returning [`Token::Eof`].
    pub fn next_token(&mut self) -> &Token {
        if self.pending.is_empty() && !self.reached_eof {
            self.scan();
        }
        self.current = self.pending.pop_front().unwrap_or(Token::Eof);
        &self.current
    }

    /// Consumes raw tokens until at least one cooked token is queued.
    fn scan(&mut self) {
        loop {
            let raw = match self.raw.next() {
                Some(Ok(token)) => token,
                // Input that matches no rule is silently elided.
                Some(Err(())) => continue,
                Option::None => {
                    self.flush_end_of_stream();
                    return;
                }
            };

            match raw {
                RawToken::Newline(spaces) => {
                    if self.line_break(spaces) {
                        return;
                    }
                }
                RawToken::Comment => match self.raw.next() {
                    // The line break after the comment is processed as usual.
                    Some(Ok(RawToken::Newline(spaces))) => {
                        if self.line_break(spaces) {
                            return;
                        }
                    }
                    // The input ends inside the comment.
                    _ => {
                        self.pending.push_back(Token::Eof);
                        self.reached_eof = true;
                        return;
                    }
                },
                token => {
                    if self.at_line_start {
                        self.at_line_start = false;
                        self.close_indent_gap();
                    }
                    self.pending.push_back(cook(token));
                    return;
                }
            }
        }
    }

    /// Registers a physical line break and returns whether a `Newline` token
    /// was emitted.
    ///
    /// Line breaks at the start of a line (blank lines, leading newlines)
    /// emit nothing and only update the pending indentation target, so runs
    /// of consecutive breaks collapse to at most one `Newline`.
    fn line_break(&mut self, spaces: usize) -> bool {
        self.target_indent = spaces / INDENT_WIDTH;
        if self.at_line_start {
            return false;
        }
        self.at_line_start = true;
        self.pending.push_back(Token::Newline);
        true
    }

    /// Emits the `Indent`/`Dedent` run that moves `current_indent` to
    /// `target_indent`.
    fn close_indent_gap(&mut self) {
        while self.current_indent < self.target_indent {
            self.current_indent += 1;
            self.pending.push_back(Token::Indent);
        }
        while self.current_indent > self.target_indent {
            self.current_indent -= 1;
            self.pending.push_back(Token::Dedent);
        }
    }

    /// Queues the final tokens once the input is exhausted: a `Newline` if a
    /// line was still open, one `Dedent` per open indentation level, and the
    /// terminating `Eof`.
    fn flush_end_of_stream(&mut self) {
        if !self.at_line_start {
            self.at_line_start = true;
            self.pending.push_back(Token::Newline);
        }
        while self.current_indent > 0 {
            self.current_indent -= 1;
            self.pending.push_back(Token::Dedent);
        }
        self.pending.push_back(Token::Eof);
        self.reached_eof = true;
    }
}

/// Converts a raw scanner token into its public counterpart.
fn cook(raw: RawToken) -> Token {
    match raw {
        RawToken::Number(value) => Token::Number(value),
        RawToken::Id(name) => Token::Id(name),
        RawToken::String(value) => Token::String(value),
        RawToken::Char(c) => Token::Char(c),
        RawToken::Class => Token::Class,
        RawToken::Return => Token::Return,
        RawToken::If => Token::If,
        RawToken::Else => Token::Else,
        RawToken::Def => Token::Def,
        RawToken::Print => Token::Print,
        RawToken::And => Token::And,
        RawToken::Or => Token::Or,
        RawToken::Not => Token::Not,
        RawToken::None => Token::None,
        RawToken::True => Token::True,
        RawToken::False => Token::False,
        RawToken::Eq => Token::Eq,
        RawToken::NotEq => Token::NotEq,
        RawToken::LessOrEq => Token::LessOrEq,
        RawToken::GreaterOrEq => Token::GreaterOrEq,
        // Line structure is handled before conversion, and whitespace is
        // skipped by the scanner.
        RawToken::Newline(_) | RawToken::Comment | RawToken::Whitespace => unreachable!(),
    }
}
