use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        value::class::Class,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over the lexer's token stream.
///
/// The lexer is a pull model with a single current token, so the parser
/// keeps a small buffer of tokens it has pulled but not yet consumed; this
/// gives the statement grammar the two-or-three tokens of lookahead it needs
/// to tell an assignment target from an expression.
///
/// Classes are resolved at parse time: the parser records every class
/// definition it has seen, looks parent classes up in that table, and turns
/// a call on a known class name into an instantiation node.
pub struct Parser<'a> {
    lexer:     Lexer<'a>,
    lookahead: VecDeque<Token>,
    classes:   HashMap<String, Rc<Class>>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `lexer`.
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut lookahead = VecDeque::new();
        lookahead.push_back(lexer.current_token().clone());
        Self { lexer, lookahead, classes: HashMap::new() }
    }

    /// Parses a whole program: statements up to the end of the input.
    ///
    /// The program is returned as a single compound statement owning all
    /// top-level statements in source order.
    ///
    /// # Errors
    /// Returns the first syntax error encountered.
    pub fn parse_program(&mut self) -> ParseResult<Statement> {
        let mut statements = Vec::new();
        loop {
            if self.consume(&Token::Newline) {
                continue;
            }
            if *self.peek() == Token::Eof {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(Statement::Compound { statements })
    }

    /// Parses an indented suite: `":" Newline Indent statement* Dedent`.
    pub(crate) fn parse_suite(&mut self) -> ParseResult<Statement> {
        self.expect(&Token::Char(':'))?;
        self.expect(&Token::Newline)?;
        self.expect(&Token::Indent)?;

        let mut statements = Vec::new();
        loop {
            if self.consume(&Token::Dedent) {
                break;
            }
            if *self.peek() == Token::Eof {
                return Err(ParseError::UnexpectedToken { expected: "a dedent".to_string(),
                                                         found:    Token::Eof.to_string(), });
            }
            if self.consume(&Token::Newline) {
                continue;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(Statement::Compound { statements })
    }

    /// Returns the next unconsumed token.
    pub(crate) fn peek(&mut self) -> &Token {
        self.peek_at(0)
    }

    /// Returns the unconsumed token `offset` positions ahead.
    pub(crate) fn peek_at(&mut self, offset: usize) -> &Token {
        while self.lookahead.len() <= offset {
            let token = self.lexer.next_token().clone();
            self.lookahead.push_back(token);
        }
        &self.lookahead[offset]
    }

    /// Consumes and returns the next token.
    pub(crate) fn bump(&mut self) -> Token {
        self.peek_at(0);
        self.lookahead.pop_front().unwrap_or(Token::Eof)
    }

    /// Consumes the next token if it equals `token`.
    pub(crate) fn consume(&mut self, token: &Token) -> bool {
        if self.peek() == token {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes the next token, which must equal `token`.
    pub(crate) fn expect(&mut self, token: &Token) -> ParseResult<()> {
        if self.consume(token) {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: format!("'{token}'"),
                                              found:    self.peek().to_string(), })
        }
    }

    /// Consumes the next token, which must be an identifier, and returns its
    /// name.
    pub(crate) fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.bump() {
            Token::Id(name) => Ok(name),
            other => Err(ParseError::ExpectedIdentifier { found: other.to_string() }),
        }
    }

    /// Consumes the end of a simple statement: a newline, or the end of the
    /// input.
    pub(crate) fn expect_end_of_line(&mut self) -> ParseResult<()> {
        if *self.peek() == Token::Eof {
            return Ok(());
        }
        self.expect(&Token::Newline)
    }

    /// Looks up a class declared earlier in the program.
    pub(crate) fn class(&self, name: &str) -> Option<Rc<Class>> {
        self.classes.get(name).cloned()
    }

    /// Records a class declaration for later lookup.
    pub(crate) fn declare_class(&mut self, class: Rc<Class>) {
        self.classes.insert(class.name().to_string(), class);
    }
}
