use std::rc::Rc;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::class::{Class, Method},
    },
};

impl Parser<'_> {
    /// Parses a single statement, dispatching on its first token.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.peek() {
            Token::Class => self.parse_class_definition(),
            Token::If => self.parse_if(),
            Token::Return => self.parse_return(),
            Token::Print => self.parse_print(),
            Token::Id(_) => self.parse_assignment_or_expression(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses an expression in statement position; its value is discarded.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression()?;
        self.expect_end_of_line()?;
        Ok(expression)
    }

    /// Parses a statement that starts with an identifier.
    ///
    /// The pattern `Id ("." Id)* "="` marks an assignment; anything else is
    /// an expression statement. With no dots the assignment binds a name in
    /// the current scope, otherwise the last segment is a field of the
    /// object named by the preceding segments.
    fn parse_assignment_or_expression(&mut self) -> ParseResult<Statement> {
        let mut offset = 1;
        while *self.peek_at(offset) == Token::Char('.')
            && matches!(self.peek_at(offset + 1), Token::Id(_))
        {
            offset += 2;
        }
        if *self.peek_at(offset) != Token::Char('=') {
            return self.parse_expression_statement();
        }

        let name = self.expect_identifier()?;
        let mut path = Vec::new();
        while self.consume(&Token::Char('.')) {
            path.push(self.expect_identifier()?);
        }
        self.expect(&Token::Char('='))?;
        let value = Box::new(self.parse_expression()?);
        self.expect_end_of_line()?;

        match path.pop() {
            Some(field) => {
                let object = Box::new(Statement::Variable { name, path });
                Ok(Statement::FieldAssignment { object, field, value })
            },
            None => Ok(Statement::Assignment { name, value }),
        }
    }

    /// Parses `print` with zero or more comma-separated arguments.
    fn parse_print(&mut self) -> ParseResult<Statement> {
        self.bump();

        let mut args = Vec::new();
        if !matches!(self.peek(), Token::Newline | Token::Eof) {
            args.push(self.parse_expression()?);
            while self.consume(&Token::Char(',')) {
                args.push(self.parse_expression()?);
            }
        }
        self.expect_end_of_line()?;

        Ok(Statement::Print { args })
    }

    /// Parses a `return` statement.
    fn parse_return(&mut self) -> ParseResult<Statement> {
        self.bump();
        let value = Box::new(self.parse_expression()?);
        self.expect_end_of_line()?;
        Ok(Statement::Return { value })
    }

    /// Parses an `if` statement with an optional `else` branch.
    fn parse_if(&mut self) -> ParseResult<Statement> {
        self.bump();
        let condition = Box::new(self.parse_expression()?);
        let then_body = Box::new(self.parse_suite()?);
        let else_body = if self.consume(&Token::Else) {
            Some(Box::new(self.parse_suite()?))
        } else {
            None
        };
        Ok(Statement::IfElse { condition, then_body, else_body })
    }

    /// Parses a class definition with its methods.
    ///
    /// The parent class, if named, must have been declared earlier in the
    /// program. The finished class is recorded so later code can instantiate
    /// it and derive from it.
    fn parse_class_definition(&mut self) -> ParseResult<Statement> {
        self.bump();
        let name = self.expect_identifier()?;

        let parent = if self.consume(&Token::Char('(')) {
            let parent_name = self.expect_identifier()?;
            self.expect(&Token::Char(')'))?;
            match self.class(&parent_name) {
                Some(class) => Some(class),
                None => return Err(ParseError::UnknownClass { name: parent_name }),
            }
        } else {
            None
        };

        self.expect(&Token::Char(':'))?;
        self.expect(&Token::Newline)?;
        self.expect(&Token::Indent)?;

        let mut methods = Vec::new();
        while *self.peek() == Token::Def {
            methods.push(self.parse_method()?);
        }
        self.expect(&Token::Dedent)?;

        let class = Rc::new(Class::new(name, methods, parent));
        self.declare_class(Rc::clone(&class));
        Ok(Statement::ClassDefinition { class })
    }

    /// Parses a method definition inside a class body.
    ///
    /// The first formal parameter must be the receiver, `self`; it is not
    /// part of the method's parameter list.
    fn parse_method(&mut self) -> ParseResult<Method> {
        self.bump();
        let name = self.expect_identifier()?;

        self.expect(&Token::Char('('))?;
        let receiver = self.expect_identifier()?;
        if receiver != "self" {
            return Err(ParseError::UnexpectedToken { expected: "'self'".to_string(),
                                                     found:    receiver, });
        }
        let mut formal_params = Vec::new();
        while self.consume(&Token::Char(',')) {
            formal_params.push(self.expect_identifier()?);
        }
        self.expect(&Token::Char(')'))?;

        let body = self.parse_suite()?;
        Ok(Method { name,
                    formal_params,
                    body: Statement::MethodBody { body: Box::new(body) } })
    }
}
