use crate::{
    ast::{BinaryOperator, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, logical OR, and descends through the
    /// precedence hierarchy.
    ///
    /// Grammar: `expression := or_term`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Statement> {
        self.parse_or()
    }

    /// Grammar: `or_term := and_term ("or" and_term)*`
    fn parse_or(&mut self) -> ParseResult<Statement> {
        let mut left = self.parse_and()?;
        while self.consume(&Token::Or) {
            let right = self.parse_and()?;
            left = Statement::BinaryOp { op:    BinaryOperator::Or,
                                         left:  Box::new(left),
                                         right: Box::new(right), };
        }
        Ok(left)
    }

    /// Grammar: `and_term := not_term ("and" not_term)*`
    fn parse_and(&mut self) -> ParseResult<Statement> {
        let mut left = self.parse_not()?;
        while self.consume(&Token::And) {
            let right = self.parse_not()?;
            left = Statement::BinaryOp { op:    BinaryOperator::And,
                                         left:  Box::new(left),
                                         right: Box::new(right), };
        }
        Ok(left)
    }

    /// Grammar: `not_term := "not" not_term | comparison`
    fn parse_not(&mut self) -> ParseResult<Statement> {
        if self.consume(&Token::Not) {
            let arg = Box::new(self.parse_not()?);
            return Ok(Statement::Not { arg });
        }
        self.parse_comparison()
    }

    /// Grammar: `comparison := arith [comparator arith]`
    ///
    /// Comparisons do not chain: `a < b < c` is a syntax error, because the
    /// second `<` finds no expression to its left.
    fn parse_comparison(&mut self) -> ParseResult<Statement> {
        let left = self.parse_arithmetic()?;

        let op = match self.peek() {
            Token::Eq => BinaryOperator::Equal,
            Token::NotEq => BinaryOperator::NotEqual,
            Token::LessOrEq => BinaryOperator::LessEqual,
            Token::GreaterOrEq => BinaryOperator::GreaterEqual,
            Token::Char('<') => BinaryOperator::Less,
            Token::Char('>') => BinaryOperator::Greater,
            _ => return Ok(left),
        };
        self.bump();

        let right = self.parse_arithmetic()?;
        Ok(Statement::BinaryOp { op, left: Box::new(left), right: Box::new(right) })
    }

    /// Grammar: `arith := term (("+" | "-") term)*`
    fn parse_arithmetic(&mut self) -> ParseResult<Statement> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek() {
                Token::Char('+') => BinaryOperator::Add,
                Token::Char('-') => BinaryOperator::Sub,
                _ => break,
            };
            self.bump();
            let right = self.parse_term()?;
            left = Statement::BinaryOp { op, left: Box::new(left), right: Box::new(right) };
        }
        Ok(left)
    }

    /// Grammar: `term := unary (("*" | "/") unary)*`
    fn parse_term(&mut self) -> ParseResult<Statement> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Token::Char('*') => BinaryOperator::Mul,
                Token::Char('/') => BinaryOperator::Div,
                _ => break,
            };
            self.bump();
            let right = self.parse_unary()?;
            left = Statement::BinaryOp { op, left: Box::new(left), right: Box::new(right) };
        }
        Ok(left)
    }

    /// Grammar: `unary := "-" unary | primary`
    ///
    /// Negation is rewritten as subtraction from zero; the lexer never fuses
    /// a minus sign with a number literal.
    fn parse_unary(&mut self) -> ParseResult<Statement> {
        if self.consume(&Token::Char('-')) {
            let operand = self.parse_unary()?;
            let zero = Statement::Literal { value: LiteralValue::Number(0) };
            return Ok(Statement::BinaryOp { op:    BinaryOperator::Sub,
                                            left:  Box::new(zero),
                                            right: Box::new(operand), });
        }
        self.parse_primary()
    }

    /// Parses a primary expression: a literal, a parenthesized expression,
    /// or a name chain.
    fn parse_primary(&mut self) -> ParseResult<Statement> {
        match self.bump() {
            Token::Number(value) => Ok(Statement::Literal { value: LiteralValue::Number(value) }),
            Token::String(value) => Ok(Statement::Literal { value: LiteralValue::String(value) }),
            Token::True => Ok(Statement::Literal { value: LiteralValue::Bool(true) }),
            Token::False => Ok(Statement::Literal { value: LiteralValue::Bool(false) }),
            Token::None => Ok(Statement::Literal { value: LiteralValue::None }),
            Token::Char('(') => {
                let expression = self.parse_expression()?;
                self.expect(&Token::Char(')'))?;
                Ok(expression)
            },
            Token::Id(name) => self.parse_name_expression(name),
            other => Err(ParseError::UnexpectedToken { expected: "an expression".to_string(),
                                                       found:    other.to_string(), }),
        }
    }

    /// Parses the continuation of an expression that started with an
    /// identifier.
    ///
    /// A parenthesis right after the name is a call: `str(...)` converts its
    /// argument into a string, and a known class name builds a new instance.
    /// Otherwise the name begins a dotted chain of field accesses, which a
    /// call may terminate by turning the chain into a method call.
    fn parse_name_expression(&mut self, name: String) -> ParseResult<Statement> {
        if *self.peek() == Token::Char('(') {
            if name == "str" {
                self.bump();
                let arg = Box::new(self.parse_expression()?);
                self.expect(&Token::Char(')'))?;
                return self.parse_call_chain(Statement::Stringify { arg });
            }
            let Some(class) = self.class(&name) else {
                return Err(ParseError::UnknownClass { name });
            };
            let args = self.parse_call_args()?;
            return self.parse_call_chain(Statement::NewInstance { class, args });
        }

        let mut path = Vec::new();
        while *self.peek() == Token::Char('.') {
            self.bump();
            let segment = self.expect_identifier()?;
            if *self.peek() == Token::Char('(') {
                let args = self.parse_call_args()?;
                let object = Box::new(Statement::Variable { name, path });
                let call = Statement::MethodCall { object, method: segment, args };
                return self.parse_call_chain(call);
            }
            path.push(segment);
        }
        Ok(Statement::Variable { name, path })
    }

    /// Parses trailing `.name(args)` method calls on a computed value.
    fn parse_call_chain(&mut self, mut object: Statement) -> ParseResult<Statement> {
        while *self.peek() == Token::Char('.') {
            self.bump();
            let method = self.expect_identifier()?;
            let args = self.parse_call_args()?;
            object = Statement::MethodCall { object: Box::new(object), method, args };
        }
        Ok(object)
    }

    /// Parses a parenthesized, comma-separated argument list.
    fn parse_call_args(&mut self) -> ParseResult<Vec<Statement>> {
        self.expect(&Token::Char('('))?;

        let mut args = Vec::new();
        if self.consume(&Token::Char(')')) {
            return Ok(args);
        }
        args.push(self.parse_expression()?);
        while self.consume(&Token::Char(',')) {
            args.push(self.parse_expression()?);
        }
        self.expect(&Token::Char(')'))?;
        Ok(args)
    }
}
