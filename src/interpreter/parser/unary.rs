use std::rc::Rc;

use crate::{
    ast::{Expression, FunctionLiteral, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{binary::Precedence, core::Parser},
    },
};

impl Parser<'_> {
    pub(super) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(self.current.literal.clone()))
    }

    /// Converts the current `INT` token's text to an `i64`.
    ///
    /// Literals that do not fit are reported rather than wrapped.
    pub(super) fn parse_integer_literal(&mut self) -> Option<Expression> {
        if let Ok(value) = self.current.literal.parse::<i64>() {
            Some(Expression::IntegerLiteral(value))
        } else {
            self.record(ParseError::InvalidInteger { literal: self.current.literal.clone(),
                                                     line:    self.current.line, });
            None
        }
    }

    pub(super) fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::StringLiteral(self.current.literal.clone()))
    }

    pub(super) fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.current_is(TokenKind::True)))
    }

    /// Parses `!<operand>` or `-<operand>`.
    pub(super) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = match self.current.kind {
            TokenKind::Bang => PrefixOperator::Not,
            TokenKind::Minus => PrefixOperator::Negate,
            _ => return None,
        };
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { operator,
                                  operand: Box::new(operand) })
    }

    /// Parses `( <expression> )`. Grouping leaves no node of its own.
    pub(super) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expression)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    ///
    /// The parentheses around the condition are mandatory.
    pub(super) fn parse_if_expression(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::If { condition: Box::new(condition),
                              consequence,
                              alternative })
    }

    /// Parses `fn(<params>) { <body> }`.
    pub(super) fn parse_function_literal(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_comma_separated(Self::parse_parameter, TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Some(Expression::Function(Rc::new(FunctionLiteral { parameters, body })))
    }

    fn parse_parameter(&mut self) -> Option<String> {
        if self.current_is(TokenKind::Ident) {
            Some(self.current.literal.clone())
        } else {
            self.record(ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                      found:    self.current.kind,
                                                      line:     self.current.line, });
            None
        }
    }
}
