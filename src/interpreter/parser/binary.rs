use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

/// How tightly an operator binds, from loosest to tightest.
///
/// The derived ordering follows declaration order, so `Lowest < Equals <
/// ... < Call`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting precedence, and that of any token that is not an operator.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<`, `>`, `<=` and `>=`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `-` and `!`
    Prefix,
    /// Call parentheses
    Call,
}

impl Precedence {
    /// The binding precedence of `kind` when it appears in infix position.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    let operator = match kind {
        TokenKind::Plus => InfixOperator::Add,
        TokenKind::Minus => InfixOperator::Sub,
        TokenKind::Asterisk => InfixOperator::Mul,
        TokenKind::Slash => InfixOperator::Div,
        TokenKind::Lt => InfixOperator::Less,
        TokenKind::Gt => InfixOperator::Greater,
        TokenKind::LtEq => InfixOperator::LessEqual,
        TokenKind::GtEq => InfixOperator::GreaterEqual,
        TokenKind::Eq => InfixOperator::Equal,
        TokenKind::NotEq => InfixOperator::NotEqual,
        _ => return None,
    };
    Some(operator)
}

impl Parser<'_> {
    /// Parses `<left> <op> <right>` with the operator as the current token.
    pub(super) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = infix_operator(self.current.kind)?;
        let precedence = self.current_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { operator,
                                 left: Box::new(left),
                                 right: Box::new(right) })
    }

    /// Parses a call's argument list with `(` as the current token.
    pub(super) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_comma_separated(|parser| parser.parse_expression(Precedence::Lowest),
                                                   TokenKind::RParen)?;

        Some(Expression::Call { function: Box::new(function),
                                arguments })
    }
}
