use tracing::{debug, trace};

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::binary::Precedence,
    },
};

/// A prefix parse function: builds an expression rooted at the current token.
pub(super) type PrefixParseFn<'src> = fn(&mut Parser<'src>) -> Option<Expression>;
/// An infix parse function: extends an already parsed left-hand side.
pub(super) type InfixParseFn<'src> = fn(&mut Parser<'src>, Expression) -> Option<Expression>;

/// A precedence-climbing (Pratt) parser.
///
/// The parser pulls tokens from a [`Lexer`] and keeps two of them in view:
/// `current` and `peek`. Expressions are built by looking up a prefix parse
/// function for the current token, then repeatedly handing the result to the
/// infix parse function of the next token while that token binds tighter than
/// the surrounding context.
///
/// Syntax errors never stop the parse. They are recorded and the parser
/// resumes at the next token, so one pass can report several mistakes.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub struct Parser<'src> {
    lexer:              Lexer<'src>,
    pub(super) current: Token,
    pub(super) peek:    Token,
    errors:             Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes both lookahead slots.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self { lexer,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Parses the whole input into a [`Program`].
    ///
    /// Statements whose construction failed are left out; the reasons are
    /// available from [`Parser::errors`]. Callers must not evaluate the
    /// program unless that list is empty.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        debug!(statements = program.statements.len(),
               errors = self.errors.len(),
               "parsed program");
        program
    }

    /// The syntax errors recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its syntax errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// Infix operators recurse with their own precedence rather than one
    /// less, so an operator of equal precedence to the right ends the
    /// recursion and is picked up by the caller's loop instead. That makes
    /// every binary operator left-associative.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = Self::prefix_parse_fn(self.current.kind) else {
            self.record(ParseError::NoPrefixParseFn { kind: self.current.kind,
                                                      line: self.current.line, });
            return None;
        };

        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_parse_fn(self.peek.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    /// The prefix dispatch table.
    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<'src>> {
        let parse: PrefixParseFn<'src> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            _ => return None,
        };
        Some(parse)
    }

    /// The infix dispatch table.
    fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<'src>> {
        let parse: InfixParseFn<'src> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::LtEq
            | TokenKind::GtEq => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            _ => return None,
        };
        Some(parse)
    }

    /// Advances both lookahead slots by one token.
    pub(super) fn next_token(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    pub(super) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the next token is `kind`; otherwise records an
    /// `UnexpectedToken` error and stays put.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.record(ParseError::UnexpectedToken { expected: kind,
                                                      found:    self.peek.kind,
                                                      line:     self.peek.line, });
            None
        }
    }

    /// Consumes a trailing `;` if there is one.
    pub(super) fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    pub(super) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(super) fn record(&mut self, error: ParseError) {
        trace!(%error, "syntax error");
        self.errors.push(error);
    }
}
