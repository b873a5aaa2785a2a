use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses statements up to the matching `}`.
    ///
    /// Called with `{` as the current token and leaves the `}` current.
    /// Running into the end of input first is a syntax error.
    pub(super) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let mut block = BlockStatement::default();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                self.record(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                          found:    TokenKind::Eof,
                                                          line:     self.current.line, });
                return None;
            }
            if let Some(statement) = self.parse_statement() {
                block.statements.push(statement);
            }
            self.next_token();
        }

        Some(block)
    }
}
