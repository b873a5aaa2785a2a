use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::{binary::Precedence, core::Parser},
    },
};

impl Parser<'_> {
    /// Parses one statement starting at the current token.
    ///
    /// An identifier directly followed by `=` is an assignment; a `{` in
    /// statement position opens a nested block. A trailing `;` is consumed
    /// even when the expression before it failed to parse.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::LBrace => {
                let block = self.parse_block_statement()?;
                self.skip_semicolon();
                Some(Statement::Block(block))
            },
            TokenKind::Ident if self.peek_is(TokenKind::Assign) => self.parse_assign_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expression>;`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = self.current.literal.clone();
        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Let { name, value: value? })
    }

    /// `<ident> = <expression>;`
    fn parse_assign_statement(&mut self) -> Option<Statement> {
        let name = self.current.literal.clone();
        self.next_token();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Assign { name, value: value? })
    }

    /// `return <expression>;`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Return { value: value? })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Expression(expression?))
    }
}
