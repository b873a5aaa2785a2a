use crate::interpreter::{lexer::TokenKind, parser::core::Parser};

impl Parser<'_> {
    /// Parses `item, item, ...` up to and including `closing`.
    ///
    /// Called with the opening delimiter as the current token. `parse_item`
    /// runs with the first token of each item as the current token. Returns
    /// `None` as soon as an item or the closing delimiter is missing.
    pub(super) fn parse_comma_separated<T>(&mut self,
                                           mut parse_item: impl FnMut(&mut Self) -> Option<T>,
                                           closing: TokenKind)
                                           -> Option<Vec<T>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(parse_item(self)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(parse_item(self)?);
        }

        self.expect_peek(closing)?;
        Some(items)
    }
}
