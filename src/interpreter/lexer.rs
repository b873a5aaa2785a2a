use logos::Logos;

/// The kind of a lexical token.
///
/// The enum is driven by `logos`: every variant carrying a `#[token]` or
/// `#[regex]` attribute is produced by the scanner. `Illegal` and `Eof` are
/// synthesized by [`Lexer::next_token`] for unrecognized input and for the end
/// of the source.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Input the scanner does not recognize.
    Illegal,
    /// End of input.
    Eof,

    /// Identifier tokens such as `x` or `add_two`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    /// Integer literals such as `42`. The text is converted by the parser.
    #[regex(r"[0-9]+")]
    Int,
    /// String literals such as `"hello"`. Escapes are not supported.
    #[regex(r#""[^"]*""#)]
    String,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,

    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `<=`
    #[token("<=")]
    LtEq,
    /// `>=`
    #[token(">=")]
    GtEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks. Skipped, but counted for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number so that syntax errors can point at it.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A single token: its kind, the source text it was scanned from, and the
/// line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:    TokenKind,
    /// The source slice. For strings this excludes the quotes.
    pub literal: String,
    /// 1-based source line.
    pub line:    usize,
}

impl Token {
    fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               literal: String::new(),
               line }
    }
}

/// Pull-based scanner over a source string.
///
/// Wraps a `logos` lexer and adapts it to the parser's needs: scan errors
/// become [`TokenKind::Illegal`] tokens instead of stopping the scan, and the
/// end of input is reported as [`TokenKind::Eof`] on every call after the last
/// real token.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
/// let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
///                                 let token = lexer.next_token();
///                                 (token.kind != TokenKind::Eof).then_some(token.kind)
///                             }).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let, TokenKind::Ident, TokenKind::Assign, TokenKind::Int,
///             TokenKind::Semicolon]);
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }),
               finished: false, }
    }

    /// Returns the next token in the source.
    ///
    /// Never fails: unrecognized characters (and unterminated strings) are
    /// returned as `Illegal` tokens carrying the offending text, and once the
    /// input is exhausted every further call returns `Eof`.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::eof(self.inner.extras.line);
        }

        match self.inner.next() {
            Some(Ok(kind)) => {
                let slice = self.inner.slice();
                let literal = if kind == TokenKind::String {
                    slice[1..slice.len() - 1].to_string()
                } else {
                    slice.to_string()
                };
                Token { kind,
                        literal,
                        line: self.inner.extras.line }
            },
            Some(Err(())) => Token { kind:    TokenKind::Illegal,
                                     literal: self.inner.slice().to_string(),
                                     line:    self.inner.extras.line, },
            None => {
                self.finished = true;
                Token::eof(self.inner.extras.line)
            },
        }
    }
}
