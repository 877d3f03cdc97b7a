//! The `Parser` struct: owns the token stream, name registry, and options
//! for a single `parse` call, and the small helpers every grammar-
//! production module builds on (§4.2 "Contract", §5: "one `parse`
//! invocation owns all state ... as local variables").

use widl_util::{NameRegistry, Span};

use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParserOptions;
use crate::token_stream::TokenStream;

pub type Result<T> = std::result::Result<T, ParseError>;

pub struct Parser {
    pub(crate) stream: TokenStream,
    pub(crate) options: ParserOptions,
    pub(crate) registry: NameRegistry,
    /// Label of the definition currently being parsed, used to prefix
    /// error messages (§7): e.g. `"partial interface Foo"`.
    current: Option<String>,
}

impl Parser {
    pub fn new(lexemes: Vec<widl_lex::Lexeme>, options: ParserOptions) -> Self {
        Self {
            stream: TokenStream::new(lexemes, options.ws),
            options,
            registry: NameRegistry::new(),
            current: None,
        }
    }

    /// Run `body` with `label` installed as the "current definition" for
    /// the duration, restoring whatever was installed before on return
    /// (containers can nest inside the top-level loop's own bookkeeping).
    pub(crate) fn with_current<T>(
        &mut self,
        label: String,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let previous = self.current.replace(label);
        let result = body(self);
        self.current = previous;
        result
    }

    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        let upcoming = self.stream.upcoming(5).to_vec();
        ParseError::new(kind, self.stream.current_line(), self.current.as_deref(), &upcoming)
    }

    pub(crate) fn span(&self) -> Span {
        self.stream.current_span()
    }

    pub(crate) fn expect_punct(&mut self, text: &str, context: &str) -> Result<()> {
        if self.stream.eat_punct(text) {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::MissingToken {
                expected: format!("`{text}`"),
                context: context.to_string(),
            }))
        }
    }

    pub(crate) fn expect_semicolon(&mut self, after: &str) -> Result<()> {
        if self.stream.eat_punct(";") {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::MissingSemicolon(after.to_string())))
        }
    }

    pub(crate) fn expect_keyword(&mut self, keyword: &str, context: &str) -> Result<()> {
        if self.stream.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::MissingToken {
                expected: format!("`{keyword}`"),
                context: context.to_string(),
            }))
        }
    }

    pub(crate) fn expect_identifier(&mut self, context: &str) -> Result<String> {
        self.stream.eat_identifier().ok_or_else(|| {
            self.error(ParseErrorKind::MissingToken {
                expected: "identifier".to_string(),
                context: context.to_string(),
            })
        })
    }

    pub(crate) fn declare(&mut self, name: &str, kind: &'static str) -> Result<()> {
        self.registry
            .declare(name, kind)
            .map_err(|e| self.error(e.into()))
    }
}
