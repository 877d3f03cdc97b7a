//! `TokenStream`: the parser's view over a lexed source (§4.2 "Contract").
//!
//! Wraps the flat `Vec<Lexeme>` the lexer produces with a cursor that skips
//! trivia transparently for grammar dispatch while still letting callers
//! collect it explicitly. `checkpoint`/`restore` give the parser the local
//! backtracking §4.2 allows for `implements`/`includes` disambiguation and
//! for the bounded `...` variadic lookahead — implemented here as a cheap
//! index snapshot rather than the spec's literal "push tokens back onto a
//! queue", since the stream is a plain slice and cloning an index is
//! equivalent and simpler (recorded in the grounding ledger).

use widl_lex::{mark_post_ea, refine_comment_run, refine_whitespace, Lexeme, LexemeKind, TriviaToken};
use widl_util::Span;

/// An index into the underlying lexeme vector, restorable with `restore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint(usize);

pub struct TokenStream {
    lexemes: Vec<Lexeme>,
    pos: usize,
    capture_trivia: bool,
}

impl TokenStream {
    pub fn new(lexemes: Vec<Lexeme>, capture_trivia: bool) -> Self {
        Self {
            lexemes,
            pos: 0,
            capture_trivia,
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    /// The line of the next significant lexeme, or of the last lexeme in
    /// the stream if only trivia/nothing remains — used to stamp error
    /// locations near end-of-input.
    pub fn current_line(&self) -> u32 {
        let mut i = self.pos;
        while i < self.lexemes.len() && self.lexemes[i].is_trivia() {
            i += 1;
        }
        if i < self.lexemes.len() {
            self.lexemes[i].span.line
        } else {
            self.lexemes.last().map(|l| l.span.line).unwrap_or(1)
        }
    }

    pub fn current_span(&self) -> Span {
        Span::new(self.current_line())
    }

    /// Up to `n` unconsumed lexemes (trivia included), for `ParseError`'s
    /// `tokens`/`input` snapshot.
    pub fn upcoming(&self, n: usize) -> &[Lexeme] {
        let end = (self.pos + n).min(self.lexemes.len());
        &self.lexemes[self.pos..end]
    }

    /// Consume and discard (or capture) every trivia lexeme starting at
    /// the cursor. The single mutating primitive behind both plain token
    /// consumption (`capture = false`) and explicit `take_trivia` calls.
    fn drain_trivia(&mut self, capture: bool) -> Option<Vec<TriviaToken>> {
        let mut collected = if capture { Some(Vec::new()) } else { None };
        while self.pos < self.lexemes.len() && self.lexemes[self.pos].is_trivia() {
            let lexeme = &self.lexemes[self.pos];
            if let Some(tokens) = collected.as_mut() {
                match lexeme.kind {
                    LexemeKind::Whitespace => tokens.extend(refine_whitespace(&lexeme.text)),
                    LexemeKind::Comment => tokens.extend(refine_comment_run(&lexeme.text)),
                    _ => unreachable!("is_trivia implies Whitespace or Comment"),
                }
            }
            self.pos += 1;
        }
        collected
    }

    /// Explicitly collect the trivia immediately at the cursor, honoring
    /// `ParserOptions::ws`. Call sites that don't want trivia attached
    /// still need to advance past it, which this also does.
    pub fn take_trivia(&mut self) -> Option<Vec<TriviaToken>> {
        self.drain_trivia(self.capture_trivia)
    }

    /// Like `take_trivia`, but marks every collected token `post_ea`
    /// (§4.2.8's "-pea" suffix), for trivia immediately preceding a member
    /// or argument.
    pub fn take_trivia_pea(&mut self) -> Option<Vec<TriviaToken>> {
        self.drain_trivia(self.capture_trivia).map(mark_post_ea)
    }

    /// The next significant (non-trivia) lexeme without consuming anything,
    /// including the trivia that precedes it.
    pub fn peek(&self) -> Option<&Lexeme> {
        let mut i = self.pos;
        while i < self.lexemes.len() && self.lexemes[i].is_trivia() {
            i += 1;
        }
        self.lexemes.get(i)
    }

    /// The `n`th significant lexeme ahead (0 = next), skipping trivia and
    /// without consuming anything. Used for the implements/includes and
    /// `...` lookahead.
    pub fn peek_significant_n(&self, n: usize) -> Option<&Lexeme> {
        let mut i = self.pos;
        let mut seen = 0;
        loop {
            while i < self.lexemes.len() && self.lexemes[i].is_trivia() {
                i += 1;
            }
            let lexeme = self.lexemes.get(i)?;
            if seen == n {
                return Some(lexeme);
            }
            seen += 1;
            i += 1;
        }
    }

    pub fn peek_text(&self) -> Option<&str> {
        self.peek().map(|l| l.text.as_str())
    }

    /// Whether the next significant lexeme is `Other` with the exact text
    /// `text` (used for punctuation like `{`, `;`, `=`).
    pub fn peek_punct(&self, text: &str) -> bool {
        matches!(self.peek(), Some(l) if l.kind == LexemeKind::Other && l.text == text)
    }

    /// Whether the next significant lexeme is an identifier whose raw
    /// (unescaped) text equals `keyword`. Keyword dispatch always compares
    /// raw text so that an escaped `_interface` never matches the
    /// `interface` keyword (§4.2's underscore-escape rule).
    pub fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(l) if l.kind == LexemeKind::Identifier && l.text == keyword)
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_none()
    }

    /// Consume the next significant lexeme (dropping any trivia before it,
    /// honoring `capture_trivia` only via the explicit `take_trivia*`
    /// calls a caller makes first). Returns `None` at end of input.
    pub fn advance(&mut self) -> Option<Lexeme> {
        while self.pos < self.lexemes.len() && self.lexemes[self.pos].is_trivia() {
            self.pos += 1;
        }
        if self.pos >= self.lexemes.len() {
            return None;
        }
        let lexeme = self.lexemes[self.pos].clone();
        self.pos += 1;
        Some(lexeme)
    }

    /// Consume the next significant lexeme if it is punctuation matching
    /// `text` exactly.
    pub fn eat_punct(&mut self, text: &str) -> bool {
        if self.peek_punct(text) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the next significant lexeme if it is an identifier with raw
    /// text `keyword`.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.peek_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume an identifier lexeme, stripping exactly one leading
    /// underscore escape (§4.2: `_interface` names a type called
    /// `interface`). Returns `None` if the next significant lexeme is not
    /// an identifier.
    pub fn eat_identifier(&mut self) -> Option<String> {
        if matches!(self.peek(), Some(l) if l.kind == LexemeKind::Identifier) {
            let lexeme = self.advance().unwrap();
            Some(strip_underscore_escape(&lexeme.text))
        } else {
            None
        }
    }

    /// Three consecutive `Other` lexemes of `.` starting at the cursor,
    /// consumed together as the `...` variadic marker (§4.1: the lexer
    /// never special-cases `...`, the parser detects it via 3-lookahead).
    pub fn eat_ellipsis(&mut self) -> bool {
        let dot = |l: &Lexeme| l.kind == LexemeKind::Other && l.text == ".";
        let is_ellipsis = matches!(
            (
                self.peek_significant_n(0),
                self.peek_significant_n(1),
                self.peek_significant_n(2),
            ),
            (Some(a), Some(b), Some(c)) if dot(a) && dot(b) && dot(c)
        );
        if is_ellipsis {
            self.advance();
            self.advance();
            self.advance();
        }
        is_ellipsis
    }
}

fn strip_underscore_escape(text: &str) -> String {
    text.strip_prefix('_').unwrap_or(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use widl_lex::tokenise;

    fn stream(src: &str, ws: bool) -> TokenStream {
        TokenStream::new(tokenise(src).unwrap(), ws)
    }

    #[test]
    fn peek_skips_trivia_without_consuming() {
        let mut s = stream("  interface", false);
        assert_eq!(s.peek_text(), Some("interface"));
        assert_eq!(s.peek_text(), Some("interface"));
        s.advance();
        assert!(s.is_at_end());
    }

    #[test]
    fn take_trivia_discards_when_capture_off() {
        let mut s = stream("  interface", false);
        assert_eq!(s.take_trivia(), None);
        assert_eq!(s.peek_text(), Some("interface"));
    }

    #[test]
    fn take_trivia_collects_when_capture_on() {
        let mut s = stream("  interface", true);
        let trivia = s.take_trivia().unwrap();
        assert_eq!(trivia.len(), 1);
        assert_eq!(trivia[0].text, "  ");
    }

    #[test]
    fn underscore_escape_is_stripped_on_identifier_read() {
        let mut s = stream("_interface", false);
        assert_eq!(s.eat_identifier(), Some("interface".to_string()));
    }

    #[test]
    fn underscore_escaped_keyword_does_not_match_raw_keyword_peek() {
        let s = stream("_interface", false);
        assert!(!s.peek_keyword("interface"));
    }

    #[test]
    fn checkpoint_restores_position() {
        let mut s = stream("A B", false);
        let cp = s.checkpoint();
        s.advance();
        assert_eq!(s.peek_text(), Some("B"));
        s.restore(cp);
        assert_eq!(s.peek_text(), Some("A"));
    }

    #[test]
    fn eat_ellipsis_consumes_three_dots() {
        let mut s = stream("...", false);
        assert!(s.eat_ellipsis());
        assert!(s.is_at_end());
    }

    #[test]
    fn eat_ellipsis_rejects_two_dots() {
        let mut s = stream("..", false);
        assert!(!s.eat_ellipsis());
        assert_eq!(s.peek_text(), Some("."));
    }

    #[test]
    fn peek_significant_n_looks_past_trivia() {
        let s = stream("A /* c */ B", false);
        assert_eq!(s.peek_significant_n(0).map(|l| l.text.as_str()), Some("A"));
        assert_eq!(s.peek_significant_n(1).map(|l| l.text.as_str()), Some("B"));
    }
}
