use std::rc::Rc;

use log::{debug, trace, warn};

use crate::{errors::errors::LexicalError, Position, Span, MK_TOKEN};

use super::{
    rules::match_at,
    tokens::{filter_auxiliary, Token},
};

#[derive(Clone)]
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            line_start: 0,
            file: file_name,
        }
    }

    /// Moves the cursor forward, keeping line bookkeeping in step with it.
    pub fn advance_n(&mut self, n: usize) {
        let consumed = &self.source.as_bytes()[self.pos..self.pos + n];
        for (i, byte) in consumed.iter().enumerate() {
            if *byte == b'\n' {
                self.line += 1;
                self.line_start = self.pos + i + 1;
            }
        }

        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn column(&self) -> usize {
        self.pos - self.line_start
    }

    fn position(&self, offset: usize) -> Position {
        Position(to_offset(offset), Rc::clone(&self.file))
    }

    fn error(&self) -> LexicalError {
        let error = LexicalError::new(
            self.source,
            self.position(self.pos),
            self.line,
            self.column(),
        );
        warn!(
            "{}: no rule matches {:?} at {}:{}",
            self.file,
            self.at().unwrap_or_default(),
            self.line,
            self.column()
        );
        error
    }

    /// Runs the scan loop to the end of the buffer, returning every token,
    /// auxiliary ones included.
    pub fn run(mut self) -> Result<Vec<Token>, LexicalError> {
        while !self.at_eof() {
            let Some((kind, len)) = match_at(self.source, self.pos) else {
                return Err(self.error());
            };

            let value = String::from(&self.source[self.pos..self.pos + len]);
            let span = Span {
                start: self.position(self.pos),
                end: self.position(self.pos + len),
            };
            trace!("{} {:?} at {}:{}", kind, value, self.line, self.column());

            let token = MK_TOKEN!(kind, value, span, self.line, self.column());
            self.push(token);
            self.advance_n(len);
        }

        Ok(self.tokens)
    }
}

/// Converts a buffer offset into the `u32` carried by [`Position`].
///
/// Panics when the offset does not fit: a truncated offset would point the
/// span at the wrong text.
pub(crate) fn to_offset(offset: usize) -> u32 {
    u32::try_from(offset)
        .unwrap_or_else(|_| panic!("offset {} does not fit in a source position", offset))
}

/// Tokenizes `source` without dropping comments or whitespace.
pub fn tokenize_all(source: &str, file: Option<String>) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source, file).run()
}

/// Tokenizes `source` and returns only the significant tokens.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, LexicalError> {
    let all = tokenize_all(source, file)?;
    let total = all.len();
    let tokens = filter_auxiliary(all);

    debug!(
        "tokenized {} bytes: {} significant, {} auxiliary",
        source.len(),
        tokens.len(),
        total - tokens.len()
    );

    Ok(tokens)
}
