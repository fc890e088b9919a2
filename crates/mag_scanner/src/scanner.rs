//! The Mag scanner/lexer.
//!
//! Converts source text into a stream of tokens that the parser consumes.
//! Scanning is strict: an unrecognized character or unterminated literal
//! records a syntax error which the parser surfaces on its next token pull.

use crate::char_codes::*;
use mag_ast::syntax_kind::SyntaxKind;
use mag_ast::types::TokenFlags;
use mag_core::text::TextSpan;
use mag_diagnostics::{messages, SyntaxError};

/// Saved scanner state for lookahead and backtracking.
#[derive(Debug, Clone)]
pub struct ScannerState {
    pub pos: usize,
    pub token_start: usize,
    pub token: SyntaxKind,
    pub token_value: String,
    pub token_flags: TokenFlags,
    pub regex_flags: String,
}

/// The scanner converts Mag source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    /// The current token kind.
    token: SyntaxKind,
    /// The text of the current token.
    token_value: String,
    /// Token flags for the current token.
    token_flags: TokenFlags,
    /// Flags of the last rescanned regular expression literal.
    regex_flags: String,
    /// Error recorded while scanning the current token.
    error: Option<SyntaxError>,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_flags: TokenFlags::NONE,
            regex_flags: String::new(),
            error: None,
        }
    }

    /// Get the full source text length.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Look ahead: save state, call f, restore state and return the result.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let state = self.save_state();
        let result = f(self);
        self.restore_state(state);
        result
    }

    /// Get the current token kind.
    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// Get the current token's text value.
    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Get the start position of the current token (after trivia).
    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Get the current position (end of current token).
    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    /// Get the current token's flags.
    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    /// Whether there was a line break before the current token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    /// Take the error recorded for the current token, if any.
    pub fn take_error(&mut self) -> Option<SyntaxError> {
        self.error.take()
    }

    /// The span of the current token.
    pub fn token_span(&self) -> TextSpan {
        TextSpan::from_bounds(self.token_start as u32, self.pos as u32)
    }

    /// Save the full scanner state for later restoration.
    pub fn save_state(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            token_start: self.token_start,
            token: self.token,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            regex_flags: self.regex_flags.clone(),
        }
    }

    /// Restore a previously saved state, discarding any pending error.
    pub fn restore_state(&mut self, state: ScannerState) {
        self.pos = state.pos;
        self.token_start = state.token_start;
        self.token = state.token;
        self.token_value = state.token_value;
        self.token_flags = state.token_flags;
        self.regex_flags = state.regex_flags;
        self.error = None;
    }

    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn record_error(&mut self, message: &mag_diagnostics::DiagnosticMessage, args: &[&str]) {
        // First error per token wins.
        if self.error.is_none() {
            let span = TextSpan::from_bounds(self.token_start as u32, (self.pos.max(self.token_start + 1)) as u32);
            self.error = Some(SyntaxError::at(span, message, args));
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            if self.is_eof() {
                return;
            }
            let ch = self.text[self.pos];
            match ch {
                '\r' => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                    if self.current_char() == Some('\n') {
                        self.pos += 1;
                    }
                }
                '\n' | '\u{2028}' | '\u{2029}' => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                }
                '/' => {
                    if self.char_at(1) == Some('/') {
                        // Single-line comment
                        self.pos += 2;
                        while !self.is_eof() {
                            if is_line_break(self.text[self.pos]) {
                                break;
                            }
                            self.pos += 1;
                        }
                    } else if self.char_at(1) == Some('*') {
                        // Multi-line comment
                        self.pos += 2;
                        while !self.is_eof() {
                            if self.text[self.pos] == '*' && self.char_at(1) == Some('/') {
                                self.pos += 2;
                                break;
                            }
                            if is_line_break(self.text[self.pos]) {
                                self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                            }
                            self.pos += 1;
                        }
                    } else {
                        return;
                    }
                }
                c if is_white_space_single_line(c) => {
                    self.pos += 1;
                }
                _ => return,
            }
        }
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();
        self.regex_flags.clear();
        self.error = None;

        self.skip_trivia();
        self.token_start = self.pos;

        if self.is_eof() {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }

        let ch = self.text[self.pos];
        self.token = match ch {
            '(' => { self.pos += 1; SyntaxKind::OpenParenToken }
            ')' => { self.pos += 1; SyntaxKind::CloseParenToken }
            '{' => { self.pos += 1; SyntaxKind::OpenBraceToken }
            '}' => { self.pos += 1; SyntaxKind::CloseBraceToken }
            '[' => { self.pos += 1; SyntaxKind::OpenBracketToken }
            ']' => { self.pos += 1; SyntaxKind::CloseBracketToken }
            ';' => { self.pos += 1; SyntaxKind::SemicolonToken }
            ',' => { self.pos += 1; SyntaxKind::CommaToken }
            ':' => { self.pos += 1; SyntaxKind::ColonToken }
            '.' => { self.pos += 1; SyntaxKind::DotToken }
            '+' => { self.pos += 1; SyntaxKind::PlusToken }
            '-' => { self.pos += 1; SyntaxKind::MinusToken }
            '%' => { self.pos += 1; SyntaxKind::PercentToken }
            '/' => { self.pos += 1; SyntaxKind::SlashToken }

            '<' => self.scan_less_than(),
            '>' => self.scan_greater_than(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '*' => self.scan_asterisk(),

            '\'' | '"' => self.scan_string_literal(ch),

            '0'..='9' => self.scan_number(),

            _ if is_identifier_start(ch) => self.scan_identifier(),

            _ => {
                self.pos += 1;
                self.record_error(&messages::INVALID_CHARACTER, &[]);
                SyntaxKind::Unknown
            }
        };

        self.token
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_less_than(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::LessThanEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::LessThanToken
        }
    }

    fn scan_greater_than(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            SyntaxKind::GreaterThanEqualsToken
        } else {
            self.pos += 1;
            SyntaxKind::GreaterThanToken
        }
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::EqualsEqualsEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::EqualsEqualsToken
            }
        } else {
            self.pos += 1;
            SyntaxKind::EqualsToken
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                SyntaxKind::ExclamationEqualsEqualsToken
            } else {
                self.pos += 2;
                SyntaxKind::ExclamationEqualsToken
            }
        } else {
            // `!` exists only inside `!=` / `!==`.
            self.pos += 1;
            self.record_error(&messages::INVALID_CHARACTER, &[]);
            SyntaxKind::Unknown
        }
    }

    fn scan_asterisk(&mut self) -> SyntaxKind {
        if self.char_at(1) == Some('*') {
            self.pos += 2;
            SyntaxKind::AsteriskAsteriskToken
        } else {
            self.pos += 1;
            SyntaxKind::AsteriskToken
        }
    }

    fn scan_string_literal(&mut self, quote: char) -> SyntaxKind {
        self.pos += 1; // skip opening quote
        let mut result = String::new();
        loop {
            if self.is_eof() {
                self.record_error(&messages::UNTERMINATED_STRING_LITERAL, &[]);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            }
            let ch = self.text[self.pos];
            if ch == quote {
                self.pos += 1;
                break;
            }
            if ch == '\\' {
                self.pos += 1;
                if !self.is_eof() {
                    result.push(unescape(self.text[self.pos]));
                    self.pos += 1;
                }
                continue;
            }
            if is_line_break(ch) {
                self.record_error(&messages::UNTERMINATED_STRING_LITERAL, &[]);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            }
            result.push(ch);
            self.pos += 1;
        }
        self.token_value = result;
        SyntaxKind::StringLiteral
    }

    /// Rescan a `/` token as a regular expression literal. The parser calls
    /// this when a slash shows up where a primary expression is expected.
    pub fn rescan_slash_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::SlashToken {
            return self.token;
        }
        self.pos = self.token_start + 1; // after the /
        let mut pattern = String::new();
        let mut flags = String::new();
        let mut in_character_class = false;

        loop {
            if self.is_eof() || is_line_break(self.text[self.pos]) {
                self.record_error(&messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL, &[]);
                self.token_flags |= TokenFlags::UNTERMINATED;
                break;
            }
            let ch = self.text[self.pos];
            if ch == '\\' {
                pattern.push(ch);
                self.pos += 1;
                if !self.is_eof() && !is_line_break(self.text[self.pos]) {
                    pattern.push(self.text[self.pos]);
                    self.pos += 1;
                }
                continue;
            }
            if ch == '[' {
                in_character_class = true;
            } else if ch == ']' {
                in_character_class = false;
            } else if ch == '/' && !in_character_class {
                self.pos += 1;
                while !self.is_eof() && is_identifier_part(self.text[self.pos]) {
                    flags.push(self.text[self.pos]);
                    self.pos += 1;
                }
                break;
            }
            pattern.push(ch);
            self.pos += 1;
        }

        // token_value carries the pattern; flags travel separately.
        self.token_value = pattern;
        self.regex_flags = flags;
        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    /// The flags of the last rescanned regular expression literal.
    pub fn regex_flags(&self) -> &str {
        &self.regex_flags
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let first_char = self.text[self.pos];

        if first_char == '0' {
            match self.char_at(1) {
                Some('x') | Some('X') => return self.scan_radix_number(start, TokenFlags::HEX_SPECIFIER),
                Some('b') | Some('B') => return self.scan_radix_number(start, TokenFlags::BINARY_SPECIFIER),
                Some('o') | Some('O') => return self.scan_radix_number(start, TokenFlags::OCTAL_SPECIFIER),
                _ => {}
            }
        }

        // Decimal number
        self.scan_digits();

        if self.current_char() == Some('.') && self.char_at(1).map_or(false, is_digit) {
            self.pos += 1;
            self.scan_digits();
        }

        // Exponent
        if let Some('e') | Some('E') = self.current_char() {
            let next = self.char_at(1);
            let after_sign = self.char_at(2);
            let has_exponent = match next {
                Some('+') | Some('-') => after_sign.map_or(false, is_digit),
                Some(c) => is_digit(c),
                None => false,
            };
            if has_exponent {
                self.pos += 1;
                self.token_flags |= TokenFlags::SCIENTIFIC;
                if let Some('+') | Some('-') = self.current_char() {
                    self.pos += 1;
                }
                self.scan_digits();
            }
        }

        self.token_value = self.chars_to_string(start, self.pos);
        SyntaxKind::NumericLiteral
    }

    fn scan_radix_number(&mut self, start: usize, specifier: TokenFlags) -> SyntaxKind {
        self.pos += 2; // skip 0x / 0b / 0o
        self.token_flags |= specifier;
        while !self.is_eof() {
            let ch = self.text[self.pos];
            let is_radix_digit = if specifier == TokenFlags::HEX_SPECIFIER {
                is_hex_digit(ch)
            } else if specifier == TokenFlags::OCTAL_SPECIFIER {
                is_octal_digit(ch)
            } else {
                ch == '0' || ch == '1'
            };
            if ch == '_' {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                self.pos += 1;
            } else if is_radix_digit {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.token_value = self.chars_to_string(start, self.pos);
        SyntaxKind::NumericLiteral
    }

    fn scan_digits(&mut self) {
        while !self.is_eof() {
            let ch = self.text[self.pos];
            if ch == '_' {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
                self.pos += 1;
            } else if is_digit(ch) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        while !self.is_eof() && is_identifier_part(self.text[self.pos]) {
            self.pos += 1;
        }
        let text = self.chars_to_string(start, self.pos);

        let kind = SyntaxKind::from_keyword(&text).unwrap_or(SyntaxKind::Identifier);
        self.token_value = text;
        kind
    }

    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }
}

/// Decode a single-character escape sequence.
fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '0' => '\0',
        other => other,
    }
}
