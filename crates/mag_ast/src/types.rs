use bitflags::bitflags;

bitflags! {
    /// Extra facts the scanner records about a token beyond its kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TokenFlags: u16 {
        const NONE = 0;
        /// A line break occurred in the trivia before this token.
        const PRECEDING_LINE_BREAK = 1 << 0;
        /// Numeric literal written with a `0x` prefix.
        const HEX_SPECIFIER = 1 << 1;
        /// Numeric literal written with a `0b` prefix.
        const BINARY_SPECIFIER = 1 << 2;
        /// Numeric literal written with a `0o` prefix.
        const OCTAL_SPECIFIER = 1 << 3;
        /// Numeric literal containing `_` digit separators.
        const CONTAINS_SEPARATOR = 1 << 4;
        /// Numeric literal with an exponent part.
        const SCIENTIFIC = 1 << 5;
        /// String or regular expression literal missing its closing delimiter.
        const UNTERMINATED = 1 << 6;
    }
}

impl TokenFlags {
    pub fn numeric_base(self) -> u32 {
        if self.contains(TokenFlags::HEX_SPECIFIER) {
            16
        } else if self.contains(TokenFlags::OCTAL_SPECIFIER) {
            8
        } else if self.contains(TokenFlags::BINARY_SPECIFIER) {
            2
        } else {
            10
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_base() {
        assert_eq!(TokenFlags::NONE.numeric_base(), 10);
        assert_eq!(TokenFlags::HEX_SPECIFIER.numeric_base(), 16);
        assert_eq!(
            (TokenFlags::BINARY_SPECIFIER | TokenFlags::CONTAINS_SEPARATOR).numeric_base(),
            2
        );
    }
}
