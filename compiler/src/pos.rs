#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BytePos(pub u32);

impl BytePos {
    pub fn shift(self, ch: char) -> Self {
        BytePos(self.0 + ch.len_utf8() as u32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenMetadata {
    pub start_inclusive: BytePos,
    pub end_inclusive: BytePos,
    pub line: usize,
}

impl TokenMetadata {
    pub const fn empty() -> TokenMetadata {
        let zero = BytePos(0);
        TokenMetadata {
            start_inclusive: zero,
            end_inclusive: zero,
            line: 0,
        }
    }
}

/// A value tagged with the source span and line it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct WithTokenMetadata<T> {
    pub value: T,
    pub pos: TokenMetadata,
}

impl<T> WithTokenMetadata<T> {
    pub fn new(
        value: T,
        start_inclusive: BytePos,
        end_inclusive: BytePos,
        line: usize,
    ) -> WithTokenMetadata<T> {
        WithTokenMetadata {
            value,
            pos: TokenMetadata {
                start_inclusive,
                end_inclusive,
                line,
            },
        }
    }

    pub const fn empty(value: T) -> WithTokenMetadata<T> {
        WithTokenMetadata {
            value,
            pos: TokenMetadata::empty(),
        }
    }

    pub fn at_line(value: T, line: usize) -> WithTokenMetadata<T> {
        let mut t = WithTokenMetadata::empty(value);
        t.pos.line = line;
        t
    }
}
