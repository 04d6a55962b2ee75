/// Configuration of a single parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /**
    If true (the default), a token that starts with `-` but isn't a declared
    flag is reported as an unknown flag. If false, it is kept as a positional,
    so that a later pass can handle it.
    */
    pub unknown_as_error: bool,
}

impl ParseOptions {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unknown_as_error: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_unknown_as_error(self, unknown_as_error: bool) -> Self {
        Self { unknown_as_error }
    }
}

impl Default for ParseOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
