/*!
Flag names and aliases.

A flag name must start with `-` and must not be exactly `--`, which is
reserved for the terminator. Names are checked when a flag is declared, never
while parsing.
*/

use core::fmt;

use declflags_scanner::TERMINATOR;

/**
Returns true if `name` can be used as a flag name or alias.

This is a `const fn`, so a name can be checked at compile time:

```
const _: () = assert!(declflags::name::is_valid("--port"));
```
*/
#[must_use]
pub const fn is_valid(name: &str) -> bool {
    match name.as_bytes() {
        [b'-', b'-'] => false,
        [b'-', ..] => true,
        _ => false,
    }
}

/// A name that can't be used for a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFlagName {
    #[error("flag names can't be empty")]
    Empty,

    #[error("flag name {0:?} must start with `-`")]
    MissingDash(&'static str),

    #[error("flag name `--` is reserved for the terminator")]
    Terminator,
}

/// A validated flag name or alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagName(&'static str);

impl FlagName {
    pub fn new(name: &'static str) -> Result<Self, InvalidFlagName> {
        match name {
            "" => Err(InvalidFlagName::Empty),
            TERMINATOR => Err(InvalidFlagName::Terminator),
            name if is_valid(name) => Ok(Self(name)),
            name => Err(InvalidFlagName::MissingDash(name)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<str> for FlagName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
