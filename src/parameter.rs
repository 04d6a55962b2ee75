use core::{fmt::Display, str::FromStr};

/**
How a parameter type behaves when its flag appears on the command line,
possibly more than once.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Takes no value; set to `true` when the flag appears.
    Boolean,

    /// Takes one value; a later occurrence overwrites an earlier one.
    Scalar,

    /// Takes one value per occurrence; values are appended in order.
    Repeated,

    /// Absent until the flag first appears, then holds one value. A later
    /// occurrence overwrites an earlier one.
    Optional,
}

impl ValueKind {
    /// Does a flag of this kind consume the token after it?
    #[inline]
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self, ValueKind::Boolean)
    }
}

/// A textual value couldn't be converted into the flag's type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValueError {
    message: String,
}

impl ValueError {
    pub fn new(message: impl Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/**
A parameter is a type that can be stored in a flag record field and updated
each time its flag appears on the command line.

The parameter trait allows types to operate independently of the flag they
are bound to. It is the "type" part of the flag: it decides whether the flag
needs a value at all and how repeated occurrences combine.

For most types it makes more sense to implement [`Value`] (or [`ParsedValue`]
for [`FromStr`] types) instead of [`Parameter`]; every [`Value`] is a scalar
[`Parameter`], and can be wrapped in [`Option`] or [`Vec`].
*/
pub trait Parameter: 'static {
    const KIND: ValueKind;

    /**
    The flag appeared on the command line without a value. This is only called
    for parameters whose `KIND` doesn't take a value.
    */
    #[inline]
    fn present(&mut self) {}

    /**
    The flag appeared on the command line, followed by `token`. This is only
    called for parameters whose `KIND` takes a value.

    On error, the parameter should be left as it was.
    */
    fn add_value(&mut self, token: &str) -> Result<(), ValueError>;
}

/**
Types that take exactly one textual value.

Types that implement [`Value`] automatically implement [`Parameter`] as
scalars, so that a repeated flag overwrites the field.
*/
pub trait Value: Sized {
    /// Convert a whole token into `Self`. Conversions must not accept tokens
    /// with unconsumed trailing text.
    fn from_token(token: &str) -> Result<Self, ValueError>;
}

impl<T> Parameter for T
where
    T: Value + 'static,
{
    const KIND: ValueKind = ValueKind::Scalar;

    #[inline]
    fn add_value(&mut self, token: &str) -> Result<(), ValueError> {
        *self = T::from_token(token)?;
        Ok(())
    }
}

/// For types with a [`FromStr`] implementation, [`ParsedValue`] automatically
/// gives them a [`Value`] implementation so that they can be used as flag
/// values.
pub trait ParsedValue: FromStr {}

impl<T> Value for T
where
    T: ParsedValue,
    T::Err: Display,
{
    #[inline]
    fn from_token(token: &str) -> Result<Self, ValueError> {
        token.parse().map_err(ValueError::new)
    }
}
