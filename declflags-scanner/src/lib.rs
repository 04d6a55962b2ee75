#![no_std]

/*!
Low-level scanning of command-line tokens. Takes care of walking the token
list left to right, tracking each token's index, stopping flag handling at a
`--` terminator, and lending the following token to a flag that wants a value.
No matching or type handling happens here. Usually this is too low level to use
directly.
*/

use core::iter::Peekable;

/// The literal token that ends flag scanning. Every token after it is
/// positional, even if it looks like a flag.
pub const TERMINATOR: &str = "--";

/**
Returns true if `token` is shaped like a flag (it starts with `-`).

A flag that requires a value never takes a flag-shaped token as that value;
see [`ValueAccess`].
*/
#[inline]
#[must_use]
pub fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-')
}

/**
The [`TokenScanner`] type operates by passing the tokens it finds into a
[`Visitor`], to be handled.
 */
pub trait Visitor<'arg> {
    type Value;

    /**
    A token that appeared before any terminator. It may be a flag, a
    positional, or anything else; the scanner can't tell. `pos` is the index
    of the token in the original input.
    */
    fn visit_token(
        self,
        pos: usize,
        token: &'arg str,
        value: impl ValueAccess<'arg>,
    ) -> Self::Value;

    /// A token that appeared after the terminator. It is always positional.
    fn visit_trailing(self, token: &'arg str) -> Self::Value;
}

/**
[`ValueAccess`] allows a visitor to decide if a given token consumes the token
after it, based on the identity of the flag.

Consider `--foo bar`. Is this a pair of tokens (the flag `--foo` and the
positional `bar`) or a single flag `--foo` with the value `bar`? The
[`TokenScanner`] can't independently classify it, so instead a visitor can
look at the following token and take it only for flags that need one.
*/
pub trait ValueAccess<'arg>: Sized {
    /// Look at the following token without consuming it. This returns
    /// [`None`] if the input is exhausted.
    fn peek(&self) -> Option<&'arg str>;

    /**
    Consume the following token, so that it won't be visited on its own.
    Flags that don't need a value should simply ignore this, to ensure that
    the next token is handled independently.
    */
    fn take(self) -> Option<&'arg str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ready,
    PositionalOnly,
}

/**
A `TokenScanner` is the main entry point into `declflags_scanner`. It reads a
token in each call to [`next_token`][TokenScanner::next_token], sending that
token to the given [`Visitor`].

`declflags_scanner` operates entirely on borrowed data: the caller owns the
token list for the whole scan. The ubiquitous `'arg` lifetime refers to this
borrowed command line data.
*/
pub struct TokenScanner<I: Iterator> {
    state: State,
    tokens: Peekable<I>,
    pos: usize,
}

impl<'arg, I> TokenScanner<I>
where
    I: Iterator<Item = &'arg str>,
{
    /**
    Create a new [`TokenScanner`] from an iterator of tokens. Indices given to
    [`Visitor::visit_token`] count from the first token of this iterator.
     */
    #[inline]
    #[must_use]
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            state: State::Ready,
            tokens: tokens.into_iter().peekable(),
            pos: 0,
        }
    }

    /// The index of the next unvisited token.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once a terminator has been scanned.
    #[inline]
    #[must_use]
    pub fn is_positional_only(&self) -> bool {
        self.state == State::PositionalOnly
    }

    #[inline]
    fn advance(&mut self) -> Option<&'arg str> {
        let token = self.tokens.next()?;
        self.pos += 1;
        Some(token)
    }

    /// Put `self` into a `PositionalOnly` state, then process a trailing
    /// token
    #[inline]
    fn positional_only_token<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        self.state = State::PositionalOnly;
        self.advance().map(|token| visitor.visit_trailing(token))
    }

    /**
    Scan one token and hand it to `visitor`. Returns [`None`] when the input
    is exhausted. A terminator is never visited itself: it switches the scanner
    into positional-only mode and the token after it (if any) is visited
    instead.
    */
    pub fn next_token<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        match self.state {
            State::Ready => {
                let pos = self.pos;
                match self.advance()? {
                    TERMINATOR => self.positional_only_token(visitor),
                    token => {
                        let next = self.tokens.peek().copied();
                        let access = NextTokenAccess { next, parent: self };
                        Some(visitor.visit_token(pos, token, access))
                    }
                }
            }
            State::PositionalOnly => self.positional_only_token(visitor),
        }
    }
}

/// ValueAccess implementation that lends the next token from the list.
struct NextTokenAccess<'a, 'arg, I: Iterator> {
    next: Option<&'arg str>,
    parent: &'a mut TokenScanner<I>,
}

impl<'arg, I> ValueAccess<'arg> for NextTokenAccess<'_, 'arg, I>
where
    I: Iterator<Item = &'arg str>,
{
    #[inline]
    fn peek(&self) -> Option<&'arg str> {
        self.next
    }

    #[inline]
    fn take(self) -> Option<&'arg str> {
        debug_assert_eq!(self.parent.tokens.peek().copied(), self.next);

        self.parent.advance()
    }
}
