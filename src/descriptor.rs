/*!
Flag descriptors: the static metadata of one declared flag, bound to the
record field it populates.
*/

use core::{
    any::{TypeId, type_name},
    fmt,
};
use std::sync::Arc;

use declflags_scanner::looks_like_flag;
use tracing::debug;

use crate::{
    name::FlagName,
    parameter::{Parameter, ValueKind},
};

/// What happened when a descriptor was offered a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseOutcome {
    /// The token isn't this flag's name or alias.
    NoMatch,

    /// A boolean flag matched; only the flag token was consumed.
    ConsumedOne,

    /// The flag matched and its value was converted; both tokens were
    /// consumed.
    ConsumedTwo,

    /// The flag needs a value, but there was no following token or the
    /// following token looks like a flag. Only the flag token was consumed.
    MissingValue,

    /// The flag matched, but its value failed to convert. Both tokens were
    /// consumed.
    InvalidValue,
}

impl ParseOutcome {
    /// The number of tokens this outcome consumes.
    #[inline]
    #[must_use]
    pub const fn consumed(self) -> usize {
        match self {
            ParseOutcome::NoMatch => 0,
            ParseOutcome::ConsumedOne | ParseOutcome::MissingValue => 1,
            ParseOutcome::ConsumedTwo | ParseOutcome::InvalidValue => 2,
        }
    }
}

/// Introspection data for a declared flag. This never changes after the
/// flag is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagInfo {
    pub name: &'static str,

    /// Equal to `name` if no alias was declared.
    pub alias: &'static str,

    /// The name of the field's type, as given by [`core::any::type_name`].
    /// Only for display; compare `type_id` instead.
    pub type_name: &'static str,

    pub type_id: TypeId,

    pub kind: ValueKind,
}

impl FlagInfo {
    /// Is `token` this flag's name or alias?
    #[inline]
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.alias == token
    }

    /// Is this the declared type of the flag?
    #[inline]
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

/// Projection from a record to one of its fields.
pub(crate) type Field<R, T> = Arc<dyn Fn(&mut R) -> &mut T + Send + Sync>;

type BoundParse<R> = Box<dyn Fn(&mut R, Option<&str>) -> ParseOutcome + Send + Sync>;

pub(crate) type Initializer<R> = Box<dyn Fn(&mut R) + Send + Sync>;

/**
A single declared flag of a record type `R`: its [`FlagInfo`], plus the
parser bound to the field it populates, plus the field's declared default.

Descriptors are created by
[`FlagSetBuilder::flag`][crate::flag_set::FlagSetBuilder::flag].
*/
pub struct FlagDescriptor<R> {
    pub(crate) info: FlagInfo,
    pub(crate) default: Option<Initializer<R>>,
    parse: BoundParse<R>,
}

impl<R: 'static> FlagDescriptor<R> {
    pub(crate) fn new<T: Parameter>(name: FlagName, field: Field<R, T>) -> Self {
        let parse = move |record: &mut R, value: Option<&str>| {
            let place = (*field)(record);

            if !T::KIND.takes_value() {
                place.present();
                return ParseOutcome::ConsumedOne;
            }

            match value {
                None => ParseOutcome::MissingValue,
                Some(token) if looks_like_flag(token) => ParseOutcome::MissingValue,
                Some(token) => match place.add_value(token) {
                    Ok(()) => ParseOutcome::ConsumedTwo,
                    Err(err) => {
                        debug!(flag = name.as_str(), value = token, %err, "rejected flag value");
                        ParseOutcome::InvalidValue
                    }
                },
            }
        };

        Self {
            info: FlagInfo {
                name: name.as_str(),
                alias: name.as_str(),
                type_name: type_name::<T>(),
                type_id: TypeId::of::<T>(),
                kind: T::KIND,
            },
            default: None,
            parse: Box::new(parse),
        }
    }
}

impl<R> FlagDescriptor<R> {
    #[inline]
    #[must_use]
    pub fn info(&self) -> &FlagInfo {
        &self.info
    }

    /// Does this flag declare a default value?
    #[inline]
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /**
    Offer `token` to this flag. If it is this flag's name or alias, the
    flag's field in `record` is updated, using `value` (the token after
    `token`, if any) when the flag needs one.
    */
    pub fn parse(&self, record: &mut R, token: &str, value: Option<&str>) -> ParseOutcome {
        match self.info.matches(token) {
            true => (self.parse)(record, value),
            false => ParseOutcome::NoMatch,
        }
    }

    /// Store the declared default, if any, into `record`.
    pub fn initialize(&self, record: &mut R) {
        if let Some(default) = &self.default {
            default(record);
        }
    }
}

impl<R> fmt::Debug for FlagDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagDescriptor")
            .field("info", &self.info)
            .field("has_default", &self.has_default())
            .finish_non_exhaustive()
    }
}
