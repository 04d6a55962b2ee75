/*!
Declaring flags and parsing with them.

A [`FlagSetBuilder`] collects one descriptor per flag, in declaration order,
and turns into an immutable [`FlagSet`]. The flag set is the matching table:
it can be enumerated, and it parses token lists into fresh records.
*/

use core::{fmt, slice};
use std::sync::Arc;

use crate::{
    FlagRecord,
    descriptor::{Field, FlagDescriptor, FlagInfo},
    errors::Errors,
    name::FlagName,
    options::ParseOptions,
    parameter::Parameter,
    scan,
};

/// Collects flag declarations for a record type `R`.
pub struct FlagSetBuilder<R> {
    descriptors: Vec<FlagDescriptor<R>>,
}

impl<R: 'static> FlagSetBuilder<R> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /**
    Declare a flag named `name`, populating the field that `field` projects
    out of the record. The field's type decides how the flag is parsed; see
    [`Parameter`].

    The returned [`FlagBuilder`] can add an alias or a default value.

    # Panics

    Panics if `name` isn't a valid flag name (see
    [`is_valid`][crate::name::is_valid]).
    */
    #[track_caller]
    pub fn flag<T, F>(&mut self, name: &'static str, field: F) -> FlagBuilder<'_, R, T>
    where
        T: Parameter,
        F: Fn(&mut R) -> &mut T + Send + Sync + 'static,
    {
        let name = match FlagName::new(name) {
            Ok(name) => name,
            Err(err) => panic!("invalid flag declaration: {err}"),
        };

        let field: Field<R, T> = Arc::new(field);
        let index = self.descriptors.len();
        self.descriptors
            .push(FlagDescriptor::new(name, Arc::clone(&field)));

        FlagBuilder {
            descriptor: &mut self.descriptors[index],
            field,
        }
    }

    #[must_use]
    pub fn build(self) -> FlagSet<R> {
        FlagSet {
            descriptors: self.descriptors,
        }
    }
}

impl<R: 'static> Default for FlagSetBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional configuration of a flag that was just declared.
pub struct FlagBuilder<'b, R, T> {
    descriptor: &'b mut FlagDescriptor<R>,
    field: Field<R, T>,
}

impl<R: 'static, T: Parameter> FlagBuilder<'_, R, T> {
    /**
    Also recognize this flag as `alias`. Without an alias, the alias is the
    flag's name.

    # Panics

    Panics if `alias` isn't a valid flag name (see
    [`is_valid`][crate::name::is_valid]).
    */
    #[track_caller]
    pub fn alias(self, alias: &'static str) -> Self {
        match FlagName::new(alias) {
            Ok(alias) => self.descriptor.info.alias = alias.as_str(),
            Err(err) => panic!("invalid alias for flag `{}`: {err}", self.descriptor.info.name),
        }

        self
    }

    /**
    Store `value` into the field whenever a new record is created for parsing.
    Without a default, the field keeps the value given by the record's
    [`Default`] implementation.
    */
    pub fn default(self, value: impl Into<T>) -> Self
    where
        T: Clone + Send + Sync,
    {
        let value = value.into();
        let field = Arc::clone(&self.field);
        self.descriptor.default = Some(Box::new(move |record: &mut R| {
            *(*field)(record) = value.clone();
        }));

        self
    }
}

/**
An immutable, ordered collection of flag descriptors for a record type `R`.

Descriptors are kept in declaration order, which is both the matching
precedence (the first declared flag that matches a token wins) and the order
of [`infos`][FlagSet::infos]. Duplicate names aren't rejected.
*/
pub struct FlagSet<R> {
    descriptors: Vec<FlagDescriptor<R>>,
}

impl<R: FlagRecord> FlagSet<R> {
    /// Build the flag set declared by [`FlagRecord::declare`].
    #[must_use]
    pub fn new() -> Self {
        let mut builder = FlagSetBuilder::new();
        R::declare(&mut builder);
        builder.build()
    }
}

impl<R: FlagRecord> Default for FlagSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FlagSet<R> {
    #[inline]
    #[must_use]
    pub fn descriptors(&self) -> &[FlagDescriptor<R>] {
        &self.descriptors
    }

    /// Enumerate the declared flags, in declaration order.
    #[inline]
    pub fn infos(&self) -> Infos<'_, R> {
        Infos {
            iter: self.descriptors.iter(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Store every declared default into `record`.
    pub fn initialize(&self, record: &mut R) {
        self.descriptors
            .iter()
            .for_each(|descriptor| descriptor.initialize(record));
    }

    /**
    Scan `tokens` into an existing `record`, appending leftover positionals to
    `args` and parse failures to `errors`. Defaults are not applied; see
    [`initialize`][FlagSet::initialize].

    This is the building block of the other parse methods.
    */
    pub fn parse_into<S: AsRef<str>>(
        &self,
        record: &mut R,
        tokens: &[S],
        options: ParseOptions,
        args: &mut Vec<String>,
        errors: &mut Errors,
    ) {
        scan::scan(
            self,
            record,
            tokens.iter().map(|token| token.as_ref()),
            options,
            args,
            errors,
        );
    }
}

impl<R: Default> FlagSet<R> {
    /// A fresh record: [`Default`], with every declared default applied.
    #[must_use]
    pub fn initial(&self) -> R {
        let mut record = R::default();
        self.initialize(&mut record);
        record
    }

    /// Parse `tokens` with the default [`ParseOptions`], where unknown
    /// flag-shaped tokens are errors.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Parsed<R> {
        self.parse_with(tokens, ParseOptions::default())
    }

    pub fn parse_with<S: AsRef<str>>(&self, tokens: &[S], options: ParseOptions) -> Parsed<R> {
        let mut flags = self.initial();
        let mut args = Vec::new();
        let mut errors = Errors::new();

        self.parse_into(&mut flags, tokens, options, &mut args, &mut errors);

        Parsed {
            flags,
            args,
            errors,
        }
    }

    /**
    Parse the leftover positionals of an earlier pass. `args` is replaced by
    this pass's positionals and parse failures are appended to `errors`.
    Unknown flag-shaped tokens are errors.

    Error positions are indices into `args` as it was passed in, not into the
    original command line.
    */
    pub fn parse_chained(&self, args: &mut Vec<String>, errors: &mut Errors) -> R {
        self.parse_chained_with(args, errors, ParseOptions::default())
    }

    pub fn parse_chained_with(
        &self,
        args: &mut Vec<String>,
        errors: &mut Errors,
        options: ParseOptions,
    ) -> R {
        let mut flags = self.initial();
        let mut remaining = Vec::new();

        self.parse_into(&mut flags, args.as_slice(), options, &mut remaining, errors);
        *args = remaining;

        flags
    }
}

impl<R> fmt::Debug for FlagSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.infos()).finish()
    }
}

/// Iterator over the [`FlagInfo`] of each flag in a [`FlagSet`], in
/// declaration order.
pub struct Infos<'a, R> {
    iter: slice::Iter<'a, FlagDescriptor<R>>,
}

impl<'a, R> Iterator for Infos<'a, R> {
    type Item = &'a FlagInfo;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(FlagDescriptor::info)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<R> ExactSizeIterator for Infos<'_, R> {}

impl<R> DoubleEndedIterator for Infos<'_, R> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(FlagDescriptor::info)
    }
}

impl<R> Clone for Infos<'_, R> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

/// The result of parsing a full token list.
#[derive(Debug)]
pub struct Parsed<R> {
    /// The populated record. Fields whose value failed to convert are
    /// unspecified; check `errors` before trusting any field.
    pub flags: R,

    /// Tokens that weren't consumed as flags or flag values, in order.
    pub args: Vec<String>,

    pub errors: Errors,
}

impl<R> Parsed<R> {
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (R, Vec<String>, Errors) {
        (self.flags, self.args, self.errors)
    }
}
