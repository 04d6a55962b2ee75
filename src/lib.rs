/*!
`declflags` is a declarative command-line flag parser. A flag record type
lists its flags once, each bound to one of its fields; parsing a token list
then produces a populated record, the leftover positional arguments, and every
parse failure that was found.

```
use declflags::{FlagRecord, FlagSetBuilder};

#[derive(Debug, Default)]
struct Server {
    port: u16,
    verbose: bool,
    tags: Vec<String>,
}

impl FlagRecord for Server {
    fn declare(flags: &mut FlagSetBuilder<Self>) {
        flags.flag("--port", |f| &mut f.port).alias("-p").default(8080u16);
        flags.flag("--verbose", |f| &mut f.verbose).alias("-v");
        flags.flag("--tag", |f| &mut f.tags);
    }
}

let parsed = Server::parse(&["-v", "--tag", "a", "serve", "--tag", "b"]);

assert!(!parsed.errors.has_errors());
assert_eq!(parsed.flags.port, 8080);
assert!(parsed.flags.verbose);
assert_eq!(parsed.flags.tags, ["a", "b"]);
assert_eq!(parsed.args, ["serve"]);
```

Parse failures never abort a parse. They are collected in [`Errors`], in scan
order, and the caller decides what to do with them.

Flags are matched by exact name or alias. There's no `--flag=value` syntax and
no merging of short flags: `-lt` is just an unknown flag.
*/

pub mod descriptor;
pub mod errors;
pub mod flag_set;
mod impls;
pub mod name;
pub mod options;
pub mod parameter;
mod printers;
mod scan;

pub use declflags_scanner::TERMINATOR;

pub use crate::{
    descriptor::{FlagInfo, ParseOutcome},
    errors::{ErrorDetail, Errors, FlagError},
    flag_set::{FlagBuilder, FlagSet, FlagSetBuilder, Parsed},
    name::InvalidFlagName,
    options::ParseOptions,
    parameter::{Parameter, ParsedValue, Value, ValueError, ValueKind},
};

/**
A record of flags. Implementors list their flags in
[`declare`][FlagRecord::declare], which is the only required method; parsing
and introspection are provided.

Each call to a parse method builds the record's [`FlagSet`]. To parse many
times with the same flags, build the [`FlagSet`] once and use its methods
instead.
*/
pub trait FlagRecord: Default + Sized + 'static {
    /// Register every flag of this record, in matching order.
    fn declare(flags: &mut FlagSetBuilder<Self>);

    #[must_use]
    fn flag_set() -> FlagSet<Self> {
        FlagSet::new()
    }

    /// Parse `tokens` into a fresh record. Unknown flag-shaped tokens are
    /// errors.
    fn parse<S: AsRef<str>>(tokens: &[S]) -> Parsed<Self> {
        Self::flag_set().parse(tokens)
    }

    fn parse_with<S: AsRef<str>>(tokens: &[S], options: ParseOptions) -> Parsed<Self> {
        Self::flag_set().parse_with(tokens, options)
    }

    /// Parse the positionals left over by an earlier parse, replacing them
    /// with this pass's positionals and appending to `errors`. See
    /// [`FlagSet::parse_chained`].
    fn parse_chained(args: &mut Vec<String>, errors: &mut Errors) -> Self {
        Self::flag_set().parse_chained(args, errors)
    }

    fn parse_chained_with(
        args: &mut Vec<String>,
        errors: &mut Errors,
        options: ParseOptions,
    ) -> Self {
        Self::flag_set().parse_chained_with(args, errors, options)
    }

    /// Describe every declared flag, in declaration order, without parsing
    /// anything.
    #[must_use]
    fn flag_infos() -> Vec<FlagInfo> {
        Self::flag_set().infos().copied().collect()
    }
}
