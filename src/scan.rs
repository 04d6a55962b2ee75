/*!
The matching engine: drives a [`TokenScanner`] over a token list and resolves
each token against a [`FlagSet`].
*/

use declflags_scanner::{TokenScanner, ValueAccess, Visitor, looks_like_flag};
use tracing::{debug, trace};

use crate::{
    descriptor::ParseOutcome,
    errors::{Errors, FlagError},
    flag_set::FlagSet,
    options::ParseOptions,
};

/// Resolves a single token. Rebuilt for every token from reborrows of the
/// pass state.
struct Matcher<'a, R> {
    set: &'a FlagSet<R>,
    record: &'a mut R,
    options: ParseOptions,
    args: &'a mut Vec<String>,
    errors: &'a mut Errors,
}

impl<'arg, R> Visitor<'arg> for Matcher<'_, R> {
    type Value = ();

    fn visit_token(self, pos: usize, token: &'arg str, value: impl ValueAccess<'arg>) {
        let next = value.peek();
        let record = self.record;

        // First declared match wins
        let outcome = self
            .set
            .descriptors()
            .iter()
            .find_map(|descriptor| match descriptor.parse(record, token, next) {
                ParseOutcome::NoMatch => None,
                outcome => Some(outcome),
            });

        let Some(outcome) = outcome else {
            if looks_like_flag(token) && self.options.unknown_as_error {
                trace!(pos, token, "unknown flag");
                self.errors.push(FlagError::unknown(pos, token));
            } else {
                trace!(pos, token, "positional");
                self.args.push(token.to_owned());
            }

            return;
        };

        trace!(pos, token, ?outcome, "matched flag");

        let taken = match outcome.consumed() {
            2 => value.take(),
            _ => None,
        };

        match outcome {
            ParseOutcome::MissingValue => {
                self.errors.push(FlagError::missing_value(pos, token));
            }
            ParseOutcome::InvalidValue => {
                let rejected = taken.unwrap_or_default();
                self.errors
                    .push(FlagError::invalid_value(pos, token, rejected));
            }
            ParseOutcome::NoMatch | ParseOutcome::ConsumedOne | ParseOutcome::ConsumedTwo => {}
        }
    }

    fn visit_trailing(self, token: &'arg str) {
        trace!(token, "positional after terminator");
        self.args.push(token.to_owned());
    }
}

/// Scan `tokens` into `record`, appending positionals to `args` and
/// failures to `errors`. Always consumes the whole input.
pub(crate) fn scan<'arg, R>(
    set: &FlagSet<R>,
    record: &mut R,
    tokens: impl Iterator<Item = &'arg str>,
    options: ParseOptions,
    args: &mut Vec<String>,
    errors: &mut Errors,
) {
    let args_before = args.len();
    let errors_before = errors.len();
    let mut scanner = TokenScanner::new(tokens);

    while let Some(()) = scanner.next_token(Matcher {
        set,
        record: &mut *record,
        options,
        args: &mut *args,
        errors: &mut *errors,
    }) {}

    debug!(
        tokens = scanner.position(),
        positionals = args.len() - args_before,
        errors = errors.len() - errors_before,
        terminated = scanner.is_positional_only(),
        "finished parse pass",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::ErrorDetail, flag_set::FlagSetBuilder};

    #[derive(Debug, Default)]
    struct Record {
        verbose: bool,
        level: i32,
    }

    fn set() -> FlagSet<Record> {
        let mut builder = FlagSetBuilder::new();
        builder.flag("--verbose", |r: &mut Record| &mut r.verbose).alias("-v");
        builder.flag("--level", |r: &mut Record| &mut r.level);
        builder.build()
    }

    fn run(tokens: &[&str], options: ParseOptions) -> (Record, Vec<String>, Errors) {
        let set = set();
        let mut record = Record::default();
        let mut args = Vec::new();
        let mut errors = Errors::new();
        scan(
            &set,
            &mut record,
            tokens.iter().copied(),
            options,
            &mut args,
            &mut errors,
        );
        (record, args, errors)
    }

    #[test]
    fn empty_input() {
        let (record, args, errors) = run(&[], ParseOptions::new());
        assert!(!record.verbose);
        assert!(args.is_empty());
        assert!(!errors.has_errors());
    }

    #[test]
    fn dash_value_is_not_taken() {
        let (record, args, errors) = run(&["--level", "-v", "x"], ParseOptions::new());
        assert!(record.verbose);
        assert_eq!(record.level, 0);
        assert_eq!(args, ["x"]);
        assert_eq!(errors.as_slice(), [FlagError::missing_value(0, "--level")]);
    }

    #[test]
    fn invalid_value_consumes_its_token() {
        let (_, args, errors) = run(&["--level", "high", "rest"], ParseOptions::new());
        assert_eq!(args, ["rest"]);
        assert_eq!(
            errors[0].detail,
            ErrorDetail::InvalidValue("high".to_owned())
        );
    }

    #[test]
    fn lone_dash_is_a_flag_shape() {
        let (_, args, errors) = run(&["-"], ParseOptions::new());
        assert!(args.is_empty());
        assert_eq!(errors.as_slice(), [FlagError::unknown(0, "-")]);

        let options = ParseOptions::new().with_unknown_as_error(false);
        let (_, args, errors) = run(&["-"], options);
        assert_eq!(args, ["-"]);
        assert!(!errors.has_errors());
    }

    #[test]
    fn appends_to_existing_accumulators() {
        let set = set();
        let mut record = Record::default();
        let mut args = vec!["earlier".to_owned()];
        let mut errors = Errors::from(vec![FlagError::unknown(9, "--old")]);

        scan(
            &set,
            &mut record,
            ["--nope", "later"].into_iter(),
            ParseOptions::new(),
            &mut args,
            &mut errors,
        );

        assert_eq!(args, ["earlier", "later"]);
        assert_eq!(
            errors.as_slice(),
            [FlagError::unknown(9, "--old"), FlagError::unknown(0, "--nope")]
        );
    }
}
