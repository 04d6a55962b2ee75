use declflags::{FlagError, FlagRecord, FlagSet, FlagSetBuilder, ParseOptions, Parsed};

#[derive(Debug, Default)]
struct SharedFlags {
    verbose: bool,
}

impl FlagRecord for SharedFlags {
    fn declare(flags: &mut FlagSetBuilder<Self>) {
        flags.flag("-v", |f| &mut f.verbose);
    }
}

#[derive(Debug, Default)]
struct TestFlags {
    port: i32,
}

impl FlagRecord for TestFlags {
    fn declare(flags: &mut FlagSetBuilder<Self>) {
        flags.flag("--port", |f| &mut f.port);
    }
}

const ARGV: &[&str] = &["-v", "--port", "8080", "--unknown", "value"];

fn lenient() -> ParseOptions {
    ParseOptions::new().with_unknown_as_error(false)
}

#[test]
fn shared_flags_first() {
    let Parsed {
        flags: shared,
        mut args,
        mut errors,
    } = SharedFlags::parse_with(ARGV, lenient());

    assert!(errors.is_empty());
    assert!(shared.verbose);
    assert_eq!(args, ["--port", "8080", "--unknown", "value"]);

    let flags = TestFlags::parse_chained(&mut args, &mut errors);

    assert_eq!(errors.as_slice(), [FlagError::unknown(2, "--unknown")]);
    assert_eq!(flags.port, 8080);
    assert_eq!(args, ["value"]);
}

#[test]
fn command_flags_first() {
    let Parsed {
        flags,
        mut args,
        mut errors,
    } = TestFlags::parse_with(ARGV, lenient());

    assert!(errors.is_empty());
    assert_eq!(flags.port, 8080);

    let shared = SharedFlags::parse_chained(&mut args, &mut errors);

    assert_eq!(errors.as_slice(), [FlagError::unknown(1, "--unknown")]);
    assert!(shared.verbose);
    assert_eq!(args, ["value"]);
}

#[test]
fn errors_accumulate_across_passes() {
    let Parsed {
        mut args,
        mut errors,
        ..
    } = TestFlags::parse(&["--bad", "--port", "x", "-v", "rest"]);

    assert_eq!(
        errors.as_slice(),
        [
            FlagError::unknown(0, "--bad"),
            FlagError::invalid_value(1, "--port", "x"),
            FlagError::unknown(3, "-v"),
        ]
    );
    assert_eq!(args, ["rest"]);

    let shared = SharedFlags::parse_chained(&mut args, &mut errors);

    assert!(!shared.verbose);
    assert_eq!(errors.len(), 3);
    assert_eq!(args, ["rest"]);
}

#[test]
fn reused_flag_set() {
    let set = FlagSet::<TestFlags>::new();
    let mut errors = Default::default();

    let mut args: Vec<String> = vec!["--port".into(), "1".into(), "a".into()];
    let first = set.parse_chained(&mut args, &mut errors);

    let mut more: Vec<String> = vec!["b".into(), "--port".into(), "2".into()];
    let second = set.parse_chained_with(&mut more, &mut errors, lenient());

    assert_eq!(first.port, 1);
    assert_eq!(second.port, 2);
    assert_eq!(args, ["a"]);
    assert_eq!(more, ["b"]);
    assert!(!errors.has_errors());
}

#[test]
fn parse_into_existing_record() {
    let set = TestFlags::flag_set();
    let mut record = TestFlags { port: 7 };
    let mut args = Vec::new();
    let mut errors = Default::default();

    set.parse_into(&mut record, &["x"], ParseOptions::default(), &mut args, &mut errors);
    assert_eq!(record.port, 7);

    set.parse_into(
        &mut record,
        &["--port", "9"],
        ParseOptions::default(),
        &mut args,
        &mut errors,
    );
    assert_eq!(record.port, 9);
    assert_eq!(args, ["x"]);
    assert!(!errors.has_errors());
}
