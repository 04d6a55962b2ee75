use declflags::{Errors, FlagError, FlagRecord, FlagSetBuilder};
use expect_test::{Expect, expect};

#[track_caller]
fn check(errors: &Errors, expect: Expect) {
    expect.assert_eq(&errors.to_string());
}

#[derive(Debug, Default)]
struct Flags {
    count: i32,
    separator: char,
}

impl FlagRecord for Flags {
    fn declare(flags: &mut FlagSetBuilder<Self>) {
        flags.flag("-e", |f| &mut f.count);
        flags.flag("-f", |f| &mut f.separator);
    }
}

#[test]
fn error_block() {
    let parsed = Flags::parse(&[
        "one", "--two", "-e", "nan", "-f", "-e", "ana", "-f", "xx",
    ]);

    check(
        &parsed.errors,
        expect![[r#"
            Unknown flag `--two` at index 1
            Invalid value "nan" for flag `-e` at index 2
            Missing value for flag `-f` at index 4
            Invalid value "ana" for flag `-e` at index 5
            Invalid value "xx" for flag `-f` at index 7
        "#]],
    );
}

#[test]
fn rejected_value_is_escaped() {
    let parsed = Flags::parse(&["-e", "say \"hi\"\n"]);

    check(
        &parsed.errors,
        expect![[r#"
            Invalid value "say \"hi\"\n" for flag `-e` at index 0
        "#]],
    );
}

#[test]
fn no_errors_render_nothing() {
    check(&Errors::new(), expect![[""]]);
}

#[test]
fn single_error_has_no_newline() {
    let error = FlagError::missing_value(3, "--port");
    assert_eq!(error.to_string(), "Missing value for flag `--port` at index 3");
}
