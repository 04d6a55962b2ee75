mod error;

use std::env;

use anyhow::Context;
use declflags::{FlagRecord, FlagSetBuilder, ParseOptions, Parsed};
use lazy_format::lazy_format;

use crate::error::UsageError;

const HELP: &str = "
Runs a server on the given port (default is 8080).

  --port    : specify the port to use.
  --host    : specify the address to bind.
  --verbose : log every connection.
  --help/-h : prints this help.
";

/// Flags that apply to the whole program. These are parsed first, leaving
/// everything else for the server's own flags.
#[derive(Debug, Default)]
struct Global {
    verbose: bool,
    help: bool,
}

impl FlagRecord for Global {
    fn declare(flags: &mut FlagSetBuilder<Self>) {
        flags.flag("--verbose", |f| &mut f.verbose).alias("-v");
        flags.flag("--help", |f| &mut f.help).alias("-h");
    }
}

#[derive(Debug, Default)]
struct Server {
    port: u16,
    host: Option<String>,
}

impl FlagRecord for Server {
    fn declare(flags: &mut FlagSetBuilder<Self>) {
        flags.flag("--port", |f| &mut f.port).default(8080u16);
        flags.flag("--host", |f| &mut f.host);
    }
}

fn main() -> anyhow::Result<()> {
    let tokens: Vec<String> = env::args().collect();

    let Parsed {
        flags: global,
        mut args,
        mut errors,
    } = Global::parse_with(&tokens, ParseOptions::new().with_unknown_as_error(false));

    let server = Server::parse_chained(&mut args, &mut errors);

    if errors.has_errors() {
        return Err(UsageError::InvalidArguments(errors).into());
    }

    let program = args.first().cloned().unwrap_or_else(|| "declflags-demo".to_owned());

    if args.len() > 1 {
        return Err(UsageError::UnexpectedArguments {
            program,
            args: args.split_off(1),
        }
        .into());
    }

    if global.help {
        print!(
            "{}",
            lazy_format!("{program}\n{program} --port 8080\n{}", &HELP[1..])
        );
        return Ok(());
    }

    let host = server.host.as_deref().unwrap_or("127.0.0.1");
    let address = format!("{host}:{}", server.port);
    let address: std::net::SocketAddr = address
        .parse()
        .with_context(|| format!("{address:?} isn't a socket address"))?;

    if global.verbose {
        eprintln!("flags: {global:?} {server:?}");
    }

    println!("would listen on {address}");

    Ok(())
}
