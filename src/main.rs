use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use kosutils::{
    exists, format_bytes, guess_mime_type, local_ip, remove_password, split_dir,
    supports_ansi_color, IdentityCache,
};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let matches = App::new("kosutil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve users and groups, and other small system lookups")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .global(true)
                .help("Increases log verbosity (-v info, -vv debug)"),
        )
        .subcommand(single("user-name", "UID", "Prints the name of a user id"))
        .subcommand(single("group-name", "GID", "Prints the name of a group id"))
        .subcommand(single("uid", "NAME", "Prints the id of a user name, -1 if unknown"))
        .subcommand(single("gid", "NAME", "Prints the id of a group name, -1 if unknown"))
        .subcommand(single("split", "LIST", "Prints each directory of a path list"))
        .subcommand(single("exists", "PATH", "Prints whether a path exists"))
        .subcommand(single(
            "local-ip",
            "ADDRESS",
            "Prints the local ip used to reach host:port",
        ))
        .subcommand(single("mime", "KEY", "Prints the MIME type guessed for a key"))
        .subcommand(single("bytes", "N", "Prints a byte count in human units"))
        .subcommand(single("redact", "URI", "Prints a URI with its password masked"))
        .subcommand(
            SubCommand::with_name("color").about("Prints whether stdout supports ANSI color"),
        )
        .get_matches();

    let verbosity = matches.subcommand().1.map_or(0, |m| m.occurrences_of("verbose"));
    init_logging(verbosity.max(matches.occurrences_of("verbose")));

    let cache = IdentityCache::new();
    match matches.subcommand() {
        ("user-name", Some(m)) => println!("{}", cache.user_name(parse_arg(m, "UID")?)),
        ("group-name", Some(m)) => println!("{}", cache.group_name(parse_arg(m, "GID")?)),
        ("uid", Some(m)) => println!("{}", cache.user_id(value(m, "NAME"))),
        ("gid", Some(m)) => println!("{}", cache.group_id(value(m, "NAME"))),
        ("split", Some(m)) => {
            for dir in split_dir(value(m, "LIST")) {
                println!("{}", dir);
            }
        }
        ("exists", Some(m)) => println!("{}", smol::block_on(exists(value(m, "PATH")))),
        ("local-ip", Some(m)) => {
            let address = value(m, "ADDRESS");
            let ip = smol::block_on(local_ip(address))
                .with_context(|| format!("cannot find local ip for {}", address))?;
            println!("{}", ip);
        }
        ("mime", Some(m)) => println!("{}", guess_mime_type(value(m, "KEY"))),
        ("bytes", Some(m)) => println!("{}", format_bytes(parse_arg(m, "N")?)),
        ("redact", Some(m)) => println!("{}", remove_password(value(m, "URI"))),
        ("color", _) => println!("{}", supports_ansi_color(stdout_fd())),
        _ => unreachable!("subcommand is required"),
    }
    Ok(())
}

fn single<'a, 'b>(name: &str, arg: &'a str, about: &'b str) -> App<'a, 'b> {
    SubCommand::with_name(name)
        .about(about)
        .arg(Arg::with_name(arg).required(true).index(1))
}

fn value<'a>(m: &'a ArgMatches, name: &str) -> &'a str {
    // required(true) guarantees presence
    m.value_of(name).unwrap_or_default()
}

fn parse_arg<F>(m: &ArgMatches, name: &str) -> Result<F>
where
    F: FromStr,
    <F as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let s = value(m, name);
    s.parse::<F>()
        .with_context(|| format!("invalid {} (value: {})", name, s))
}

fn stdout_fd() -> std::os::unix::io::RawFd {
    use std::os::unix::io::AsRawFd;
    std::io::stdout().as_raw_fd()
}

fn init_logging(verbosity: u64) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbosity {
        0 => EnvFilter::new("kosutils=warn"),
        1 => EnvFilter::new("kosutils=info"),
        _ => EnvFilter::new("kosutils=debug"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
