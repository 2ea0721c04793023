mod cli;

use cli::{Cli, Sequence};
use core::fmt::{self, Display};
use giter_core::GIter;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::io::{self, IsTerminal, Write};
use std::process::{ExitCode, Termination};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> ExitCode {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "giter=warn"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };
    log::debug!("{cli:?}");

    if cli.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    } else if cli.help {
        println!("{}", include_str!("help.txt"));
        return ExitCode::SUCCESS;
    }

    match real_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.report()
        }
    }
}

fn real_main(cli: &Cli) -> Result<(), Error> {
    let rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let arity = |seq, n| Error::Cli(cli::Error::Arity(seq, n));

    cli.check(cli.sequence.unwrap_or(Sequence::Syracuse))?;
    let Some(seq) = cli.sequence else {
        // the sequence shown when no other is asked for
        return print(cli, GIter::syracuse(15, cli.include_starting)?);
    };
    match seq {
        Sequence::Range => {
            let range = match cli.ints()?[..] {
                [stop] => GIter::range_to(stop),
                [start, stop] => GIter::range(start, stop),
                [start, stop, step] => GIter::range_step(start, stop, step)?,
                _ => return Err(arity(seq, "one to three integers")),
            };
            print(cli, range)
        }
        Sequence::Random => {
            if !cli.args.is_empty() {
                return Err(arity(seq, "no arguments"));
            }
            let (min, max) = (cli.min.unwrap_or(0.), cli.max.unwrap_or(1.));
            print(cli, GIter::random_with(rng, min, max, cli.iterations)?)
        }
        Sequence::Randint => match cli.ints()?[..] {
            [min, max] => print(cli, GIter::randint_with(rng, min, max, cli.iterations)?),
            _ => Err(arity(seq, "two integers")),
        },
        Sequence::Choice => {
            let items = cli.args.iter().map(String::as_str);
            print(cli, GIter::choice_with(rng, items, !cli.replace, cli.max_size)?)
        }
        Sequence::Syracuse => match cli.ints()?[..] {
            [start] => print(cli, GIter::syracuse(start, cli.include_starting)?),
            _ => Err(arity(seq, "one integer")),
        },
    }
}

/// Print all values of a sequence, separated by a space or the given separator.
///
/// If the sequence is infinite, this only returns once stdout is closed.
fn print<T: Display>(cli: &Cli, seq: GIter<T>) -> Result<(), Error> {
    let sep = cli.separator.as_deref().unwrap_or(" ");
    let written = with_stdout(|out| {
        for (i, x) in seq.enumerate() {
            if i > 0 {
                write!(out, "{sep}")?;
            }
            write!(out, "{x}")?;
        }
        writeln!(out)?;
        out.flush()
    });
    match written {
        // a closed pipe, such as `giter random | head -c 100`, is no error
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        written => Ok(written?),
    }
}

fn with_stdout<T>(f: impl FnOnce(&mut dyn Write) -> T) -> T {
    let stdout = io::stdout();
    if stdout.is_terminal() {
        f(&mut stdout.lock())
    } else {
        f(&mut io::BufWriter::new(stdout.lock()))
    }
}

#[derive(Debug)]
enum Error {
    Io(io::Error),
    Cli(cli::Error),
    Giter(giter_core::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => e.fmt(f),
            Self::Cli(e) => e.fmt(f),
            Self::Giter(e) => e.fmt(f),
        }
    }
}

impl Termination for Error {
    fn report(self) -> ExitCode {
        ExitCode::from(match self {
            Self::Io(_) | Self::Cli(_) => 2,
            Self::Giter(_) => 5,
        })
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<cli::Error> for Error {
    fn from(e: cli::Error) -> Self {
        Self::Cli(e)
    }
}

impl From<giter_core::Error> for Error {
    fn from(e: giter_core::Error) -> Self {
        Self::Giter(e)
    }
}
