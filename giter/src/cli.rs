//! Command-line argument parsing
use core::fmt;
use std::ffi::OsString;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sequence {
    Range,
    Random,
    Randint,
    Choice,
    Syracuse,
}

impl Sequence {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "range" => Some(Self::Range),
            "random" => Some(Self::Random),
            "randint" => Some(Self::Randint),
            "choice" => Some(Self::Choice),
            "syracuse" => Some(Self::Syracuse),
            _ => None,
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Range => "range",
            Self::Random => "random",
            Self::Randint => "randint",
            Self::Choice => "choice",
            Self::Syracuse => "syracuse",
        }
        .fmt(f)
    }
}

#[derive(Debug, Default)]
pub struct Cli {
    // Sequence options
    pub iterations: Option<i64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// By default, sampled items are removed from the bag;
    /// with this flag, they are put back.
    pub replace: bool,
    pub max_size: Option<i64>,
    pub include_starting: bool,
    /// Without a seed, random numbers are drawn from the thread-local generator.
    pub seed: Option<u64>,

    // Output options
    pub separator: Option<String>,

    // Positional arguments
    /// If this argument is not given, the Syracuse sequence of 15 is printed.
    pub sequence: Option<Sequence>,
    pub args: Vec<String>,
    pub version: bool,
    pub help: bool,
}

impl Cli {
    fn positional(&mut self, arg: OsString) -> Result<(), Error> {
        let arg = arg.into_string()?;
        if self.sequence.is_none() {
            self.sequence = Some(Sequence::from_str(&arg).ok_or(Error::Sequence(arg))?);
        } else {
            self.args.push(arg)
        }
        Ok(())
    }

    fn long(&mut self, arg: &str, args: &mut impl Iterator<Item = OsString>) -> Result<(), Error> {
        match arg {
            // handle all arguments after "--"
            "" => args.try_for_each(|arg| self.positional(arg))?,

            "iterations" => self.short('n', args)?,
            "min" => self.min = Some(parse(args).ok_or(Error::Float("--min"))?),
            "max" => self.max = Some(parse(args).ok_or(Error::Float("--max"))?),
            "replace" => self.short('r', args)?,
            "max-size" => self.short('m', args)?,
            "include-starting" => self.short('i', args)?,
            "seed" => self.short('s', args)?,
            "separator" => {
                let sep = args.next().ok_or(Error::Str("--separator"))?;
                self.separator = Some(sep.into_string()?)
            }
            "version" => self.short('V', args)?,
            "help" => self.short('h', args)?,

            arg => Err(Error::Flag(format!("--{arg}")))?,
        }
        Ok(())
    }

    fn short(&mut self, arg: char, args: &mut impl Iterator<Item = OsString>) -> Result<(), Error> {
        match arg {
            'n' => self.iterations = Some(parse(args).ok_or(Error::Int("-n"))?),
            'r' => self.replace = true,
            'm' => self.max_size = Some(parse(args).ok_or(Error::Int("-m"))?),
            'i' => self.include_starting = true,
            's' => self.seed = Some(parse(args).ok_or(Error::Int("-s"))?),
            'V' => self.version = true,
            'h' => self.help = true,
            arg => Err(Error::Flag(format!("-{arg}")))?,
        }
        Ok(())
    }

    pub fn parse() -> Result<Self, Error> {
        let mut args = std::env::args_os();
        args.next();
        Self::parse_from(args)
    }

    pub fn parse_from(args: impl IntoIterator<Item = OsString>) -> Result<Self, Error> {
        let mut cli = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.to_str() {
                // we've got a valid UTF-8 argument here
                Some(s) => match s.strip_prefix("--") {
                    Some(rest) => cli.long(rest, &mut args)?,
                    None => match s.strip_prefix('-') {
                        // negative numbers such as `-3` are positional
                        Some(rest) if !rest.starts_with(|c: char| c.is_ascii_digit()) => {
                            rest.chars().try_for_each(|c| cli.short(c, &mut args))?
                        }
                        _ => cli.positional(arg)?,
                    },
                },
                None => cli.positional(arg)?,
            }
        }
        Ok(cli)
    }

    /// Fail if a sequence option was given that `seq` does not use.
    pub fn check(&self, seq: Sequence) -> Result<(), Error> {
        use Sequence::{Choice, Randint, Random, Syracuse};
        let opts: [(bool, &'static str, &[Sequence]); 7] = [
            (self.iterations.is_some(), "--iterations", &[Random, Randint]),
            (self.min.is_some(), "--min", &[Random]),
            (self.max.is_some(), "--max", &[Random]),
            (self.replace, "--replace", &[Choice]),
            (self.max_size.is_some(), "--max-size", &[Choice]),
            (self.include_starting, "--include-starting", &[Syracuse]),
            (self.seed.is_some(), "--seed", &[Random, Randint, Choice]),
        ];
        match opts.iter().find(|(set, _, seqs)| *set && !seqs.contains(&seq)) {
            Some((_, opt, _)) => Err(Error::Unused(opt, seq)),
            None => Ok(()),
        }
    }

    /// Interpret all positional arguments after the sequence name as integers.
    pub fn ints(&self) -> Result<Vec<i64>, Error> {
        let int = |s: &String| s.parse::<i64>().map_err(|_| Error::Positional(s.clone()));
        self.args.iter().map(int).collect()
    }
}

#[derive(Debug)]
pub enum Error {
    Flag(String),
    Utf8(OsString),
    Int(&'static str),
    Float(&'static str),
    Str(&'static str),
    Sequence(String),
    Positional(String),
    Arity(Sequence, &'static str),
    Unused(&'static str, Sequence),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let seqs = "range, random, randint, choice, syracuse";
        match self {
            Self::Flag(s) => write!(f, "unknown flag: {s}"),
            Self::Utf8(s) => write!(f, "invalid UTF-8: {s:?}"),
            Self::Int(o) => write!(f, "{o} expects an integer"),
            Self::Float(o) => write!(f, "{o} expects a number"),
            Self::Str(o) => write!(f, "{o} expects a string"),
            Self::Sequence(s) => write!(f, "unknown sequence {s} (possible values: {seqs})"),
            Self::Positional(s) => write!(f, "cannot use {s} as integer"),
            Self::Arity(seq, n) => write!(f, "{seq} expects {n}"),
            Self::Unused(opt, seq) => write!(f, "{opt} has no effect on {seq}"),
        }
    }
}

/// Conversion of errors from [`OsString::into_string`].
impl From<OsString> for Error {
    fn from(e: OsString) -> Self {
        Self::Utf8(e)
    }
}

fn parse<T: core::str::FromStr>(args: &mut impl Iterator<Item = OsString>) -> Option<T> {
    args.next()?.into_string().ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Result<Cli, Error> {
        Cli::parse_from(args.iter().map(OsString::from))
    }

    #[test]
    fn flags() {
        let choice = cli(&["-rn", "3", "--max-size", "7", "choice", "a", "b"]).unwrap();
        assert!(choice.replace);
        assert_eq!(choice.iterations, Some(3));
        assert_eq!(choice.max_size, Some(7));
        assert_eq!(choice.sequence, Some(Sequence::Choice));
        assert_eq!(choice.args, ["a", "b"]);
    }

    #[test]
    fn negative_positional() {
        let range = cli(&["range", "-3", "3"]).unwrap();
        assert_eq!(range.ints().unwrap(), [-3, 3]);

        let randint = cli(&["randint", "--", "-n", "5"]).unwrap();
        assert_eq!(randint.args, ["-n", "5"]);
        assert!(matches!(randint.ints(), Err(Error::Positional(s)) if s == "-n"));
    }

    #[test]
    fn invalid() {
        assert!(matches!(cli(&["--bogus"]), Err(Error::Flag(_))));
        assert!(matches!(cli(&["-x"]), Err(Error::Flag(_))));
        assert!(matches!(cli(&["fibonacci"]), Err(Error::Sequence(_))));
        assert!(matches!(cli(&["-n", "many"]), Err(Error::Int("-n"))));
        assert!(matches!(cli(&["--min"]), Err(Error::Float("--min"))));
    }

    #[test]
    fn unused() {
        fn check(args: &[&str]) -> Result<(), Error> {
            let cli = cli(args).unwrap();
            cli.check(cli.sequence.unwrap_or(Sequence::Syracuse))
        }
        assert!(check(&["-n", "3", "-s", "1", "--min", "0.5", "random"]).is_ok());
        assert!(check(&["-r", "-m", "2", "-s", "1", "choice", "a"]).is_ok());
        assert!(check(&["-i", "syracuse", "6"]).is_ok());
        assert!(check(&["-i"]).is_ok());

        fn unused(args: &[&str], opt: &str, seq: Sequence) {
            assert!(matches!(check(args), Err(Error::Unused(o, s)) if o == opt && s == seq));
        }
        unused(&["-n", "3", "range", "5"], "--iterations", Sequence::Range);
        unused(&["-n", "3", "choice", "a"], "--iterations", Sequence::Choice);
        unused(&["--max", "0.5", "randint", "1", "6"], "--max", Sequence::Randint);
        unused(&["-r", "syracuse", "6"], "--replace", Sequence::Syracuse);
        unused(&["-m", "2"], "--max-size", Sequence::Syracuse);
        unused(&["-i", "range", "5"], "--include-starting", Sequence::Range);
        unused(&["-s", "7", "syracuse", "6"], "--seed", Sequence::Syracuse);
    }
}
