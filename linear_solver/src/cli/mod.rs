pub mod params;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub use params::SolverParams;

#[derive(Parser, Debug)]
#[command(name = "solve", author, version, about, long_about = None)]
pub struct Args {
    /// File holding the matrix size followed by the augmented rows
    #[arg(long = "in", value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// File the solution is written to
    #[arg(long = "out", value_name = "OUTPUT_FILE")]
    pub output: PathBuf,
}

impl Args {
    /// Parses `-in <file> -out <file>` as well as the `--in`/`--out` spellings.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_flags(args))
    }

    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_flags(args))
    }

    pub fn into_params(self) -> SolverParams {
        SolverParams::new(self.input, self.output)
    }
}

// clap only knows single-dash flags as one character
fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            match arg.to_str() {
                Some("-in") => OsString::from("--in"),
                Some("-out") => OsString::from("--out"),
                _ => arg,
            }
        })
        .collect()
}
