use std::{
    env,
    ffi::OsString,
    io::{self, BufWriter, Write},
    iter,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

#[derive(Parser, Debug)]
#[command(about, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Largest number to print
    ///
    /// Falls back to 100 when missing or not an integer. Values after the
    /// first are ignored.
    #[arg(value_name = "MAX")]
    args: Vec<OsString>,
}

impl Cli {
    /// Parses the process arguments with every value taken as positional
    fn from_env() -> Cli {
        let mut raw = env::args_os();
        let bin = raw.next().unwrap_or_else(|| OsString::from("fizzbuzz"));
        // Leading `--` stops clap treating user values such as `-h` or `--` as flags
        Cli::parse_from(iter::once(bin).chain(iter::once(OsString::from("--"))).chain(raw))
    }

    fn max_args(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

fn write_output(args: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    fizzbuzz::run(args, &mut out).context("Unable to write to stdout")?;
    out.flush().context("Unable to flush stdout")?;
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::from_env();
    debug!("CLI: {:?}", cli);

    // Output failures such as a closed pipe end the run quietly
    if let Err(e) = write_output(&cli.max_args()) {
        debug!("{:?}", e);
    }
}
