use std::{fmt, io::Write};

use log::{debug, trace};

/// Maximum used when no usable argument is given
pub const DEFAULT_MAX: i32 = 100;

/// Display value chosen for a single number
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    FizzBuzz,
    Fizz,
    Buzz,
    Number(i32),
}

impl Classification {
    pub fn of(n: i32) -> Classification {
        // 15 must be checked before 3 and 5 since both match it
        if n % 15 == 0 {
            Classification::FizzBuzz
        } else if n % 3 == 0 {
            Classification::Fizz
        } else if n % 5 == 0 {
            Classification::Buzz
        } else {
            Classification::Number(n)
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::FizzBuzz => f.write_str("FizzBuzz"),
            Classification::Fizz => f.write_str("Fizz"),
            Classification::Buzz => f.write_str("Buzz"),
            Classification::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Returns the display string for `n`
pub fn classify(n: i32) -> String {
    Classification::of(n).to_string()
}

/// Reads the maximum from the first argument
///
/// Missing or unparseable input falls back to [`DEFAULT_MAX`]. Any arguments
/// after the first are ignored.
pub fn parse_max<S: AsRef<str>>(args: &[S]) -> i32 {
    let Some(first) = args.first() else {
        debug!("No maximum given, using {}", DEFAULT_MAX);
        return DEFAULT_MAX;
    };
    let first = first.as_ref();
    match first.parse() {
        Ok(max) => max,
        Err(e) => {
            debug!("Unable to parse maximum `{}` ({}), using {}", first, e, DEFAULT_MAX);
            DEFAULT_MAX
        }
    }
}

/// Writes one `<i>: <result>` line for each `i` in `1..=max`
pub fn perform<W: Write>(max: i32, out: &mut W) -> std::io::Result<()> {
    debug!("Max: {}", max);
    for i in 1..=max {
        let classification = Classification::of(i);
        trace!("{} -> {:?}", i, classification);
        writeln!(out, "{}: {}", i, classification)?;
    }
    Ok(())
}

pub fn run<S: AsRef<str>, W: Write>(args: &[S], out: &mut W) -> std::io::Result<()> {
    perform(parse_max(args), out)
}
