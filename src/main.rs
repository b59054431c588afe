use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use colorforth_blocks::{decode_blocks, Charset, DecodeResult, Error, Options};

// options
use clap::{Parser, ValueEnum};

/// represent all acceptable arguments
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// blocks file, read from stdin when omitted
    path: Option<PathBuf>,

    /// number of the first block in the input
    #[clap(short, long, default_value = "0")]
    start: usize,

    /// charset text words are unpacked with
    #[clap(short, long, value_enum, default_value = "howerd")]
    charset: CharsetArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum CharsetArg {
    Legacy,
    Greenarray,
    Howerd,
}
impl From<CharsetArg> for Charset {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Legacy => Charset::Legacy,
            CharsetArg::Greenarray => Charset::Greenarray,
            CharsetArg::Howerd => Charset::Howerd,
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // get arguments
    let args = Args::parse();

    // read the whole input, blocks are small
    let input = match &args.path {
        Some(path) => fs::read(path)?,
        None => {
            // abort when there is no input from stdin
            if atty::is(atty::Stream::Stdin) {
                return Err(Error::NoStdin);
            }
            let mut input = Vec::new();
            io::stdin().lock().read_to_end(&mut input)?;
            input
        }
    };

    let options = Options {
        charset: args.charset.into(),
    };
    let decoded = decode_blocks(&input, args.start, &options)?;

    // prepare stdout with buffering
    let stdout = io::stdout();
    let mut stdout = BufWriter::new(stdout.lock());
    macro_rules! println {
        ($($arg:tt)*) => ({
            writeln!(stdout, $($arg)*)?;
        })
    }

    // one token per line, each tab seperated pair of color and value
    for block in decoded {
        match block.result {
            DecodeResult::Decoded(tokens) => {
                println!("block\t{}", block.number);
                for token in tokens {
                    println!("{}\t{}", token.color, token.value);
                }
            }
            DecodeResult::Failed(err) => {
                log::warn!("block {} not decoded: {}", block.number, err);
                println!("block\t{}\terror\t{}", block.number, err);
            }
        }
    }
    stdout.flush()?;
    Ok(())
}
