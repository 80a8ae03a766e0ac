use std::path::PathBuf;

use anyhow::Result;
use log::info;
use structopt::StructOpt;

use sha2bits_tooling::{load_message, verify, OutputFormat, Report, SETTINGS};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sha2bits",
    about = "Reads a message file and prints its SHA-256 digest. Defaults come from \
        ./sha2bits.config.toml and SHA2BITS_* environment variables."
)]
struct Opt {
    #[structopt(short, long, parse(from_os_str), help = "Message file to hash.")]
    path: Option<PathBuf>,
    #[structopt(short, long, help = "Output format: hex, bits, all or json.")]
    format: Option<OutputFormat>,
    #[structopt(long, help = "Hash the file contents without trimming whitespace.")]
    no_trim: bool,
    #[structopt(short, long, help = "Do not echo the message before the digest.")]
    quiet: bool,
    #[structopt(long, help = "Fail unless the digest equals this hex value.")]
    expect: Option<String>,
}

fn main() -> Result<()> {
    fil_logger::init();

    let opt = Opt::from_args();
    let settings = &*SETTINGS;

    let path = opt
        .path
        .unwrap_or_else(|| PathBuf::from(&settings.message_path));
    let trim = settings.trim_whitespace && !opt.no_trim;
    let format = opt.format.unwrap_or(settings.output_format);

    let message = load_message(&path, trim)?;
    if settings.echo_message && !opt.quiet && format != OutputFormat::Json {
        println!("{}", String::from_utf8_lossy(&message));
    }

    let digest = sha2bits::sum(&message)?;
    info!("digest of {}: {}", path.display(), digest);

    println!("{}", Report::new(&path, &message, &digest).render(format)?);

    if let Some(expected) = opt.expect {
        verify(&digest, &expected)?;
    }

    Ok(())
}
