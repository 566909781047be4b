use clap::Parser;
use sallykey::{generate_key_pair, resolve_paths, GeneratedKeyPair, KeygenError, OutputLocation};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const PRE_DESCRIPTION: &str = "This tool can be used to generate an SSH public/private key pair.
Keys are generated using the RSA algorithm and are 2048 bits in length.

The resulting key pair can be imported for use in programs
such as FileZilla, as well as from the command line.";

const ERROR_DESCRIPTION: &str = "Error generating key pair.
Please find error details below:";

#[derive(Parser, Debug)]
#[command(name = "keygen")]
#[command(about = "Generate an RSA key pair for SSH")]
#[command(version)]
struct Cli {
    /// Private key destination
    #[arg(long)]
    private_key: Option<PathBuf>,

    /// Public key destination
    #[arg(long)]
    public_key: Option<PathBuf>,

    /// Directory for id_rsa and id_rsa.pub (defaults to the home directory)
    #[arg(short, long, conflicts_with = "here")]
    output_dir: Option<PathBuf>,

    /// Write id_rsa and id_rsa.pub to the current directory
    #[arg(long)]
    here: bool,
}

impl Cli {
    fn location(&self) -> OutputLocation {
        match (&self.output_dir, self.here) {
            (Some(dir), _) => OutputLocation::Dir(dir.clone()),
            (None, true) => OutputLocation::WorkingDir,
            (None, false) => OutputLocation::Home,
        }
    }
}

fn run(cli: Cli) -> Result<GeneratedKeyPair, KeygenError> {
    let location = cli.location();
    let paths = resolve_paths(cli.private_key, cli.public_key, &location)?;
    generate_key_pair(&paths.private_key, &paths.public_key)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    println!("{}\n", PRE_DESCRIPTION);

    match run(cli) {
        Ok(generated) => {
            println!("Key pair has been generated successfully.");
            println!("Please find the files below:\n");
            println!("Private key: {}", generated.paths.private_key.display());
            println!("Public key: {}", generated.paths.public_key.display());
            println!("Fingerprint: {}", generated.fingerprint);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}\n\n{}", ERROR_DESCRIPTION, err);
            ExitCode::FAILURE
        }
    }
}
