use clap::{Parser, Subcommand};
use javac_messages_cli::{
    export::export_catalog,
    read_catalog,
    stats::print_stats,
    validation::validate_level,
    verify::verify_source,
    view::{ListFilter, Step, print_list, print_show},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List messages with their text.
    List {
        /// The compiler.properties file to read
        #[arg(short, long)]
        input: String,

        /// Only list messages of this level (`err`, `warn`, `misc`, ...)
        #[arg(short, long, conflicts_with = "errors")]
        level: Option<String>,

        /// Only list error messages
        #[arg(long)]
        errors: bool,

        /// Display full text without truncation
        #[arg(long)]
        full: bool,

        /// Print parse diagnostics to stderr
        #[arg(long)]
        warnings: bool,
    },

    /// Show one message and its placeholders.
    Show {
        /// The compiler.properties file to read
        #[arg(short, long)]
        input: String,

        /// Message name, e.g. `compiler.err.cant.resolve`
        name: String,

        /// Show the message after NAME instead (wraps around)
        #[arg(long, conflicts_with = "previous")]
        next: bool,

        /// Show the message before NAME instead (wraps around)
        #[arg(long)]
        previous: bool,
    },

    /// Summarize levels and placeholder types.
    Stats {
        /// The compiler.properties file to read
        #[arg(short, long)]
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the file's SHA-256 digest.
    Verify {
        /// The compiler.properties file to check
        #[arg(short, long)]
        input: String,

        /// Expected digest; defaults to the JDK 18 file
        #[arg(long)]
        sha256: Option<String>,
    },

    /// Export all messages as JSON.
    Export {
        /// The compiler.properties file to read
        #[arg(short, long)]
        input: String,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn run(commands: Commands) -> Result<(), String> {
    match commands {
        Commands::List {
            input,
            level,
            errors,
            full,
            warnings,
        } => {
            let level = if errors { Some("err".to_string()) } else { level };
            if let Some(level) = &level {
                validate_level(level)?;
            }
            let catalog = read_catalog(&input)?;
            print_list(
                &catalog,
                &ListFilter {
                    level,
                    full,
                    warnings,
                },
            );
            Ok(())
        }
        Commands::Show {
            input,
            name,
            next,
            previous,
        } => {
            let step = match (next, previous) {
                (true, _) => Step::Next,
                (_, true) => Step::Previous,
                _ => Step::Current,
            };
            let catalog = read_catalog(&input)?;
            print_show(&catalog, &name, step)
        }
        Commands::Stats { input, json } => {
            let catalog = read_catalog(&input)?;
            print_stats(&catalog, json)
        }
        Commands::Verify { input, sha256 } => verify_source(&input, sha256.as_deref()),
        Commands::Export { input, output } => {
            let catalog = read_catalog(&input)?;
            export_catalog(&catalog, output.as_deref())
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args.commands) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
