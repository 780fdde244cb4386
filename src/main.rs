use clap::{Parser, Subcommand};
use glossgen::{config, generate, output, parse};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "glossgen")]
#[command(about = "Static site generator for plain-text glossaries")]
#[command(long_about = "\
Static site generator for plain-text glossaries

The source file holds one stanza per term, separated by blank lines. The
first line of a stanza is the term; the following lines are its definition.

  book
  a printed or written literary work

  meaning
  something that one wishes to convey,
  especially by language

End the file with a blank line: a stanza without one is dropped.

Output (the directory must already exist):

  out/
  ├── index.html       # All terms, sorted, linked to their pages
  ├── book.html
  └── meaning.html

Paths not given as flags are prompted for on stdin.

Run 'glossgen gen-config' to generate a documented glossary.toml.")]
#[command(version)]
struct Cli {
    /// Glossary source file
    #[arg(long, short, global = true)]
    input: Option<PathBuf>,

    /// Output directory (must exist)
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    /// Config file (default: glossary.toml next to the input file)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse the glossary and write the index and term pages
    Build,
    /// Parse the glossary and list the terms that would be generated
    Check,
    /// Print a stock glossary.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let input = path_or_prompt(cli.input, "Enter input file name: ")?;
            let output_dir = path_or_prompt(cli.output, "Enter output folder name: ")?;
            let site_config = load_site_config(cli.config.as_deref(), &input)?;

            println!("==> Stage 1: Parsing {}", input.display());
            let glossary = parse::read_glossary(&input)?;
            output::print_check_output(&glossary, &input);

            println!("==> Stage 2: Generating HTML \u{2192} {}", output_dir.display());
            let report = generate::generate(&glossary, &output_dir, &site_config)?;
            output::print_generate_output(&report);

            println!("Glossary generation complete!");
        }
        Command::Check => {
            let input = path_or_prompt(cli.input, "Enter input file name: ")?;
            load_site_config(cli.config.as_deref(), &input)?;
            println!("==> Checking {}", input.display());
            let glossary = parse::read_glossary(&input)?;
            output::print_check_output(&glossary, &input);
            println!("==> Glossary is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Use the flag value if given, otherwise ask on stdin.
fn path_or_prompt(flag: Option<PathBuf>, prompt: &str) -> io::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    let mut stdout = io::stdout();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

/// Explicit `--config` wins; otherwise look beside the input file.
fn load_site_config(
    explicit: Option<&Path>,
    input: &Path,
) -> Result<config::SiteConfig, config::ConfigError> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => config::load_config_beside(input),
    }
}
