//! Build automation tasks for ShopSans
//!
//! Currently one task: rendering the CLI reference from the clap definitions
//! so the docs never drift from the binary.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for ShopSans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    // Generate markdown from clap definitions
    let markdown = clap_markdown::help_markdown::<shopsans_cli::Cli>();

    let content = format!(
        r#"# ShopSans CLI Reference

This documentation is auto-generated from the CLI source code. Last updated: {}.

The `shopsans` binary is a terminal client for the ShopSans back-office API:
customers, orders, products, and sales analytics, plus a login command that
establishes the session cookie.

## Environment Variables

- `SHOPSANS_API_BASE` - Back-office server URL (default: `http://localhost:4000`)
- `RUST_LOG` - Logging directive (e.g., `debug`, `info`, `warn`, `error`)

## Commands

{}
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let doc_file = output_path.join("cli.md");
    fs::write(&doc_file, content)?;

    println!("Wrote {}", doc_file.display());

    Ok(())
}
