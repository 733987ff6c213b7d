//! parahtml CLI - paragraph HTML from PDF layout JSON

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use parahtml::{JsonFormat, PageSelection, Parahtml, ParahtmlResult};

#[derive(Parser)]
#[command(name = "parahtml")]
#[command(version)]
#[command(about = "Group PDF layout lines into paragraphs and write HTML", long_about = None)]
struct Cli {
    /// Input layout JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file (defaults to the input path with an .html extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Escape HTML-significant characters in paragraph text
    #[arg(long)]
    escape: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert layout JSON to HTML
    Html {
        /// Input layout JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write only the <p> fragments, without the surrounding document
        #[arg(long)]
        fragment: bool,

        /// Escape HTML-significant characters in paragraph text
        #[arg(long)]
        escape: bool,

        /// Document title
        #[arg(long, default_value = parahtml::render::DEFAULT_TITLE)]
        title: String,

        /// Document language
        #[arg(long, default_value = parahtml::render::DEFAULT_LANG)]
        lang: String,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Convert layout JSON to plain text paragraphs
    Text {
        /// Input layout JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Convert layout JSON to paragraph JSON with statistics
    Json {
        /// Input layout JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Show layout and paragraph statistics
    Info {
        /// Input layout JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            fragment,
            escape,
            title,
            lang,
            pages,
        }) => cmd_html(
            &input,
            output.as_deref(),
            fragment,
            Parahtml::new()
                .with_escape(escape)
                .with_title(title)
                .with_lang(lang),
            pages.as_deref(),
        ),
        Some(Commands::Text {
            input,
            output,
            pages,
        }) => cmd_text(&input, output.as_deref(), pages.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
            pages,
        }) => cmd_json(&input, output.as_deref(), compact, pages.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: write a full HTML document next to the input
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), cli.escape)
            } else {
                println!("{}", "Usage: parahtml <FILE> [OUTPUT]".yellow());
                println!("       parahtml --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    escape: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    let result = Parahtml::new().with_escape(escape).parse(input)?;
    let html = result.to_html_document()?;
    fs::write(&output_path, html)?;

    log::info!("HTML output has been written to {}", output_path.display());
    println!("{} {}", "Saved to".green(), output_path.display());

    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    fragment: bool,
    builder: Parahtml,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = builder.with_pages(page_selection(pages)?).parse(input)?;

    let html = if fragment {
        result.to_html()?
    } else {
        result.to_html_document()?
    };

    write_output(output, &html)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = Parahtml::new()
        .with_pages(page_selection(pages)?)
        .parse(input)?;
    let text = result.to_text()?;

    write_output(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = Parahtml::new()
        .with_pages(page_selection(pages)?)
        .parse(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = result.to_json(format)?;

    write_output(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = Parahtml::new().parse(input)?;
    print_info(input, &result);
    Ok(())
}

fn print_info(input: &Path, result: &ParahtmlResult) {
    let stats = result.stats();

    println!("{}", "Layout Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Empty lines".bold(), stats.skipped_line_count);

    println!();
    println!("{}", "Paragraph Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
}

fn cmd_version() {
    println!("{} {}", "parahtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Paragraph HTML from PDF layout JSON");
    println!();
    println!("License: MIT");
}

fn page_selection(pages: Option<&str>) -> parahtml::Result<PageSelection> {
    match pages {
        Some(p) => PageSelection::parse(p),
        None => Ok(PageSelection::All),
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        log::info!("Output has been written to {}", path.display());
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("out/input_structure.json")),
            PathBuf::from("out/input_structure.html")
        );
        assert_eq!(
            default_output_path(Path::new("layout")),
            PathBuf::from("layout.html")
        );
    }

    #[test]
    fn test_page_selection_arg() {
        assert_eq!(page_selection(None).unwrap(), PageSelection::All);
        assert_eq!(
            page_selection(Some("2-3")).unwrap(),
            PageSelection::Range(2..=3)
        );
        assert!(page_selection(Some("two")).is_err());
        assert!(page_selection(Some("3-1")).is_err());
    }

    #[test]
    fn test_parse_html_subcommand() {
        let cli = Cli::try_parse_from([
            "parahtml", "html", "in.json", "-o", "out.html", "--fragment", "--pages", "1-2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Html {
                fragment,
                escape,
                title,
                pages,
                ..
            }) => {
                assert!(fragment);
                assert!(!escape);
                assert_eq!(title, "PDF to HTML");
                assert_eq!(pages.as_deref(), Some("1-2"));
            }
            _ => panic!("Expected html subcommand"),
        }
    }
}
