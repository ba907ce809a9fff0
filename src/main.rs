//! glossmark CLI - render the markup dialect to an HTML fragment

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use glossmark::{MarkupEngine, Options, Palette, Variant};

#[derive(Parser)]
#[command(name = "glossmark")]
#[command(version, about = "Render glossmark markup to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    glossmark post.md -o post.html            Render a file
    cat post.md | glossmark --theme gruvbox   Render stdin with a palette
    glossmark --inline - <<< '**hi**'         Render one inline label")]
struct Cli {
    /// Input file; stdin when absent or `-`
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file; stdout when absent
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Built-in theme used to resolve `{color:NAME}` spans
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Theme variant
    #[arg(long, default_value_t = Variant::Dark)]
    variant: Variant,

    /// Prefix the output with the theme's CSS custom properties
    #[arg(long, requires = "theme")]
    css_vars: bool,

    /// Leave `#TOC` placeholders as plain paragraphs
    #[arg(long)]
    no_toc: bool,

    /// Render inline markup only, without block structure
    #[arg(long)]
    inline: bool,

    /// Highlight fenced code with syntect
    #[cfg(feature = "syntect")]
    #[arg(long)]
    highlight: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let input = read_input(cli.input.as_deref())?;

    let palette = cli
        .theme
        .as_deref()
        .map(|theme| Palette::builtin(theme, cli.variant))
        .transpose()
        .context("failed to load theme")?;

    let mut html = String::new();
    if let (true, Some(palette)) = (cli.css_vars, &palette) {
        html.push_str("<style>\n");
        html.push_str(&palette.to_css_variables());
        html.push_str("</style>\n");
    }

    let engine = MarkupEngine::new(Options {
        palette,
        toc: !cli.no_toc,
    });
    #[cfg(feature = "syntect")]
    let engine = if cli.highlight {
        engine.with_highlighter(glossmark::highlight::SyntectHighlighter::new())
    } else {
        engine
    };
    log::debug!("rendering {} bytes", input.len());
    if cli.inline {
        html.push_str(&engine.parse_inline(&input));
    } else {
        html.push_str(&engine.parse(&input));
    }

    match &cli.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(html.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
