//! markwrap - toggle markdown syntax on a selection from the command line.
//!
//! # Usage
//!
//! ```bash
//! markwrap toggle bold notes.md --start 0 --end 5
//! markwrap toggle ol notes.md --start 0 --end 40 --json
//! markwrap render --watch README.md --output preview.html
//! markwrap export notes.md --data-url
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use markwrap::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use markwrap::editor::Session;
use markwrap::options::load_options;
use markwrap::preview::{ComrakRenderer, HtmlSanitizer, render_safe};
use markwrap::syntax::{self, Construct, DEFAULT_CODE_LANGUAGE, Replacement, Target, Toggler};
use markwrap::watcher::{DEFAULT_DEBOUNCE, DocumentWatcher};

/// Toggle markdown syntax on a selection
#[derive(Parser, Debug)]
#[command(name = "markwrap", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Language tag written on new code fences
    #[arg(long, global = true, value_name = "LANG")]
    code_lang: Option<String>,

    /// JSON5 file with toolbar options
    #[arg(long, global = true, value_name = "PATH")]
    options: Option<PathBuf>,

    /// Save current command-line flags as defaults in .markwraprc
    #[arg(long, global = true)]
    save: bool,

    /// Clear saved defaults in .markwraprc
    #[arg(long, global = true)]
    clear: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply or remove a construct on a byte range of a file
    Toggle {
        #[arg(value_enum)]
        operation: Operation,

        /// Markdown file to edit
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Selection start (byte offset)
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Selection end (byte offset, defaults to start)
        #[arg(long)]
        end: Option<usize>,

        /// Caret (byte offset, defaults to end)
        #[arg(long)]
        caret: Option<usize>,

        /// Print the replacement as JSON instead of the new document
        #[arg(long)]
        json: bool,

        /// Write the new document back to FILE
        #[arg(long, conflicts_with = "json")]
        in_place: bool,
    },
    /// Render a file to sanitized HTML
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Re-render whenever the file changes
        #[arg(short, long)]
        watch: bool,

        /// Write HTML here instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Keep single newlines as soft breaks
        #[arg(long)]
        no_hardbreaks: bool,
    },
    /// Export a file as a markdown download
    Export {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory to write document.md into
        #[arg(long, value_name = "DIR", required_unless_present = "data_url")]
        out_dir: Option<PathBuf>,

        /// Print a data: URL instead of writing a file
        #[arg(long, conflicts_with = "out_dir")]
        data_url: bool,
    },
    /// Print the effective toolbar options as JSON
    Options,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Bold,
    Italic,
    Ul,
    Ol,
    Quote,
    CodeBlock,
    Code,
    Link,
    Image,
    Divider,
    Indent,
    Outdent,
}

impl Operation {
    const fn construct(self) -> Option<Construct> {
        Some(match self {
            Self::H1 => Construct::Heading(1),
            Self::H2 => Construct::Heading(2),
            Self::H3 => Construct::Heading(3),
            Self::H4 => Construct::Heading(4),
            Self::H5 => Construct::Heading(5),
            Self::H6 => Construct::Heading(6),
            Self::Bold => Construct::Bold,
            Self::Italic => Construct::Italic,
            Self::Ul => Construct::UnorderedList,
            Self::Ol => Construct::OrderedList,
            Self::Quote => Construct::Blockquote,
            Self::CodeBlock => Construct::CodeBlock,
            Self::Code => Construct::InlineCode,
            Self::Link => Construct::Link,
            Self::Image => Construct::Image,
            Self::Divider => Construct::Divider,
            Self::Indent | Self::Outdent => return None,
        })
    }

    fn replacement(self, toggler: &Toggler, target: &Target<'_>) -> Option<Replacement> {
        match (self, self.construct()) {
            (_, Some(construct)) => toggler.toggle(construct, target),
            (Self::Indent, None) => Some(syntax::indent::indent(target)),
            (_, None) => syntax::indent::outdent(target),
        }
    }
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn run_toggle(
    toggler: &Toggler,
    operation: Operation,
    file: &Path,
    range: (usize, Option<usize>, Option<usize>),
    json: bool,
    in_place: bool,
) -> Result<()> {
    let text = read_document(file)?;
    let (start, end, caret) = range;
    let end = end.unwrap_or(start);
    let target = Target::new(&text, start, end, caret.unwrap_or(end));

    let Some(replacement) = operation.replacement(toggler, &target) else {
        tracing::warn!(?operation, "nothing to change");
        if !json && !in_place {
            print!("{text}");
        }
        return Ok(());
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&replacement).context("Failed to encode replacement")?
        );
        return Ok(());
    }
    let (updated, caret) = replacement.apply(&text);
    tracing::debug!(caret, "toggled");
    if in_place {
        fs::write(file, &updated).with_context(|| format!("Failed to write {}", file.display()))?;
    } else {
        print!("{updated}");
    }
    Ok(())
}

fn render_once(renderer: &ComrakRenderer, file: &Path, output: Option<&Path>) -> Result<()> {
    let html = render_safe(&read_document(file)?, renderer, &HtmlSanitizer);
    match output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{html}"),
    }
    Ok(())
}

fn run_render(file: &Path, watch: bool, output: Option<&Path>, hardbreaks: bool) -> Result<()> {
    let renderer = ComrakRenderer::default().with_hardbreaks(hardbreaks);
    render_once(&renderer, file, output)?;
    if !watch {
        return Ok(());
    }
    let mut watcher = DocumentWatcher::new(file, DEFAULT_DEBOUNCE)
        .with_context(|| format!("Failed to watch {}", file.display()))?;
    eprintln!("Watching {} (Ctrl+C to stop)", watcher.path().display());
    loop {
        if watcher.wait(Duration::from_secs(1))
            && let Err(err) = render_once(&renderer, watcher.path(), output)
        {
            tracing::warn!(path = %watcher.path().display(), error = %err, "re-render failed");
        }
    }
}

fn run_export(file: &Path, out_dir: Option<&Path>, data_url: bool) -> Result<()> {
    let mut session = Session::default();
    session.load(&read_document(file)?);
    let download = session.export();
    if data_url {
        println!("{}", download.data_url());
        return Ok(());
    }
    let dir = out_dir.unwrap_or_else(|| Path::new("."));
    let path = download
        .write_to(dir)
        .with_context(|| format!("Failed to export into {}", dir.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        watch: matches!(cli.command, Command::Render { watch: true, .. }),
        code_lang: cli.code_lang.clone(),
        options: cli.options.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    let toggler = Toggler::new(
        effective
            .code_lang
            .clone()
            .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string()),
    );

    match cli.command {
        Command::Toggle {
            operation,
            file,
            start,
            end,
            caret,
            json,
            in_place,
        } => run_toggle(&toggler, operation, &file, (start, end, caret), json, in_place),
        Command::Render {
            file,
            output,
            no_hardbreaks,
            ..
        } => run_render(&file, effective.watch, output.as_deref(), !no_hardbreaks),
        Command::Export {
            file,
            out_dir,
            data_url,
        } => run_export(&file, out_dir.as_deref(), data_url),
        Command::Options => {
            let options = match &effective.options {
                Some(path) => load_options(path)?,
                None => markwrap::options::Options::default(),
            };
            println!("{}", options.to_json().context("Failed to encode options")?);
            Ok(())
        }
    }
}
