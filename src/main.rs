//! pdfprompt CLI - stage a PDF's text as a chat prompt

use std::io;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use pdfprompt::app::{self, AppError, RunReport};
use pdfprompt::engine::config::{
    FormatKind, RunConfig, StageMode, DEFAULT_CHAT_URL, DEFAULT_CONTEXT_SIZE,
};
use pdfprompt::input::PdfExtractor;
use pdfprompt::output::{clipboard, SystemSink};

#[derive(Parser)]
#[command(name = "pdfprompt")]
#[command(version)]
#[command(about = "Copy a PDF's text to the clipboard as a chat summarization prompt", long_about = None)]
struct Cli {
    /// Path to the PDF file to be summarized
    #[arg(value_name = "PDF")]
    pdf_path: PathBuf,

    /// Output format: txt, md or html
    #[arg(long, default_value = "txt")]
    format: String,

    /// Maximum characters per snippet
    #[arg(long, env = "PDFPROMPT_CONTEXT", default_value_t = DEFAULT_CONTEXT_SIZE)]
    context: usize,

    /// Only emit this snippet (1-indexed)
    #[arg(long)]
    snippet: Option<usize>,

    /// Instruction placed before the text
    #[arg(long)]
    prompt: Option<String>,

    /// Page opened after the prompt is copied
    #[arg(long, env = "PDFPROMPT_URL", default_value = DEFAULT_CHAT_URL)]
    url: String,

    /// Copy to the clipboard without opening a browser
    #[arg(long)]
    no_browser: bool,

    /// Print the prompt to stdout instead of using the clipboard
    #[arg(long, conflicts_with = "no_browser")]
    print: bool,
}

impl Cli {
    fn into_config(self) -> Result<RunConfig, AppError> {
        let stage = if self.print {
            StageMode::Stdout
        } else if self.no_browser {
            StageMode::ClipboardOnly
        } else {
            StageMode::Browser
        };

        let config = RunConfig {
            pdf_path: self.pdf_path,
            format: self.format.parse::<FormatKind>()?,
            context_size: self.context,
            snippet: self.snippet,
            instruction: self.prompt,
            url: self.url,
            stage,
        };
        Ok(config.validate()?)
    }
}

fn main() {
    if clipboard::is_holder_process() {
        if clipboard::hold_from_stdin().is_err() {
            std::process::exit(1);
        }
        return;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let result = cli.into_config().and_then(|config| {
        let mut sink = SystemSink;
        app::run(&config, &PdfExtractor, &mut sink, &mut io::stdout().lock())
            .map(|report| (config, report))
    });

    match result {
        Ok((config, report)) => {
            if report.stage != StageMode::Stdout {
                println!(
                    "{}",
                    format!(
                        "Prompt has been copied to the clipboard ({} characters).",
                        report.prompt.chars().count()
                    )
                    .green()
                );
            }
            for line in closing_instructions(&config, &report) {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Lines printed after a successful run; nothing for `--print`.
fn closing_instructions(config: &RunConfig, report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.stage == StageMode::Stdout {
        return lines;
    }

    if report.stage == StageMode::Browser {
        lines.push(format!("Opened {} in your default browser.", config.url));
    }

    if let Some(selected) = report.selected {
        if report.snippet_count > 1 {
            lines.push(format!(
                "Copied snippet {} of {}; {} more to go.",
                selected,
                report.snippet_count,
                report.remaining_snippets()
            ));
        }
    } else if report.snippet_count > 1 {
        lines.push(format!(
            "The text was split into {} parts; all of them are in the prompt. \
             Use --snippet N to copy one part at a time.",
            report.snippet_count
        ));
    }

    let first_step = match report.stage {
        StageMode::Browser => "1. In the opened chat window, click on the input box.",
        _ => "1. Open your chat assistant and click on the input box.",
    };
    lines.push(String::new());
    lines.push("=== Instructions ===".to_string());
    lines.push(first_step.to_string());
    lines.push("2. Press Ctrl+V (Windows/Linux) or Cmd+V (Mac) to paste the prompt.".to_string());
    lines.push("3. Press Enter to send the prompt.".to_string());
    lines.push("====================".to_string());
    lines.push(String::new());
    lines
}
