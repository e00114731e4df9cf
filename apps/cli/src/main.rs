use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::{
    fs,
    io::{AsyncBufReadExt, BufReader},
};

use crate::{
    feed::{TelemetryFeed, wait_for_feed},
    pipeline::{SessionSpec, start_session},
    workers::events::{CommandRequested, SubtitlesRequested},
};

mod command_box;
mod feed;
mod pipeline;
mod workers;

const FEED_WAIT_ATTEMPTS: u32 = 150;
const FEED_WAIT_DELAY: Duration = Duration::from_millis(200);

#[derive(Parser)]
#[command(name = "coursecap")]
#[command(
    about = "Capture the lesson's streaming manifest from a page telemetry feed and download subtitles as .srt"
)]
struct Cli {
    /// Lesson page URL (used for the transcript endpoint and output naming)
    page_url: String,

    /// JSONL telemetry feed written by the browser exporter snippet
    #[arg(short, long, default_value = "page-feed.jsonl")]
    feed: PathBuf,

    /// Directory for generated .srt files. Defaults to the downloads folder.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Telemetry scan period in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Substring identifying the streaming manifest among resource names
    #[arg(long, default_value = coursecap_core::MANIFEST_NEEDLE)]
    needle: String,
}

#[derive(Debug, PartialEq, Eq)]
enum PromptCommand {
    Subtitles,
    Command,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> PromptCommand {
    match line.trim().to_lowercase().as_str() {
        "s" | "subs" | "subtitles" => PromptCommand::Subtitles,
        "c" | "cmd" | "command" => PromptCommand::Command,
        "q" | "quit" | "exit" => PromptCommand::Quit,
        _ => PromptCommand::Unknown,
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn print_help() {
    println!(
        "  {}  download subtitles (.srt)",
        style("s").cyan().bold()
    );
    println!(
        "  {}  show the ffmpeg download command",
        style("c").cyan().bold()
    );
    println!("  {}  quit", style("q").cyan().bold());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    println!(
        "\n{}  {}\n",
        style("coursecap").cyan().bold(),
        style("Lesson Capture").dim()
    );

    let output_dir = cli
        .output
        .unwrap_or_else(|| dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")));
    fs::create_dir_all(&output_dir).await?;

    let spinner = create_spinner("Waiting for the telemetry feed...");
    if let Err(e) = wait_for_feed(&cli.feed, FEED_WAIT_ATTEMPTS, FEED_WAIT_DELAY).await {
        spinner.finish_and_clear();
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
    spinner.finish_with_message(format!(
        "{} Telemetry feed: {}",
        style("✓").green().bold(),
        style(cli.feed.display()).dim()
    ));

    let spec = SessionSpec {
        page_url: cli.page_url,
        output_dir,
        manifest_needle: cli.needle,
        scan_interval: Duration::from_millis(cli.interval_ms.max(1)),
    };
    let handle = start_session(spec, Arc::new(TelemetryFeed::new(cli.feed)))?;

    println!("{}", style("─".repeat(60)).dim());
    print_help();
    println!("{}", style("─".repeat(60)).dim());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            PromptCommand::Subtitles => {
                handle.bus.publish(Arc::new(SubtitlesRequested::new()));
            }
            PromptCommand::Command => {
                handle.bus.publish(Arc::new(CommandRequested::new()));
            }
            PromptCommand::Quit => break,
            PromptCommand::Unknown => print_help(),
        }
    }

    let _ = handle.shutdown_tx.send(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_commands_parse_with_aliases_and_whitespace() {
        assert_eq!(parse_command("s"), PromptCommand::Subtitles);
        assert_eq!(parse_command("  SUBS "), PromptCommand::Subtitles);
        assert_eq!(parse_command("c"), PromptCommand::Command);
        assert_eq!(parse_command("command"), PromptCommand::Command);
        assert_eq!(parse_command("q"), PromptCommand::Quit);
        assert_eq!(parse_command("exit"), PromptCommand::Quit);
        assert_eq!(parse_command(""), PromptCommand::Unknown);
        assert_eq!(parse_command("help"), PromptCommand::Unknown);
    }
}
