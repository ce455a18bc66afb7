use clap::Parser;
use colored::*;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

use ticketrail::api::BoardApi;
use ticketrail::commands::{CmdMessage, MessageLevel};
use ticketrail::config::BoardConfig;
use ticketrail::controller::BoardApp;
use ticketrail::error::Result;
use ticketrail::model::{Column, Order};

mod args;
mod tui;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Some(Commands::Snapshot { json }) => handle_snapshot(&cli, &config, *json),
        None => handle_board(&cli, &config),
    }
}

fn load_config(cli: &Cli) -> Result<BoardConfig> {
    let mut config = match &cli.config {
        Some(path) => BoardConfig::load_file(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            BoardConfig::load(&cwd)?
        }
    };
    if cli.no_mouse {
        config.mouse = false;
    }
    Ok(config)
}

fn demo_count(cli: &Cli, config: &BoardConfig) -> usize {
    cli.demo.unwrap_or(config.demo_orders)
}

fn handle_board(cli: &Cli, config: &BoardConfig) -> Result<()> {
    let mut app = BoardApp::new();
    let count = demo_count(cli, config);
    if count > 0 {
        app.seed(count)?;
    }
    tui::run(app, config)
}

fn handle_snapshot(cli: &Cli, config: &BoardConfig, json: bool) -> Result<()> {
    let mut api = BoardApi::new();
    let count = demo_count(cli, config);
    let mut seed_messages = Vec::new();
    if count > 0 {
        seed_messages = api.seed_demo(count)?.messages;
    }

    let result = api.list_orders()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_orders)?);
        return Ok(());
    }

    print_board(&result.listed_orders);
    print_messages(&result.messages);
    print_messages(&seed_messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 72;
const TIME_WIDTH: usize = 14;

fn print_board(orders: &[Order]) {
    if orders.is_empty() {
        println!("The board is empty.");
        return;
    }

    for column in Column::ALL {
        let in_column: Vec<&Order> = orders.iter().filter(|o| o.column == column).collect();

        println!();
        println!(
            "{} {}",
            column.label().bold(),
            format!("({})", in_column.len()).dimmed()
        );

        if in_column.is_empty() {
            println!("  {}", "(none)".dimmed());
            continue;
        }

        for order in in_column {
            let table = format!("table {}", order.table);
            let time_ago = format_time_ago(order.created_at);

            let fixed_width = 2 + table.width() + 1 + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed_width);

            let title_display = truncate_to_width(&order.title, available);
            let padding = available.saturating_sub(title_display.width());

            println!(
                "  {}{} {} {}",
                title_display,
                " ".repeat(padding),
                table.dimmed(),
                time_ago.dimmed()
            );
        }
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
