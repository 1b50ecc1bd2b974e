use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use memmap2::Mmap;

use bos::value::Value;

#[derive(Parser)]
#[command(name = "bos", about = "Binary Object Serialization encoder/decoder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a JSON file into a BOS buffer.
    Encode {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Narrow reals to Float32 when they round-trip exactly, instead
        /// of always emitting Float64.
        #[arg(long)]
        narrow_floats: bool,
    },
    /// Decode a BOS buffer into JSON.
    Decode {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Pretty-print the root value's shape as a table.
    Inspect { input: PathBuf },
    /// Interactively browse a BOS buffer's value tree.
    #[cfg(feature = "tui")]
    View { input: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            input,
            output,
            narrow_floats,
        } => encode(&input, output.as_deref(), narrow_floats),
        Command::Decode { input, output } => decode(&input, output.as_deref()),
        Command::Inspect { input } => inspect(&input),
        #[cfg(feature = "tui")]
        Command::View { input } => view(&input),
    }
}

fn encode(input: &std::path::Path, output: Option<&std::path::Path>, narrow_floats: bool) -> Result<()> {
    let mut text = String::new();
    File::open(input)
        .with_context(|| format!("opening {}", input.display()))?
        .read_to_string(&mut text)?;
    let json: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {} as JSON", input.display()))?;
    let value = bos::json::from_json(&json)
        .with_context(|| "JSON value has no BOS representation")?;
    let bytes = if narrow_floats {
        bos::encode_narrow_floats(&value)
    } else {
        bos::encode(&value)
    }
    .with_context(|| "encoding value")?;
    write_output(output, &bytes)
}

fn decode(input: &std::path::Path, output: Option<&std::path::Path>) -> Result<()> {
    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let mmap = unsafe { Mmap::map(&file) }.with_context(|| format!("mapping {}", input.display()))?;
    let value = bos::decode(&mmap).with_context(|| format!("decoding {}", input.display()))?;
    let json = bos::json::to_json(&value);
    let text = serde_json::to_string_pretty(&json)?;
    write_output(output, text.as_bytes())
}

fn inspect(input: &std::path::Path) -> Result<()> {
    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let mmap = unsafe { Mmap::map(&file) }.with_context(|| format!("mapping {}", input.display()))?;
    let value = bos::decode(&mmap).with_context(|| format!("decoding {}", input.display()))?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["key", "kind", "preview"]);

    match &value {
        Value::Object(obj) => {
            for (key, v) in obj.iter() {
                table.add_row(vec![key.to_string(), v.kind().to_string(), preview(v)]);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                table.add_row(vec![i.to_string(), v.kind().to_string(), preview(v)]);
            }
        }
        other => {
            table.add_row(vec!["(root)".to_string(), other.kind().to_string(), preview(other)]);
        }
    }

    println!("{table}");
    Ok(())
}

fn preview(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(v) => v.to_string(),
        Value::Real(v) => v.to_string(),
        Value::String(s) if s.len() <= 32 => s.clone(),
        Value::String(s) => format!("{}…", &s[..32]),
        Value::Bytes(b) => format!("<{} byte(s)>", b.len()),
        Value::Array(a) => format!("[{} element(s)]", a.len()),
        Value::Object(o) => format!("{{{} key(s)}}", o.len()),
    }
}

fn write_output(output: Option<&std::path::Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            File::create(path)
                .with_context(|| format!("creating {}", path.display()))?
                .write_all(bytes)?;
        }
        None => {
            std::io::stdout().write_all(bytes)?;
        }
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn view(input: &std::path::Path) -> Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use crossterm::execute;
    use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
    use ratatui::prelude::*;
    use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let mmap = unsafe { Mmap::map(&file) }.with_context(|| format!("mapping {}", input.display()))?;
    let value = bos::decode(&mmap).with_context(|| format!("decoding {}", input.display()))?;

    let lines = flatten(&value, 0);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = ListState::default();
    state.select(Some(0));

    loop {
        terminal.draw(|f| {
            let items: Vec<ListItem> = lines
                .iter()
                .map(|(depth, text)| ListItem::new(format!("{}{}", "  ".repeat(*depth), text)))
                .collect();
            let list = List::new(items)
                .block(Block::default().title("bos view").borders(Borders::ALL))
                .highlight_symbol("> ");
            f.render_stateful_widget(list, f.area(), &mut state);
        })?;

        if event::poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Down => {
                        let next = state.selected().unwrap_or(0).saturating_add(1).min(lines.len().saturating_sub(1));
                        state.select(Some(next));
                    }
                    KeyCode::Up => {
                        let next = state.selected().unwrap_or(0).saturating_sub(1);
                        state.select(Some(next));
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(feature = "tui")]
fn flatten(value: &Value, depth: usize) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    match value {
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                out.push((depth, format!("[{i}]: {}", kind_label(v))));
                out.extend(flatten(v, depth + 1));
            }
        }
        Value::Object(obj) => {
            for (k, v) in obj.iter() {
                out.push((depth, format!("{k}: {}", kind_label(v))));
                out.extend(flatten(v, depth + 1));
            }
        }
        other => out.push((depth, kind_label(other))),
    }
    out
}

#[cfg(feature = "tui")]
fn kind_label(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool = {b}"),
        Value::Integer(v) => format!("integer = {v}"),
        Value::Real(v) => format!("real = {v}"),
        Value::String(s) => format!("string = {s:?}"),
        Value::Bytes(b) => format!("bytes ({} byte(s))", b.len()),
        Value::Array(a) => format!("array ({} element(s))", a.len()),
        Value::Object(o) => format!("object ({} key(s))", o.len()),
    }
}

