//! Folio terminal desktop entry point.
//!
//! Hosts the portfolio terminal session in a raw-mode terminal: type a
//! command and press Enter to run it, Up/Down to recall history, Tab to
//! autocomplete, Esc or Ctrl+C to quit. `work` and `home` emit navigation
//! signals; this frontend prints the target URL where a web host would
//! perform a real page navigation.

mod config;
mod input;
mod render;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::{cursor, execute, queue, terminal};

use config::AppConfig;
use folio_terminal::{CommandRegistry, HostSignal, Session, SystemClock, register_builtins};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "folio.toml".to_string());
    let config = AppConfig::load(Path::new(&config_path))?;
    log::info!("Starting folio terminal (prompt '{}')", config.prompt);

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    let mut session = Session::new(registry, Box::new(SystemClock));

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    let outcome = run_loop(&mut stdout, &mut session, &config);
    terminal::disable_raw_mode()?;
    execute!(stdout, Print("\r\n"))?;
    log::info!("folio terminal shut down cleanly");
    outcome
}

/// Event loop: one key event in, one incremental redraw out.
fn run_loop(out: &mut impl Write, session: &mut Session, config: &AppConfig) -> Result<()> {
    // Number of transcript entries already printed. The transcript is
    // append-only except for `clear`, which is detected by it shrinking.
    let mut printed = 0usize;

    sync_transcript(out, session, config, &mut printed)?;
    render::print_prompt(out, &config.prompt, session.input())?;
    out.flush()?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match input::map_key(&key) {
            input::Mapped::Quit => break,
            input::Mapped::Ignored => {},
            input::Mapped::Key(k) => {
                let signal = session.handle_key(k);

                // Drop the stale prompt line, then print whatever the
                // session appended before redrawing the prompt.
                queue!(
                    out,
                    cursor::MoveToColumn(0),
                    terminal::Clear(terminal::ClearType::CurrentLine),
                )?;
                sync_transcript(out, session, config, &mut printed)?;
                if let Some(HostSignal::Navigate { path }) = signal {
                    let target = format!("{}{path}", config.site_base);
                    log::info!("host navigation: {target}");
                    queue!(
                        out,
                        PrintStyledContent(format!("→ {target}").with(Color::DarkGrey)),
                        Print("\r\n"),
                    )?;
                }
                render::print_prompt(out, &config.prompt, session.input())?;
                out.flush()?;
            },
        }
    }
    Ok(())
}

/// Print transcript entries not yet on screen. A shrunken transcript means
/// the screen was cleared; start over from the top.
fn sync_transcript(
    out: &mut impl Write,
    session: &Session,
    config: &AppConfig,
    printed: &mut usize,
) -> Result<()> {
    let transcript = session.transcript();
    if transcript.len() < *printed {
        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
        *printed = 0;
    }
    for entry in &transcript[*printed..] {
        render::print_entry(out, entry, &config.prompt)?;
    }
    *printed = transcript.len();
    Ok(())
}
