//! Rendering of transcript entries to a raw-mode terminal.
//!
//! Tones from the output tree map to terminal colors here; the core never
//! deals in colors. Raw mode needs explicit `\r\n` line endings.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};

use folio_terminal::{Fragment, Span, Tone, TranscriptEntry};

/// Terminal color for a display tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::Grey,
        Tone::Heading => Color::Cyan,
        Tone::Accent => Color::Green,
        Tone::Muted => Color::DarkGrey,
        Tone::Error => Color::Red,
    }
}

/// Queue one transcript entry. Input lines echo with the prompt.
pub fn print_entry(
    out: &mut impl Write,
    entry: &TranscriptEntry,
    prompt: &str,
) -> io::Result<()> {
    match entry {
        TranscriptEntry::Input(line) => {
            queue!(
                out,
                PrintStyledContent(prompt.to_string().with(Color::Green)),
                Print(" "),
                PrintStyledContent(line.clone().with(Color::White)),
                Print("\r\n"),
            )?;
        },
        TranscriptEntry::Output(frag) => print_fragment(out, frag)?,
    }
    Ok(())
}

/// Queue a fragment tree, one flattened line at a time.
pub fn print_fragment(out: &mut impl Write, frag: &Fragment) -> io::Result<()> {
    for line in frag.to_lines() {
        for span in &line {
            print_span(out, span)?;
        }
        queue!(out, Print("\r\n"))?;
    }
    Ok(())
}

fn print_span(out: &mut impl Write, span: &Span) -> io::Result<()> {
    match &span.url {
        Some(url) => queue!(
            out,
            PrintStyledContent(span.text.clone().with(Color::Blue).underlined()),
            PrintStyledContent(format!(" <{url}>").with(Color::DarkGrey)),
        ),
        None => queue!(
            out,
            PrintStyledContent(span.text.clone().with(tone_color(span.tone))),
        ),
    }
}

/// Queue the prompt line with the live input buffer.
pub fn print_prompt(out: &mut impl Write, prompt: &str, buffer: &str) -> io::Result<()> {
    queue!(
        out,
        PrintStyledContent(prompt.to_string().with(Color::Green)),
        Print(" "),
        PrintStyledContent(buffer.to_string().with(Color::White)),
    )
}
