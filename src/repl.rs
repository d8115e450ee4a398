// repl.rs

use anyhow::Result;
use crossterm::cursor::{MoveTo, MoveToPreviousLine};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, SetTitle};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, KeyCode,
    KeyEvent, Modifiers, Movement, RepeatCount,
};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::{format_clock, Clock};
use crate::config::Settings;
use crate::console::{Change, Console, Key};
use crate::history::RenderStyle;

type SharedConsole = Arc<Mutex<Console>>;

fn lock(console: &Mutex<Console>) -> MutexGuard<'_, Console> {
    console.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Syncs the editor's line into the console, applies a recall key and
/// returns the new line if it differs.
fn recall_line(console: &mut Console, line: &str, key: Key) -> Option<String> {
    console.handle(Key::Edit(line.to_string()));
    console.handle(key);
    let recalled = console.input().buffer();
    (recalled != line).then(|| recalled.to_string())
}

/// Up/Down binding. Always consumes the key so the editor never walks its
/// own history.
struct RecallKey {
    console: SharedConsole,
    key: Key,
}

impl ConditionalEventHandler for RecallKey {
    fn handle(&self, _evt: &Event, _n: RepeatCount, _positive: bool, ctx: &EventContext) -> Option<Cmd> {
        let mut console = lock(&self.console);
        match recall_line(&mut console, ctx.line(), self.key.clone()) {
            Some(line) => Some(Cmd::Replace(Movement::WholeLine, Some(line))),
            None => Some(Cmd::Noop),
        }
    }
}

fn header(settings: &Settings) -> String {
    format!("> {}", settings.identity)
}

fn clear_screen(out: &mut impl Write, settings: &Settings) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{}\n", header(settings))
}

/// Prints what a submission changed. The editor already left `prompt line`
/// on screen, so it is replaced by the transcript's own echo.
fn show_change(out: &mut impl Write, console: &Console, change: Change, style: &RenderStyle, settings: &Settings) -> io::Result<()> {
    match change {
        Change::Appended(idx) => {
            if let Some(entry) = console.history().entries().get(idx) {
                execute!(out, MoveToPreviousLine(1), Clear(ClearType::CurrentLine))?;
                write!(out, "{}", style.render_entry(entry))?;
            }
        }
        Change::Cleared => clear_screen(out, settings)?,
    }
    Ok(())
}

fn start_clock(settings: &Settings) -> Option<Clock> {
    if !settings.clock {
        return None;
    }
    let title = header(settings);
    let started = Clock::start(settings.tick(), move |now| {
        let _ = execute!(io::stdout(), SetTitle(format!("{}  {}", title, format_clock(&now))));
    });
    match started {
        Ok(clock) => Some(clock),
        Err(err) => {
            log::warn!("clock disabled: {err}");
            None
        }
    }
}

pub fn start_repl(settings: &Settings) -> Result<()> {
    let config = Config::builder().auto_add_history(false).build();
    let mut rl: Editor<(), DefaultHistory> = Editor::with_config(config)?;
    let console: SharedConsole = Arc::new(Mutex::new(Console::new()));
    for (code, key) in [(KeyCode::Up, Key::RecallPrev), (KeyCode::Down, Key::RecallNext)] {
        let handler = RecallKey { console: Arc::clone(&console), key };
        rl.bind_sequence(KeyEvent(code, Modifiers::NONE), EventHandler::Conditional(Box::new(handler)));
    }

    let style = settings.render_style();
    let mut out = io::stdout();
    {
        let mut console = lock(&console);
        writeln!(out, "{}\n", header(settings))?;
        write!(out, "{}", console.history().render(&style))?;
        if console.take_scroll_request() {
            out.flush()?;
        }
    }

    log::info!("session started");
    let mut clock = start_clock(settings);
    let prompt = format!("{} ", settings.prompt);
    let result: Result<()> = loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let mut console = lock(&console);
                console.handle(Key::Edit(line));
                if let Some(change) = console.handle(Key::Submit) {
                    show_change(&mut out, &console, change, &style, settings)?;
                }
                if console.take_scroll_request() {
                    out.flush()?;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break Ok(());
            }
            Err(err) => {
                break Err(err.into());
            }
        }
    };
    if let Some(clock) = clock.as_mut() {
        clock.stop();
    }
    log::info!("session ended");
    result
}
