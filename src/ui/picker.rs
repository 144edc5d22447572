//! Incremental group picker
//!
//! Raw-mode terminal widget that drives the autocomplete engine one
//! keystroke at a time: printable keys and backspace edit the term,
//! Up/Down move the highlight, Enter selects, Esc cancels. Searches run
//! through the engine's debounce, so a burst of typing costs at most one
//! remote call.

use std::io::{self, Write};

use console::style;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, queue, terminal};
use futures_util::StreamExt;

use crate::api::{DirectoryApi, Group};
use crate::error::{AnvilError, AnvilResult};
use crate::search::{Debouncer, GroupAutocomplete, SearchOutcome, MIN_TERM_LEN};
use crate::session::Credential;

use super::context::UiContext;

const MAX_ROWS: usize = 8;

/// Let the user pick a group, searching as they type
///
/// Returns `None` when the user cancels. The chosen group is also
/// recorded on the engine.
pub async fn pick_group(
    ctx: &UiContext,
    api: &dyn DirectoryApi,
    credential: &Credential,
    engine: &mut GroupAutocomplete,
) -> AnvilResult<Option<Group>> {
    if !ctx.is_interactive() {
        return Err(AnvilError::User(
            "group selection needs an interactive terminal; pass --group-id".into(),
        ));
    }

    let mut out = io::stderr();
    let _raw = RawModeGuard::enter()?;
    crossterm::execute!(out, cursor::Hide).map_err(|e| AnvilError::io("hiding cursor", e))?;

    let mut view = PickerView {
        out: &mut out,
        drawn: 0,
    };
    let result = drive(&mut view, api, credential, engine).await;
    let cleared = view.clear();

    crossterm::execute!(out, cursor::Show).ok();
    cleared.map_err(|e| AnvilError::io("clearing group picker", e))?;
    result
}

async fn drive<W: Write>(
    view: &mut PickerView<'_, W>,
    api: &dyn DirectoryApi,
    credential: &Credential,
    engine: &mut GroupAutocomplete,
) -> AnvilResult<Option<Group>> {
    let mut events = EventStream::new();
    let mut debouncer = Debouncer::new(engine.debounce());
    let mut highlight: usize = 0;
    let mut failed = false;

    view.redraw(engine, highlight, failed)
        .map_err(|e| AnvilError::io("drawing group picker", e))?;

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                let event = match maybe_event {
                    Some(Ok(event)) => event,
                    Some(Err(e)) => return Err(AnvilError::io("reading terminal events", e)),
                    None => return Ok(None),
                };
                if let Event::Key(key) = event {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    match key.code {
                        KeyCode::Esc => return Ok(None),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(None);
                        }
                        KeyCode::Enter => {
                            if let Some(group) = visible_rows(engine).get(highlight) {
                                let group = group.clone();
                                engine.select(&group);
                                debouncer.cancel();
                                return Ok(Some(group));
                            }
                        }
                        KeyCode::Up => highlight = highlight.saturating_sub(1),
                        KeyCode::Down => highlight = highlight.saturating_add(1),
                        KeyCode::Backspace => {
                            let mut term = engine.term().to_string();
                            term.pop();
                            apply_term(engine, &mut debouncer, &term);
                            highlight = 0;
                            failed = false;
                        }
                        KeyCode::Char(c)
                            if !key.modifiers.contains(KeyModifiers::CONTROL)
                                && !key.modifiers.contains(KeyModifiers::ALT) =>
                        {
                            let mut term = engine.term().to_string();
                            term.push(c);
                            apply_term(engine, &mut debouncer, &term);
                            highlight = 0;
                            failed = false;
                        }
                        _ => {}
                    }
                }
            }
            pending = debouncer.fired() => {
                let outcome = engine.execute_search(&pending, api, credential).await;
                failed = outcome == SearchOutcome::Failed;
                highlight = 0;
            }
        }

        let rows = visible_rows(engine);
        if !rows.is_empty() && highlight >= rows.len() {
            highlight = rows.len() - 1;
        }
        view.redraw(engine, highlight, failed)
            .map_err(|e| AnvilError::io("drawing group picker", e))?;
    }
}

/// Feed an edited term to the engine and re-arm or cancel the debounce
fn apply_term(engine: &mut GroupAutocomplete, debouncer: &mut Debouncer, term: &str) {
    match engine.on_term_changed(term) {
        Some(pending) => debouncer.schedule(pending),
        None => debouncer.cancel(),
    }
}

fn visible_rows(engine: &GroupAutocomplete) -> Vec<Group> {
    let mut rows = engine.display_set();
    rows.truncate(MAX_ROWS);
    rows
}

struct PickerView<'a, W: Write> {
    out: &'a mut W,
    drawn: u16,
}

impl<W: Write> PickerView<'_, W> {
    fn redraw(
        &mut self,
        engine: &GroupAutocomplete,
        highlight: usize,
        failed: bool,
    ) -> io::Result<()> {
        self.rewind()?;

        let mut lines: u16 = 0;
        write!(
            self.out,
            "{} {}{}\r\n",
            style("Group:").bold(),
            engine.term(),
            style("▌").dim(),
        )?;
        lines += 1;

        if engine.is_degraded() {
            write!(
                self.out,
                "{}\r\n",
                style("offline group list - search may be incomplete").yellow()
            )?;
            lines += 1;
        }

        if let Some(status) = status_line(engine, failed) {
            write!(self.out, "{}\r\n", status)?;
            lines += 1;
        }

        let rows = visible_rows(engine);
        for (index, group) in rows.iter().enumerate() {
            let marker = if index == highlight {
                style("❯").yellow().to_string()
            } else {
                " ".to_string()
            };
            write!(
                self.out,
                "{} {}  {}\r\n",
                marker,
                group.name,
                style(&group.path).dim()
            )?;
            lines += 1;
        }

        write!(
            self.out,
            "{}\r\n",
            style("↑/↓ move · Enter select · Esc cancel").dim()
        )?;
        lines += 1;

        self.drawn = lines;
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.rewind()?;
        self.out.flush()
    }

    fn rewind(&mut self) -> io::Result<()> {
        if self.drawn > 0 {
            queue!(self.out, cursor::MoveToPreviousLine(self.drawn))?;
            self.drawn = 0;
        }
        queue!(
            self.out,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )
    }
}

fn status_line(engine: &GroupAutocomplete, failed: bool) -> Option<String> {
    let term_len = engine.term().chars().count();
    if engine.is_searching() {
        return Some(style("searching…").dim().to_string());
    }
    if failed {
        return Some(
            style("search failed - showing local matches only")
                .red()
                .to_string(),
        );
    }
    if term_len > 0 && term_len < MIN_TERM_LEN {
        return Some(
            style("keep typing to search (3 characters minimum)")
                .dim()
                .to_string(),
        );
    }
    if term_len >= MIN_TERM_LEN && engine.display_set().is_empty() {
        return Some(style("no matching groups").dim().to_string());
    }
    None
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> AnvilResult<Self> {
        terminal::enable_raw_mode().map_err(|e| AnvilError::io("enabling raw mode", e))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn engine() -> GroupAutocomplete {
        GroupAutocomplete::new(Duration::from_millis(300), 20)
    }

    #[test]
    fn view_renders_prompt_and_hint() {
        let engine = engine();
        let mut buffer = Vec::new();
        let mut view = PickerView {
            out: &mut buffer,
            drawn: 0,
        };
        view.redraw(&engine, 0, false).unwrap();

        let rendered = String::from_utf8_lossy(&buffer);
        assert!(rendered.contains("Group:"));
        assert!(rendered.contains("Enter select"));
    }

    #[test]
    fn status_reports_minimum_length() {
        let mut engine = engine();
        engine.on_term_changed("pl");
        let status = status_line(&engine, false).unwrap();
        assert!(status.contains("3 characters"));
    }

    #[test]
    fn status_reports_busy_search() {
        let mut engine = engine();
        engine.on_term_changed("platform");
        let status = status_line(&engine, false).unwrap();
        assert!(status.contains("searching"));
    }

    #[tokio::test]
    async fn debounce_rearms_per_keystroke() {
        let mut engine = engine();
        let mut debouncer = Debouncer::new(engine.debounce());

        apply_term(&mut engine, &mut debouncer, "pla");
        assert!(debouncer.is_armed());
        apply_term(&mut engine, &mut debouncer, "pl");
        assert!(!debouncer.is_armed());
    }
}
