use std::io::{stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::style::Color::{Cyan, Green, Red, Yellow};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, terminal, ExecutableCommand};
use run_picker_core::error::Result;
use run_picker_core::hooks::is_hook;
use run_picker_core::matcher::match_positions;
use run_picker_core::script_definitions::Script;
use run_picker_core::selection::{ScriptChoice, SelectionState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::keys::translate;
use super::types::ViewportState;

const HINT_ROW: u16 = 0;
const SEARCH_ROW: u16 = 2;
/// Rows above the script list: hint, blank, search, blank.
const HEADER_ROWS: u16 = 4;

const SEARCH_LABEL: &str = "Search scripts: ";
const SEARCH_PLACEHOLDER: &str = "Type to filter...";
const SELECTED_MARKER: &str = "▶ ";
const UNSELECTED_MARKER: &str = "  ";
const HOOK_TAG: &str = " (hook)";
const COMMAND_SEPARATOR: &str = " - ";

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Rows left for the script list on a terminal `terminal_height` rows tall.
#[must_use]
pub fn list_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(HEADER_ROWS)
}

#[must_use]
pub fn hint_text(show_hooks: bool) -> String {
    let action = if show_hooks { "hide" } else { "show" };
    format!("(Enter to run, Tab to {action} hook scripts, Esc to exit)")
}

/// Cuts `text` down to at most `width` terminal columns.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Runs the interactive picker until the user chooses a script or quits.
///
/// The terminal is restored before this returns, so a chosen script can be
/// run on a normal screen.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured, drawn to, or read from.
pub fn prompt_for_script_choice(state: &mut SelectionState) -> Result<ScriptChoice> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

    let (width, height) = terminal::size()?;
    let mut viewport = ViewportState::new(width, list_height(height));

    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            viewport.follow(state.cursor(), state.visible_len());
            redraw_ui(&mut stdout, state, &viewport)?;
        }

        needs_redraw = match event::read()? {
            Event::Key(key_event) => match translate(key_event, state.query()) {
                Some(input) => {
                    if let Some(choice) = state.handle_input(input) {
                        return Ok(choice);
                    }
                    true
                }
                None => false,
            },
            Event::Resize(width, height) => {
                viewport.resize(width, list_height(height));
                true
            }
            _ => false,
        };
    }
}

/// Draws the full picker screen for the current state.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn redraw_ui<W: Write>(
    out: &mut W,
    state: &SelectionState,
    viewport: &ViewportState,
) -> Result<()> {
    let width = usize::from(viewport.width);

    queue!(out, Clear(ClearType::All), MoveTo(0, HINT_ROW))?;
    queue!(
        out,
        SetAttribute(Attribute::Dim),
        Print(truncate_to_width(&hint_text(state.show_hooks()), width)),
        SetAttribute(Attribute::Reset)
    )?;

    print_search(out, state.query())?;

    if state.visible_len() == 0 {
        queue!(
            out,
            MoveTo(0, HEADER_ROWS),
            SetForegroundColor(Red),
            SetAttribute(Attribute::Dim),
            Print(truncate_to_width(
                &format!("No scripts matching \"{}\"", state.query()),
                width
            )),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    } else {
        print_scripts_with_selection(out, state, viewport)?;
    }

    // Leave the terminal cursor in the search field
    let query_width = u16::try_from(state.query().width()).unwrap_or(u16::MAX);
    let label_width = SEARCH_LABEL.len() as u16;
    queue!(
        out,
        MoveTo(label_width.saturating_add(query_width), SEARCH_ROW),
        cursor::Show
    )?;

    out.flush()?;
    Ok(())
}

fn print_search<W: Write>(out: &mut W, query: &str) -> Result<()> {
    queue!(
        out,
        MoveTo(0, SEARCH_ROW),
        SetAttribute(Attribute::Bold),
        SetForegroundColor(Cyan),
        Print(SEARCH_LABEL),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;

    if query.is_empty() {
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(SEARCH_PLACEHOLDER),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        queue!(out, Print(query))?;
    }

    Ok(())
}

fn print_scripts_with_selection<W: Write>(
    out: &mut W,
    state: &SelectionState,
    viewport: &ViewportState,
) -> Result<()> {
    let range = viewport.visible_range(state.visible_len());
    let visible_scripts = state
        .visible_scripts()
        .enumerate()
        .skip(range.start)
        .take(range.len());

    for (row, (index, script)) in visible_scripts.enumerate() {
        let row = HEADER_ROWS.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
        queue!(out, MoveTo(0, row))?;
        print_script_row(
            out,
            script,
            state.query(),
            index == state.cursor(),
            usize::from(viewport.width),
        )?;
    }

    Ok(())
}

fn print_script_row<W: Write>(
    out: &mut W,
    script: &Script,
    query: &str,
    is_selected: bool,
    width: usize,
) -> Result<()> {
    let mut remaining = width;

    let marker = if is_selected {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    };
    if is_selected {
        queue!(out, SetForegroundColor(Green))?;
    }
    let marker = truncate_to_width(marker, remaining);
    remaining -= marker.width();
    queue!(out, Print(marker))?;

    if is_selected {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }

    let matched = if query.is_empty() {
        Vec::new()
    } else {
        match_positions(query, &script.name).unwrap_or_default()
    };

    let name = truncate_to_width(&script.name, remaining);
    remaining -= name.width();

    for (index, c) in name.chars().enumerate() {
        if matched.contains(&index) {
            queue!(
                out,
                SetAttribute(Attribute::Underlined),
                Print(c),
                SetAttribute(Attribute::NoUnderline)
            )?;
        } else {
            queue!(out, Print(c))?;
        }
    }
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;

    if is_hook(&script.name) {
        let tag = truncate_to_width(HOOK_TAG, remaining);
        remaining -= tag.width();
        queue!(out, SetForegroundColor(Yellow), Print(tag), ResetColor)?;
    }

    let command = truncate_to_width(&format!("{COMMAND_SEPARATOR}{}", script.command), remaining);
    queue!(
        out,
        SetAttribute(Attribute::Dim),
        Print(command),
        SetAttribute(Attribute::Reset)
    )?;

    Ok(())
}
