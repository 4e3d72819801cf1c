//! Selection state for the interactive script picker.
//!
//! [`SelectionState`] is a pure state machine: the UI feeds it decoded
//! [`Input`] events one at a time, renders it after every event, and acts on
//! the [`ScriptChoice`] it returns. It never touches the terminal or the
//! process itself.

use crate::hooks::is_hook;
use crate::matcher::matches;
use crate::script_definitions::Script;

/// Longest search query kept, in characters.
pub const MAX_QUERY_LENGTH: usize = 100;

/// Decoded user input for the selection UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// The search field now holds this text.
    Text(String),
    Up,
    Down,
    Enter,
    Escape,
    Tab,
}

/// Outcome that ends the selection phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptChoice {
    Run(Script),
    Quit,
}

/// Truncates a raw query to [`MAX_QUERY_LENGTH`] characters, then trims it.
#[must_use]
pub fn sanitize_query(raw: &str) -> String {
    let truncated: String = raw.chars().take(MAX_QUERY_LENGTH).collect();
    truncated.trim().to_string()
}

#[derive(Clone, Debug)]
pub struct SelectionState {
    scripts: Vec<Script>,
    query: String,
    show_hooks: bool,
    cursor: usize,
    executed: bool,
    /// Indexes into `scripts`, rebuilt whenever the query or hook flag changes.
    visible: Vec<usize>,
}

impl SelectionState {
    pub fn new(scripts: Vec<Script>, show_hooks: bool) -> Self {
        let mut state = Self {
            scripts,
            query: String::new(),
            show_hooks,
            cursor: 0,
            executed: false,
            visible: Vec::new(),
        };
        state.refresh_visible();
        state
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn show_hooks(&self) -> bool {
        self.show_hooks
    }

    /// Index of the highlighted entry in the visible list; 0 when it is empty.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_executed(&self) -> bool {
        self.executed
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_scripts(&self) -> impl Iterator<Item = &Script> + '_ {
        self.visible.iter().map(|&index| &self.scripts[index])
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Script> {
        self.visible
            .get(self.cursor)
            .map(|&index| &self.scripts[index])
    }

    /// Whether `script` belongs in the visible list for the current filters.
    #[must_use]
    pub fn is_visible(&self, script: &Script) -> bool {
        let matches_search = self.query.is_empty() || matches(&self.query, &script.name);
        let should_show = self.show_hooks || !is_hook(&script.name);

        matches_search && should_show
    }

    fn refresh_visible(&mut self) {
        self.visible = (0..self.scripts.len())
            .filter(|&index| self.is_visible(&self.scripts[index]))
            .collect();
        self.cursor = 0;
    }

    /// Applies one input event.
    ///
    /// Returns a choice when the event ends the selection phase. Once a script
    /// has been chosen every event except [`Input::Escape`] is ignored.
    pub fn handle_input(&mut self, input: Input) -> Option<ScriptChoice> {
        if input == Input::Escape {
            return Some(ScriptChoice::Quit);
        }

        if self.executed {
            return None;
        }

        match input {
            Input::Text(raw) => {
                self.query = sanitize_query(&raw);
                self.refresh_visible();
                None
            }
            Input::Tab => {
                self.show_hooks = !self.show_hooks;
                self.refresh_visible();
                None
            }
            Input::Up => {
                self.move_up();
                None
            }
            Input::Down => {
                self.move_down();
                None
            }
            Input::Enter => self.confirm(),
            Input::Escape => Some(ScriptChoice::Quit),
        }
    }

    fn move_up(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }

        self.cursor = if self.cursor > 0 {
            self.cursor - 1
        } else {
            len - 1
        };
    }

    fn move_down(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }

        self.cursor = if self.cursor < len - 1 {
            self.cursor + 1
        } else {
            0
        };
    }

    fn confirm(&mut self) -> Option<ScriptChoice> {
        let script = self.selected()?.clone();
        self.executed = true;
        Some(ScriptChoice::Run(script))
    }
}
