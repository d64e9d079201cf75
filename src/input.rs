//! Query field keyboard handling and prompt commands.
//!
//! Enter submits the field; Shift+Enter inserts a newline. A line-oriented
//! terminal cannot report Shift, so a line ending in `\` stands in for
//! Shift+Enter.

/// Example queries offered by the prompt
pub const EXAMPLE_QUERIES: &[&str] = &[
    "Java developer test",
    "I am hiring for Java developers who can also collaborate effectively with my business teams. \
     Looking for an assessment that can be completed in 40 minutes.",
    "Looking to hire mid-level professionals who are proficient in Python, SQL and JavaScript. \
     Need an assessment package that can test all skills with max duration of 60 minutes.",
    "I am hiring for an analyst and want applications to screen using cognitive and personality tests, \
     what options are available within 45 mins.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// What a key press did to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    Edited,
    Submit,
}

/// Multi-line query text field
#[derive(Debug, Default, Clone)]
pub struct QueryField {
    value: String,
}

impl QueryField {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the field contents
    pub fn set(&mut self, text: &str) {
        self.value = text.to_string();
    }

    /// Returns the contents and leaves the field empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> FieldAction {
        match event.key {
            Key::Enter if !event.shift => FieldAction::Submit,
            Key::Enter => {
                self.value.push('\n');
                FieldAction::Edited
            }
            Key::Char(c) => {
                self.value.push(c);
                FieldAction::Edited
            }
        }
    }

    /// Feeds one terminal line into the field.
    ///
    /// Returns [`FieldAction::Submit`] unless the line was a continuation.
    pub fn feed_line(&mut self, line: &str) -> FieldAction {
        let mut action = FieldAction::Edited;
        for event in line_events(line) {
            action = self.handle_key(event);
        }
        action
    }
}

/// Key events a terminal line stands for: its characters, then Enter, or
/// Shift+Enter when the line ends in a backslash.
pub fn line_events(line: &str) -> Vec<KeyEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (text, shift) = match line.strip_suffix('\\') {
        Some(text) => (text, true),
        None => (line, false),
    };

    let mut events: Vec<KeyEvent> = text.chars().map(|c| KeyEvent::plain(Key::Char(c))).collect();
    events.push(KeyEvent {
        key: Key::Enter,
        shift,
    });
    events
}

/// Prompt commands, entered on an empty field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the top-k field to the raw value
    SetTopK(String),
    ListExamples,
    /// Submit the example at this 1-based position
    Example(usize),
    Help,
    Quit,
}

/// Parses `:`-prefixed prompt commands.
///
/// Returns `None` for anything that is not a command, including unknown
/// ones, which are then submitted as query text.
pub fn parse_command(line: &str) -> Option<Command> {
    let rest = line.trim().strip_prefix(':')?;
    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match name {
        "k" | "top-k" => Some(Command::SetTopK(arg.to_string())),
        "examples" => Some(Command::ListExamples),
        "example" => arg.parse().ok().map(Command::Example),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Looks up an example by 1-based position
pub fn example(position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|index| EXAMPLE_QUERIES.get(index))
        .copied()
}
