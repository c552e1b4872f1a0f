use crate::engine::{LineEditTrigger, ReplaceOutcome, Shadowed, SharedTable, TriggerTable, check_line_edit};
use crate::host::{FieldId, KeyEvent, TextField};
use crate::session::{Expansion, Session, SessionOptions, SessionStats};
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

static DEFAULT_TABLE: Lazy<TriggerTable> = Lazy::new(crate::symbols::default_table);

/// Field id used when replaying input.
const REPLAY_FIELD: FieldId = FieldId(0);

/// Options for replaying typed input.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub session: SessionOptions,
    /// Replay as a single-line box (edit events after the text changed, `\n`
    /// as Return) instead of a rich-text field driven by key-down/key-up.
    pub line_edit: bool,
}

/// Result from [`expand`] and [`expand_with`].
#[derive(Debug, Clone)]
pub struct ExpandResult {
    /// Final field text.
    pub text: String,
    /// Final cursor, in chars.
    pub cursor: usize,
    /// Replacements in the order they happened.
    pub expansions: Vec<Expansion>,
    pub elapsed: Duration,
}

/// Additional details returned by [`expand_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExpandDetails {
    pub stats: SessionStats,
    /// Rules that can never fire because an earlier rule has the same key.
    pub shadowed: Vec<Shadowed>,
    pub table_len: usize,
}

#[derive(Debug, Clone)]
pub struct ExpandResultVerbose {
    pub text: String,
    pub cursor: usize,
    pub expansions: Vec<Expansion>,
    pub elapsed: Duration,
    pub details: ExpandDetails,
}

/// Type `input` into an empty field using the built-in symbol table.
///
/// # Example
/// ```
/// use symbex::expand;
///
/// let out = expand("x :alpha: -> y");
/// assert_eq!(out.text, "x α → y");
/// ```
pub fn expand(input: &str) -> ExpandResult {
    expand_with(input, &DEFAULT_TABLE, &Options::default())
}

/// Type `input` into an empty field, char by char, against `table`.
pub fn expand_with(input: &str, table: &TriggerTable, options: &Options) -> ExpandResult {
    let (result, _) = replay(input, table, options);
    result
}

/// [`expand_with`] plus session counters and table diagnostics.
pub fn expand_verbose_with(input: &str, table: &TriggerTable, options: &Options) -> ExpandResultVerbose {
    let (result, stats) = replay(input, table, options);
    let details = ExpandDetails { stats, shadowed: table.shadowed(), table_len: table.len() };
    ExpandResultVerbose {
        text: result.text,
        cursor: result.cursor,
        expansions: result.expansions,
        elapsed: result.elapsed,
        details,
    }
}

fn replay(input: &str, table: &TriggerTable, options: &Options) -> (ExpandResult, SessionStats) {
    let start = Instant::now();
    let mut field = TextField::new();
    let (expansions, stats) = if options.line_edit {
        replay_line_edit(input, table, &mut field)
    } else {
        replay_keystrokes(input, table, options, &mut field)
    };

    let result =
        ExpandResult { text: field.text().to_string(), cursor: field.cursor(), expansions, elapsed: start.elapsed() };
    (result, stats)
}

/// Rich-text field: every char is a key-down, the text update, then a key-up.
fn replay_keystrokes(
    input: &str,
    table: &TriggerTable,
    options: &Options,
    field: &mut TextField,
) -> (Vec<Expansion>, SessionStats) {
    let mut session = Session::with_shared(SharedTable::new(table.clone()), options.session.clone());
    session.attach(REPLAY_FIELD);

    let mut expansions = Vec::new();
    for c in input.chars() {
        let event = KeyEvent::from_char(c);
        expansions.extend(session.key_down(REPLAY_FIELD, &event, field));
        field.type_char(c);
        expansions.extend(session.key_up(REPLAY_FIELD, &event, field));
    }

    (expansions, session.stats().clone())
}

/// Single-line box: the box reports each edit after the char landed. A `\n`
/// in the input stands for Return; it is checked first, then kept in the text
/// so multi-line input stays readable.
fn replay_line_edit(input: &str, table: &TriggerTable, field: &mut TextField) -> (Vec<Expansion>, SessionStats) {
    let mut stats = SessionStats::default();
    let mut expansions = Vec::new();

    for c in input.chars() {
        let trigger = if c == '\n' {
            LineEditTrigger::ReturnPressed
        } else {
            field.type_char(c);
            LineEditTrigger::Edited
        };

        stats.checks += 1;
        let hit = check_line_edit(table, field.text(), field.cursor(), trigger);
        if let Some(hit) = hit {
            stats.matches += 1;
            if let Some((text, cursor)) = hit.apply(field.text(), field.cursor()) {
                field.set_text(text, cursor);
                expansions.push(Expansion {
                    field: REPLAY_FIELD,
                    key: hit.key,
                    value: hit.value,
                    is_markup: hit.is_markup,
                    range: hit.start..hit.end,
                    outcome: ReplaceOutcome::Replaced { single_step: true },
                });
            } else {
                stats.stale += 1;
            }
        }

        if c == '\n' {
            field.type_char(c);
        }
    }

    (expansions, stats)
}
