//! Line-oriented command dispatcher for the interactive stack and queue demos.
//!
//! [`Command::parse`] turns a line into a command, [`Session::apply`] runs it
//! against the wrapped structure and returns a printable [`Outcome`].
//! [`Session::run`] wires the two to any reader/writer pair.

use std::fmt;
use std::io::{BufRead, Write};

use crate::queue::Queue;
use crate::stack::Stack;
use crate::{AlgoError, Result};

/// A single user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `push <item>` / `enqueue <item>` / `1 <item>`
    Add(String),
    /// `pop` / `dequeue` / `2`
    Remove,
    /// `peek` / `3`
    Peek,
    /// `display` / `show` / `4`
    Display,
    /// `size`
    Size,
    /// `help` / `?`
    Help,
    /// `exit` / `quit` / `5`
    Exit,
}

impl Command {
    /// Parse one input line. Keywords are case-insensitive; the item of an add
    /// command is the rest of the line with surrounding whitespace trimmed.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(AlgoError::Parse("empty command".to_string()));
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "push" | "enqueue" | "1" => {
                if rest.is_empty() {
                    return Err(AlgoError::Parse(format!("'{}' requires an item", keyword)));
                }
                Command::Add(rest.to_string())
            }
            "pop" | "dequeue" | "2" => Command::Remove,
            "peek" | "3" => Command::Peek,
            "display" | "show" | "4" => Command::Display,
            "size" => Command::Size,
            "help" | "?" => Command::Help,
            "exit" | "quit" | "5" => Command::Exit,
            other => return Err(AlgoError::Parse(format!("unknown command: {}", other))),
        };

        if !rest.is_empty() && !matches!(command, Command::Add(_)) {
            return Err(AlgoError::Parse(format!(
                "'{}' takes no arguments",
                keyword
            )));
        }

        Ok(command)
    }
}

/// Which structure a session drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Stack,
    Queue,
}

impl SessionKind {
    fn name(self) -> &'static str {
        match self {
            SessionKind::Stack => "Stack",
            SessionKind::Queue => "Queue",
        }
    }
}

impl std::str::FromStr for SessionKind {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stack" => Ok(SessionKind::Stack),
            "queue" => Ok(SessionKind::Queue),
            other => Err(AlgoError::Parse(format!(
                "unknown session kind: {} (expected stack or queue)",
                other
            ))),
        }
    }
}

/// Result of applying a [`Command`], rendered through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { kind: SessionKind, item: String },
    Removed { kind: SessionKind, item: Option<String> },
    Front { kind: SessionKind, item: Option<String> },
    /// Items top-to-bottom for a stack, front-to-rear for a queue.
    Contents { kind: SessionKind, items: Vec<String> },
    Size(usize),
    Help(SessionKind),
    Exit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added { kind, item } => match kind {
                SessionKind::Stack => write!(f, "Pushed: {}", item),
                SessionKind::Queue => write!(f, "Enqueued: {}", item),
            },
            Outcome::Removed { kind, item: Some(item) } => match kind {
                SessionKind::Stack => write!(f, "Popped: {}", item),
                SessionKind::Queue => write!(f, "Dequeued: {}", item),
            },
            Outcome::Front { kind, item: Some(item) } => match kind {
                SessionKind::Stack => write!(f, "Top item: {}", item),
                SessionKind::Queue => write!(f, "Front item: {}", item),
            },
            Outcome::Removed { kind, item: None } | Outcome::Front { kind, item: None } => {
                write!(f, "{} is empty!", kind.name())
            }
            Outcome::Contents { kind, items } if items.is_empty() => {
                write!(f, "{} is empty", kind.name())
            }
            Outcome::Contents {
                kind: SessionKind::Stack,
                items,
            } => {
                write!(f, "Stack (top to bottom):")?;
                for item in items {
                    write!(f, "\n  {}", item)?;
                }
                Ok(())
            }
            Outcome::Contents {
                kind: SessionKind::Queue,
                items,
            } => write!(f, "Queue (front to rear): [{}]", items.join(", ")),
            Outcome::Size(size) => write!(f, "Size: {}", size),
            Outcome::Help(kind) => {
                let (add, remove, front) = match kind {
                    SessionKind::Stack => ("Push", "Pop", "Peek"),
                    SessionKind::Queue => ("Enqueue", "Dequeue", "Peek"),
                };
                write!(
                    f,
                    "Options:\n1. {} <item>\n2. {}\n3. {}\n4. Display\n5. Exit",
                    add, remove, front
                )
            }
            Outcome::Exit => write!(f, "Goodbye!"),
        }
    }
}

#[derive(Debug)]
enum Store {
    Stack(Stack<String>),
    Queue(Queue<String>),
}

/// An interactive session over an initially empty stack or queue.
#[derive(Debug)]
pub struct Session {
    store: Store,
}

impl Session {
    pub fn new(kind: SessionKind) -> Self {
        let store = match kind {
            SessionKind::Stack => Store::Stack(Stack::new()),
            SessionKind::Queue => Store::Queue(Queue::new()),
        };
        Self { store }
    }

    pub fn kind(&self) -> SessionKind {
        match self.store {
            Store::Stack(_) => SessionKind::Stack,
            Store::Queue(_) => SessionKind::Queue,
        }
    }

    /// Apply one command to the wrapped structure.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let kind = self.kind();
        match (&mut self.store, command) {
            (Store::Stack(stack), Command::Add(item)) => {
                stack.push(item.clone());
                Outcome::Added { kind, item }
            }
            (Store::Queue(queue), Command::Add(item)) => {
                queue.enqueue(item.clone());
                Outcome::Added { kind, item }
            }
            (Store::Stack(stack), Command::Remove) => Outcome::Removed {
                kind,
                item: stack.pop(),
            },
            (Store::Queue(queue), Command::Remove) => Outcome::Removed {
                kind,
                item: queue.dequeue(),
            },
            (Store::Stack(stack), Command::Peek) => Outcome::Front {
                kind,
                item: stack.peek().cloned(),
            },
            (Store::Queue(queue), Command::Peek) => Outcome::Front {
                kind,
                item: queue.peek().cloned(),
            },
            (Store::Stack(stack), Command::Display) => Outcome::Contents {
                kind,
                items: stack.iter().cloned().collect(),
            },
            (Store::Queue(queue), Command::Display) => Outcome::Contents {
                kind,
                items: queue.iter().cloned().collect(),
            },
            (Store::Stack(stack), Command::Size) => Outcome::Size(stack.len()),
            (Store::Queue(queue), Command::Size) => Outcome::Size(queue.len()),
            (_, Command::Help) => Outcome::Help(kind),
            (_, Command::Exit) => Outcome::Exit,
        }
    }

    /// Read commands line by line until `exit` or end of input, writing each
    /// outcome (or parse error) to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", Outcome::Help(self.kind()))?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(command) => {
                    let outcome = self.apply(command);
                    writeln!(output, "{}", outcome)?;
                    if outcome == Outcome::Exit {
                        return Ok(());
                    }
                }
                Err(e) => {
                    log::warn!("Rejected input {:?}: {}", line, e);
                    writeln!(output, "Invalid choice! {}", e)?;
                }
            }
        }

        log::debug!("Input closed, ending {} session", self.kind().name());
        writeln!(output, "{}", Outcome::Exit)?;
        Ok(())
    }
}
