//! Command Table
//!
//! The set of REPL commands, fixed at compile time, and input parsing.

// == Command Kind ==
/// Handler selected by a command table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Cache,
}

// == Command Table ==
/// One row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    /// Name plus argument placeholder, as shown by `help`
    pub usage: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Every command the REPL understands, in `help` order.
pub static COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "help",
        description: "Displays this message",
        kind: CommandKind::Help,
    },
    Command {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
    Command {
        name: "map",
        usage: "map",
        description: "Lists the next page of location areas",
        kind: CommandKind::Map,
    },
    Command {
        name: "mapb",
        usage: "mapb",
        description: "Lists the previous page of location areas",
        kind: CommandKind::MapBack,
    },
    Command {
        name: "explore",
        usage: "explore <area>",
        description: "Lists the Pokemon found in a location area",
        kind: CommandKind::Explore,
    },
    Command {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Tries to catch a Pokemon",
        kind: CommandKind::Catch,
    },
    Command {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Shows details of a caught Pokemon",
        kind: CommandKind::Inspect,
    },
    Command {
        name: "pokedex",
        usage: "pokedex",
        description: "Lists all caught Pokemon",
        kind: CommandKind::Pokedex,
    },
    Command {
        name: "cache",
        usage: "cache",
        description: "Shows response cache statistics",
        kind: CommandKind::Cache,
    },
];

// == Lookup ==
/// Finds a command by exact name.
pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

// == Input Parsing ==
/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub args: Vec<String>,
}

/// Lowercases and splits a line on whitespace. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<Input> {
    let lowered = line.trim().to_lowercase();
    let mut words = lowered.split_whitespace().map(str::to_string);
    let name = words.next()?;
    Some(Input {
        name,
        args: words.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_command_names_unique() {
        let names: HashSet<&str> = COMMANDS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("mapb").map(|c| c.kind), Some(CommandKind::MapBack));
        assert!(lookup("fly").is_none());
    }

    #[test]
    fn test_parse_input_lowercases_and_splits() {
        let input = parse_input("  CATCH   Pikachu  ").unwrap();
        assert_eq!(input.name, "catch");
        assert_eq!(input.args, vec!["pikachu".to_string()]);
    }

    #[test]
    fn test_parse_input_blank() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t ").is_none());
    }
}
