pub mod context;
pub mod entry_commands;
pub mod input;

use std::io::{self, BufRead, Write};

use crate::clock::Clock;
use crate::directory::Directory;
use context::CLIContext;

const MENU: &str = "(A)dd entry, (R)emove entry, (L)ist entries, (N)ext birthday, (Q)uit";

/// Run the interactive menu on stdin/stdout until the user quits or input ends.
pub fn run<C: Clock>(directory: Directory<C>) -> io::Result<Directory<C>> {
    let stdin = io::stdin();
    run_with(directory, stdin.lock(), io::stdout())
}

/// Run the menu over any reader/writer pair, handing the directory back at the end.
pub fn run_with<C, R, W>(directory: Directory<C>, input: R, output: W) -> io::Result<Directory<C>>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut ctx = CLIContext::new(directory, input, output);
    writeln!(ctx.output, "Address Book")?;
    repl_loop(&mut ctx)?;
    Ok(ctx.into_directory())
}

fn repl_loop<R: BufRead, W: Write, C: Clock>(ctx: &mut CLIContext<R, W, C>) -> io::Result<()> {
    loop {
        writeln!(ctx.output)?;
        let choice = match ctx.prompt(&format!("{}\n", MENU))? {
            Some(s) => s,
            None => break,
        };

        match parse_choice(&choice) {
            Some(Choice::Add) => entry_commands::add(ctx)?,
            Some(Choice::Remove) => entry_commands::remove(ctx)?,
            Some(Choice::List) => entry_commands::list(ctx)?,
            Some(Choice::NextBirthday) => entry_commands::next_birthday(ctx)?,
            Some(Choice::Quit) => break,
            None => writeln!(ctx.output, "Invalid choice")?,
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Remove,
    List,
    NextBirthday,
    Quit,
}

/// Accepts the menu letter or the full word, in any case.
fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().to_lowercase().as_str() {
        "a" | "add" => Some(Choice::Add),
        "r" | "remove" => Some(Choice::Remove),
        "l" | "list" => Some(Choice::List),
        "n" | "next" => Some(Choice::NextBirthday),
        "q" | "quit" | "exit" => Some(Choice::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_choice_accepts_letters_in_either_case() {
        assert_eq!(parse_choice("a"), Some(Choice::Add));
        assert_eq!(parse_choice("R"), Some(Choice::Remove));
        assert_eq!(parse_choice(" l "), Some(Choice::List));
        assert_eq!(parse_choice("N"), Some(Choice::NextBirthday));
        assert_eq!(parse_choice("q"), Some(Choice::Quit));
    }

    #[test]
    fn parse_choice_accepts_words() {
        assert_eq!(parse_choice("Add"), Some(Choice::Add));
        assert_eq!(parse_choice("exit"), Some(Choice::Quit));
    }

    #[test]
    fn parse_choice_rejects_unknown() {
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("x"), None);
        assert_eq!(parse_choice("adds"), None);
    }
}
