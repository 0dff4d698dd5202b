/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Submit(String),
    /// Zero-based index into the article list.
    Select(usize),
    /// Zero-based index into the article list.
    Copy(usize),
    Show,
    Help,
    Quit,
    Invalid(String),
}

pub(crate) const HELP: &str = "\
Commands:
  <url> | submit <url>   summarize an article
  select <n>             show the stored summary of article n
  copy <n>               copy the URL of article n
  show                   redraw
  help                   this text
  quit                   exit";

/// Parses a line; article numbers are shown to the user starting at 1.
pub(crate) fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "submit" | "s" if !rest.is_empty() => Command::Submit(rest.to_string()),
        "select" | "open" | "o" => parse_index(rest).map_or_else(
            || Command::Invalid(format!("expected an article number, got {rest:?}")),
            Command::Select,
        ),
        "copy" | "c" => parse_index(rest).map_or_else(
            || Command::Invalid(format!("expected an article number, got {rest:?}")),
            Command::Copy,
        ),
        "show" | "list" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ if line.contains("://") => Command::Submit(line.to_string()),
        _ => Command::Invalid(format!("unknown command {word:?}; type help")),
    };
    Some(command)
}

fn parse_index(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_url_submits() {
        assert_eq!(
            parse_command("  https://example.com/a  "),
            Some(Command::Submit("https://example.com/a".into()))
        );
        assert_eq!(
            parse_command("submit https://example.com/b"),
            Some(Command::Submit("https://example.com/b".into()))
        );
    }

    #[test]
    fn article_numbers_are_one_based() {
        assert_eq!(parse_command("select 1"), Some(Command::Select(0)));
        assert_eq!(parse_command("COPY 3"), Some(Command::Copy(2)));
        assert!(matches!(parse_command("copy 0"), Some(Command::Invalid(_))));
        assert!(matches!(parse_command("select x"), Some(Command::Invalid(_))));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert!(matches!(parse_command("submit"), Some(Command::Invalid(_))));
        assert!(matches!(parse_command("dance"), Some(Command::Invalid(_))));
    }
}
