//! Operator commands typed at the `track` prompt.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use gridiron_core::{Direction, SessionEvent, YardLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorCommand {
    Event(SessionEvent),
    /// Reverse the current direction.
    Flip,
    Status,
    Log,
    Export(PathBuf),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <label>          tap a yard line (LG, L1..L49, 50, R49..R1, RG)
  nogain           end the play where it started
  newplay          start the next play from the last spot
  dir <ltr|rtl>    set offensive direction
  flip             reverse offensive direction
  reset            back to 1st & 10 (keeps the log)
  newgame          clear downs, selections and the log
  status           show down, distance and selection
  log              list logged plays
  export <path>    write the log (.csv for CSV, JSON otherwise)
  help             this text
  quit             leave";

/// Parse one input line; blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<OperatorCommand>> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    let takes_arg = matches!(head.to_ascii_lowercase().as_str(), "dir" | "direction" | "export");
    let extra = if takes_arg { words.next() } else { arg };
    if let Some(extra) = extra {
        return Err(anyhow!("unexpected argument '{extra}' after '{head}'"));
    }

    let command = match head.to_ascii_lowercase().as_str() {
        "nogain" | "no-gain" | "ng" => OperatorCommand::Event(SessionEvent::NoGain),
        "newplay" | "new-play" | "np" => OperatorCommand::Event(SessionEvent::NewPlay),
        "reset" => OperatorCommand::Event(SessionEvent::ResetDowns),
        "newgame" | "new-game" => OperatorCommand::Event(SessionEvent::ResetGame),
        "dir" | "direction" => {
            let value = arg.ok_or_else(|| anyhow!("dir needs ltr or rtl"))?;
            let direction: Direction = value.parse().map_err(|e: String| anyhow!(e))?;
            OperatorCommand::Event(SessionEvent::SetDirection(direction))
        }
        "flip" => OperatorCommand::Flip,
        "status" => OperatorCommand::Status,
        "log" => OperatorCommand::Log,
        "export" => {
            let path = arg.ok_or_else(|| anyhow!("export needs a file path"))?;
            OperatorCommand::Export(PathBuf::from(path))
        }
        "help" | "?" => OperatorCommand::Help,
        "quit" | "exit" | "q" => OperatorCommand::Quit,
        _ => {
            let label: YardLine = head.parse()?;
            OperatorCommand::Event(SessionEvent::Select(label))
        }
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> OperatorCommand {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn test_labels_become_selections() {
        assert_eq!(
            parse("l23"),
            OperatorCommand::Event(SessionEvent::Select("L23".parse().unwrap()))
        );
        assert_eq!(
            parse("  50 "),
            OperatorCommand::Event(SessionEvent::Select(YardLine::Midfield))
        );
    }

    #[test]
    fn test_keywords_win_over_labels() {
        // "log" and "reset" start with side markers
        assert_eq!(parse("log"), OperatorCommand::Log);
        assert_eq!(parse("RESET"), OperatorCommand::Event(SessionEvent::ResetDowns));
        assert_eq!(parse("ng"), OperatorCommand::Event(SessionEvent::NoGain));
        assert_eq!(parse("newplay"), OperatorCommand::Event(SessionEvent::NewPlay));
    }

    #[test]
    fn test_direction_and_export() {
        assert_eq!(
            parse("dir rtl"),
            OperatorCommand::Event(SessionEvent::SetDirection(Direction::RightToLeft))
        );
        assert_eq!(parse("export drive.csv"), OperatorCommand::Export(PathBuf::from("drive.csv")));
        assert!(parse_command("dir").is_err());
        assert!(parse_command("dir sideways").is_err());
        assert!(parse_command("export").is_err());
    }

    #[test]
    fn test_blank_and_invalid() {
        assert_eq!(parse_command("   ").unwrap(), None);
        let err = parse_command("L77").unwrap_err();
        assert!(err.to_string().contains("L77"));
    }

    #[test]
    fn test_trailing_words_are_rejected() {
        let err = parse_command("L20 L30").unwrap_err();
        assert_eq!(err.to_string(), "unexpected argument 'L30' after 'L20'");
        assert!(parse_command("dir rtl extra").is_err());
        assert!(parse_command("export a.json b.json").is_err());
        assert!(parse_command("nogain now").is_err());
    }
}
