//! Interactive drive tracking loop.
//!
//! Reads operator commands line by line, applies them to the session
//! snapshot and writes banners and status to `out`. Bad input is reported
//! and the loop carries on.

use std::io::{BufRead, Write};

use anyhow::Result;
use gridiron_core::{PlaySession, Selection, SessionEvent};

use crate::operator::{parse_command, OperatorCommand, HELP};

pub fn status_line(session: &PlaySession) -> String {
    let pending = match session.selection() {
        Selection::AwaitingStart => "tap start line".to_string(),
        Selection::AwaitingEnd { start } => format!("start {start}, tap end line"),
        Selection::ReadyToResolve { start, end } => format!("{start} -> {end}"),
    };
    format!("{} | {} | {}", session.downs(), session.direction(), pending)
}

fn write_log<W: Write>(session: &PlaySession, out: &mut W) -> Result<()> {
    let log = session.log();
    if log.is_empty() {
        writeln!(out, "(no plays logged)")?;
        return Ok(());
    }

    for (i, record) in log.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} {} -> {} {:+} | {} & {} at {}",
            i + 1,
            record.timestamp.format("%H:%M:%S"),
            record.start_label,
            record.end_label,
            record.yards_gained,
            record.down,
            record.distance_to_go,
            record.spot_label
        )?;
    }
    write!(out, "     {} plays, {:+} net yards", log.len(), log.total_yards())?;
    if let Some(longest) = log.longest_gain() {
        write!(out, ", longest gain {longest:+}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn apply_event<W: Write>(
    session: PlaySession,
    event: SessionEvent,
    out: &mut W,
) -> Result<PlaySession> {
    match session.apply(event) {
        Ok(transition) => {
            match &transition.resolved {
                Some(play) => {
                    tracing::info!(
                        start = %play.start,
                        end = %play.end,
                        yards = play.outcome.yards_gained,
                        "play resolved"
                    );
                    writeln!(out, "{}", play.banner())?;
                }
                None => writeln!(out, "{}", status_line(&transition.session))?,
            }
            Ok(transition.session)
        }
        Err(e) => {
            tracing::warn!(?event, "event rejected: {}", e);
            writeln!(out, "! {e}")?;
            Ok(session)
        }
    }
}

/// Run the loop until `quit` or end of input; returns the final snapshot.
pub fn run<R: BufRead, W: Write>(
    mut session: PlaySession,
    input: R,
    out: &mut W,
) -> Result<PlaySession> {
    writeln!(out, "{}", status_line(&session))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "! {e}")?;
                continue;
            }
        };

        session = match command {
            OperatorCommand::Quit => break,
            OperatorCommand::Event(event) => apply_event(session, event, out)?,
            OperatorCommand::Flip => {
                let flipped = session.direction().flip();
                apply_event(session, SessionEvent::SetDirection(flipped), out)?
            }
            OperatorCommand::Status => {
                writeln!(out, "{}", status_line(&session))?;
                session
            }
            OperatorCommand::Log => {
                write_log(&session, out)?;
                session
            }
            OperatorCommand::Export(path) => {
                match session.log().export_to_path(&path) {
                    Ok(()) => writeln!(
                        out,
                        "exported {} plays to {}",
                        session.log().len(),
                        path.display()
                    )?,
                    Err(e) => writeln!(out, "! {e}")?,
                }
                session
            }
            OperatorCommand::Help => {
                writeln!(out, "{HELP}")?;
                session
            }
        };
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridiron_core::{Direction, DownState};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn drive(script: &str) -> (PlaySession, String) {
        let mut out = Vec::new();
        let session = run(PlaySession::default(), Cursor::new(script), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_drive_with_banners() {
        let (session, output) = drive("L20\nL32\nL32\nnogain\nbogus\nquit\nL40\n");

        assert!(output.contains("FIRST DOWN! +12 yards → 1st & 10 at L32"));
        assert!(output.contains("No gain → 2nd & 10 at L32"));
        assert!(output.contains("! Unknown side marker in label: bogus"));
        assert_eq!(session.downs(), DownState::new(2, 10));
        assert_eq!(session.log().len(), 2);
    }

    #[test]
    fn test_rejected_event_keeps_session() {
        let (session, output) = drive("nogain\nnewplay\n");
        assert!(output.contains("! No start line selected"));
        assert!(output.contains("! No previous play"));
        assert_eq!(session, PlaySession::default());
    }

    #[test]
    fn test_flip_and_status() {
        let (session, output) = drive("flip\nstatus\n");
        assert_eq!(session.direction(), Direction::RightToLeft);
        assert!(output.contains("1st & 10 | rtl | tap start line"));
    }

    #[test]
    fn test_log_listing() {
        let (_, output) = drive("log\nL20\nL26\nlog\n");
        assert!(output.contains("(no plays logged)"));
        assert!(output.contains("L20 -> L26 +6 | 2 & 4 at L26"));
        assert!(output.contains("1 plays, +6 net yards, longest gain +6"));
    }

    #[test]
    fn test_export_command() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drive.json");
        let script = format!("L20\nL25\nexport {}\n", path.display());

        let (_, output) = drive(&script);
        assert!(output.contains("exported 1 plays"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"end_label\": \"L25\""));
    }
}
