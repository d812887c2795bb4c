//! `fb run` — replay a JSON-lines script of board actions, then render the board.
//!
//! One action object per line, tagged by `action`:
//! `submit`, `vote`, `status`, `category`, `sort`. Blank lines and lines
//! starting with `#` are skipped.

use crate::cmd::board::{open_board, render_view};
use crate::output::{CliError, OutputMode, render_error};
use anyhow::Context;
use clap::Args;
use feedboard_core::config::BoardConfig;
use feedboard_core::{ActionOutcome, BoardAction, BoardError, ErrorCode};
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file; `-` or omitted reads stdin.
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Start from an empty board instead of the demo tasks.
    #[arg(long)]
    pub empty: bool,
}

/// A script line that is not a valid action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLineError {
    pub line: usize,
    pub reason: String,
}

impl fmt::Display for ScriptLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script line {}: {}", self.line, self.reason)
    }
}

impl std::error::Error for ScriptLineError {}

/// Parse every action in `input`, keeping 1-based line numbers.
pub fn parse_script(input: &str) -> Result<Vec<(usize, BoardAction)>, ScriptLineError> {
    let mut actions = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let action = serde_json::from_str::<BoardAction>(line).map_err(|err| ScriptLineError {
            line: idx + 1,
            reason: err.to_string(),
        })?;
        actions.push((idx + 1, action));
    }
    Ok(actions)
}

fn read_script(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            Ok(buf)
        }
    }
}

pub fn run_script(args: &RunArgs, config: &BoardConfig, output: OutputMode) -> anyhow::Result<()> {
    let source = read_script(args.script.as_ref())?;
    let actions = match parse_script(&source) {
        Ok(actions) => actions,
        Err(err) => {
            render_error(
                output,
                &CliError::coded(err.to_string(), ErrorCode::ScriptParseError),
            )?;
            anyhow::bail!("{err}");
        }
    };

    let mut board = open_board(args.empty, config);
    for (line, action) in actions {
        match board.apply(action) {
            Ok(ActionOutcome::Ignored { id }) => {
                warn!(line, id = %id, "action skipped: no task with this id");
            }
            Ok(outcome) => info!(line, ?outcome, "action applied"),
            Err(err @ BoardError::Validation(_)) => {
                warn!(line, error = %err, "submission rejected");
                render_error(output, &CliError::from(&err))?;
            }
            Err(err) => return Err(err).with_context(|| format!("script line {line}")),
        }
    }

    let view = board.view().context("deriving board view")?;
    render_view(&view, output, config.display.description_preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedboard_core::model::{Category, CategoryFilter, SortBy, Status};

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let script = "\n# seed tweaks\n{\"action\":\"vote\",\"id\":\"3\"}\n   \n{\"action\":\"sort\",\"value\":\"Newest\"}\n";
        let actions = parse_script(script).expect("parse");
        assert_eq!(
            actions,
            vec![
                (3, BoardAction::Vote { id: "3".into() }),
                (
                    5,
                    BoardAction::Sort {
                        value: SortBy::Newest
                    }
                ),
            ]
        );
    }

    #[test]
    fn parse_accepts_every_action_kind() {
        let script = r#"{"action":"submit","title":"Add export","description":"Allow CSV export","category":"Feature","status":"Open"}
{"action":"vote","id":"1"}
{"action":"status","id":"1","status":"Complete"}
{"action":"category","value":"Bug"}
{"action":"sort","value":"Most Upvoted"}"#;
        let actions = parse_script(script).expect("parse");
        assert_eq!(actions.len(), 5);
        assert!(matches!(
            actions[2].1,
            BoardAction::Status {
                status: Status::Complete,
                ..
            }
        ));
        assert_eq!(
            actions[3].1,
            BoardAction::Category {
                value: CategoryFilter::Only(Category::Bug)
            }
        );
    }

    #[test]
    fn parse_reports_line_of_bad_action() {
        let script = "{\"action\":\"vote\",\"id\":\"1\"}\n{\"action\":\"explode\"}\n";
        let err = parse_script(script).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.to_string().starts_with("script line 2:"));
    }

    #[test]
    fn parse_rejects_unknown_action_fields() {
        let script = "{\"action\":\"vote\",\"id\":\"1\"}\n{\"action\":\"submit\",\"title\":\"t\",\"description\":\"d\",\"catgory\":\"Bug\"}\n";
        let err = parse_script(script).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.reason.contains("catgory"));

        let err = parse_script("{\"action\":\"vote\",\"id\":\"1\",\"voter\":\"me\"}").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn run_args_defaults() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: RunArgs,
        }
        let w = Wrapper::parse_from(["test"]);
        assert!(w.args.script.is_none());
        assert!(!w.args.empty);
    }
}
