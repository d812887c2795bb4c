//! `fb board` — render the board under a category filter and sort order.

use crate::output::{OutputMode, heading, render_mode, rule};
use anyhow::Context;
use clap::Args;
use feedboard_core::config::BoardConfig;
use feedboard_core::model::{Category, CategoryFilter, SortBy, Status, Task, Tone};
use feedboard_core::{Board, BoardView};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Category filter: all, ui, ux, feature, bug, performance.
    #[arg(short, long, default_value = "all", long_help = category_help())]
    pub category: CategoryFilter,

    /// Sort order: most-upvoted or newest.
    #[arg(short, long, default_value = "most-upvoted")]
    pub sort: SortBy,

    /// Start from an empty board instead of the demo tasks.
    #[arg(long)]
    pub empty: bool,
}

fn category_help() -> String {
    let mut help = String::from("Show only one category, or `all`. Categories:");
    for category in Category::ALL {
        help.push_str("\n  ");
        help.push_str(category.label());
    }
    help
}

/// Build the session board: seeded unless `--empty` or config says otherwise.
pub fn open_board(empty: bool, config: &BoardConfig) -> Board {
    if empty || !config.board.seed {
        Board::empty()
    } else {
        Board::seeded()
    }
}

pub fn run_board(args: &BoardArgs, config: &BoardConfig, output: OutputMode) -> anyhow::Result<()> {
    let mut board = open_board(args.empty, config);
    board.set_selected_category(args.category)?;
    board.set_sort_by(args.sort)?;
    let view = board.view().context("deriving board view")?;
    render_view(&view, output, config.display.description_preview)
}

#[derive(Debug, Serialize)]
struct TaskReport<'a> {
    #[serde(flatten)]
    task: &'a Task,
    category_tone: Tone,
}

#[derive(Debug, Serialize)]
struct ColumnReport<'a> {
    status: Status,
    label: &'static str,
    icon: &'static str,
    tone: Tone,
    count: usize,
    tasks: Vec<TaskReport<'a>>,
}

#[derive(Debug, Serialize)]
struct BoardReport<'a> {
    selected_category: CategoryFilter,
    sort_by: SortBy,
    total: usize,
    columns: Vec<ColumnReport<'a>>,
}

impl<'a> BoardReport<'a> {
    fn new(view: &'a BoardView) -> Self {
        Self {
            selected_category: view.selected_category,
            sort_by: view.sort_by,
            total: view.total(),
            columns: view
                .columns
                .iter()
                .map(|column| ColumnReport {
                    status: column.status,
                    label: column.status.label(),
                    icon: column.status.icon(),
                    tone: column.status.tone(),
                    count: column.count(),
                    tasks: column
                        .tasks
                        .iter()
                        .map(|task| TaskReport {
                            task,
                            category_tone: task.category.tone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Render a derived view in the requested mode.
pub fn render_view(view: &BoardView, output: OutputMode, preview_chars: usize) -> anyhow::Result<()> {
    let report = BoardReport::new(view);
    render_mode(output, &report, write_text, |report, w| {
        write_pretty(report, preview_chars, w)
    })
}

fn write_text(report: &BoardReport<'_>, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "status  id  votes  voted  category  comments  title")?;
    for column in &report.columns {
        for TaskReport { task, .. } in &column.tasks {
            writeln!(
                w,
                "{}  {}  {}  {}  {}  {}  {}",
                column.status,
                task.id,
                task.votes,
                if task.has_user_voted { "yes" } else { "no" },
                task.category,
                task.comments,
                task.title
            )?;
        }
    }
    Ok(())
}

fn write_pretty(report: &BoardReport<'_>, preview_chars: usize, w: &mut dyn Write) -> io::Result<()> {
    let category = match report.selected_category {
        CategoryFilter::All => "All Categories",
        CategoryFilter::Only(category) => category.label(),
    };
    writeln!(
        w,
        "Feedback board  category: {category}  sort: {}  ({} shown)",
        report.sort_by, report.total
    )?;
    for column in &report.columns {
        writeln!(w)?;
        heading(
            w,
            &format!("{} {} ({})  [{}]", column.icon, column.status, column.count, column.tone),
        )?;
        writeln!(w, "  {}", column.label)?;
        if column.tasks.is_empty() {
            writeln!(w, "  No tasks in this status")?;
            continue;
        }
        for TaskReport {
            task,
            category_tone,
        } in &column.tasks
        {
            let marker = if task.has_user_voted { "▲" } else { "△" };
            writeln!(
                w,
                "  {marker} {:>3}  [{}] {}  ({}/{}, {})",
                task.votes,
                task.id,
                task.title,
                task.category,
                category_tone,
                task.created_at.format("%Y-%m-%d")
            )?;
            writeln!(w, "         {}", task.description_preview(preview_chars))?;
            writeln!(w, "         comments: {}", task.comments)?;
        }
    }
    rule(w)
}
