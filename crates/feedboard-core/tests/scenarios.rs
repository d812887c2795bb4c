//! End-to-end board scenarios through the public API.

use chrono::{Duration, TimeZone, Utc};
use feedboard_core::clock::SteppingClock;
use feedboard_core::model::{Category, CategoryFilter, SortBy, Status, Task};
use feedboard_core::store::TaskStore;
use feedboard_core::submit::FeedbackInput;
use feedboard_core::{ActionOutcome, Board, BoardAction, BoardError};

fn board() -> Board {
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    Board::with_clock(Box::new(SteppingClock::new(base, Duration::seconds(1))), true)
}

fn task(id: &str, votes: u32, created_day: u32) -> Task {
    Task {
        id: id.to_string(),
        title: format!("task {id}"),
        description: "d".to_string(),
        category: Category::Feature,
        status: Status::Open,
        votes,
        comments: 0,
        created_at: Utc.with_ymd_and_hms(2024, 1, created_day, 0, 0, 0).unwrap(),
        has_user_voted: false,
    }
}

#[test]
fn create_feedback_appears_in_open_column() {
    let mut board = board();
    let created = board
        .submit(
            FeedbackInput::new("Add export", "Allow CSV export")
                .with_category(Category::Feature)
                .with_status(Status::Open),
        )
        .expect("valid submission")
        .clone();

    assert_eq!(created.votes, 0);
    assert_eq!(created.comments, 0);
    assert!(!created.has_user_voted);

    let view = board.view().expect("view");
    assert_eq!(view.selected_category, CategoryFilter::All);
    assert!(
        view.column(Status::Open)
            .tasks
            .iter()
            .any(|t| t.title == "Add export")
    );
}

#[test]
fn vote_then_filter_round_trip() {
    let mut board = board();
    board.toggle_vote("3");
    let voted = board.store().get("3").expect("task 3");
    assert_eq!(voted.votes, 19);
    assert!(voted.has_user_voted);

    board
        .set_selected_category(CategoryFilter::Only(Category::Ui))
        .expect("prefs");
    assert!(!board.view().expect("view").contains("3"));

    board
        .set_selected_category(CategoryFilter::All)
        .expect("prefs");
    let view = board.view().expect("view");
    let shown = view.iter().find(|t| t.id == "3").expect("task 3 shown");
    assert_eq!(shown.votes, 19);
}

#[test]
fn sort_switch_reorders_by_key() {
    let store = TaskStore::with_tasks(vec![task("newer", 10, 20), task("older", 20, 5)]);
    let mut board = Board::new(store);

    let open_ids = |board: &Board| -> Vec<String> {
        board
            .view()
            .expect("view")
            .column(Status::Open)
            .tasks
            .iter()
            .map(|t| t.id.clone())
            .collect()
    };

    assert_eq!(open_ids(&board), ["older", "newer"]);
    board.set_sort_by(SortBy::Newest).expect("prefs");
    assert_eq!(open_ids(&board), ["newer", "older"]);
}

#[test]
fn blank_title_submission_is_rejected() {
    let mut board = board();
    let before = board.tasks().len();
    let err = board
        .apply(BoardAction::Submit(
            FeedbackInput::new("  ", "x").with_category(Category::Bug),
        ))
        .unwrap_err();
    assert!(matches!(err, BoardError::Validation(ref v) if v.field == "title"));
    assert_eq!(board.tasks().len(), before);
}

#[test]
fn stale_ids_are_ignored() {
    let mut board = board();
    let before = board.tasks().to_vec();
    let outcome = board
        .apply(BoardAction::Vote {
            id: "999".to_string(),
        })
        .expect("apply");
    assert_eq!(
        outcome,
        ActionOutcome::Ignored {
            id: "999".to_string()
        }
    );
    assert_eq!(board.tasks(), before.as_slice());
}

#[test]
fn seeded_board_default_view_counts() {
    let board = board();
    let view = board.view().expect("view");
    assert_eq!(view.sort_by, SortBy::MostUpvoted);
    assert_eq!(view.column(Status::Open).count(), 3);
    assert_eq!(view.column(Status::InProgress).count(), 2);
    assert_eq!(view.column(Status::Complete).count(), 1);

    let open: Vec<_> = view
        .column(Status::Open)
        .tasks
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(open, ["6", "3", "1"]);
}
