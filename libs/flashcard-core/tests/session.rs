mod common;

use common::FakeSurface;
use flashcard_core::session::CANCEL_EXIT_CODE;
use flashcard_core::{
    parse_str, DeckStore, InputEvent, ReviewState, Scheduler, Session, SessionError, Size,
};
use pretty_assertions::assert_eq;
use std::fs;

const INFO: usize = 0;
const FRONT: usize = 1;
const BACK: usize = 2;

fn scheduler(text: &str) -> Scheduler {
    Scheduler::new(DeckStore::with_deck(parse_str(text).unwrap()))
}

fn two_cards() -> Scheduler {
    scheduler("2+2\n4\ncapital of france\nparis\n")
}

fn terminal() -> Size {
    Size::new(80, 24)
}

#[test]
fn quit_on_first_card() {
    let surface = FakeSurface::new(terminal()).keys("q");
    let mut session = Session::new(surface, two_cards()).unwrap();

    let exit = session.run().unwrap();

    assert_eq!(exit.code, 0);
    let surface = session.surface();
    assert_eq!(surface.text(INFO), vec!["card 1/2", "right: 0", "wrong: 0"]);
    assert_eq!(surface.text(FRONT), vec!["2+2"]);
    assert!(surface.text(BACK).is_empty());
    assert!(surface.flushes >= 3);
}

#[test]
fn wrong_then_right_revisits_only_the_missed_card() {
    let surface = FakeSurface::new(terminal()).keys("klq");
    let mut session = Session::new(surface, two_cards()).unwrap();

    session.run().unwrap();

    let scheduler = session.scheduler();
    assert_eq!(scheduler.counters().wrong, 1);
    assert_eq!(scheduler.counters().right, 1);
    assert_eq!(scheduler.due().as_slice(), &[true, false]);
    assert_eq!(scheduler.state(), ReviewState::AwaitingVerdict(0));
    assert_eq!(session.surface().text(FRONT), vec!["2+2"]);
    assert_eq!(
        session.surface().text(INFO),
        vec!["card 1/2", "right: 1", "wrong: 1"]
    );
}

#[test]
fn perfect_pass_starts_over_from_the_first_card() {
    let surface = FakeSurface::new(terminal()).keys("llq");
    let mut session = Session::new(surface, two_cards()).unwrap();

    session.run().unwrap();

    let scheduler = session.scheduler();
    assert_eq!(scheduler.passes(), 1);
    assert_eq!(scheduler.due().as_slice(), &[true, true]);
    assert_eq!(scheduler.state(), ReviewState::AwaitingVerdict(0));
}

#[test]
fn escape_sequences_in_cards_are_drawn_as_text() {
    let surface = FakeSurface::new(terminal()).keys("jq");
    let cards = scheduler("\x1b[2Jclear\nbell\x07\n");
    let mut session = Session::new(surface, cards).unwrap();

    session.run().unwrap();

    assert_eq!(session.surface().text(FRONT), vec!["^[[2Jclear"]);
    assert_eq!(session.surface().text(BACK), vec!["bell^G"]);
}

#[test]
fn j_toggles_the_back() {
    let surface = FakeSurface::new(terminal()).keys("jq");
    let mut session = Session::new(surface, two_cards()).unwrap();
    session.run().unwrap();
    assert_eq!(session.surface().text(BACK), vec!["4"]);
    assert!(session.scheduler().back_visible());

    let surface = FakeSurface::new(terminal()).keys("jJq");
    let mut session = Session::new(surface, two_cards()).unwrap();
    session.run().unwrap();
    assert!(session.surface().text(BACK).is_empty());
}

#[test]
fn marking_hides_the_back_again() {
    let surface = FakeSurface::new(terminal()).keys("jlq");
    let mut session = Session::new(surface, two_cards()).unwrap();

    session.run().unwrap();

    assert_eq!(session.surface().text(FRONT), vec!["capital of france"]);
    assert!(session.surface().text(BACK).is_empty());
}

#[test]
fn uppercase_keys_work() {
    let surface = FakeSurface::new(terminal()).keys("LKQ");
    let mut session = Session::new(surface, two_cards()).unwrap();

    session.run().unwrap();

    assert_eq!(session.scheduler().counters().right, 1);
    assert_eq!(session.scheduler().counters().wrong, 1);
}

#[test]
fn unknown_keys_are_ignored() {
    let surface = FakeSurface::new(terminal())
        .keys("x? ")
        .event(InputEvent::Other)
        .keys("q");
    let mut session = Session::new(surface, two_cards()).unwrap();

    session.run().unwrap();

    assert_eq!(session.scheduler().state(), ReviewState::AwaitingVerdict(0));
    assert_eq!(session.scheduler().counters().total(), 0);
}

#[test]
fn resize_moves_regions_and_keeps_state() {
    let surface = FakeSurface::new(terminal())
        .keys("j")
        .resize_to(Size::new(120, 40))
        .keys("q");
    let mut session = Session::new(surface, two_cards()).unwrap();

    session.run().unwrap();

    let surface = session.surface();
    assert_eq!(surface.rect(FRONT).x, 50);
    assert_eq!(surface.rect(FRONT).y, 15);
    assert_eq!(surface.rect(BACK).y, 21);
    assert_eq!(surface.rect(INFO).x, 0);
    assert_eq!(surface.text(FRONT), vec!["2+2"]);
    assert_eq!(surface.text(BACK), vec!["4"]);
    assert_eq!(session.scheduler().state(), ReviewState::AwaitingVerdict(0));
    assert!(session.scheduler().back_visible());
}

#[test]
fn cancel_exits_with_interrupt_code() {
    let surface = FakeSurface::new(terminal()).event(InputEvent::Cancel);
    let mut session = Session::new(surface, two_cards()).unwrap();

    let exit = session.run().unwrap();

    assert_eq!(exit.code, CANCEL_EXIT_CODE);
}

#[test]
fn empty_deck_waits_for_quit() {
    let surface = FakeSurface::new(terminal()).keys("jklq");
    let mut session = Session::new(surface, scheduler("")).unwrap();

    let exit = session.run().unwrap();

    assert_eq!(exit.code, 0);
    assert_eq!(session.surface().text(FRONT), vec!["deck is empty"]);
    assert_eq!(session.surface().text(INFO)[0], "card 0/0");
    assert_eq!(session.scheduler().counters().total(), 0);
}

#[test]
fn long_card_text_wraps_inside_the_region() {
    let surface = FakeSurface::new(terminal()).keys("q");
    let text = "what is the capital city of australia\ncanberra\n";
    let mut session = Session::new(surface, scheduler(text)).unwrap();

    session.run().unwrap();

    assert_eq!(
        session.surface().text(FRONT),
        vec!["what is the capital ", "city of australia"]
    );
}

#[test]
fn reload_swaps_deck_and_keeps_counters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.txt");
    fs::write(&path, "hund\ndog\nkatze\ncat\nmaus\nmouse\n").unwrap();

    let surface = FakeSurface::new(terminal()).keys("krq");
    let mut session = Session::new(surface, two_cards())
        .unwrap()
        .with_deck_path(&path);

    session.run().unwrap();

    let scheduler = session.scheduler();
    assert_eq!(scheduler.deck().len(), 3);
    assert_eq!(scheduler.due().as_slice(), &[true, true, true]);
    assert_eq!(scheduler.counters().wrong, 1);
    assert_eq!(session.surface().text(FRONT), vec!["hund"]);
    assert_eq!(
        session.surface().text(INFO),
        vec!["card 1/3", "right: 0", "wrong: 1", "deck reloaded"]
    );
}

#[test]
fn failed_reload_keeps_reviewing_the_old_deck() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let surface = FakeSurface::new(terminal()).keys("lrq");
    let mut session = Session::new(surface, two_cards())
        .unwrap()
        .with_deck_path(&path);

    session.run().unwrap();

    let scheduler = session.scheduler();
    assert_eq!(scheduler.deck().len(), 2);
    assert_eq!(scheduler.due().as_slice(), &[false, true]);
    assert_eq!(scheduler.state(), ReviewState::AwaitingVerdict(1));
    assert_eq!(session.surface().text(INFO)[3], "reload failed");
}

#[test]
fn reload_into_empty_deck_from_a_card() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let surface = FakeSurface::new(terminal()).keys("rq");
    let mut session = Session::new(surface, two_cards())
        .unwrap()
        .with_deck_path(&path);

    session.run().unwrap();

    assert!(session.scheduler().is_empty());
    assert_eq!(session.surface().text(FRONT), vec!["deck is empty"]);
}

#[test]
fn exhausted_input_surfaces_presentation_error() {
    let surface = FakeSurface::new(terminal()).keys("l");
    let mut session = Session::new(surface, two_cards()).unwrap();

    let result = session.run();

    assert!(matches!(result, Err(SessionError::Presentation(_))));
    assert_eq!(session.scheduler().counters().right, 1);
}
