use proptest::prelude::*;
use terminal_portfolio::input::RecallState;
use terminal_portfolio::{Change, Command, Console, Fragment, Key, Produced};

fn fragment_of(cmd: Command) -> Fragment {
    match cmd.produce() {
        Produced::Fragment(f) => f,
        Produced::ClearHistory => panic!("{} has no fragment", cmd.name()),
    }
}

fn submit_all(console: &mut Console, lines: &[&str]) {
    for line in lines {
        console.handle(Key::Edit(line.to_string()));
        console.handle(Key::Submit);
    }
}

#[test]
fn every_command_dispatches_to_its_fragment() {
    for cmd in Command::ALL {
        let mut console = Console::new();
        let raw = format!("  {}\t", cmd.name().to_uppercase());
        match console.submit(&raw) {
            Change::Cleared => assert!(console.history().is_empty()),
            Change::Appended(idx) => {
                let entry = &console.history().entries()[idx];
                assert_eq!(entry.command, raw);
                assert_eq!(entry.output, fragment_of(cmd));
            }
        }
        assert_eq!(console.recall().all(), [raw.as_str()]);
    }
}

#[test]
fn aliases_match_canonical_output() {
    for (alias, canonical) in [("h", "help"), ("whoami", "about"), ("ls", "projects")] {
        let mut console = Console::new();
        console.submit(alias);
        console.submit(canonical);
        let entries = console.history().entries();
        assert_eq!(entries[1].output, entries[2].output, "{alias} vs {canonical}");
    }
}

#[test]
fn clear_never_leaves_a_residual_entry() {
    let mut console = Console::new();
    submit_all(&mut console, &["about", "skills", "  Clear  "]);
    assert!(console.history().is_empty());
    submit_all(&mut console, &["CLS"]);
    assert!(console.history().is_empty());
    submit_all(&mut console, &["joke"]);
    assert_eq!(console.history().len(), 1);
    assert_eq!(console.history().entries()[0].command, "joke");
}

#[test]
fn recall_round_trip() {
    let mut console = Console::new();
    submit_all(&mut console, &["foo", "bar", "baz"]);

    let mut seen = Vec::new();
    for _ in 0..3 {
        console.handle(Key::RecallPrev);
        seen.push(console.input().buffer().to_string());
    }
    assert_eq!(seen, ["baz", "bar", "foo"]);

    console.handle(Key::RecallPrev);
    assert_eq!(console.input().buffer(), "foo");
    assert_eq!(console.input().state(), RecallState::Recalling(0));

    let mut seen = Vec::new();
    for _ in 0..3 {
        console.handle(Key::RecallNext);
        seen.push(console.input().buffer().to_string());
    }
    assert_eq!(seen, ["bar", "baz", ""]);
    assert_eq!(console.input().state(), RecallState::Editing);
}

#[test]
fn recall_survives_clear() {
    let mut console = Console::new();
    submit_all(&mut console, &["contact", "clear"]);
    console.handle(Key::RecallPrev);
    assert_eq!(console.input().buffer(), "clear");
    console.handle(Key::RecallPrev);
    assert_eq!(console.input().buffer(), "contact");
}

#[test]
fn end_to_end_session() {
    let mut console = Console::new();
    assert_eq!(console.history().len(), 1);
    assert_eq!(console.history().entries()[0].command, "");

    submit_all(&mut console, &["Help"]);
    assert_eq!(console.history().len(), 2);
    let entry = &console.history().entries()[1];
    assert_eq!(entry.command, "Help");
    assert_eq!(entry.output, fragment_of(Command::Help));

    submit_all(&mut console, &["clear"]);
    assert!(console.history().is_empty());
    assert_eq!(console.recall().all(), ["Help", "clear"]);
}

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(Key::Edit),
        Just(Key::Submit),
        Just(Key::RecallPrev),
        Just(Key::RecallNext),
    ]
}

proptest! {
    #[test]
    fn unknown_input_echoes_raw_text(s in "[a-zA-Z0-9 !?._-]{0,24}") {
        prop_assume!(Command::from_name(&s.trim().to_lowercase()).is_none());
        let mut console = Console::new();
        console.submit(&s);
        let entry = &console.history().entries()[1];
        prop_assert_eq!(&entry.command, &s);
        prop_assert_eq!(
            entry.output.plain_text(),
            format!("Command not found: {s}. Type 'help' for available commands.")
        );
    }

    #[test]
    fn recall_index_stays_in_bounds(keys in prop::collection::vec(arb_key(), 0..60)) {
        let mut console = Console::new();
        let mut submissions = 0;
        for key in keys {
            if key == Key::Submit {
                submissions += 1;
            }
            console.handle(key);
            prop_assert_eq!(console.recall().len(), submissions);
            if let RecallState::Recalling(i) = console.input().state() {
                prop_assert!(i < console.recall().len());
            }
        }
    }
}
