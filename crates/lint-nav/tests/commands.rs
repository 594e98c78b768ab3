use lint_nav::{
    BufferId, DiagnosticEntry, DiagnosticStore, Direction, LintCommandError, LintCommands,
    LintSettings, LintSnapshot, MarkSet, NavigationError, PanelChoice, Region, RopeText, Severity,
    SnapshotTable, select_line,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const SOURCE: &str = "import os\n    x = undefined_name\nprint(  y )\n";

fn publish_sample(table: &SnapshotTable, buffer: BufferId) {
    // "undefined_name" is at line 1, column 8 (offset 18); "y" at line 2, column 8 (offset 41).
    let generation = table.begin_pass(buffer);
    let diagnostics = vec![
        DiagnosticEntry::new(2, 8, Severity::Warning, "undefined name 'y'"),
        DiagnosticEntry::new(1, 8, Severity::Error, "undefined name 'undefined_name'"),
        DiagnosticEntry::new(0, 0, Severity::Warning, "'os' imported but unused"),
    ];
    let marks = MarkSet::from_layers(
        vec![Region::new(0, 9), Region::new(41, 42)],
        vec![Region::new(18, 32)],
    )
    .unwrap();
    table.publish(
        buffer,
        LintSnapshot::new(generation, diagnostics.into(), marks),
    );
}

fn setup(settings: LintSettings) -> (LintCommands, BufferId) {
    let table = Arc::new(SnapshotTable::new());
    let buffer = BufferId::new(42);
    publish_sample(&table, buffer);
    (LintCommands::new(table, settings), buffer)
}

#[test]
fn test_commands_disabled_without_findings() {
    let table = Arc::new(SnapshotTable::new());
    let commands = LintCommands::new(Arc::clone(&table), LintSettings::default());
    let buffer = BufferId::new(1);
    assert!(!commands.has_errors(buffer));

    let err = commands
        .goto_error(buffer, &[Region::caret(0)], Direction::Next)
        .unwrap_err();
    assert_eq!(err, LintCommandError::NoLintErrors);
    assert_eq!(err.to_string(), "No lint errors.");

    // A pass with zero findings keeps the commands disabled.
    let generation = table.begin_pass(buffer);
    table.publish(
        buffer,
        LintSnapshot::new(generation, DiagnosticStore::new(), MarkSet::new()),
    );
    assert!(!commands.has_errors(buffer));
    let text = RopeText::from_text("");
    assert!(matches!(
        commands.show_all_errors(buffer, &text),
        Err(LintCommandError::NoLintErrors)
    ));
}

#[test]
fn test_goto_cycles_with_wrap() {
    let (commands, buffer) = setup(LintSettings::default());
    assert!(commands.has_errors(buffer));

    let mut selection = vec![Region::caret(0)];
    let mut visited = Vec::new();
    for _ in 0..4 {
        let nav = commands
            .goto_error(buffer, &selection, Direction::Next)
            .unwrap();
        visited.push(nav.selection[0]);
        selection = nav.selection;
    }
    assert_eq!(
        visited,
        vec![
            Region::new(0, 9),
            Region::new(18, 32),
            Region::new(41, 42),
            Region::new(0, 9),
        ]
    );
}

#[test]
fn test_goto_without_wrap_restores_selection() {
    let (commands, buffer) = setup(LintSettings { wrap_find: false });

    let selection = vec![Region::new(0, 9)];
    let err = commands
        .goto_error(buffer, &selection, Direction::Previous)
        .unwrap_err();
    assert_eq!(
        err,
        LintCommandError::Navigation(NavigationError::NoMoreDiagnostics {
            direction: Direction::Previous,
            selection: selection.clone(),
        })
    );
    assert_eq!(err.to_string(), "No previous lint error.");
}

#[test]
fn test_settings_can_be_swapped() {
    let (mut commands, buffer) = setup(LintSettings { wrap_find: false });
    let at_end = vec![Region::caret(45)];
    assert!(
        commands
            .goto_error(buffer, &at_end, Direction::Next)
            .is_err()
    );

    commands.set_settings(LintSettings::from_json_str(r#"{"wrap_find": true}"#).unwrap());
    assert!(commands.settings().wrap_find);
    let nav = commands
        .goto_error(buffer, &at_end, Direction::Next)
        .unwrap();
    assert_eq!(nav.selection, vec![Region::new(0, 9)]);
}

#[test]
fn test_show_all_errors_and_pick() {
    let (commands, buffer) = setup(LintSettings::default());
    let text = RopeText::from_text(SOURCE);

    let listing = commands.show_all_errors(buffer, &text).unwrap();
    assert_eq!(
        listing.items(),
        vec![
            (
                "1  'os' imported but unused".to_string(),
                "➜import os".to_string()
            ),
            (
                "2  undefined name 'undefined_name'".to_string(),
                "x = ➜undefined_name".to_string()
            ),
            (
                "3  undefined name 'y'".to_string(),
                "print(  ➜y )".to_string()
            ),
        ]
    );

    let nav = listing.select(PanelChoice::Picked(1)).unwrap().unwrap();
    assert_eq!(nav.selection, vec![Region::new(18, 32)]);
    assert_eq!(nav.center, Region::new(18, 32));

    assert_eq!(listing.select(PanelChoice::Cancelled).unwrap(), None);
    assert!(matches!(
        listing.select(PanelChoice::Picked(9)),
        Err(LintCommandError::Panel(_))
    ));
}

#[test]
fn test_listing_stays_on_its_snapshot() {
    let (commands, buffer) = setup(LintSettings::default());
    let text = RopeText::from_text(SOURCE);
    let listing = commands.show_all_errors(buffer, &text).unwrap();

    // A newer pass with no marks is published while the panel is open.
    let table = commands.table();
    let generation = table.begin_pass(buffer);
    table.publish(
        buffer,
        LintSnapshot::new(
            generation,
            vec![DiagnosticEntry::new(0, 0, Severity::Error, "new")].into(),
            MarkSet::new(),
        ),
    );

    let nav = listing.select(PanelChoice::Picked(0)).unwrap().unwrap();
    assert_eq!(nav.selection, vec![Region::new(0, 9)]);
    assert!(listing.snapshot().generation() < generation);
}

#[test]
fn test_report_over_buffers() {
    let (commands, buffer) = setup(LintSettings::default());
    let missing = BufferId::new(7);

    let report = commands.report(&[(buffer, Some("/project/app.py")), (missing, Some("b.py"))]);
    assert_eq!(report.section_count(), 1);
    assert_eq!(
        report.as_str(),
        "\napp.py:\n  1: 'os' imported but unused\n  2: undefined name 'undefined_name'\n  3: undefined name 'y'\n"
    );
}

#[test]
fn test_select_line() {
    let text = RopeText::from_text(SOURCE);
    let nav = select_line(&text, 1);
    assert_eq!(nav.selection, vec![Region::new(10, 33)]);
    assert_eq!(nav.center, Region::new(10, 33));
}
