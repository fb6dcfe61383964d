use test_log::test;

use super::fixtures::TEAM_CALENDAR_WIRE;
use crate::rfc::ical::build::{fold, vcalendar, vevent};
use crate::rfc::ical::core::{DateTimeInput, EventRecord};

fn standup() -> EventRecord {
    EventRecord {
        location: Some("Room 4".to_string()),
        summary: Some("Daily standup; notes".to_string()),
        ..EventRecord::new(
            DateTimeInput::full(2024, 1, 15, 9, 30, 0, true),
            "standup-2024-01-15@example.com",
            DateTimeInput::full(2024, 1, 15, 14, 0, 0, "America/New_York"),
        )
    }
}

fn retro() -> EventRecord {
    EventRecord {
        dtend: Some(DateTimeInput::full(2024, 1, 19, 17, 0, 0, true)),
        summary: Some("Retro".to_string()),
        ..EventRecord::new(
            DateTimeInput::full(2024, 1, 15, 9, 30, 0, true),
            "retro-2024-01-19@example.com",
            DateTimeInput::full(2024, 1, 19, 16, 0, 0, true),
        )
    }
}

fn render(name: &str, events: &[EventRecord]) -> String {
    let body: Vec<String> = events
        .iter()
        .map(|event| vevent(event).expect("event renders"))
        .collect();
    fold(&vcalendar(name, &body, None).join("\n"))
}

#[test]
fn renders_full_document() {
    let wire = render("Team", &[standup(), retro()]);
    assert_eq!(wire, TEAM_CALENDAR_WIRE);
}

#[test]
fn long_lines_fold_with_tab_continuations() {
    let mut event = standup();
    event.description = Some("x".repeat(100));
    let body = vec![vevent(&event).expect("event renders")];
    let blocks = vcalendar("Team", &body, None);
    let wire = fold(&blocks.join("\n"));

    let folded_description = format!("DESCRIPTION:{}\r\n\t{}", "x".repeat(63), "x".repeat(37));
    assert!(wire.contains(&folded_description));

    // Tab continuations sit on top of the 75-octet segment cap.
    for physical in wire.split("\r\n") {
        assert!(physical.len() <= 76, "physical line too long: {physical:?}");
    }

    // Unfolding recovers the logical lines exactly.
    let unfolded = wire.replace("\r\n\t", "");
    assert_eq!(unfolded, blocks.join("\n").replace('\n', "\r\n"));
}

#[test]
fn empty_body_blocks_leave_no_blank_lines() {
    let body = vec![
        vevent(&standup()).expect("event renders"),
        String::new(),
        vevent(&retro()).expect("event renders"),
    ];
    let wire = fold(&vcalendar("Team", &body, None).join("\n"));
    assert_eq!(wire, TEAM_CALENDAR_WIRE);
}
