use super::*;

#[test]
fn sanitize_trims_surrounding_whitespace() {
    assert_eq!(sanitize_message("  hello  "), Some("hello".to_string()));
}

#[test]
fn sanitize_rejects_empty_and_whitespace_only() {
    assert_eq!(sanitize_message(""), None);
    assert_eq!(sanitize_message("   \t\n"), None);
}

#[test]
fn local_message_is_attributed_to_you() {
    let log = Rc::new(ChatLog::default()).reduce(ChatAction::Local {
        text: "hello".to_string(),
    });
    assert_eq!(log.messages.len(), 1);
    assert_eq!(log.messages[0].author, "You");
    assert_eq!(log.messages[0].text, "hello");
}

#[test]
fn peer_reply_echoes_after_local_message() {
    let log = Rc::new(ChatLog::default())
        .reduce(ChatAction::Local {
            text: "hi".to_string(),
        })
        .reduce(ChatAction::Peer {
            author: "Alice",
            text: "hi".to_string(),
        });
    assert_eq!(log.messages.len(), 2);
    assert_eq!(log.messages[0].author, "You");
    assert_eq!(log.messages[1].author, "Alice");
    assert_eq!(log.messages[1].text, "Response to \"hi\"");
}

#[test]
fn roster_is_exactly_three_distinct_users() {
    assert_eq!(ROSTER.len(), 3);
    let mut ids: Vec<u32> = ROSTER.iter().map(|u| u.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn pick_peer_covers_roster_bounds() {
    assert_eq!(pick_peer(0.0).id, ROSTER[0].id);
    assert_eq!(pick_peer(0.5).id, ROSTER[1].id);
    assert_eq!(pick_peer(0.99).id, ROSTER[2].id);
    // Clamp if a sample ever lands exactly on 1.0.
    assert_eq!(pick_peer(1.0).id, ROSTER[2].id);
}
