use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::{ActionKind, ClassifiedEvent, PlayerIdentity, Street};

// Hand boundaries must match the whole line: optional dashes, the marker, an
// optional hand number and parenthesized details. Chat that merely starts
// with "starting hand" or "hand #3" never matches.
static HAND_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:-+\s*)?(?:starting\s+hand(?:\s*#\s*(?P<n>\d+))?(?:\s*\([^)]*\))*|hand\s*#\s*(?P<m>\d+))\s*-*\s*$",
    )
    .expect("hand start pattern")
});

static HAND_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:-+\s*)?ending\s+hand(?:\s*#\s*\d+)?\s*-*\s*$").expect("hand end pattern")
});

// Street markers are anchored at the start of the line.
static STREET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:-+\s*)?(?P<street>flop|turn|river)\b\s*(?:\([^)]*\))?\s*:")
        .expect("street pattern")
});

// `"Name @ id" tail`, `"Name"@id tail` or `"Name" tail`
static QUOTED_PLAYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^"(?:(?P<qname>[^"]+?)\s@\s(?P<qid>[A-Za-z0-9_\-]+)|(?P<name>[^"]+))"(?:\s*@\s*(?P<id>[A-Za-z0-9_\-]+))?\s+(?P<tail>\S.*)$"#,
    )
    .expect("quoted player pattern")
});

// `Name tail` with no quoting; the name may not contain quotes or a colon so
// chat prefixes like `Alice: ...` fall through.
static FREE_TEXT_PLAYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?P<name>[^\s":]+)\s+(?P<tail>\S.*)$"#).expect("free text player pattern")
});

static POST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:posts\b|(?:small|big)\s+blind\b|straddles\b|antes\b)").expect("post pattern")
});

static RAISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^raises\b").expect("raise pattern"));

static BET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^bets\b").expect("bet pattern"));

static CALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^calls\b").expect("call pattern"));

static ALL_IN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:goes|go|is|went)\s+all[\s\-]?in\b|all[\s\-]in\b|shoves\b)")
        .expect("all-in pattern")
});

static CHECK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^checks\b").expect("check pattern"));

static FOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^folds\b").expect("fold pattern"));

// Pot award; used as the hand end for feeds without an explicit marker.
static POT_AWARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:collected|collects|wins|won)\s+(?:\$?\d|(?:the\s+|main\s+|side\s+)?pot\b)")
        .expect("pot award pattern")
});

/// What a player-prefixed tail says.
enum Tail {
    Action(ActionKind),
    PotAward,
}

/// Classify one raw feed line.
///
/// Total and side-effect free: any line that does not match a known shape is
/// `Unrecognized`. Hand boundaries are checked first, then street markers,
/// then player lines.
pub fn classify(line: &str) -> ClassifiedEvent {
    let line = line.trim();
    if line.is_empty() {
        return ClassifiedEvent::Unrecognized;
    }

    if let Some(caps) = HAND_START.captures(line) {
        let hand_id = caps
            .name("n")
            .or_else(|| caps.name("m"))
            .and_then(|m| m.as_str().parse().ok());
        return ClassifiedEvent::HandStart { hand_id };
    }

    if HAND_END.is_match(line) {
        return ClassifiedEvent::HandEnd;
    }

    if let Some(street) = STREET
        .captures(line)
        .and_then(|caps| caps.name("street"))
        .and_then(|m| Street::from_str(m.as_str()).ok())
    {
        return ClassifiedEvent::StreetAdvance(street);
    }

    let event = classify_player_line(line).unwrap_or(ClassifiedEvent::Unrecognized);
    if event == ClassifiedEvent::Unrecognized {
        trace!("Unrecognized line: {}", line);
    }
    event
}

fn classify_player_line(line: &str) -> Option<ClassifiedEvent> {
    let (player, tail) = split_player(line)?;
    match classify_tail(tail)? {
        Tail::Action(kind) => Some(ClassifiedEvent::PlayerAction { player, kind }),
        Tail::PotAward => Some(ClassifiedEvent::HandEnd),
    }
}

/// Split a line into the acting player and the text after the name.
///
/// A quoted line that does not fit the quoted shapes is not retried as free
/// text; a half-matched identity is treated as ambiguous.
fn split_player(line: &str) -> Option<(PlayerIdentity, &str)> {
    if line.starts_with('"') {
        let caps = QUOTED_PLAYER.captures(line)?;
        let tail = caps.name("tail")?.as_str();

        let player = if let (Some(name), Some(id)) = (caps.name("qname"), caps.name("qid")) {
            PlayerIdentity::new(id.as_str(), name.as_str().trim())
        } else {
            let name = caps.name("name")?.as_str().trim();
            if name.is_empty() {
                return None;
            }
            match caps.name("id") {
                Some(id) => PlayerIdentity::new(id.as_str(), name),
                None => PlayerIdentity::from_name(name),
            }
        };
        return Some((player, tail));
    }

    let caps = FREE_TEXT_PLAYER.captures(line)?;
    let name = caps.name("name")?.as_str();
    let tail = caps.name("tail")?.as_str();
    Some((PlayerIdentity::from_name(name), tail))
}

fn classify_tail(tail: &str) -> Option<Tail> {
    // Posts first: "posts a big blind" must never read as a bet.
    let kind = if POST.is_match(tail) {
        ActionKind::Post
    } else if RAISE.is_match(tail) {
        ActionKind::Raise
    } else if BET.is_match(tail) {
        ActionKind::Bet
    } else if CALL.is_match(tail) {
        ActionKind::Call
    } else if ALL_IN.is_match(tail) {
        ActionKind::AllIn
    } else if CHECK.is_match(tail) {
        ActionKind::Check
    } else if FOLD.is_match(tail) {
        ActionKind::Fold
    } else if POT_AWARD.is_match(tail) {
        return Some(Tail::PotAward);
    } else {
        return None;
    };
    Some(Tail::Action(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(line: &str) -> Option<(PlayerIdentity, ActionKind)> {
        match classify(line) {
            ClassifiedEvent::PlayerAction { player, kind } => Some((player, kind)),
            _ => None,
        }
    }

    #[test]
    fn test_hand_start_markers() {
        assert_eq!(
            classify("starting hand"),
            ClassifiedEvent::HandStart { hand_id: None }
        );
        assert_eq!(
            classify("-- starting hand #42 (id: x7kq2) (No Limit Texas Hold'em) (dealer: \"Alice @ p1\") --"),
            ClassifiedEvent::HandStart { hand_id: Some(42) }
        );
        assert_eq!(
            classify("Hand #7"),
            ClassifiedEvent::HandStart { hand_id: Some(7) }
        );
    }

    #[test]
    fn test_hand_end_markers() {
        assert_eq!(classify("ending hand"), ClassifiedEvent::HandEnd);
        assert_eq!(classify("-- ending hand #42 --"), ClassifiedEvent::HandEnd);
    }

    #[test]
    fn test_pot_award_ends_hand() {
        assert_eq!(
            classify("\"Alice\"@p1 collected 120 from pot"),
            ClassifiedEvent::HandEnd
        );
        assert_eq!(classify("bob wins 40"), ClassifiedEvent::HandEnd);
        assert_eq!(classify("bob wins the pot"), ClassifiedEvent::HandEnd);
    }

    #[test]
    fn test_chat_mentioning_hand_is_not_a_boundary() {
        assert_eq!(
            classify("\"Bob\"@p2: nice hand #3, starting hand was great"),
            ClassifiedEvent::Unrecognized
        );
        assert_eq!(
            classify("what a hand that was"),
            ClassifiedEvent::Unrecognized
        );
        assert_eq!(
            classify("bob: he wins everything"),
            ClassifiedEvent::Unrecognized
        );
        for line in [
            "starting hand ranges are overrated lol",
            "hand #3 was nuts",
            "ending hand early guys, gg",
            "starting hand #4 and already tilted",
        ] {
            assert_eq!(classify(line), ClassifiedEvent::Unrecognized, "{:?}", line);
        }
    }

    #[test]
    fn test_streets() {
        assert_eq!(
            classify("flop: 2c 7d 9h"),
            ClassifiedEvent::StreetAdvance(Street::Flop)
        );
        assert_eq!(
            classify("Flop:  [8♦, 5♠, 2♣]"),
            ClassifiedEvent::StreetAdvance(Street::Flop)
        );
        assert_eq!(
            classify("Turn: 8♦, 5♠, 2♣ [K♥]"),
            ClassifiedEvent::StreetAdvance(Street::Turn)
        );
        assert_eq!(
            classify("River (second run): 8♦, 5♠, 2♣, K♥ [3♦]"),
            ClassifiedEvent::StreetAdvance(Street::River)
        );
    }

    #[test]
    fn test_stable_id_shapes() {
        let (player, kind) = action("\"Alice\"@p1 calls 10").unwrap();
        assert_eq!(player, PlayerIdentity::new("p1", "Alice"));
        assert_eq!(kind, ActionKind::Call);

        let (player, kind) = action("\"Bob @ Xk29-a\" raises to 30").unwrap();
        assert_eq!(player, PlayerIdentity::new("Xk29-a", "Bob"));
        assert_eq!(kind, ActionKind::Raise);
    }

    #[test]
    fn test_display_name_with_spaces() {
        let (player, _) = action("\"Big Al\"@p9 folds").unwrap();
        assert_eq!(player.id, "p9");
        assert_eq!(player.display_name, "Big Al");
    }

    #[test]
    fn test_quoted_name_without_id() {
        let (player, kind) = action("\"Carol\" bets 20").unwrap();
        assert_eq!(player, PlayerIdentity::from_name("Carol"));
        assert_eq!(kind, ActionKind::Bet);
    }

    #[test]
    fn test_free_text_leading_token() {
        let (player, kind) = action("dave raises 60").unwrap();
        assert_eq!(player, PlayerIdentity::from_name("dave"));
        assert_eq!(kind, ActionKind::Raise);
    }

    #[test]
    fn test_all_action_kinds() {
        let cases = [
            ("\"A\"@a calls 10", ActionKind::Call),
            ("\"A\"@a raises to 30", ActionKind::Raise),
            ("\"A\"@a bets 15", ActionKind::Bet),
            ("\"A\"@a goes all in", ActionKind::AllIn),
            ("\"A\"@a checks", ActionKind::Check),
            ("\"A\"@a folds", ActionKind::Fold),
            ("\"A\"@a posts a small blind of 1", ActionKind::Post),
        ];
        for (line, expected) in cases {
            assert_eq!(action(line).map(|(_, k)| k), Some(expected), "{}", line);
        }
    }

    #[test]
    fn test_all_in_with_explicit_verb() {
        assert_eq!(
            action("\"A\"@a raises to 500 and go all in").map(|(_, k)| k),
            Some(ActionKind::Raise)
        );
        assert_eq!(
            action("\"A\"@a calls 500 and go all in").map(|(_, k)| k),
            Some(ActionKind::Call)
        );
    }

    #[test]
    fn test_blind_posts_are_not_bets() {
        for line in [
            "\"Bob\"@p2 big blind of 2",
            "\"Bob\"@p2 small blind of 1",
            "\"Bob @ p2\" posts a big blind of 20",
            "\"Bob @ p2\" posts a missing small blind of 10",
            "\"Bob @ p2\" posts a straddle of 40",
        ] {
            assert_eq!(action(line).map(|(_, k)| k), Some(ActionKind::Post), "{}", line);
        }
    }

    #[test]
    fn test_unrecognized_lines() {
        for line in [
            "",
            "   ",
            "Uncalled bet of 20 returned to \"Alice @ p1\"",
            "The player \"Eve @ p5\" joined the game with a stack of 1000.",
            "\"Alice\"@p1 shows a 7♥, 8♦.",
            "\"Alice\"@p1: raises lol",
            "Your hand is 7♥, 8♦",
            "\"unterminated calls 10",
            "\"\" calls 10",
        ] {
            assert_eq!(classify(line), ClassifiedEvent::Unrecognized, "{:?}", line);
        }
    }

    #[test]
    fn test_boundary_wins_over_action() {
        assert_eq!(
            classify("-- starting hand #9 (dealer: \"Bob @ p2\" raises) --"),
            ClassifiedEvent::HandStart { hand_id: Some(9) }
        );
    }

    #[test]
    fn test_street_wins_over_action() {
        // "flop" as a leading token would otherwise read as a free-text name
        assert_eq!(
            classify("flop: calls everywhere"),
            ClassifiedEvent::StreetAdvance(Street::Flop)
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify("STARTING HAND #3"),
            ClassifiedEvent::HandStart { hand_id: Some(3) }
        );
        assert_eq!(
            action("\"A\"@a RAISES to 9").map(|(_, k)| k),
            Some(ActionKind::Raise)
        );
    }
}
