//! Classify command for checking how a log line is read.

use anyhow::Result;
use hud_core::{ClassifiedEvent, classify};

pub fn run(line: &str) -> Result<()> {
    println!("{}", describe(&classify(line)));
    Ok(())
}

fn describe(event: &ClassifiedEvent) -> String {
    match event {
        ClassifiedEvent::HandStart { hand_id: Some(id) } => format!("HandStart #{}", id),
        ClassifiedEvent::HandStart { hand_id: None } => "HandStart".to_string(),
        ClassifiedEvent::HandEnd => "HandEnd".to_string(),
        ClassifiedEvent::StreetAdvance(street) => format!("StreetAdvance {}", street),
        ClassifiedEvent::PlayerAction { player, kind } => {
            format!("PlayerAction {} (id: {}) {}", player.display_name, player.id, kind)
        }
        ClassifiedEvent::Unrecognized => "Unrecognized".to_string(),
    }
}
