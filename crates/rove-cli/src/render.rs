//! Text rendering of turns and outcomes.

use colored::Colorize;
use rove_engine::{BlockReason, Outcome, Rejection, RoomView, Turn, Verb};

/// Render a turn. Idle turns print nothing.
pub fn turn(turn: &Turn) -> Option<String> {
    match turn {
        Turn::Idle => None,
        Turn::Applied(outcome) => Some(self::outcome(outcome)),
        Turn::Rejected(rejection) => Some(self::rejection(rejection)),
    }
}

/// Describe a room: title, description, items, and exits.
pub fn room(view: &RoomView) -> String {
    let mut output = format!("> {}\n\n{}\n", view.name.bold(), view.description);

    if !view.items.is_empty() {
        output.push_str(&format!("\nItems: {}\n", view.items.join(", ")));
    }

    output.push_str("\nExits:");
    for exit in &view.exits {
        output.push(' ');
        output.push_str(&exit.cyan().to_string());
    }
    output.push('\n');

    output
}

/// Render the result of an applied action.
pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Moved { direction, room } => {
            format!("You go {direction}.\n\n{}", self::room(room))
        }
        Outcome::Took(item) => format!("You pick up the {item}."),
        Outcome::Dropped(item) => format!("You drop the {item}."),
        Outcome::Blocked { direction, reason } => blocked(direction, reason).yellow().to_string(),
        Outcome::Inventory(items) => inventory(items),
        Outcome::RoomView(view) => self::room(view),
        Outcome::Help => help(),
        Outcome::Quit => "Goodbye!".to_string(),
    }
}

fn blocked(direction: &str, reason: &BlockReason) -> String {
    match reason {
        BlockReason::MissingItem(_) => reason.to_string(),
        BlockReason::InsufficientScore { required, current } => format!(
            "You are not authorized to go {direction} as you have insufficient points \
             ({current} of {required})."
        ),
    }
}

fn rejection(rejection: &Rejection) -> String {
    match rejection {
        Rejection::Ambiguous(choices) => format!("Did you mean {}?", choice_list(choices)),
        Rejection::Unresolvable(reason) | Rejection::Malformed(reason) => reason.clone(),
    }
}

fn inventory(items: &[String]) -> String {
    if items.is_empty() {
        return "You're not carrying anything.".to_string();
    }

    let mut output = "Inventory:".to_string();
    for item in items {
        output.push_str(&format!("\n  {item}"));
    }
    output
}

/// "a", "a or b", "a, b or c".
fn choice_list(choices: &[String]) -> String {
    match choices {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

fn help() -> String {
    let mut output = "You can run the following commands:".to_string();
    for verb in Verb::ALL {
        let usage = match verb {
            Verb::Go => "go <direction>   (or just north, n, ne, ...)",
            Verb::Take => "get <item>",
            Verb::Drop => "drop <item>",
            Verb::Look => "look",
            Verb::Inventory => "inventory",
            Verb::Help => "help",
            Verb::Quit => "quit",
        };
        output.push_str(&format!("\n  {usage}"));
    }
    output
}
