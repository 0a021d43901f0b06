//! Menu-driven interactive shell.
//!
//! # Responsibility
//! - Render the action menu and dispatch selections to roster operations.
//! - Surface operation outcomes inline, then return to the menu.
//!
//! # Invariants
//! - An aborted prompt cancels the current action only; aborting at the
//!   menu ends the session.
//! - The shell never touches the store directly; every mutation goes
//!   through the session object.

use crate::prompt::{PromptAbort, Prompter};
use anyhow::Result;
use log::info;
use roster_core::{validate_age, validate_name, Roster, RosterError, UserStore};

const PROMPT_FAILED_MSG: &str = "Prompt failed.";

/// Menu transitions available from the single shell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Display,
    Edit,
    Delete,
    Quit,
}

impl Action {
    const LABELS: [&'static str; 5] = [
        "Add user",
        "Display users",
        "Edit user",
        "Delete user",
        "Quit",
    ];

    fn from_index(index: usize) -> Option<Action> {
        match index {
            0 => Some(Self::Add),
            1 => Some(Self::Display),
            2 => Some(Self::Edit),
            3 => Some(Self::Delete),
            4 => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs the menu loop until Quit or a menu-level prompt abort.
pub fn run<S: UserStore>(mut roster: Roster<S>) -> Result<()> {
    let mut prompter = Prompter::new();

    loop {
        let index = match prompter.select("Select an action", &Action::LABELS) {
            Ok(index) => index,
            Err(PromptAbort) => {
                println!("{PROMPT_FAILED_MSG}");
                return Ok(());
            }
        };
        let action = match Action::from_index(index) {
            Some(action) => action,
            None => continue,
        };

        match action {
            Action::Add => add_user(&mut prompter, &mut roster),
            Action::Display => display_users(&mut roster),
            Action::Edit => edit_user(&mut prompter, &mut roster),
            Action::Delete => delete_user(&mut prompter, &mut roster),
            Action::Quit => {
                println!("Quitting the program.");
                info!("event=session_quit module=shell status=ok");
                return Ok(());
            }
        }
    }
}

fn add_user<S: UserStore>(prompter: &mut Prompter, roster: &mut Roster<S>) {
    let Ok(name) = prompter.read_validated("Enter the name", None, validate_name) else {
        println!("{PROMPT_FAILED_MSG}");
        return;
    };
    let Ok(age) = prompter.read_validated("Enter the age", None, validate_age) else {
        println!("{PROMPT_FAILED_MSG}");
        return;
    };

    match roster.add(&name, &age) {
        Ok(_) => println!("User added successfully."),
        Err(err) => report_failure(err),
    }
}

fn display_users<S: UserStore>(roster: &mut Roster<S>) {
    println!("Users:");
    for user in roster.list() {
        println!("Name: {}, Age: {}", user.name, user.age);
    }
}

fn edit_user<S: UserStore>(prompter: &mut Prompter, roster: &mut Roster<S>) {
    if roster.is_empty() {
        println!("No users to edit.");
        return;
    }

    let names = roster.names();
    let labels: Vec<&str> = names.iter().map(String::as_str).collect();
    let Ok(choice) = prompter.select("Select a user to edit", &labels) else {
        println!("{PROMPT_FAILED_MSG}");
        return;
    };
    let selected = &names[choice];

    // Lookup resolves by first name match, so duplicate names always edit
    // the earliest entry.
    let (current_name, current_age) = match roster.find_by_name(selected) {
        Some(user) => (user.name.clone(), user.age.to_string()),
        None => {
            println!("No matching user found.");
            return;
        }
    };

    let Ok(new_name) =
        prompter.read_validated("Enter the new name", Some(&current_name), validate_name)
    else {
        println!("{PROMPT_FAILED_MSG}");
        return;
    };
    let Ok(new_age) = prompter.read_validated("Enter the new age", Some(&current_age), validate_age)
    else {
        println!("{PROMPT_FAILED_MSG}");
        return;
    };

    match roster.edit(selected, &new_name, &new_age) {
        Ok(id) => println!("User with ID {id} edited successfully."),
        Err(err) => report_failure(err),
    }
}

fn delete_user<S: UserStore>(prompter: &mut Prompter, roster: &mut Roster<S>) {
    if roster.is_empty() {
        println!("No users to delete.");
        return;
    }

    let names = roster.names();
    let labels: Vec<&str> = names.iter().map(String::as_str).collect();
    let Ok(choice) = prompter.select("Select a user to delete", &labels) else {
        println!("{PROMPT_FAILED_MSG}");
        return;
    };
    let selected = &names[choice];

    let confirm_label = format!("Are you sure you want to delete user '{selected}'? (yes/no)");
    let Ok(confirmation) = prompter.read_line(&confirm_label) else {
        println!("{PROMPT_FAILED_MSG}");
        return;
    };
    if !confirmation.eq_ignore_ascii_case("yes") {
        println!("Deletion canceled.");
        return;
    }

    match roster.remove(selected) {
        Ok(removed) => println!(
            "User '{}' with ID {} deleted successfully.",
            removed.name, removed.id
        ),
        Err(err) => report_failure(err),
    }
}

fn report_failure(err: RosterError) {
    match err {
        RosterError::Store(err) => println!("Failed to save data to file: {err}"),
        other => println!("{other}"),
    }
}
