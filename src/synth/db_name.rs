//! Database name validation.
//!
//! Names are never rewritten. A name that looks unusual is shown back to
//! the user with a warning and needs an explicit yes to be kept.

use regex::Regex;
use std::sync::LazyLock;

use crate::detection::DatabaseDep;
use crate::error::Result;
use crate::ui::Console;

/// Matches names that are likely accepted by every database server.
static WELL_FORMED_DB_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\-_0-9]*$").unwrap());

const DB_NAME_HELP: &str = "Hint: App database name\n\n\
    Name of the database that the app connects to. \
    This database will be created when the environment is provisioned.\n\
    You may be able to skip this step by hitting enter, in which case the database will not be created.";

/// Verdict on a proposed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    /// Letters, digits, `-` and `_` only (or empty).
    WellFormed,
    /// Contains whitespace.
    Whitespace,
    /// Contains characters outside the well-formed set.
    SpecialCharacters,
}

impl NameCheck {
    /// Inspect a name without prompting.
    pub fn of(name: &str) -> Self {
        if name.chars().any(char::is_whitespace) {
            Self::Whitespace
        } else if WELL_FORMED_DB_NAME.is_match(name) {
            Self::WellFormed
        } else {
            Self::SpecialCharacters
        }
    }
}

/// Decide whether `name` may be used for `subject`.
///
/// Well-formed names are accepted without prompting. Anything else produces
/// a warning and one confirmation; the answer is returned as-is.
pub fn validate_name(
    console: &mut Console<'_>,
    confirm_key: &str,
    subject: &str,
    name: &str,
) -> Result<bool> {
    let warning = match NameCheck::of(name) {
        NameCheck::WellFormed => return Ok(true),
        NameCheck::Whitespace => format!(
            "{} contains whitespace. This might not be allowed by the database server.",
            subject
        ),
        NameCheck::SpecialCharacters => format!(
            "{} contains special characters. This might not be allowed by the database server.",
            subject
        ),
    };

    console.warning(&warning);
    console.confirm(
        confirm_key,
        &format!("Continue with name '{}'?", name),
        false,
    )
}

/// Prompt key for a database's name.
pub fn name_key(db: DatabaseDep) -> String {
    format!("db_name:{}", db.id())
}

/// Prompt key for confirming an unusual database name.
pub fn confirm_key(db: DatabaseDep) -> String {
    format!("db_name_confirm:{}", db.id())
}

/// Ask for a database name until the user accepts one.
///
/// Each declined attempt starts over with a fresh prompt. Empty names pass
/// through; rejecting them is up to the caller.
pub fn prompt_db_name(console: &mut Console<'_>, db: DatabaseDep) -> Result<String> {
    loop {
        let name = console.input(
            &name_key(db),
            &format!("Input the name of the app database ({})", db.display()),
            Some(DB_NAME_HELP),
        )?;

        if validate_name(console, &confirm_key(db), "Database name", &name)? {
            return Ok(name);
        }
        if !console.is_interactive() {
            return Err(Console::rejection(
                &confirm_key(db),
                &format!("Database name '{}' was not confirmed", name),
            ));
        }
        tracing::debug!(database = db.display(), "database name declined, asking again");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancellationToken;
    use crate::ui::MockUI;

    #[test]
    fn well_formed_names() {
        for name in ["", "tododb", "app_db", "app-db-2", "ABC"] {
            assert_eq!(NameCheck::of(name), NameCheck::WellFormed, "{name:?}");
        }
    }

    #[test]
    fn whitespace_names() {
        assert_eq!(NameCheck::of("my db"), NameCheck::Whitespace);
        assert_eq!(NameCheck::of("db\t"), NameCheck::Whitespace);
    }

    #[test]
    fn special_character_names() {
        assert_eq!(NameCheck::of("app.db"), NameCheck::SpecialCharacters);
        assert_eq!(NameCheck::of("db$"), NameCheck::SpecialCharacters);
        assert_eq!(NameCheck::of("données"), NameCheck::SpecialCharacters);
    }

    #[test]
    fn well_formed_name_needs_no_confirmation() {
        let mut ui = MockUI::new();
        let mut console = Console::new(&mut ui, CancellationToken::new());

        assert!(validate_name(&mut console, "ok", "Database name", "tododb").unwrap());
        assert!(ui.prompts_shown().is_empty());
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn odd_name_needs_exactly_one_confirmation() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("ok", "yes");
        let mut console = Console::new(&mut ui, CancellationToken::new());

        assert!(validate_name(&mut console, "ok", "Database name", "my db").unwrap());
        assert_eq!(ui.prompt_count("ok"), 1);
        assert!(ui.has_warning("contains whitespace"));
        assert_eq!(ui.questions_shown(), &["Continue with name 'my db'?"]);
    }

    #[test]
    fn special_characters_warn_differently() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("ok", "no");
        let mut console = Console::new(&mut ui, CancellationToken::new());

        assert!(!validate_name(&mut console, "ok", "Database name", "app.db").unwrap());
        assert!(ui.has_warning("contains special characters"));
    }

    #[test]
    fn declined_name_is_asked_again_from_scratch() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("db_name:postgres", vec!["my db", "my.db", "mydb"]);
        ui.queue_prompt_responses("db_name_confirm:postgres", vec!["no", "no"]);
        let mut console = Console::new(&mut ui, CancellationToken::new());

        let name = prompt_db_name(&mut console, DatabaseDep::Postgres).unwrap();
        assert_eq!(name, "mydb");
        assert_eq!(ui.prompt_count("db_name:postgres"), 3);
        assert_eq!(ui.prompt_count("db_name_confirm:postgres"), 2);
    }

    #[test]
    fn accepted_odd_name_is_kept_verbatim() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("db_name:mongo", " todo db ");
        ui.set_prompt_response("db_name_confirm:mongo", "yes");
        let mut console = Console::new(&mut ui, CancellationToken::new());

        let name = prompt_db_name(&mut console, DatabaseDep::Mongo).unwrap();
        assert_eq!(name, " todo db ");
    }

    #[test]
    fn prompt_mentions_database_kind() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("db_name:mongo", "tododb");
        let mut console = Console::new(&mut ui, CancellationToken::new());

        prompt_db_name(&mut console, DatabaseDep::Mongo).unwrap();
        assert_eq!(
            ui.questions_shown(),
            &["Input the name of the app database (MongoDB)"]
        );
    }

    #[test]
    fn headless_decline_fails_instead_of_asking_again() {
        let mut ui = MockUI::new();
        ui.set_interactive(false);
        ui.set_prompt_response("db_name:mongo", "my db");
        ui.set_prompt_response("db_name_confirm:mongo", "no");
        let mut console = Console::new(&mut ui, CancellationToken::new());

        let err = prompt_db_name(&mut console, DatabaseDep::Mongo).unwrap_err();
        assert!(err.to_string().contains("SKYFORGE_PROMPT_DB_NAME_CONFIRM_MONGO"));
        assert_eq!(ui.prompt_count("db_name:mongo"), 1);
        assert_eq!(ui.prompt_count("db_name_confirm:mongo"), 1);
    }

    #[test]
    fn headless_confirmed_name_is_kept() {
        let mut ui = MockUI::new();
        ui.set_interactive(false);
        ui.set_prompt_response("db_name:postgres", "app.db");
        ui.set_prompt_response("db_name_confirm:postgres", "yes");
        let mut console = Console::new(&mut ui, CancellationToken::new());

        assert_eq!(prompt_db_name(&mut console, DatabaseDep::Postgres).unwrap(), "app.db");
    }
}
