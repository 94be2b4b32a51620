//! Subscription and location selection.
//!
//! Both selectors follow the same protocol: list candidates, pick a
//! default, show a numbered menu, and remember the pick as the account
//! default when none is stored yet.

use crate::account::{AccountManager, Location};
use crate::error::{Result, SkyforgeError};
use crate::ui::Console;

/// Prompt key for the subscription menu.
pub const SUBSCRIPTION_KEY: &str = "subscription";

/// Prompt key for the location menu.
pub const LOCATION_KEY: &str = "location";

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub display_name: String,
    pub id: String,
}

impl Candidate {
    pub fn new(display_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            id: id.into(),
        }
    }
}

/// Menu label for the candidate at zero-based `index`.
pub fn menu_label(index: usize, candidate: &Candidate) -> String {
    format!(
        "{:>2}. {} ({})",
        index + 1,
        candidate.display_name,
        candidate.id
    )
}

/// Show a numbered menu of `candidates` and return the picked id.
///
/// The entry whose id equals `default_id` is preselected.
pub fn select_candidate(
    console: &mut Console<'_>,
    key: &str,
    message: &str,
    candidates: &[Candidate],
    default_id: Option<&str>,
) -> Result<String> {
    let labels: Vec<String> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| menu_label(i, c))
        .collect();
    let default = default_id.and_then(|id| candidates.iter().position(|c| c.id == id));

    let choice = console.select(key, message, &labels, default)?;
    Ok(candidates[choice].id.clone())
}

/// Ask the user to pick a subscription.
///
/// A non-empty `override_id` takes precedence over the account default as
/// the preselected entry.
pub fn prompt_subscription(
    console: &mut Console<'_>,
    account: &mut dyn AccountManager,
    message: &str,
    override_id: Option<&str>,
) -> Result<String> {
    console.check()?;
    let mut spinner = console.start_spinner("Listing subscriptions...");
    let subscriptions = match account.subscriptions() {
        Ok(subs) => {
            spinner.finish_clear();
            subs
        }
        Err(e) => {
            spinner.finish_error("Failed to list subscriptions");
            return Err(e);
        }
    };

    if subscriptions.is_empty() {
        return Err(SkyforgeError::NoCandidates {
            kind: "subscriptions".to_string(),
            remediation: "Add a subscription to your account profile, or check that your \
                          account has access to at least one subscription."
                .to_string(),
        });
    }

    let default_id = match override_id.filter(|id| !id.is_empty()) {
        Some(id) => Some(id.to_string()),
        None => account.default_subscription_id()?,
    };

    let candidates: Vec<Candidate> = subscriptions
        .iter()
        .map(|s| Candidate::new(&s.name, &s.id))
        .collect();
    let picked = select_candidate(
        console,
        SUBSCRIPTION_KEY,
        message,
        &candidates,
        default_id.as_deref(),
    )?;

    if !account.has_default_subscription() {
        if let Err(e) = account.set_default_subscription(&picked) {
            tracing::warn!(error = %e, "failed to save default subscription");
        }
    }

    tracing::info!(subscription = %picked, "subscription selected");
    Ok(picked)
}

/// Ask the user to pick a location in `subscription_id`.
///
/// Only locations accepted by `filter` are offered.
pub fn prompt_location(
    console: &mut Console<'_>,
    account: &mut dyn AccountManager,
    subscription_id: &str,
    message: &str,
    filter: &dyn Fn(&Location) -> bool,
) -> Result<String> {
    console.check()?;
    let mut spinner = console.start_spinner("Listing locations...");
    let locations = match account.locations(subscription_id) {
        Ok(locations) => {
            spinner.finish_clear();
            locations
        }
        Err(e) => {
            spinner.finish_error("Failed to list locations");
            return Err(e);
        }
    };

    let candidates: Vec<Candidate> = locations
        .iter()
        .filter(|l| filter(l))
        .map(|l| Candidate::new(&l.regional_display_name, &l.name))
        .collect();

    if candidates.is_empty() {
        return Err(SkyforgeError::NoCandidates {
            kind: "locations".to_string(),
            remediation: format!(
                "Subscription '{}' has no locations available. \
                 Add locations to your account profile or choose another subscription.",
                subscription_id
            ),
        });
    }

    let default_location = account.default_location()?;
    let picked = select_candidate(
        console,
        LOCATION_KEY,
        message,
        &candidates,
        Some(&default_location),
    )?;

    if !account.has_default_location() {
        if let Err(e) = account.set_default_location(subscription_id, &picked) {
            tracing::warn!(error = %e, "failed to save default location");
        }
    }

    tracing::info!(location = %picked, "location selected");
    Ok(picked)
}
