//! Deployment target selection.
//!
//! [`ensure_env`] guarantees an environment knows where to deploy before
//! anything is provisioned, asking for a subscription and a location only
//! when they are missing.

pub mod ensure;
pub mod selector;

pub use ensure::{ensure_env, EnvOverrides, SUBSCRIPTION_OVERRIDE_VAR};
pub use selector::{
    menu_label, prompt_location, prompt_subscription, select_candidate, Candidate, LOCATION_KEY,
    SUBSCRIPTION_KEY,
};
