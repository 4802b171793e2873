//! `users` and `channels` listing specs

use crate::prelude::*;

#[test]
fn users_lists_chain_order() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project.herald().args(&["users"]).passes().stdout_eq(
        "alice  email -> sms\n\
         anna   sms -> email\n\
         bob    console\n\
         carol  (no channels)\n\
         dave   invalid: unknown channel: fax\n\
         erin   whatsapp -> email\n",
    );
}

#[test]
fn users_json_has_chain_or_error() {
    let project = Project::with_config(FALLBACK_CONFIG);
    let run = project.herald().args(&["users", "-o", "json"]).passes();
    let users = run.json();

    assert_eq!(users[0]["name"], "alice");
    assert_eq!(users[0]["chain"], serde_json::json!(["email", "sms"]));
    assert_eq!(users[3]["chain"], serde_json::json!([]));
    assert_eq!(users[4]["error"], "unknown channel: fax");
}

#[test]
fn users_without_config_says_so() {
    Project::empty()
        .herald()
        .args(&["users"])
        .passes()
        .stdout_eq("No users configured\n");
}

#[test]
fn channels_lists_senders() {
    let project = Project::with_config(FALLBACK_CONFIG);
    project.herald().args(&["channels"]).passes().stdout_eq(
        "email     simulated (success rate 0)\n\
         sms       simulated (success rate 1)\n\
         console   console output\n\
         phone     simulated (success rate 1)\n\
         whatsapp  simulated (success rate 0)\n\
         desktop   desktop notification\n",
    );
}

#[test]
fn channels_default_to_half_success_rate() {
    let project = Project::empty();
    let run = project.herald().args(&["channels", "-o", "json"]).passes();
    let channels = run.json();

    assert_eq!(channels.as_array().unwrap().len(), 6);
    assert_eq!(channels[0]["channel"], "email");
    assert_eq!(channels[0]["sender"], "simulated (success rate 0.5)");
}

#[test]
fn channels_lists_muted_channels() {
    let project = Project::with_config(&format!(
        "{FALLBACK_CONFIG}\n[channels.desktop]\nmuted = true\n"
    ));
    project
        .herald()
        .args(&["channels"])
        .passes()
        .stdout_has("desktop   muted\n")
        .stdout_lacks("desktop notification");
}
