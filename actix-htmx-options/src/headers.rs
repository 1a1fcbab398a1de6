//! Wire names of the htmx headers, in the lower-case form they are written with.

/// Headers sent by htmx on every request it issues.
pub mod request {
    pub const HX_REQUEST: &str = "hx-request";
    pub const HX_BOOSTED: &str = "hx-boosted";
    pub const HX_CURRENT_URL: &str = "hx-current-url";
    pub const HX_HISTORY_RESTORE_REQUEST: &str = "hx-history-restore-request";
    pub const HX_PROMPT: &str = "hx-prompt";
    pub const HX_TARGET: &str = "hx-target";
    pub const HX_TRIGGER: &str = "hx-trigger";
    pub const HX_TRIGGER_NAME: &str = "hx-trigger-name";
}

/// Headers htmx reacts to on a response.
pub mod response {
    pub const HX_LOCATION: &str = "hx-location";
    pub const HX_PUSH_URL: &str = "hx-push-url";
    pub const HX_REDIRECT: &str = "hx-redirect";
    pub const HX_REFRESH: &str = "hx-refresh";
    pub const HX_REPLACE_URL: &str = "hx-replace-url";
    pub const HX_RESWAP: &str = "hx-reswap";
    pub const HX_RETARGET: &str = "hx-retarget";
    pub const HX_RESELECT: &str = "hx-reselect";
    pub const HX_TRIGGER: &str = "hx-trigger";
    pub const HX_TRIGGER_AFTER_SETTLE: &str = "hx-trigger-after-settle";
    pub const HX_TRIGGER_AFTER_SWAP: &str = "hx-trigger-after-swap";
}
