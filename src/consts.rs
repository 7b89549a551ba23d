pub mod store_const {
    pub const INVITATION_TABLE: &str = "invitations";
    pub const SALES_REP_TABLE: &str = "sales_reps";
    pub const COHORT_TABLE: &str = "cohorts";
}

pub mod report_const {
    // ? 2026 engagement goal
    pub const GOAL_TARGET: u32 = 200;
    pub const GOAL_YEAR: &str = "2026";

    pub const LEADERBOARD_SIZE: usize = 10;

    // ! percentages, not ratios
    pub const GOOD_FILL: f64 = 80.0;
    pub const WARN_FILL: f64 = 50.0;
}

pub mod env_const {
    pub const BIND: &str = "TRACKER_BIND";
    pub const STORE: &str = "TRACKER_STORE";
    pub const SEED_FILE: &str = "TRACKER_SEED_FILE";
    pub const LOG_JSON: &str = "TRACKER_LOG_JSON";
    pub const SURREAL_URL: &str = "SURREAL_URL";
    pub const SURREAL_USER: &str = "SURREAL_USER";
    pub const SURREAL_PASS: &str = "SURREAL_PASS";
    pub const SURREAL_NS: &str = "SURREAL_NS";
    pub const SURREAL_DB: &str = "SURREAL_DB";
}
