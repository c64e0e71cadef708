pub mod db_const {
    pub const USER_TABLE: &str = "users";
    pub const CONNECTION_TABLE: &str = "connections";
    pub const NOTIFICATION_TABLE: &str = "notifications";
}

pub mod connection_const {
    /// Upper bound on the optional note attached to a connection request.
    pub const MAX_MESSAGE_CHARS: usize = 500;

    /// Name of the unique index guarding the one-active-edge-per-pair rule.
    pub const PAIR_INDEX: &str = "connections_pair_idx";
}

pub mod notification_const {
    pub const DEFAULT_PAGE_SIZE: usize = 50;

    /// Hard cap on caller-supplied page sizes.
    pub const MAX_PAGE_SIZE: usize = 200;
}
