/// Synthetic users served by the demo user listing, in display order.
pub const SYNTHETIC_USERS: [&str; 3] = ["user1", "user2", "user3"];
