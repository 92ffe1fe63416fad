pub const MAX_HEALTH: i64 = 100;
