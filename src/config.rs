//! Fixed game configuration.

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 6;

/// Number of ships in the fleet.
pub const NUM_SHIPS: usize = 7;

/// Ship lengths, placed in this order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Candidate ships tried on one board before it is thrown away.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Fresh boards tried before fleet setup gives up.
pub const BOARD_ATTEMPTS: usize = 64;
