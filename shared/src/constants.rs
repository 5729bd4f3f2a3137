pub const GAME_DATA_PATH: &str = "assets/game_data.json";

pub const SOUND_GRAND_PRIZE: &str = "assets/sounds/grand_prize.mp3";
pub const SOUND_SECOND_PRIZE: &str = "assets/sounds/second_prize.mp3";
pub const SOUND_CONSOLATION_PRIZE: &str = "assets/sounds/consolation_prize.mp3";
pub const SOUND_NO_PRIZE: &str = "assets/sounds/no_prize.mp3";

pub const LANGUAGE_STORAGE_KEY: &str = "language";

// Constants for frontend animation
pub const SPIN_DURATION_MS: f64 = 4000.0; // Duration of spin animation in milliseconds
pub const MIN_SPINS: f64 = 5.0; // Minimum number of full rotations

pub const CONFETTI_COUNT: usize = 150;
pub const CONFETTI_SIZE: f64 = 5.0;
pub const CONFETTI_DURATION_MS: f64 = 2200.0;
pub const CONFETTI_COLORS: [&str; 3] = ["#ff0000", "#00ff00", "#0000ff"];
