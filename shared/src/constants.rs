pub const SLOT_COUNT: usize = 3;

pub const SPIN_TICK_MS: u64 = 80;
pub const COMMIT_BASE_DELAY_MS: u64 = 300;
pub const COMMIT_STAGGER_MS: u64 = 500;

pub const CONFIG_STORAGE_KEY: &str = "roulette_config";

pub const START_LABEL: &str = "ルーレット開始";
pub const SPINNING_LABEL: &str = "抽選中...";
pub const RESTART_LABEL: &str = "もう一度回す";
pub const STOP_LABEL: &str = "ストップ";
pub const RESET_LABEL: &str = "リセット";
pub const ALLOW_DUPLICATES_LABEL: &str = "キャラクター被りを許可";
pub const EXCLUDE_PREVIOUS_LABEL: &str = "前回の結果を除外";
