use validator::ValidationError;

pub const MAX_TICK_MS: u64 = 10_000;
pub const MAX_DELAY_MS: u64 = 60_000;
pub const MAX_AUTO_STOP_MS: u64 = 3_600_000;

fn validate_between(value: u64, min: u64, max: u64, code: &'static str) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::new(code));
    }
    Ok(())
}

pub fn validate_tick_ms(value: u64) -> Result<(), ValidationError> {
    validate_between(value, 1, MAX_TICK_MS, "invalid_tick_ms")
}

pub fn validate_base_delay_ms(value: u64) -> Result<(), ValidationError> {
    validate_between(value, 0, MAX_DELAY_MS, "invalid_base_delay_ms")
}

pub fn validate_stagger_ms(value: u64) -> Result<(), ValidationError> {
    validate_between(value, 1, MAX_DELAY_MS, "invalid_stagger_ms")
}

pub fn validate_auto_stop_ms(value: u64) -> Result<(), ValidationError> {
    validate_between(value, 1, MAX_AUTO_STOP_MS, "invalid_auto_stop_ms")
}
