use std::{env, fmt::Display, str::FromStr};

use log::*;

/// Read and parse the environment variable `name`. If it is missing or invalid, a message is logged and `default` is
/// returned instead.
pub fn env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(name) {
        Ok(s) => s.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("🪛️ {s} is not a valid value for {name}. {e} Using the default, {default}, instead.");
            default
        }),
        Err(_) => {
            debug!("🪛️ {name} is not set. Using the default value of {default}.");
            default
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn env_values() {
        env::set_var("FXC_TEST_ENV_NUMBER", " 42 ");
        env::set_var("FXC_TEST_ENV_GARBAGE", "forty-two");
        assert_eq!(env_or_default("FXC_TEST_ENV_NUMBER", 7u32), 42);
        assert_eq!(env_or_default("FXC_TEST_ENV_GARBAGE", 7u32), 7);
        assert_eq!(env_or_default("FXC_TEST_ENV_MISSING", 7u32), 7);
    }
}
