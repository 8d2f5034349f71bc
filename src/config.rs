use chrono::Duration;
use std::env;
use std::sync::OnceLock;

use crate::auth::policy::LoginPolicy;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub admin_key: String,
    pub login: LoginConfig,
}

#[derive(Clone, Debug)]
pub struct LoginConfig {
    pub max_bad_logins: i32,
    pub lockout: Duration,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self { max_bad_logins: 5, lockout: Duration::minutes(15) }
    }
}

impl LoginConfig {
    /// `None` when `lockout_secs` is negative or does not fit a `Duration`.
    pub fn from_secs(max_bad_logins: i32, lockout_secs: i64) -> Option<Self> {
        let lockout = Duration::try_seconds(lockout_secs).filter(|d| *d >= Duration::zero())?;
        Some(Self { max_bad_logins, lockout })
    }

    pub fn policy(&self) -> LoginPolicy {
        LoginPolicy::new(self.max_bad_logins, self.lockout)
    }
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = LoginConfig::default();
        let lockout_secs = Self::get_env_or("LOGIN_LOCKOUT_SECS", defaults.lockout.num_seconds());
        let login = LoginConfig::from_secs(
            Self::get_env_or("LOGIN_MAX_BAD_LOGINS", defaults.max_bad_logins),
            lockout_secs,
        )
        .unwrap_or_else(|| panic!("LOGIN_LOCKOUT_SECS out of range: {}", lockout_secs));

        EnvConfig {
            port: Self::get_env_or("PORT", 8080),
            db_url: Self::get_env("DATABASE_URL"),
            admin_key: Self::get_env("ADMIN_KEY"),
            login,
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lockout_seconds_are_range_checked() {
        assert!(LoginConfig::from_secs(5, i64::MAX).is_none());
        assert!(LoginConfig::from_secs(5, -1).is_none());

        let login = LoginConfig::from_secs(3, 600).unwrap();
        let policy = login.policy();
        assert_eq!(policy.max_bad_logins, 3);
        assert_eq!(policy.lockout, Duration::minutes(10));
    }

    #[test]
    fn default_matches_documented_policy() {
        let policy = LoginConfig::default().policy();
        assert_eq!(policy.max_bad_logins, 5);
        assert_eq!(policy.lockout.num_seconds(), 900);
    }
}
