use chrono::{DateTime, Duration, Utc};
use entity::user::Model as UserModel;

/// Throttling rule applied by password logins.
#[derive(Clone, Debug)]
pub struct LoginPolicy {
    pub max_bad_logins: i32,
    pub lockout: Duration,
}

impl Default for LoginPolicy {
    fn default() -> Self {
        Self::new(5, Duration::minutes(15))
    }
}

impl LoginPolicy {
    pub fn new(max_bad_logins: i32, lockout: Duration) -> Self {
        Self { max_bad_logins, lockout }
    }

    /// A user is locked once they hit the failure limit, until `lockout` has passed since the last attempt.
    pub fn is_locked(&self, user: &UserModel, now: DateTime<Utc>) -> bool {
        if self.max_bad_logins <= 0 || user.bad_logins < self.max_bad_logins {
            return false;
        }
        match user.last_attempt {
            Some(last) => now - last < self.lockout,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(bad_logins: i32, last_attempt: Option<DateTime<Utc>>) -> UserModel {
        UserModel {
            id: 7,
            name: "Grace".into(),
            email: "grace@example.com".into(),
            password_hash: None,
            bad_logins,
            last_attempt,
            last_login_ip: None,
        }
    }

    #[test]
    fn under_the_limit_is_never_locked() {
        let now = Utc::now();
        let policy = LoginPolicy::default();
        assert!(!policy.is_locked(&user(4, Some(now)), now));
    }

    #[test]
    fn locked_inside_the_window() {
        let now = Utc::now();
        let policy = LoginPolicy::default();
        assert!(policy.is_locked(&user(5, Some(now - Duration::minutes(1))), now));
    }

    #[test]
    fn window_expires() {
        let now = Utc::now();
        let policy = LoginPolicy::default();
        assert!(!policy.is_locked(&user(9, Some(now - Duration::minutes(16))), now));
    }

    #[test]
    fn zero_limit_disables_lockout() {
        let now = Utc::now();
        let policy = LoginPolicy::new(0, Duration::minutes(15));
        assert!(!policy.is_locked(&user(100, Some(now)), now));
    }
}
