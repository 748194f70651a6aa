//! Test-only helpers for tests that touch process-global state.

/// RAII guard that temporarily overrides an environment variable and restores
/// the previous value (or removes the variable) when dropped.
///
/// `std::env::set_var` can race under concurrent access; pair uses of this
/// guard with `#[serial(env)]`.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Temporarily sets `key` to `val`.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let guard = Self {
            key,
            prev: std::env::var(key).ok(),
        };
        unsafe { std::env::set_var(key, val) };
        guard
    }

    /// Temporarily removes `key`.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let guard = Self {
            key,
            prev: std::env::var(key).ok(),
        };
        unsafe { std::env::remove_var(key) };
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.prev.take() {
            Some(v) => unsafe { std::env::set_var(self.key, &v) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}
