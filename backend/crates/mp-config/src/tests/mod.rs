
use std::env;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { env::set_var(key, value) };
        Self { key, original }
    }

    pub(crate) fn unset(key: &'static str) -> Self {
        let original = env::var(key).ok();
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { env::remove_var(key) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe {
            match &self.original {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

pub(crate) fn valid_config() -> crate::Config {
    let mut config = crate::Config::default();
    config.provider.base_url = String::from("https://auth.example.com/v1");
    config.provider.api_key = String::from("publishable-key");
    config.session.jwt_secret = Some(String::from("0123456789abcdef0123456789abcdef"));
    config
}
