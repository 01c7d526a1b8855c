use lazy_static::lazy_static;
use regex::Regex;
use crate::services::{ DEFAULT_CONTACT_ADDRESS, DEFAULT_THEME_STORAGE_KEY };

pub const CONTACT_ADDRESS_VAR: &str = "PORTFOLIO_CONTACT_ADDRESS";
pub const THEME_KEY_VAR: &str = "PORTFOLIO_THEME_KEY";

lazy_static! {
    // No URI delimiters or control characters on either side of the `@`.
    static ref MAILBOX: Regex = Regex::new(
        r"^[^@\s?&#=%/\p{Cc}]+@[^@\s?&#=%/\p{Cc}]+\.[^@\s?&#=%/\p{Cc}]+$"
    ).unwrap();
}

/// Deploy-time settings. Everything has a default, so a missing or rejected
/// value never stops the site from rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_address: String,
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_address: DEFAULT_CONTACT_ADDRESS.to_string(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
        }
    }
}

impl SiteConfig {
    /// Reads overrides from the process environment on native targets. In the
    /// browser there is no environment, so the values captured at build time
    /// are used instead.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_lookup(|name| std::env::var(name).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(|name| {
                let baked = match name {
                    CONTACT_ADDRESS_VAR => option_env!("PORTFOLIO_CONTACT_ADDRESS"),
                    THEME_KEY_VAR => option_env!("PORTFOLIO_THEME_KEY"),
                    _ => None,
                };
                baked.map(str::to_string)
            })
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(address) = non_empty(lookup(CONTACT_ADDRESS_VAR)) {
            if MAILBOX.is_match(&address) {
                log::info!("Using contact address from {}", CONTACT_ADDRESS_VAR);
                config.contact_address = address;
            } else {
                log::warn!(
                    "{} is not a mailbox ({:?}), keeping {}",
                    CONTACT_ADDRESS_VAR,
                    address,
                    DEFAULT_CONTACT_ADDRESS
                );
            }
        }

        if let Some(key) = non_empty(lookup(THEME_KEY_VAR)) {
            config.theme_storage_key = key;
        }

        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.contact_address, DEFAULT_CONTACT_ADDRESS);
        assert_eq!(config.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SiteConfig::from_lookup(
            lookup_from(&[
                (CONTACT_ADDRESS_VAR, " hello@example.org "),
                (THEME_KEY_VAR, "theme"),
            ])
        );
        assert_eq!(config.contact_address, "hello@example.org");
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn test_rejects_non_mailbox_address() {
        for address in [
            "not an address",
            "me&cc=x?y#z@example.org",
            "me@example.org?bcc=spy@example.org",
            "50%off@example.org",
            "me@example.org/path",
            "me\u{7}@example.org",
        ] {
            let config = SiteConfig::from_lookup(|name: &str| {
                (name == CONTACT_ADDRESS_VAR).then(|| address.to_string())
            });
            assert_eq!(config.contact_address, DEFAULT_CONTACT_ADDRESS, "{:?}", address);
        }
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = SiteConfig::from_lookup(
            lookup_from(&[
                (CONTACT_ADDRESS_VAR, "   "),
                (THEME_KEY_VAR, ""),
            ])
        );
        assert_eq!(config, SiteConfig::default());
    }
}
