// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::error::Error;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    log::warn!("{} has {} syntax errors", filename, errors.len());
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{} redefines {} messages", filename, errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| DEFAULT_LOCALE.parse().unwrap_or_default());
        log::debug!("Using locale {current_locale}");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    /// Text shown when `err` surfaces as an alert.
    pub fn error_message(&self, err: &Error) -> String {
        match err {
            Error::InvalidDuration(input) => self.tr_with_args(
                "error-invalid-duration",
                &[("input", FluentValue::from(input.as_str()))],
            ),
            other => other.user_message(),
        }
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang, config.language.clone(), sys_locale::get_locale()];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang| lang.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unknown_cli_value() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let lang = resolve_locale(Some("xx".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.tr("button-clear"), "Clear");
    }

    #[test]
    fn every_english_key_is_translated_to_french() {
        let keys = [
            "window-title",
            "kind-info",
            "kind-loading",
            "sample-warning",
            "countdown-placeholder",
            "button-force-clear",
            "toggle-dismiss-button",
        ];
        let english = I18n::new(Some("en-US".into()), &Config::default());
        let french = I18n::new(Some("fr".into()), &Config::default());

        for key in keys {
            assert!(!english.tr(key).starts_with("MISSING"), "{key}");
            assert!(!french.tr(key).starts_with("MISSING"), "{key}");
        }
        assert_eq!(french.tr("button-clear"), "Effacer");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let title = i18n.tr_with_args("window-title-count", &[("count", FluentValue::from(3))]);
        assert_eq!(title, "Alerts (3)");
    }

    #[test]
    fn invalid_duration_message_quotes_input() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let message = i18n.error_message(&Error::InvalidDuration("later".into()));
        assert_eq!(message, "\"later\" is not a valid duration in seconds");
    }

    #[test]
    fn set_locale_ignores_unavailable_locales() {
        let mut i18n = I18n::new(Some("en-US".into()), &Config::default());
        i18n.set_locale("de".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }
}
