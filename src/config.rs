use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "https://spendee-track-spending-easily.onrender.com";
const SETTINGS_KEY: &str = "settings";

/// Where the finance API lives. Fixed at build time through
/// `FINANCE_API_BASE_URL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinanceConfig {
    pub api_base_url: String,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self::new(option_env!("FINANCE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl FinanceConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// How the add-transaction form is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStyle {
    #[default]
    Inline,
    Modal,
    Drawer,
}

impl FormStyle {
    pub const ALL: [FormStyle; 3] = [FormStyle::Inline, FormStyle::Modal, FormStyle::Drawer];

    pub fn code(&self) -> &'static str {
        match self {
            FormStyle::Inline => "inline",
            FormStyle::Modal => "modal",
            FormStyle::Drawer => "drawer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormStyle::Inline => "Inline card",
            FormStyle::Modal => "Modal dialog",
            FormStyle::Drawer => "Side drawer",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|style| style.code() == code)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
    #[serde(default)]
    pub form_style: FormStyle,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            form_style: FormStyle::default(),
        }
    }
}

impl AppSettings {
    pub fn with_currency(&self, code: &str) -> Self {
        Self {
            currency_code: code.to_string(),
            currency_symbol: currency_symbol_for(code).to_string(),
            ..self.clone()
        }
    }
}

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "PHP" => "₱",
        _ => "$",
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_settings() -> AppSettings {
    local_storage()
        .and_then(|storage| storage.get_item(SETTINGS_KEY).ok().flatten())
        .and_then(|raw| match serde_json::from_str::<AppSettings>(&raw) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log::warn!("ignoring stored settings: {}", err);
                None
            }
        })
        .unwrap_or_default()
}

pub fn save_settings(settings: &AppSettings) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(settings) {
        Ok(raw) => {
            if storage.set_item(SETTINGS_KEY, &raw).is_err() {
                log::warn!("could not persist settings");
            }
        }
        Err(err) => log::warn!("could not encode settings: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = FinanceConfig::new("https://api.example.com/");
        assert_eq!(
            config.endpoint("/finance/transactions"),
            "https://api.example.com/finance/transactions"
        );
        assert_eq!(
            config.endpoint("finance/transaction/4"),
            "https://api.example.com/finance/transaction/4"
        );
    }

    #[test]
    fn settings_without_form_style_default_to_inline() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"currency_code":"EUR","currency_symbol":"€"}"#).unwrap();
        assert_eq!(settings.form_style, FormStyle::Inline);
    }

    #[test]
    fn switching_currency_updates_symbol() {
        let settings = AppSettings::default().with_currency("GBP");
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.with_currency("XYZ").currency_symbol, "$");
    }

    #[test]
    fn unknown_form_style_code_falls_back() {
        assert_eq!(FormStyle::from_code("drawer"), FormStyle::Drawer);
        assert_eq!(FormStyle::from_code("swipe"), FormStyle::Inline);
    }
}
