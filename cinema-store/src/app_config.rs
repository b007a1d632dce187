use cinema_catalog::{PricingConfig, ADULT_FEE, CHILD_FEE, INFANT_FEE, MAX_SEAT_TICKETS};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub discounts: Vec<DiscountCodeConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BusinessRules {
    #[serde(default = "default_max_seat_tickets")]
    pub max_seat_tickets: u32,
    #[serde(default = "default_adult_fee")]
    pub adult_fee: u32,
    #[serde(default = "default_child_fee")]
    pub child_fee: u32,
    #[serde(default = "default_infant_fee")]
    pub infant_fee: u32,
}

fn default_max_seat_tickets() -> u32 {
    MAX_SEAT_TICKETS
}

fn default_adult_fee() -> u32 {
    ADULT_FEE
}

fn default_child_fee() -> u32 {
    CHILD_FEE
}

fn default_infant_fee() -> u32 {
    INFANT_FEE
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            max_seat_tickets: MAX_SEAT_TICKETS,
            adult_fee: ADULT_FEE,
            child_fee: CHILD_FEE,
            infant_fee: INFANT_FEE,
        }
    }
}

impl From<BusinessRules> for PricingConfig {
    fn from(rules: BusinessRules) -> Self {
        PricingConfig {
            max_seat_tickets: rules.max_seat_tickets,
            adult_fee: rules.adult_fee,
            child_fee: rules.child_fee,
            infant_fee: rules.infant_fee,
        }
    }
}

/// A promo code and who may use it
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DiscountCodeConfig {
    pub code: String,
    pub percentage: u32,
    /// Restrict the code to these accounts. Absent means everyone.
    #[serde(default)]
    pub accounts: Option<Vec<i64>>,
}

/// Environment overrides. The separator also follows the prefix, so the
/// adult fee is `CINEMA__BUSINESS_RULES__ADULT_FEE=25`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("CINEMA").separator("__")
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Developer overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        s.try_deserialize()
    }

    /// Parse a single TOML document, without files or environment
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn pricing(&self) -> PricingConfig {
        self.business_rules.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_env(vars: &[(&str, &str)]) -> Config {
        let vars = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 8080\n",
                config::FileFormat::Toml,
            ))
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_environment_overrides_business_rules() {
        let config = with_env(&[("CINEMA__BUSINESS_RULES__ADULT_FEE", "25")]);

        assert_eq!(config.pricing().adult_fee, 25);
        assert_eq!(config.pricing().child_fee, CHILD_FEE);
    }

    #[test]
    fn test_single_underscore_after_prefix_is_not_read() {
        let config = with_env(&[("CINEMA_BUSINESS_RULES__ADULT_FEE", "25")]);

        assert_eq!(config.pricing().adult_fee, ADULT_FEE);
    }

    #[test]
    fn test_business_rules_default_to_box_office_constants() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pricing(), PricingConfig::default());
        assert!(config.discounts.is_empty());
    }

    #[test]
    fn test_partial_business_rules_override() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 3000

            [business_rules]
            adult_fee = 25
            max_seat_tickets = 10
            "#,
        )
        .unwrap();

        let pricing = config.pricing();
        assert_eq!(pricing.adult_fee, 25);
        assert_eq!(pricing.max_seat_tickets, 10);
        assert_eq!(pricing.child_fee, CHILD_FEE);
        assert_eq!(pricing.infant_fee, INFANT_FEE);
    }

    #[test]
    fn test_discount_codes() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 3000

            [[discounts]]
            code = "SUMMER10"
            percentage = 10

            [[discounts]]
            code = "STAFF"
            percentage = 50
            accounts = [7, 9]
            "#,
        )
        .unwrap();

        assert_eq!(config.discounts.len(), 2);
        assert_eq!(config.discounts[0].accounts, None);
        assert_eq!(config.discounts[1].accounts, Some(vec![7, 9]));
    }
}
