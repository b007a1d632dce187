use std::collections::HashMap;

use async_trait::async_trait;
use cinema_core::{Discount, DiscountError, DiscountService};
use tracing::debug;

use crate::app_config::DiscountCodeConfig;

struct DiscountEntry {
    percentage: u32,
    accounts: Option<Vec<i64>>,
}

/// Discount lookups served from the `discounts` configuration section
pub struct ConfigDiscountService {
    codes: HashMap<String, DiscountEntry>,
}

impl ConfigDiscountService {
    pub fn new(entries: &[DiscountCodeConfig]) -> Self {
        let codes = entries
            .iter()
            .map(|entry| {
                (
                    entry.code.clone(),
                    DiscountEntry {
                        percentage: entry.percentage,
                        accounts: entry.accounts.clone(),
                    },
                )
            })
            .collect();
        Self { codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[async_trait]
impl DiscountService for ConfigDiscountService {
    async fn get_discount_percentage(
        &self,
        account_id: i64,
        code: &str,
    ) -> Result<Option<Discount>, DiscountError> {
        let entry = self
            .codes
            .get(code)
            .ok_or_else(|| DiscountError::InvalidCode(code.to_string()))?;

        if let Some(accounts) = &entry.accounts {
            if !accounts.contains(&account_id) {
                debug!(account_id, code, "Discount code not issued to account");
                return Ok(None);
            }
        }

        Ok(Some(Discount::new(entry.percentage)))
    }
}
