//! # Settings Repository
//!
//! The business settings live as one JSON object under
//! [`SETTINGS_KEY`](anchor_core::SETTINGS_KEY), not as a collection.
//! Reads never fail on content: a missing or unreadable object means
//! defaults.

use tracing::{debug, warn};

use anchor_core::{Settings, SETTINGS_KEY};

use crate::error::DbResult;
use crate::storage::LocalStorage;

/// Repository for the settings object.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    storage: LocalStorage,
}

impl SettingsRepository {
    pub fn new(storage: LocalStorage) -> Self {
        SettingsRepository { storage }
    }

    /// Stored settings, or [`Settings::default`] when absent or unreadable.
    ///
    /// Fields missing from an older stored object take their default value.
    pub async fn get(&self) -> DbResult<Settings> {
        let Some(blob) = self.storage.get_item(SETTINGS_KEY).await? else {
            debug!("No stored settings, using defaults");
            return Ok(Settings::default());
        };

        match serde_json::from_str::<Settings>(&blob) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(error = %e, "Stored settings are unreadable, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// Replaces the stored settings.
    pub async fn save(&self, settings: &Settings) -> DbResult<Settings> {
        let blob = serde_json::to_string(settings)?;
        self.storage.set_item(SETTINGS_KEY, &blob).await?;

        debug!(business = %settings.business_name, "Saved settings");
        Ok(settings.clone())
    }

    /// Drops the stored settings; the next [`get`](Self::get) returns defaults.
    pub async fn reset(&self) -> DbResult<()> {
        self.storage.remove_item(SETTINGS_KEY).await
    }

    /// Whether settings have ever been saved.
    pub async fn is_stored(&self) -> DbResult<bool> {
        self.storage.contains_key(SETTINGS_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use anchor_core::{Money, Settings};

    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_defaults_when_absent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert_eq!(db.settings().get().await.unwrap(), Settings::default());
        assert!(!db.settings().is_stored().await.unwrap());
    }

    #[tokio::test]
    async fn test_save_get_reset() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let settings = Settings {
            business_name: "Harbor Leather".to_string(),
            default_tax_rate_bps: 825,
            default_hourly_rate: Money::from_dollars(65),
            ..Settings::default()
        };

        db.settings().save(&settings).await.unwrap();
        assert_eq!(db.settings().get().await.unwrap(), settings);

        db.settings().reset().await.unwrap();
        assert_eq!(db.settings().get().await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn test_partial_and_broken_objects() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage = db.storage();

        storage
            .set_item("anchor_settings", r#"{"businessName":"Old Shop"}"#)
            .await
            .unwrap();
        let settings = db.settings().get().await.unwrap();
        assert_eq!(settings.business_name, "Old Shop");
        assert_eq!(settings.low_stock_threshold, 5);

        storage.set_item("anchor_settings", "nope").await.unwrap();
        assert_eq!(db.settings().get().await.unwrap(), Settings::default());
    }
}
