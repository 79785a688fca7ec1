use crate::error::{Result, ShoppingListError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const PASSWORD_ENV: &str = "SHOPPING_LIST_PASSWORD";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub currency: String,
    pub require_login: bool,
    /// シェル起動時にデモ商品を読み込む
    pub load_sample: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: "user".into(),
            password: "password".into(),
            currency: "PLN".into(),
            require_login: true,
            load_sample: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ShoppingListError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("shopping-list").join("config.json"))
    }

    /// ログインに使うパスワード（環境変数を優先）
    pub fn effective_password(&self) -> String {
        std::env::var(PASSWORD_ENV).unwrap_or_else(|_| self.password.clone())
    }

    pub fn set_currency(&mut self, currency: String) -> Result<()> {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(ShoppingListError::Config("currency must not be empty".into()));
        }
        self.currency = currency.to_string();
        Ok(())
    }

    pub fn set_username(&mut self, username: String) -> Result<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ShoppingListError::Config("username must not be empty".into()));
        }
        self.username = username.to_string();
        Ok(())
    }

    pub fn set_password(&mut self, password: String) -> Result<()> {
        if password.is_empty() {
            return Err(ShoppingListError::Config("password must not be empty".into()));
        }
        self.password = password;
        Ok(())
    }
}
