//! ログイン境界チェック
//!
//! 起動時に一度だけ資格情報を照合する。認証基盤ではない。

use crate::config::Config;
use crate::error::{Result, ShoppingListError};
use dialoguer::{Input, Password};

const MAX_ATTEMPTS: usize = 3;

/// 入力された資格情報を期待値と照合
pub fn check_credentials(
    expected_username: &str,
    expected_password: &str,
    username: &str,
    password: &str,
) -> Result<()> {
    if username.trim() == expected_username && password == expected_password {
        Ok(())
    } else {
        Err(ShoppingListError::AuthFailed)
    }
}

/// 対話式ログイン（最大3回）
pub fn login_interactive(config: &Config) -> Result<String> {
    let expected_password = config.effective_password();
    for attempt in 1..=MAX_ATTEMPTS {
        let username: String = Input::new().with_prompt("Username").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;

        match check_credentials(&config.username, &expected_password, &username, &password) {
            Ok(()) => {
                tracing::info!(user = %username.trim(), "login succeeded");
                return Ok(username.trim().to_string());
            }
            Err(err) => {
                tracing::warn!(attempt, "login failed");
                println!("✗ {}", err);
            }
        }
    }
    Err(ShoppingListError::AuthFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        assert!(check_credentials("ania", "tajne", "ania", "tajne").is_ok());
        assert!(check_credentials("ania", "tajne", " ania ", "tajne").is_ok());
    }

    #[test]
    fn test_invalid_credentials() {
        assert!(matches!(
            check_credentials("ania", "tajne", "ania", "wrong"),
            Err(ShoppingListError::AuthFailed)
        ));
        assert!(matches!(
            check_credentials("ania", "tajne", "other", "tajne"),
            Err(ShoppingListError::AuthFailed)
        ));
        // パスワードは前後の空白も含めて一致が必要
        assert!(check_credentials("ania", "tajne", "ania", " tajne").is_err());
    }
}
