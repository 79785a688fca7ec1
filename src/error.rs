use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShoppingListError {
    #[error(transparent)]
    Core(#[from] shopping_list_core::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Login failed: invalid username or password")]
    AuthFailed,

    #[error("No item at row {0}")]
    InvalidRow(usize),

    #[error("Unknown command: {0}. Type `help` for the list of commands")]
    UnknownCommand(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for ShoppingListError {
    fn from(err: dialoguer::Error) -> Self {
        ShoppingListError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShoppingListError>;
