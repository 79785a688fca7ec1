//! 対話式シェルセッション
//!
//! ストアと表示条件を所有し、入力コマンドをストア操作・射影に変換する。
//! 削除確認と入力フォームはこの層で行い、コアには持ち込まない。

use crate::error::{Result, ShoppingListError};
use crate::render::{render_detail, render_sections, render_view_status};
use dialoguer::{Confirm, Input};
use shopping_list_core::{FilterField, Item, ItemId, ItemStore, Section, ViewState};
use std::str::FromStr;

pub const HELP_TEXT: &str = "\
Commands:
  list                 show the list
  add                  add a new item
  toggle N             mark item N as bought / not bought
  rm N | delete N      remove item N
  show N               show details of item N
  search TEXT          filter by TEXT (empty clears)
  filter FIELD         match search against none | price | store
  reset                clear search and filter
  help                 show this help
  quit                 leave";

/// シェルコマンド（行番号は表示中の射影における1始まりの位置）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Toggle(usize),
    Delete(usize),
    Show(usize),
    Search(String),
    Filter(FilterField),
    Reset,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ShoppingListError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let row = || -> Result<usize> {
            rest.parse::<usize>()
                .map_err(|_| ShoppingListError::UnknownCommand(line.to_string()))
        };

        match word.to_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "add" => Ok(Command::Add),
            "toggle" | "t" => Ok(Command::Toggle(row()?)),
            "rm" | "delete" => Ok(Command::Delete(row()?)),
            "show" => Ok(Command::Show(row()?)),
            "search" | "/" => Ok(Command::Search(rest.to_string())),
            "filter" => rest
                .parse::<FilterField>()
                .map(Command::Filter)
                .map_err(|_| ShoppingListError::UnknownCommand(line.to_string())),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(ShoppingListError::UnknownCommand(line.to_string())),
        }
    }
}

/// 入力フォームの内容（検証はストアが行う）
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: String,
    pub price: String,
    pub store: String,
    pub description: String,
}

/// コマンド実行結果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// リストを再表示
    Redraw,
    Detail(Item),
    /// 入力フォームを開く
    OpenAddForm,
    /// 削除確認を求める
    ConfirmDelete(Item),
    Help,
    Quit,
}

pub struct Session {
    store: ItemStore,
    view: ViewState,
}

impl Session {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            view: ViewState::default(),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// 現在の表示条件で射影
    pub fn sections(&self) -> Vec<Section<'_>> {
        self.view.project(self.store.items())
    }

    /// 行番号から項目IDを引く
    pub fn row_id(&self, row: usize) -> Result<ItemId> {
        row.checked_sub(1)
            .and_then(|index| {
                self.sections()
                    .iter()
                    .flat_map(|section| section.items.iter())
                    .nth(index)
                    .map(|item| item.id.clone())
            })
            .ok_or(ShoppingListError::InvalidRow(row))
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::List => Ok(Outcome::Redraw),
            Command::Add => Ok(Outcome::OpenAddForm),
            Command::Toggle(row) => {
                let id = self.row_id(row)?;
                self.store.toggle_bought(&id)?;
                let bought = self.store.detail(&id)?.bought;
                tracing::info!(id = %id, bought, "item toggled");
                Ok(Outcome::Redraw)
            }
            Command::Delete(row) => {
                let id = self.row_id(row)?;
                Ok(Outcome::ConfirmDelete(self.store.detail(&id)?.clone()))
            }
            Command::Show(row) => {
                let id = self.row_id(row)?;
                Ok(Outcome::Detail(self.store.detail(&id)?.clone()))
            }
            Command::Search(text) => {
                self.view.search_text = text;
                tracing::debug!(search = %self.view.search_text, "search changed");
                Ok(Outcome::Redraw)
            }
            Command::Filter(field) => {
                self.view.filter_field = field;
                tracing::debug!(filter = %field, "filter changed");
                Ok(Outcome::Redraw)
            }
            Command::Reset => {
                self.view.reset();
                Ok(Outcome::Redraw)
            }
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// フォーム内容で項目を追加
    pub fn add(&mut self, form: &NewItem) -> Result<ItemId> {
        let item = self
            .store
            .add(&form.name, &form.price, &form.store, &form.description)?;
        tracing::info!(id = %item.id, name = %item.name, "item added");
        Ok(item.id.clone())
    }

    /// 確認済みの削除を実行
    pub fn remove(&mut self, id: &ItemId) -> Result<Item> {
        let item = self.store.remove(id)?;
        tracing::info!(id = %item.id, name = %item.name, "item removed");
        Ok(item)
    }
}

/// 対話ループ
pub fn run_interactive_session(session: &mut Session, currency: &str) -> Result<()> {
    println!("{}\n", HELP_TEXT);
    print_view(session, currency);

    loop {
        let line: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match line.parse::<Command>().and_then(|cmd| session.execute(cmd)) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("✗ {}", err);
                continue;
            }
        };

        match outcome {
            Outcome::Redraw => print_view(session, currency),
            Outcome::Detail(item) => println!("{}", render_detail(&item, currency)),
            Outcome::OpenAddForm => {
                let form = prompt_new_item()?;
                match session.add(&form) {
                    Ok(_) => {
                        println!("✔ Item added");
                        print_view(session, currency);
                    }
                    Err(err) => println!("✗ {}", err),
                }
            }
            Outcome::ConfirmDelete(item) => {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Remove \"{}\"?", item.name))
                    .default(false)
                    .interact()?;
                if confirmed {
                    match session.remove(&item.id) {
                        Ok(removed) => {
                            println!("✔ Removed {}", removed.name);
                            print_view(session, currency);
                        }
                        Err(err) => println!("✗ {}", err),
                    }
                }
            }
            Outcome::Help => println!("{}", HELP_TEXT),
            Outcome::Quit => break,
        }
    }

    Ok(())
}

fn print_view(session: &Session, currency: &str) {
    if let Some(status) = render_view_status(session.view()) {
        println!("{}", status);
    }
    print!("{}", render_sections(&session.sections(), currency));
}

/// 入力フォーム
fn prompt_new_item() -> Result<NewItem> {
    Ok(NewItem {
        name: prompt_field("Name (e.g. Chleb)")?,
        price: prompt_field("Price (e.g. 4.99)")?,
        store: prompt_field("Store (e.g. Biedronka)")?,
        description: prompt_field("Description (optional)")?,
    })
}

fn prompt_field(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("list".parse::<Command>().unwrap(), Command::List);
        assert_eq!("toggle 3".parse::<Command>().unwrap(), Command::Toggle(3));
        assert_eq!("rm 2".parse::<Command>().unwrap(), Command::Delete(2));
        assert_eq!("DELETE 2".parse::<Command>().unwrap(), Command::Delete(2));
        assert_eq!("show 1".parse::<Command>().unwrap(), Command::Show(1));
        assert_eq!(
            "search  mleko owsiane ".parse::<Command>().unwrap(),
            Command::Search("mleko owsiane".to_string())
        );
        assert_eq!("search".parse::<Command>().unwrap(), Command::Search(String::new()));
        assert_eq!(
            "filter store".parse::<Command>().unwrap(),
            Command::Filter(FilterField::Store)
        );
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_invalid_commands() {
        assert!(matches!(
            "toggle abc".parse::<Command>(),
            Err(ShoppingListError::UnknownCommand(_))
        ));
        assert!(matches!(
            "filter colour".parse::<Command>(),
            Err(ShoppingListError::UnknownCommand(_))
        ));
        assert!(matches!(
            "buy milk".parse::<Command>(),
            Err(ShoppingListError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_row_id_follows_projection() {
        let session = Session::new(ItemStore::sample());
        // to-buy: Chleb, Cukier, Jajka, Mleko / purchased: Kawa
        assert_eq!(session.row_id(1).unwrap(), ItemId::from("2"));
        assert_eq!(session.row_id(5).unwrap(), ItemId::from("4"));
        assert!(matches!(session.row_id(0), Err(ShoppingListError::InvalidRow(0))));
        assert!(matches!(session.row_id(6), Err(ShoppingListError::InvalidRow(6))));
    }
}
