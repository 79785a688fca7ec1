use clap::{Parser, Subcommand};
use shopping_list_core::FilterField;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopping-list")]
#[command(about = "Personal shopping list manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話式で買い物リストを操作
    Shell {
        /// 初期項目のJSONファイル
        #[arg(short, long)]
        items: Option<PathBuf>,

        /// デモ商品を読み込まずに空のリストで開始
        #[arg(long, conflicts_with = "items")]
        empty: bool,
    },

    /// 現在のリストを一度だけ表示
    View {
        /// 項目のJSONファイル（省略時はデモ商品）
        #[arg(short, long)]
        items: Option<PathBuf>,

        /// 検索文字列
        #[arg(short, long, default_value = "")]
        search: String,

        /// 照合対象 (none/price/store)
        #[arg(short, long, default_value = "none")]
        filter: FilterField,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 1項目の詳細を表示
    Show {
        /// 項目ID
        #[arg(long, required = true)]
        id: String,

        /// 項目のJSONファイル（省略時はデモ商品）
        #[arg(short, long)]
        items: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// ログインユーザー名を設定
        #[arg(long)]
        set_username: Option<String>,

        /// ログインパスワードを設定
        #[arg(long)]
        set_password: Option<String>,

        /// 表示通貨を設定
        #[arg(long)]
        set_currency: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
