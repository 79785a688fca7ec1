use anyhow::Context;
use clap::Parser;
use shopping_list::{auth, cli, config, items_file, render, session};
use shopping_list_core::ItemId;
use cli::{Cli, Commands};
use config::Config;
use session::Session;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("failed to load config")?;

    match cli.command {
        Commands::Shell { items, empty } => {
            println!("🛒 shopping-list\n");

            if config.require_login {
                let username = auth::login_interactive(&config)?;
                println!("✔ Logged in as {}\n", username);
            }

            let store = items_file::initial_store(items.as_deref(), config.load_sample && !empty)
                .context("failed to load items")?;
            let mut session = Session::new(store);
            session::run_interactive_session(&mut session, &config.currency)?;
        }

        Commands::View { items, search, filter, json } => {
            let store = items_file::initial_store(items.as_deref(), true)
                .context("failed to load items")?;
            let sections = shopping_list_core::project(store.items(), &search, filter);

            if json {
                println!("{}", serde_json::to_string_pretty(&sections)?);
            } else {
                print!("{}", render::render_sections(&sections, &config.currency));
            }
        }

        Commands::Show { id, items } => {
            let store = items_file::initial_store(items.as_deref(), true)
                .context("failed to load items")?;
            let item = store.detail(&ItemId::from(id))?;
            print!("{}", render::render_detail(item, &config.currency));
        }

        Commands::Config { set_username, set_password, set_currency, show } => {
            let mut config = config;
            let changed = set_username.is_some() || set_password.is_some() || set_currency.is_some();

            if let Some(username) = set_username {
                config.set_username(username)?;
                println!("✔ Username updated");
            }
            if let Some(password) = set_password {
                config.set_password(password)?;
                println!("✔ Password updated");
            }
            if let Some(currency) = set_currency {
                config.set_currency(currency)?;
                println!("✔ Currency set to {}", config.currency);
            }
            if changed {
                config.save().context("failed to save config")?;
            }

            if show || !changed {
                println!("Config:");
                println!("  Path: {}", Config::config_path()?.display());
                println!("  Username: {}", config.username);
                println!("  Currency: {}", config.currency);
                println!("  Require login: {}", config.require_login);
                println!("  Load sample items: {}", config.load_sample);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("shopping_list=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
