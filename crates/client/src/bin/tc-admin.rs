//! Command-line back office.
//!
//! Configuration comes from the environment (see `ClientConfig::from_env`);
//! the session is kept in `TC_SESSION_FILE` between runs.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tc_core::inquiry::InquiryStatus;
use tc_core::site::SiteMode;
use tc_core::types::DbId;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tc_client::config::ClientConfig;
use tc_client::context::AdminContext;
use tc_client::dashboard::DashboardView;
use tc_client::editor::ContentEditor;
use tc_client::gateway::Gateway;
use tc_client::geo::{AmapGeocoder, LocationPicker};
use tc_client::guard::LogNavigator;
use tc_client::inquiries::InquiryDesk;
use tc_client::inventory::Inventory;
use tc_client::models::Product;
use tc_client::notify::{Confirm, FixedConfirm, TracingNotifier};
use tc_client::poller::UnreadPoller;
use tc_client::resources::{AuthApi, ContentApi};
use tc_client::session::{FileSessionStore, Session};
use tc_client::site_mode;

#[derive(Parser, Debug)]
#[command(name = "tc-admin", about = "Back-office client for the site API")]
struct Args {
    /// Answer yes to every confirmation prompt.
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session.
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "TC_ADMIN_PASSWORD")]
        password: String,
    },
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// List content items, optionally of one section.
    Content {
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Set the coordinates of a content item, typed or found by address.
    Locate {
        id: DbId,
        /// `"lat,lng"`.
        #[arg(long, conflicts_with = "search")]
        coords: Option<String>,
        /// Address to geocode through AMap.
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete a customer case.
    DeleteCase { id: DbId },
    #[command(subcommand)]
    Products(ProductCommand),
    #[command(subcommand)]
    Inquiries(InquiryCommand),
    /// Dashboard counters, weekly trend and visitor locations.
    Stats,
    /// Show or change the public site layout.
    SiteMode { mode: Option<ModeArg> },
    /// Print the unread-inquiry count as it changes until Ctrl-C.
    Watch,
    /// Toggle the light/dark theme preference.
    Theme,
}

#[derive(Subcommand, Debug)]
enum ProductCommand {
    List,
    Save {
        #[arg(long)]
        id: Option<DbId>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        featured: bool,
    },
    Delete {
        id: DbId,
    },
    /// Write the product list as JSON.
    Export {
        #[arg(short, long, default_value = tc_client::inventory::EXPORT_FILE_NAME)]
        out: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum InquiryCommand {
    List,
    Read { id: DbId },
    Unread { id: DbId },
    Delete { id: DbId },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Default,
    Blog,
}

impl From<ModeArg> for SiteMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Default => SiteMode::Default,
            ModeArg::Blog => SiteMode::Blog,
        }
    }
}

/// Asks on the terminal.
struct PromptConfirm;

#[async_trait]
impl Confirm for PromptConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || {
            print!("{prompt} [y/N] ");
            if std::io::stdout().flush().is_err() {
                return false;
            }
            let mut answer = String::new();
            match std::io::stdin().read_line(&mut answer) {
                Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
                Err(_) => false,
            }
        })
        .await
        .unwrap_or(false)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tc_client=info".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let args = Args::parse();
    let config = ClientConfig::from_env().context("loading client configuration")?;
    let session = Session::new(Arc::new(FileSessionStore::open(&config.session_file)));
    let gateway = Gateway::new(&config, session, Arc::new(LogNavigator))?;
    let confirm: Arc<dyn Confirm> = if args.yes {
        Arc::new(FixedConfirm(true))
    } else {
        Arc::new(PromptConfirm)
    };
    let ctx = AdminContext::new(gateway.clone(), Arc::new(TracingNotifier), confirm);

    match args.command {
        Command::Login { username, password } => {
            let user = AuthApi::login(&gateway, &username, &password).await?;
            println!("Logged in as {}", user.username);
        }
        Command::Logout => {
            AuthApi::logout(&gateway).await?;
            println!("Logged out");
        }
        Command::Whoami => print_json(&AuthApi::me(&gateway).await?)?,
        Command::Content { section } => {
            let items = match section {
                Some(section) => ContentApi::list_by_section(&gateway, &section).await?,
                None => ContentApi::list_all(&gateway).await?,
            };
            print_json(&items)?;
        }
        Command::Locate { id, coords, search } => {
            let pair = match (coords, search) {
                (Some(coords), _) => coords,
                (None, Some(address)) => {
                    let geocoder = AmapGeocoder::from_config(&config.amap)?;
                    let mut picker = LocationPicker::new(Arc::new(geocoder), None);
                    if !picker.search(&address).await {
                        bail!("{}", picker.message().unwrap_or("no match"));
                    }
                    let picked = picker.confirm().context("no point selected")?;
                    println!("{}", picked.address);
                    picked.pair_string()
                }
                (None, None) => bail!("pass --coords or --search"),
            };
            let mut editor = ContentEditor::new(ctx, None);
            editor.refresh().await?;
            if !editor.begin_edit(id) {
                bail!("content item {id} not found");
            }
            if let Some(draft) = editor.draft_mut() {
                draft.coordinates = pair;
                if !draft.fields().coordinates {
                    bail!("content item {id} is not an address item");
                }
            }
            editor.save().await?;
            println!("Saved");
        }
        Command::DeleteCase { id } => {
            let mut editor = ContentEditor::new(ctx, Some("cases"));
            editor.refresh().await?;
            if editor.delete_case(id).await? {
                println!("Deleted");
            }
        }
        Command::Products(command) => run_products(ctx, command).await?,
        Command::Inquiries(command) => run_inquiries(ctx, command).await?,
        Command::Stats => {
            let view = DashboardView::load(&gateway).await?;
            print_json(&view.stats)?;
            for day in &view.trend {
                println!("{}  {}", day.date, day.count);
            }
            for location in &view.geo {
                println!("{:<12} {}", location.name, location.value);
            }
        }
        Command::SiteMode { mode: None } => {
            println!("{}", site_mode::current_mode(&gateway).await?.as_str());
        }
        Command::SiteMode { mode: Some(mode) } => {
            site_mode::set_mode(&gateway, mode.into()).await?;
            println!("Site mode set to {}", SiteMode::from(mode).as_str());
        }
        Command::Watch => {
            if !gateway.session().is_logged_in() {
                bail!("log in first");
            }
            let cancel = CancellationToken::new();
            let poller = UnreadPoller::spawn(gateway.clone(), config.poll_interval, cancel.clone());
            let mut updates = poller.subscribe();
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    changed = updates.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        if let Some(count) = *updates.borrow_and_update() {
                            println!("Unread inquiries: {count}");
                        }
                    }
                }
            }
            poller.stop().await;
        }
        Command::Theme => {
            let theme = gateway.session().toggle_theme()?;
            println!("Theme: {}", theme.as_str());
        }
    }
    Ok(())
}

async fn run_products(ctx: AdminContext, command: ProductCommand) -> Result<()> {
    let mut inventory = Inventory::new(ctx);
    inventory.refresh().await?;
    match command {
        ProductCommand::List => print_json(inventory.products())?,
        ProductCommand::Save {
            id,
            name,
            category,
            price,
            status,
            featured,
        } => {
            let existing = id.and_then(|id| {
                inventory
                    .products()
                    .iter()
                    .find(|p| p.id == Some(id))
                    .cloned()
            });
            if id.is_some() && existing.is_none() {
                bail!("product {} not found", id.unwrap_or_default());
            }
            let base = existing.unwrap_or_default();
            let product = Product {
                name,
                category: category.or(base.category.clone()),
                price: price.or(base.price),
                status: status.or(base.status.clone()),
                is_featured: featured || base.is_featured,
                ..base
            };
            inventory.save_product(product).await?;
            println!("Saved");
        }
        ProductCommand::Delete { id } => {
            if inventory.delete_product(id).await? {
                println!("Deleted");
            }
        }
        ProductCommand::Export { out } => {
            inventory.export_to(&out).await?;
            println!("Wrote {}", out.display());
        }
    }
    Ok(())
}

async fn run_inquiries(ctx: AdminContext, command: InquiryCommand) -> Result<()> {
    let mut desk = InquiryDesk::new(ctx);
    desk.refresh().await?;
    match command {
        InquiryCommand::List => {
            print_json(desk.inquiries())?;
            println!("{} unread", desk.unread());
        }
        InquiryCommand::Read { id } => desk.set_status(id, InquiryStatus::Read).await?,
        InquiryCommand::Unread { id } => desk.set_status(id, InquiryStatus::Unread).await?,
        InquiryCommand::Delete { id } => {
            if desk.delete(id).await? {
                println!("Deleted");
            }
        }
    }
    Ok(())
}
