//! Prints one page of a member's plan calendar as JSON.

use std::env;

use chrono::Local;
use clap::Parser;
use config::Config;
use dotenvy::dotenv;

use smokefree_planner::domain::types::MemberId;
use smokefree_planner::forms::pagination::PageQueryForm;
use smokefree_planner::models::config::AppConfig;
use smokefree_planner::repository::JsonRepository;
use smokefree_planner::services::calendar::load_plan_calendar_page;

#[derive(Debug, Parser)]
#[command(name = "plan_calendar", version)]
#[command(about = "Prints one page of a member's plan calendar as JSON", long_about = None)]
struct Cli {
    /// Member whose plan is loaded
    #[arg(value_parser = parse_member_id)]
    member_id: MemberId,

    /// Page to print, 1-based
    #[arg(short, long)]
    page: Option<usize>,

    /// Entries per page, overrides the configured size
    #[arg(short = 'n', long)]
    per_page: Option<usize>,
}

impl Cli {
    fn page_query(&self) -> PageQueryForm {
        PageQueryForm {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

fn parse_member_id(value: &str) -> Result<MemberId, String> {
    let id = value
        .parse::<i32>()
        .map_err(|err| format!("invalid member id: {err}"))?;
    MemberId::new(id).map_err(|err| err.to_string())
}

fn main() {
    let cli = Cli::parse();

    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {}", err);
            std::process::exit(1);
        }
    };

    let member_id = cli.member_id;
    let form = cli.page_query();

    let repo = JsonRepository::new(&app_config.plans_dir);
    log::info!("Reading plans from {}", repo.plans_dir().display());
    let today = Local::now().date_naive();

    let data = match load_plan_calendar_page(&repo, member_id, form, &app_config, today) {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to load plan calendar for member {member_id}: {err}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&data) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to serialize plan calendar: {err}");
            std::process::exit(1);
        }
    }
}
