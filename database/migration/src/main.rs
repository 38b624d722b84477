use database_migration::Migrator;

enum ActionEnum {
    Up,
    Down,
}

const CONFIG_ENV_PREFIX: &str = "MIGRATION";
const CONFIG_ENV_SEPARATOR: &str = "__";
const CONFIG: &str = "config";
const ACTION_KEY: &str = "migrate.action";
const ACTION_UP: &str = "up";
const ACTION_DOWN: &str = "down";
const DB_CON: &str = "migrate.dbcon";

#[tokio::main]
async fn main() {
    let config = match config::Config::builder()
        .add_source(
            config::File::with_name(CONFIG).required(false).format(config::FileFormat::Yaml),
        )
        .add_source(
            config::Environment::with_prefix(CONFIG_ENV_PREFIX).separator(CONFIG_ENV_SEPARATOR),
        )
        .build()
    {
        Ok(config) => config,
        Err(e) => return eprintln!("Cannot build config: {e}"),
    };
    let action = config.get_string(ACTION_KEY).unwrap_or_else(|_| ACTION_UP.to_string());
    let db_con = match config.get_string(DB_CON) {
        Ok(db_con) => db_con,
        Err(e) => return eprintln!("{DB_CON} is required: {e}"),
    };
    let action = match action.as_str() {
        ACTION_UP => ActionEnum::Up,
        ACTION_DOWN => ActionEnum::Down,
        _ => {
            return eprintln!(
                "{ACTION_KEY} must be {ACTION_UP} or {ACTION_DOWN}, got {action}"
            );
        }
    };
    let result = match action {
        ActionEnum::Up => Migrator::migration_up(&db_con).await,
        ActionEnum::Down => Migrator::migration_down(&db_con).await,
    };
    if let Err(e) = result {
        eprintln!("{e}");
    }
}
