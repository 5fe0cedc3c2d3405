use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // Migrations must target the path init_all just recorded, not a
    // cwd-relative reading of the raw argument.
    let database = Config::resolve_db_path(cli.db.as_deref());

    let pool = DbPool::new(&database.to_string_lossy())?;
    init_db(&pool.conn)?;
    ttlog(&pool.conn, "init", "", "Initialized attendance database")?;

    success("Database initialized.");
    Ok(())
}
