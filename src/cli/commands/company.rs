use crate::cli::parser::{Commands, CompanyAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{get_company, insert_company, list_companies, update_company};
use crate::errors::AppResult;
use crate::models::company::Company;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Company { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    match action {
        CompanyAction::Add {
            name,
            lat,
            lon,
            radius,
            office_tag,
        } => {
            let company = Company {
                id: 0,
                name: name.clone(),
                lat: *lat,
                lon: *lon,
                radius_m: radius.unwrap_or(cfg.policy.default_radius_m),
                office_tag: office_tag.clone(),
            };
            let id = insert_company(&pool.conn, &company)?;
            success(format!("Company '{}' created with id {}.", name, id));
        }

        CompanyAction::Set {
            id,
            lat,
            lon,
            radius,
            office_tag,
            clear_office_tag,
        } => {
            let mut company = get_company(&pool.conn, *id)?;

            if lat.is_some() {
                company.lat = *lat;
            }
            if lon.is_some() {
                company.lon = *lon;
            }
            if let Some(r) = radius {
                company.radius_m = *r;
            }
            if let Some(tag) = office_tag {
                company.office_tag = Some(tag.clone());
            }
            if *clear_office_tag {
                company.office_tag = None;
            }

            update_company(&pool.conn, &company)?;
            success(format!("Company {} updated.", id));
        }

        CompanyAction::List => {
            for c in list_companies(&pool.conn)? {
                let center = match c.geofence_center() {
                    Some((lat, lon)) => format!("({lat:.5}, {lon:.5}) r={}m", c.radius_m),
                    None => "no geofence".to_string(),
                };
                let mode = if c.office_mode() { "office-tag" } else { "personal" };
                println!("{:>4}  {:<24} {:<28} {}", c.id, c.name, center, mode);
            }
        }
    }

    Ok(())
}
