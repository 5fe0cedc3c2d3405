use crate::cli::parser::{Commands, ScheduleAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_schedule, insert_time_slot, slots_for_schedule};
use crate::errors::AppResult;
use crate::models::schedule::{Schedule, TimeSlot};
use crate::ui::messages::success;
use crate::utils::date::{parse_weekday, weekday_name};
use crate::utils::formatting::format_secs;
use crate::utils::time::parse_time_required;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Schedule { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    match action {
        ScheduleAction::Add { name, company } => {
            let schedule = Schedule {
                id: 0,
                company_id: *company,
                name: name.clone(),
            };
            let id = insert_schedule(&pool.conn, &schedule)?;
            success(format!("Schedule '{}' created with id {}.", name, id));
        }

        ScheduleAction::Slot {
            schedule,
            weekday,
            entry,
            exit,
        } => {
            let slot = TimeSlot {
                schedule_id: *schedule,
                weekday: parse_weekday(weekday)?,
                entry: parse_time_required(entry)?,
                exit: parse_time_required(exit)?,
            };
            insert_time_slot(&pool.conn, &slot)?;

            let crossing = if slot.crosses_midnight() {
                " (crosses midnight)"
            } else {
                ""
            };
            success(format!(
                "Slot added to schedule {}: {} {} → {}{}.",
                schedule,
                weekday_name(slot.weekday),
                entry,
                exit,
                crossing
            ));
        }

        ScheduleAction::List { schedule } => {
            let slots = slots_for_schedule(&pool.conn, *schedule)?;
            if slots.is_empty() {
                println!("No slots for schedule {}.", schedule);
                return Ok(());
            }

            for s in slots {
                println!(
                    "{:<10} {} → {}  ({})",
                    weekday_name(s.weekday),
                    s.entry.format("%H:%M"),
                    s.exit.format("%H:%M"),
                    format_secs(s.duration_secs())
                );
            }
        }
    }

    Ok(())
}
