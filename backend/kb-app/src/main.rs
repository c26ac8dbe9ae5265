use kb_app::App;

use std::error::Error;

use chrono::Utc;
use log::info;

const DEFAULT_PROJECT_NAME: &str = "My Project";

fn main() -> Result<(), Box<dyn Error>> {
    let mut app = App::bootstrap()?;

    if app.registry().current_project().is_none() {
        app.registry_mut().create_project(DEFAULT_PROJECT_NAME, "");
    }

    let reminders = app.check_due_dates(Utc::now());
    info!("{} due date reminder(s)", reminders.len());

    if let Some(project) = app.registry().current_project() {
        println!("{project}");
    }

    Ok(())
}
