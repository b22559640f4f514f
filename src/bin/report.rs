use anyhow::Context;
use tracing::Level;

use knowmark_registry::data::user::db::UserLoginData;
use knowmark_registry::ops::{self, UserHandle};

fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    let level = Some(Level::DEBUG);
    #[cfg(not(debug_assertions))]
    let level = Some(Level::INFO);

    let registry = knowmark_registry::create(level).context("unable to start registry")?;

    // REPORT_EMAIL/REPORT_PASSWORD pick whose report to print.
    let email = std::env::var("REPORT_EMAIL").unwrap_or("admin1@example.com".to_string());
    let password = std::env::var("REPORT_PASSWORD").unwrap_or("adminpass".to_string());

    let handle =
        ops::login(&registry, UserLoginData::new(email, password)).context("unable to log in")?;

    let out = match &handle {
        UserHandle::Admin(admin) => serde_json::to_string_pretty(&admin.report(&registry))?,
        UserHandle::Teacher(teacher) => serde_json::to_string_pretty(&teacher.report(&registry))?,
        UserHandle::Student(student) => {
            serde_json::to_string_pretty(&student.grades(&registry))?
        }
    };
    println!("{}", out);

    Ok(())
}
