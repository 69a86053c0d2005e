// Ad hoc probe: look a user up by name and print their average karma.
//
// Usage: cargo run -p qboard --example karma_report -- Ada Lovelace
// The store path comes from QBOARD_DB, defaulting to ./qboard.db.

use qboard::config::DatabaseConfig;
use qboard::db::repositories::UserRepository;
use qboard::db::DbPool;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    qboard::telemetry::init_logging("info")?;

    let mut args = env::args().skip(1);
    let fname = args.next().unwrap_or_else(|| "Ada".to_string());
    let lname = args.next().unwrap_or_else(|| "Lovelace".to_string());

    let path = env::var("QBOARD_DB").unwrap_or_else(|_| "qboard.db".to_string());
    println!("Opening {}", path);

    let config = DatabaseConfig {
        path,
        create_if_missing: false,
        max_connections: 1,
        min_connections: 1,
        connect_timeout_seconds: 5,
    };

    let pool = DbPool::new(&config).await?;
    let users = UserRepository::new(pool.clone());

    match users.find_by_name(&fname, &lname).await? {
        Some(user) => {
            let karma = match user.id {
                Some(id) => users.average_karma(id).await?,
                None => None,
            };

            match karma {
                Some(karma) => {
                    println!("{} {}: average karma {:.2}", user.fname, user.lname, karma)
                }
                None => println!("{} {} has not asked any questions yet", user.fname, user.lname),
            }
        }
        None => println!("No user named {} {}", fname, lname),
    }

    pool.close().await;
    Ok(())
}
