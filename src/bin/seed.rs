//! Sample-data loader for local development: a handful of campers,
//! activities, and signups. The API itself has no activity-creation
//! endpoint, so this is how a fresh database gets something to sign up for.

use camp_signups::models::{NewCamper, NewSignup};
use camp_signups::service::{activities, campers, signups};
use camp_signups::{apply_migrations, ensure_database_exists, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("camp_signups=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = camp_signups::store::connect(&config).await?;
    apply_migrations(&pool).await?;

    let activity_ids = [
        activities::create(&pool, Some("Archery"), Some(2)).await?.id,
        activities::create(&pool, Some("Canoeing"), Some(3)).await?.id,
        activities::create(&pool, Some("Arts and Crafts"), Some(1)).await?.id,
    ];

    let roster: &[(&str, i64)] = &[("Amy", 12), ("Caitlin", 10), ("Jorge", 15), ("Priya", 9)];
    let mut camper_ids = Vec::with_capacity(roster.len());
    for (name, age) in roster {
        let camper = campers::create(
            &pool,
            &NewCamper {
                name: Some((*name).to_string()),
                age: Some(*age),
            },
        )
        .await?;
        camper_ids.push(camper.id);
    }

    for (i, camper_id) in camper_ids.iter().enumerate() {
        signups::create(
            &pool,
            &NewSignup {
                camper_id: Some(*camper_id),
                activity_id: Some(activity_ids[i % activity_ids.len()]),
                time: Some((9 + i as i64) % 24),
            },
        )
        .await?;
    }

    tracing::info!(
        campers = camper_ids.len(),
        activities = activity_ids.len(),
        "seeded"
    );
    Ok(())
}
