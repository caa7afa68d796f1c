use anyhow::Result;
use portfolio_content::config::Config;
use portfolio_content::fetch::SectionFetcher;
use portfolio_content::navigator::MemoryNavigator;
use portfolio_content::resolver::ContentResolver;
use portfolio_content::store::FileStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_content=info".parse()?),
        )
        .init();

    info!("Starting content resolution preview");

    // Load configuration from environment
    let config = Config::from_env()?;
    let client = reqwest::Client::new();

    let resolver = ContentResolver::new(
        client.clone(),
        config.clone(),
        Box::new(FileStore::new(&config.lang_store_path)),
        Box::new(MemoryNavigator::from_address(config.initial_url.as_deref())),
    );

    // Defaults are available synchronously, before any network activity
    info!(
        "Seeded with default language '{}' and compiled-in content",
        resolver.language()
    );

    resolver.resolve_initial().await;
    let state = resolver.snapshot();
    info!(
        "Resolved language '{}' ({}), hero title: {}",
        state.language,
        state.language.native_name(),
        state.content.hero.title
    );

    // Each leaf section fetches its own supplementary resource independently
    let sections = SectionFetcher::new(client, config);
    let lang = state.language;
    let (skills, experiences, universe, showcase, interests, playlist) = futures::join!(
        sections.skills(lang),
        sections.experiences(lang),
        sections.universe_projects(lang),
        sections.freelance_showcase(lang),
        sections.interests(),
        sections.music_playlist(),
    );

    info!(
        "Sections resolved: {} skills, {} experiences, {} universe projects, {} showcase items, {} tracks",
        skills.len(),
        experiences.len(),
        universe.len(),
        showcase.len(),
        playlist.len()
    );
    info!("Interests: {}", interests.title);

    Ok(())
}
