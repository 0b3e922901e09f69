use clap::Parser;
use course_catalog::adapters::visitor::fetch_visitor_count;
use course_catalog::utils::{logger, validation::Validate};
use course_catalog::{resolve, CatalogStore, CliConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting course-catalog CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Load once; an invalid catalog is fatal and must not be served.
    let store = match &config.catalog {
        Some(path) => CatalogStore::from_file(path),
        None => CatalogStore::load(),
    };
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Catalog load failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if config.list_domains {
        let mut names: Vec<&str> = store.domain_names().collect();
        names.sort_unstable();
        for name in names {
            println!("{}", name);
        }
        return Ok(());
    }

    // Validation above guarantees a domain unless --list-domains was given.
    let Some(domain) = config.domain.as_deref() else {
        return Ok(());
    };

    let courses = match resolve(&store, domain, config.level) {
        Ok(courses) => courses,
        Err(e) => {
            tracing::error!("Resolution failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(courses)?);
    } else {
        println!("Recommendations for '{}' ({}):", domain, config.level);
        for (index, course) in courses.iter().enumerate() {
            println!(
                "{}. {} — {} ({}, rated {:.1})",
                index + 1,
                course.title,
                course.platform,
                course.duration,
                course.rating
            );
            println!("   {}", course.outcome);
            println!("   {}", course.link);
        }
    }

    if let Some(api_base) = &config.api_base {
        let client = reqwest::Client::new();
        match fetch_visitor_count(&client, api_base).await {
            Some(count) => println!("\nTotal visitors: {}", count),
            None => tracing::debug!("No visitor count available"),
        }
    }

    Ok(())
}
