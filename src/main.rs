use clap::Parser;
use doctor_directory::core::QueryStore;
use doctor_directory::utils::{logger, validation::Validate};
use doctor_directory::{
    CliConfig, Directory, DirectoryError, DoctorCard, HttpDoctorSource, InMemoryHistory,
    TomlConfig, ViewStatus,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting doctor-directory CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        match TomlConfig::from_file(&path).and_then(|file| file.validate().map(|_| file)) {
            Ok(file) => config.apply_file_config(&file),
            Err(e) => exit_with(&e),
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let source = match HttpDoctorSource::from_config(&config) {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };

    tracing::info!("Fetching doctors from {}", source.endpoint());
    let mut directory = Directory::new(InMemoryHistory::with_query(config.query.clone()));
    directory.load_from(&source).await;

    if let Some(partial) = &config.suggest {
        let cards: Vec<DoctorCard> = directory
            .suggestions(partial)
            .into_iter()
            .map(DoctorCard::from)
            .collect();
        print_cards(&cards, config.json)?;
        return Ok(());
    }

    if config.list_specialties {
        for specialty in directory.specialties() {
            println!("{}", specialty);
        }
        return Ok(());
    }

    // 命令列旗標視為使用者操作，逐一套用並同步到網址
    if let Some(search) = &config.search {
        directory.set_search(search.clone());
    }
    if let Some(mode) = config.consultation_type()? {
        directory.set_consultation_type(Some(mode));
    }
    for specialty in &config.specialty {
        directory.toggle_specialty(specialty, true);
    }
    if let Some(sort_by) = config.sort_by()? {
        directory.set_sort_by(Some(sort_by));
    }

    let cards: Vec<DoctorCard> = directory.visible().into_iter().map(DoctorCard::from).collect();
    match directory.status() {
        ViewStatus::Loading => println!("Loading doctors..."),
        ViewStatus::NoResults => println!("No doctors found matching your criteria"),
        ViewStatus::Results(n) => {
            tracing::info!("✅ {} doctors match", n);
            print_cards(&cards, config.json)?;
        }
    }

    println!("?{}", directory.store().current());
    Ok(())
}

fn print_cards(cards: &[DoctorCard], json: bool) -> Result<(), DirectoryError> {
    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
    } else {
        for card in cards {
            println!("{}", card);
        }
    }
    Ok(())
}

fn exit_with(e: &DirectoryError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
