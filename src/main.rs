use clap::Parser;
use pattern_catalog::utils::{logger, validation::Validate};
use pattern_catalog::{
    render, render_listing, Catalog, CatalogConfig, CatalogError, CatalogRunner, Category,
    CliConfig, Command, OutputFormat,
};

fn parse_category(name: Option<&str>) -> Result<Option<Category>, CatalogError> {
    name.map(str::parse::<Category>).transpose()
}

fn execute(config: &CliConfig) -> Result<(), CatalogError> {
    let catalog_config = CatalogConfig::load_or_default(config.config.as_ref())?;
    catalog_config.validate()?;

    let runner = CatalogRunner::new(Catalog::from_config(&catalog_config));
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    match &config.command {
        Command::List { category } => {
            let category = parse_category(category.as_deref())?;
            render_listing(&runner.catalog().infos(category), config.format, &mut stdout)?;
        }
        Command::Run { names } => {
            let reports = runner.run_many(names)?;
            render(&reports, config.format, &mut stdout)?;
        }
        Command::All { category } => {
            let reports = match parse_category(category.as_deref())? {
                Some(category) => runner.run_category(category)?,
                None => runner.run_all()?,
            };
            tracing::info!("✅ Ran {} demos", reports.len());
            render(&reports, config.format, &mut stdout)?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Json => logger::init_json_logger(config.verbose),
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = execute(&config) {
        tracing::error!("❌ {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
