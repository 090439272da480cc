mod cli;
mod config;

use cli::{Args, Command};
use config::{discover_config, load_config_from_path, ConfigFile, Settings};
use solar_verify::adapters::outbound::catalog::{BuiltinCatalogSource, FileCatalogSource};
use solar_verify::adapters::outbound::console::StderrReporter;
use solar_verify::application::dto::{DetectRequest, DirectoryRequest};
use solar_verify::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use solar_verify::application::read_models::CatalogReadModel;
use solar_verify::application::use_cases::{
    AuditCatalogUseCase, BrowseDirectoryUseCase, DetectBrandUseCase, LoadCatalogUseCase,
};
use solar_verify::brand_catalog::domain::Catalog;
use solar_verify::brand_catalog::policies::MatchPolicy;
use solar_verify::ports::outbound::StatusReporter;
use solar_verify::shared::error::ExitCode;
use solar_verify::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let settings = Settings::resolve(&args, config.as_ref())?;

    let color_allowed = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    let reporter = StderrReporter::new(
        settings.quiet,
        color_allowed && std::io::stderr().is_terminal(),
    );

    if let Some(config) = &config {
        for warning in config.unknown_field_warnings() {
            reporter.report_warning(&warning);
        }
    }

    let catalog = match &settings.catalog {
        Some(path) => {
            LoadCatalogUseCase::new(FileCatalogSource::new(path.clone()), reporter).execute()?
        }
        None => LoadCatalogUseCase::new(BuiltinCatalogSource::new(), reporter).execute()?,
    };

    let model = dispatch(&args.command, &catalog, settings.policy);

    // Colors only make sense on an interactive stdout
    let colored = color_allowed && args.output.is_none() && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, colored);
    let rendered = formatter.format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&rendered)?;
    if let Some(path) = &args.output {
        reporter.report_completion(&format!("✅ Output complete: {}", path.display()));
    }

    Ok(if model.is_match() {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}

/// Explicit `--config` must exist; otherwise the working directory is searched
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(Path::new(".")),
    }
}

fn dispatch(command: &Command, catalog: &Catalog, policy: MatchPolicy) -> CatalogReadModel {
    match command {
        Command::Detect { serial } => CatalogReadModel::Detection(
            DetectBrandUseCase::new(catalog).execute(&DetectRequest::new(serial.as_str(), policy)),
        ),
        Command::List { category } => CatalogReadModel::Directory(
            BrowseDirectoryUseCase::new(catalog).execute(&DirectoryRequest::new(None, category.0)),
        ),
        Command::Search { query, category } => CatalogReadModel::Directory(
            BrowseDirectoryUseCase::new(catalog)
                .execute(&DirectoryRequest::new(Some(query.clone()), category.0)),
        ),
        Command::Show { id } => match BrowseDirectoryUseCase::new(catalog).show(id) {
            Some(brand) => CatalogReadModel::Brand(brand),
            None => CatalogReadModel::BrandNotFound { id: id.clone() },
        },
        Command::Prefixes => {
            CatalogReadModel::PrefixGuide(BrowseDirectoryUseCase::new(catalog).prefix_guide())
        }
        Command::Audit => CatalogReadModel::Audit(AuditCatalogUseCase::new(catalog).execute()),
    }
}
