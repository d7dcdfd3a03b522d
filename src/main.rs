mod cli;

use cli::{Args, Command};
use content_preview::adapters::outbound::console::StderrProgressReporter;
use content_preview::adapters::outbound::filesystem::JsonContentSource;
use content_preview::adapters::outbound::network::{
    CachingKbaRepository, HydraKbaClient, KbaClientConfig,
};
use content_preview::application::dto::{DetailRequest, OutputFormat, TableRequest};
use content_preview::application::factories::{FormatterFactory, PresenterFactory};
use content_preview::application::use_cases::{PreviewDetailUseCase, PreviewTableUseCase};
use content_preview::config::{discover_config, load_config_from_path, ConfigFile};
use content_preview::rule_preview::domain::{SortDirection, SortKey, SortState};
use content_preview::rule_preview::services::debounce::DEFAULT_DEBOUNCE;
use content_preview::rule_preview::services::JsonValidator;
use content_preview::shared::error::ExitCode;
use content_preview::shared::{logging, Result};
use serde_json::json;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    logging::init(args.verbose);

    match run(args).await {
        Ok(ExitCode::Success) => {}
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging the config file under the CLI flags
struct Settings {
    data_dir: PathBuf,
    format: OutputFormat,
    color: bool,
    debounce: Duration,
    sort: SortState,
    kba: KbaClientConfig,
}

impl Settings {
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => format.parse().map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let key = match config.default_sort.as_deref() {
            Some(sort) => sort.parse::<SortKey>()?,
            None => SortState::default().key,
        };
        let direction = match config.default_direction.as_deref() {
            Some(direction) => direction.parse::<SortDirection>().map_err(anyhow::Error::msg)?,
            None => SortDirection::default(),
        };

        let defaults = KbaClientConfig::default();
        let kba = KbaClientConfig {
            base_url: config.kba_base_url.unwrap_or(defaults.base_url),
            client_name: config.kba_client.unwrap_or(defaults.client_name),
            session_cookie: config.kba_session_cookie,
        };

        let color = !args.no_color
            && args.output.is_none()
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();

        Ok(Self {
            data_dir: args
                .data_dir
                .clone()
                .or(config.data_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            format,
            color,
            debounce: config
                .debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_DEBOUNCE),
            sort: SortState::new(key, direction),
            kba,
        })
    }
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(&args, config)?;
    tracing::debug!(
        data_dir = %settings.data_dir.display(),
        format = %settings.format,
        "resolved settings"
    );

    let formatter = FormatterFactory::create(settings.format, settings.color);
    let presenter = PresenterFactory::create(args.output.clone().into());

    let (output, code) = match args.command {
        Command::Table {
            search,
            sort,
            direction,
        } => {
            let source = JsonContentSource::new(settings.data_dir)?;
            let use_case = PreviewTableUseCase::new(source).with_debounce(settings.debounce);

            let sort = SortState::new(
                sort.unwrap_or(settings.sort.key),
                direction.unwrap_or(settings.sort.direction),
            );
            let request = TableRequest::new(sort, search.unwrap_or_default());
            let model = use_case.execute(request)?;
            (formatter.format_table(&model)?, ExitCode::Success)
        }
        Command::Detail {
            rule_id,
            select,
            free_style,
            no_kba,
            collapsed,
        } => {
            let source = JsonContentSource::new(settings.data_dir)?;
            let kba_repository = CachingKbaRepository::new(HydraKbaClient::new(settings.kba)?);
            let use_case =
                PreviewDetailUseCase::new(source, kba_repository, StderrProgressReporter::new());

            let mut request = DetailRequest::new(rule_id).with_selection(select.unwrap_or(0));
            if let Some(free_style) = free_style {
                request = request.with_free_style(free_style);
            }
            if no_kba {
                request = request.without_kba();
            }
            if collapsed {
                request = request.collapsed();
            }

            let report = use_case.execute(request).await?;
            (formatter.format_detail(&report)?, ExitCode::Success)
        }
        Command::Validate { text } => {
            let validation = JsonValidator::validate(&text);
            let code = if validation.is_valid() {
                ExitCode::Success
            } else {
                ExitCode::InvalidJson
            };
            let output = match settings.format {
                OutputFormat::Json => serde_json::to_string_pretty(&json!({
                    "validated": validation.validated(),
                    "helper_text": validation.helper_text(),
                    "value": validation.value(),
                }))?,
                OutputFormat::Text => format!(
                    "{}: {}",
                    validation.validated().as_str(),
                    validation.helper_text()
                ),
            };
            (output, code)
        }
    };

    presenter.present(&output)?;
    Ok(code)
}
