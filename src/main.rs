use anyhow::Context;
use npm_stats::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
use npm_stats::adapters::outbound::network::{
    BundlephobiaClient, CachingPackageRegistry, GitHubClient, NpmDownloadsClient,
    NpmRegistryClient, NpmsClient, DEFAULT_BUNDLEPHOBIA_URL, DEFAULT_CACHE_TTL,
    DEFAULT_DOWNLOADS_URL, DEFAULT_GITHUB_API_URL, DEFAULT_NPMS_URL, DEFAULT_REGISTRY_URL,
};
use npm_stats::application::dto::{OutputFormat, StatsRequest, DEFAULT_TOP_VERSIONS};
use npm_stats::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use npm_stats::application::read_models::{Report, ReportBody};
use npm_stats::application::use_cases::{
    ComparePackagesUseCase, FetchDependencyTreeUseCase, FetchPackageMetadataUseCase,
    FetchPackageStatsUseCase, SearchPackagesUseCase, DEFAULT_MAX_DEPTH,
};
use npm_stats::cli::{Args, Command};
use npm_stats::config::{self, ConfigFile};
use npm_stats::ports::outbound::ProgressReporter;
use npm_stats::shared::error::ExitCode;
use npm_stats::shared::Result;
use npm_stats::stats_analysis::services::ReportGenerator;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

/// Effective options after merging CLI flags, config file and defaults
struct Settings {
    format: OutputFormat,
    max_depth: usize,
    top_versions: usize,
    cache_ttl: Duration,
    registry_url: String,
    downloads_url: String,
    github_api_url: String,
    bundlephobia_url: String,
    npms_url: String,
    github_token: Option<String>,
}

impl Settings {
    fn resolve(args: &Args, config: ConfigFile) -> Self {
        Self {
            format: args
                .format
                .or_else(|| config.output_format())
                .unwrap_or_default(),
            max_depth: config.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            top_versions: config.top_versions.unwrap_or(DEFAULT_TOP_VERSIONS),
            cache_ttl: config
                .cache_ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_CACHE_TTL),
            github_token: config.resolve_github_token(),
            registry_url: config
                .registry_url
                .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            downloads_url: config
                .downloads_url
                .unwrap_or_else(|| DEFAULT_DOWNLOADS_URL.to_string()),
            github_api_url: config
                .github_api_url
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            bundlephobia_url: config
                .bundlephobia_url
                .unwrap_or_else(|| DEFAULT_BUNDLEPHOBIA_URL.to_string()),
            npms_url: config
                .npms_url
                .unwrap_or_else(|| DEFAULT_NPMS_URL.to_string()),
        }
    }

    fn registry(&self) -> Result<CachingPackageRegistry<NpmRegistryClient>> {
        Ok(CachingPackageRegistry::with_ttl(
            NpmRegistryClient::with_base_url(self.registry_url.as_str())?,
            self.cache_ttl,
        ))
    }

    fn downloads(&self) -> Result<NpmDownloadsClient> {
        NpmDownloadsClient::with_base_url(self.downloads_url.as_str())
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config);

    // Create adapters and execute the use case (Dependency Injection)
    let body = if args.quiet {
        execute(&args.command, &settings, QuietProgressReporter).await?
    } else {
        execute(&args.command, &settings, StderrProgressReporter::new()).await?
    };

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }

    let report = Report::new(&ReportGenerator::generate_default_metadata(), body);
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn load_config(explicit_path: Option<&Path>) -> Result<ConfigFile> {
    match explicit_path {
        Some(path) => config::load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

async fn execute<P: ProgressReporter>(
    command: &Command,
    settings: &Settings,
    progress_reporter: P,
) -> Result<ReportBody> {
    match command {
        Command::Stats {
            package,
            dates,
            granularity,
            top_versions,
        } => {
            let use_case = FetchPackageStatsUseCase::new(
                settings.downloads()?,
                settings.registry()?,
                progress_reporter,
            );
            let request = StatsRequest::new(package.as_str(), dates.selection())
                .with_granularity(*granularity)
                .with_top_versions(top_versions.unwrap_or(settings.top_versions));
            Ok(ReportBody::Stats(use_case.execute(request).await?))
        }
        Command::Tree { package, depth } => {
            let use_case = FetchDependencyTreeUseCase::new(settings.registry()?, progress_reporter);
            let tree = use_case
                .execute(package, depth.unwrap_or(settings.max_depth))
                .await?;
            Ok(ReportBody::DependencyTree(tree))
        }
        Command::Info { package } => {
            let use_case = FetchPackageMetadataUseCase::new(
                settings.registry()?,
                NpmsClient::with_base_url(settings.npms_url.as_str())?,
                BundlephobiaClient::with_base_url(settings.bundlephobia_url.as_str())?,
                GitHubClient::with_base_url(
                    settings.github_api_url.as_str(),
                    settings.github_token.as_deref(),
                )?,
                progress_reporter,
            );
            Ok(ReportBody::Metadata(Box::new(use_case.execute(package).await?)))
        }
        Command::Search { query, size } => {
            let use_case = SearchPackagesUseCase::new(settings.registry()?, progress_reporter);
            Ok(ReportBody::Search(use_case.execute(query, *size).await))
        }
        Command::Compare {
            packages,
            dates,
            granularity,
        } => {
            let stats = FetchPackageStatsUseCase::new(
                settings.downloads()?,
                settings.registry()?,
                progress_reporter,
            );
            let comparison = ComparePackagesUseCase::new(stats)
                .execute(packages, &dates.selection(), *granularity)
                .await?;
            Ok(ReportBody::Comparison(comparison))
        }
    }
}
