mod cli;
mod config;
mod logger;

use clap::CommandFactory;
use cli::{Args, Command, EnlistArgs, FilterArgs, GraphArgs, OutputArgs, ParseArgs};
use config::ConfigFile;
use deptree::adapters::outbound::console::StderrProgressReporter;
use deptree::adapters::outbound::filesystem::FileSystemReader;
use deptree::application::dto::{
    FilterRequest, GraphRequest, ListRequest, OutputFormat, ParseRequest, TreeSource,
};
use deptree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use deptree::application::use_cases::{
    BuildGraphUseCase, FilterTreeUseCase, ListDependenciesUseCase, ParseReportUseCase,
};
use deptree::ports::outbound::ProgressReporter;
use deptree::shared::error::ExitCode;
use deptree::shared::Result;
use std::process;

fn main() {
    let args = Args::parse_args();

    let color = !args.no_color && logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, !color);
    let reporter = StderrProgressReporter::new()
        .with_color(color)
        .with_quiet(args.quiet);

    if let Err(e) = run(args, reporter) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args, reporter: StderrProgressReporter) -> Result<()> {
    let config = load_config(&args, reporter)?;

    match args.command {
        Command::Parse(parse) => run_parse(parse, &config, reporter),
        Command::Filter(filter) => run_filter(filter, &config, reporter),
        Command::Graph(graph) => run_graph(graph, &config, reporter),
        Command::Enlist(enlist) => run_enlist(enlist, &config, reporter),
    }
}

fn load_config(args: &Args, reporter: StderrProgressReporter) -> Result<ConfigFile> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };

    for key in config.unknown_fields.keys() {
        reporter.report_warning(&format!("Unknown config field '{}' will be ignored.", key));
    }
    Ok(config)
}

fn run_parse(
    args: ParseArgs,
    config: &ConfigFile,
    reporter: StderrProgressReporter,
) -> Result<()> {
    let use_case = ParseReportUseCase::new(FileSystemReader::new(), reporter);
    let request = ParseRequest::new(args.input, config.header_pattern(args.header_pattern));
    let response = use_case.execute(request)?;

    let format = args.output.format.unwrap_or(OutputFormat::Json);
    let content = FormatterFactory::create(format).format_tree(&response.forest)?;
    present(&content, args.output, format, reporter)
}

fn run_filter(
    args: FilterArgs,
    config: &ConfigFile,
    reporter: StderrProgressReporter,
) -> Result<()> {
    let mode = config.tree_filter(
        args.tree_filter.filter.as_deref(),
        args.tree_filter.project_only,
    );
    if mode.is_none() {
        Args::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "Either --filter or --project-only must be specified (or set keywords/project_only in the config file)",
            )
            .exit();
    }

    let use_case = FilterTreeUseCase::new(FileSystemReader::new(), reporter);
    let response = use_case.execute(FilterRequest::new(args.tree, mode))?;

    let format = args.output.format.unwrap_or(OutputFormat::Json);
    let content = FormatterFactory::create(format).format_tree(&response.forest)?;
    present(&content, args.output, format, reporter)
}

fn run_graph(
    args: GraphArgs,
    config: &ConfigFile,
    reporter: StderrProgressReporter,
) -> Result<()> {
    let use_case =
        BuildGraphUseCase::new(FileSystemReader::new(), FileSystemReader::new(), reporter);
    let source = TreeSource::detect(args.input, config.header_pattern(args.header_pattern));
    let request = GraphRequest::new(
        source,
        config.tree_filter(
            args.tree_filter.filter.as_deref(),
            args.tree_filter.project_only,
        ),
        config.exclude(args.exclude),
        config.distance(args.distance),
    );

    let Some(graph) = use_case.execute(request)?.graph else {
        // Already reported as a warning; nothing to write.
        return Ok(());
    };

    let format = args.output.format.unwrap_or(OutputFormat::Json);
    let content = FormatterFactory::create(format).format_graph(&graph)?;
    present(&content, args.output, format, reporter)
}

fn run_enlist(
    args: EnlistArgs,
    config: &ConfigFile,
    reporter: StderrProgressReporter,
) -> Result<()> {
    let use_case =
        ListDependenciesUseCase::new(FileSystemReader::new(), FileSystemReader::new(), reporter);
    let source = TreeSource::detect(args.input, config.header_pattern(args.header_pattern));
    let response = use_case.execute(ListRequest::new(source))?;

    let format = args.output.format.unwrap_or(OutputFormat::Yaml);
    let content = FormatterFactory::create(format).format_list(&response.list)?;
    present(&content, args.output, format, reporter)
}

fn present(
    content: &str,
    output: OutputArgs,
    format: OutputFormat,
    reporter: StderrProgressReporter,
) -> Result<()> {
    reporter.report(FormatterFactory::progress_message(format));

    let target = PresenterType::from_output(output.output);
    PresenterFactory::create(target.clone()).present(content)?;

    if let PresenterType::File(path) = target {
        reporter.report_completion(&format!("Output written to: {}", path.display()));
    }
    Ok(())
}
