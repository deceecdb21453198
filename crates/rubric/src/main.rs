use clap::Parser;
use rubric::check::{load_answer, parse_overrides, run_checks, AnswerSource};
use rubric::cli::Cli;
use rubric::output::Output;
use rubric::Registry;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = if cli.strict {
        Registry::strict()
    } else {
        Registry::default()
    };
    let source = match (&cli.answer, &cli.answer_file) {
        (_, Some(path)) => AnswerSource::File(path.clone()),
        (Some(json), None) => AnswerSource::Inline(json.clone()),
        (None, None) => anyhow::bail!("one of --answer or --answer-file is required"),
    };

    let answer = load_answer(&source, &registry)?;
    let overrides = parse_overrides(&cli.options)?;
    let results = run_checks(&answer, &cli.candidates, cli.json, &overrides)?;

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);
    for result in &results {
        output.print_result(result)?;
    }
    output.print_summary(&results)?;

    let all_matched = results.iter().all(|r| r.outcome.is_match());
    std::process::exit(if all_matched { 0 } else { 1 });
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "rubric=debug,rubric_answer=debug"
    } else {
        "rubric=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
