use clap::Parser;
use searchup::cli::{Cli, UsageError};
use searchup::config::Config;
use searchup::logging;
use searchup::output::{self, SearchResult};
use searchup::search::{self, SearchQuery};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let first_only = cli.first_only || config.first_only;
    let json_output = cli.json || config.json;

    let cwd = std::env::current_dir().map_err(UsageError::WorkingDir)?;

    let query = SearchQuery::new(cli.filename.as_os_str(), cwd.as_path())
        .with_stop_at_first(first_only);
    let paths = search::search_up(query)?;

    if json_output {
        output::print_json(&SearchResult::new(&cli.filename, &cwd, first_only, &paths));
    } else {
        let stdout = std::io::stdout();
        output::write_paths(&mut stdout.lock(), &paths)?;
    }

    Ok(())
}
