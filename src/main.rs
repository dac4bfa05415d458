use clap::Parser;
use std::process::ExitCode;
use stream_select::*;

fn init_logger_with_target_filter() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder
        .filter_level(LevelFilter::Info)
        .filter_module("rayon", LevelFilter::Off);
    // RUST_LOG directives override the defaults above
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger_with_target_filter();

    let tmr = timer!(Level::Info; "Stream compaction");
    let result = run(&args);
    finish!(tmr);

    match result {
        Ok(w) => {
            eprintln!("{}", "OK!".green().bold());
            if !args.quiet {
                println!("{}", render(&w));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "ERROR!".red().bold(), err);
            ExitCode::from(err.exit_code())
        }
    }
}
