use crate::cli::args::{CheckArgs, DeriveArgs, DumpArgs, LookupArgs, OutputFormat};
use crate::config::Config;
use crate::logging;
use crate::source::path::{derive_original_filename, overlap_len};
use crate::source::reader::ResourceLocator;
use crate::ui::formatter::Formatter;
use miette::{IntoDiagnostic, Result};

fn print_info(message: impl AsRef<str>) {
    if Formatter::is_verbose() {
        eprintln!("{}", Formatter::info(message));
    }
}

fn print_success(message: impl AsRef<str>) {
    if !Formatter::is_quiet() {
        println!("{}", Formatter::success(message));
    }
}

/// Execute the derive command
pub fn derive(args: DeriveArgs) -> Result<()> {
    let prefix = args.source_root.unwrap_or_default();
    let overlap = overlap_len(&prefix, &args.relative);
    let derived = derive_original_filename(&prefix, &args.relative);

    logging::log_derived_filename(&prefix, &args.relative, overlap, &derived);
    print_info(format!(
        "Source root {:?} shares {} segment(s) with {:?}",
        prefix, overlap, args.relative
    ));

    println!("{}", derived);
    Ok(())
}

/// Execute the lookup command
pub fn lookup(args: LookupArgs, config: &Config) -> Result<()> {
    let reader = args.source.reader(config);
    print_info(format!(
        "Reading {} from {}",
        reader.resource(),
        reader.locator().describe()
    ));
    let source_map = reader.read_source_map()?;

    match source_map.get(&args.key) {
        Some(original) => println!("{}", original),
        None if args.or_self => {
            logging::log_lookup_miss(&args.key);
            println!("{}", source_map.resolve(&args.key));
        }
        None => {
            logging::log_lookup_miss(&args.key);
            return Err(miette::miette!(
                help = "Run `srcmap dump` to list every instrumented path",
                "No source map entry for `{}`",
                args.key
            ));
        }
    }
    Ok(())
}

/// Execute the dump command
pub fn dump(args: DumpArgs, config: &Config) -> Result<()> {
    let source_map = args.source.reader(config).read_source_map()?;

    match args.format.unwrap_or(OutputFormat::Text) {
        OutputFormat::Text => {
            for (instrumented, original) in source_map.iter() {
                println!("{}", Formatter::format_mapping_entry(instrumented, original));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&source_map).into_diagnostic()?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Execute the check command
pub fn check(args: CheckArgs, config: &Config) -> Result<()> {
    let reader = args.source.reader(config);
    let source_map = reader.read_source_map()?;

    logging::log_display(
        Formatter::format_entry_count(reader.resource(), source_map.len()),
        logging::LogLevel::Debug,
    );
    print_success(Formatter::format_entry_count(
        reader.resource(),
        source_map.len(),
    ));
    Ok(())
}
