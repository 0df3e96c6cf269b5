use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use tracetree::cli::args::Cli;
use tracetree::cli::output;
use tracetree::{ContactTree, TreeNodeConvert, TreeResult};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run_demo() {
        output::error(&e);
        std::process::exit(1);
    }
}

/// Reference outbreak scenario: one root, three exposure chains, then a
/// cascading removal of one contact.
fn run_demo() -> TreeResult<()> {
    let mut tree = ContactTree::new();

    tree.add_root("A");
    tree.add_contact("A", "B")?;
    tree.add_contact("A", "C")?;
    tree.add_contact("A", "D")?;
    tree.add_contact("B", "childrenB1")?;
    tree.add_contact("C", "childrenC1")?;
    tree.add_contact("C", "childrenC2")?;
    tree.add_contact("D", "childrenD1")?;
    tree.add_contact("D", "childrenD2")?;
    tree.add_contact("D", "childrenD3")?;

    output::header("Initial contact tree:");
    print_hierarchy(&tree)?;
    output::info(&tree.to_tree_string());

    output::header("\nContact tree after removing 'childrenD1':");
    tree.remove_contact("childrenD1")?;
    print_hierarchy(&tree)?;
    output::info(&tree.to_tree_string());

    Ok(())
}

/// Indented full-hierarchy report: two dashes per exposure level, then the
/// per-case statistics block.
fn print_hierarchy(tree: &ContactTree) -> TreeResult<()> {
    if tree.is_empty() {
        output::detail("There is no root, so there is no contact tree.");
        return Ok(());
    }
    for (_, node, depth) in tree.iter() {
        let report = tree.describe(&node.id)?;
        println!("{}{}", "--".repeat(depth), report);
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
