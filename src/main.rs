use clap::{value_t, App, Arg};

use anyhow::Error;

use searcher::SearchError;

mod map;
mod table;

fn main() {
    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), Error> {
    let matches = App::new("rutas")
        .version("0.1.0")
        .about("Compare uninformed search strategies on the Ecuador road map")
        .arg(
            Arg::with_name("start")
                .value_name("START")
                .help("City to search from")
                .required_unless("list")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .value_name("GOAL")
                .help("City to search for")
                .required_unless("list")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("depth")
                .value_name("DEPTH")
                .short("d")
                .long("max-depth")
                .help("Depth bound for iterative deepening")
                .default_value("5")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("list")
                .short("l")
                .long("list")
                .help("List the cities in the road atlas and exit"),
        )
        .get_matches();

    let graph = map::road_map();

    if matches.is_present("list") {
        for city in graph.nodes() {
            println!("{}", city);
        }
        return Ok(());
    }

    let start = matches.value_of("start").unwrap().to_string();
    let goal = matches.value_of("goal").unwrap().to_string();

    let depth = value_t!(matches, "depth", i64).unwrap_or_else(|e| e.exit());
    if depth < 0 {
        return Err(SearchError::InvalidDepthBound(depth).into());
    }

    let results = searcher::run_all(&graph, &start, &goal, depth as usize)?;

    println!("Routes from {} to {} (depth bound {})", start, goal, depth);
    println!();
    print!("{}", table::render(&results));

    Ok(())
}
