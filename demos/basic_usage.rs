//! Build small graphs and run the five queries.

use std::collections::HashMap;
use std::io;

use graph_queries::*;

fn main() -> GraphResult<()> {
    // Word graph: sun -> [moonlight, at], moonlight -> [sun, starry], at -> [at]
    let mut builder = GraphBuilder::new();
    let sun = builder.vertex("sun".to_string());
    let moon = builder.vertex("moonlight".to_string());
    let at = builder.vertex("at".to_string());
    let starry = builder.vertex("starry".to_string());
    builder
        .link_all(sun, &[moon, at])
        .link_all(moon, &[sun, starry])
        .self_loop(at);
    let words = builder.build()?;

    println!(
        "Word graph created with {} vertices and {} edges",
        words.vertex_count(),
        words.edge_count()
    );

    let query = GraphQueries::new();
    let mut stdout = io::stdout();

    println!("\nWords shorter than 6 characters from {}:", sun);
    query.print_short_words(&words, Some(sun), 6, &mut stdout)?;

    println!("\nLongest word from {}: {}", sun, query.longest_word(&words, Some(sun)));

    println!("\nSelf-loopers from {}:", sun);
    query.print_self_loopers(&words, Some(sun), &mut stdout)?;

    // Flight network: SEA -> PDX -> SFO, JFK isolated
    let mut flights = AirportGraph::new();
    for code in ["SEA", "PDX", "SFO", "JFK"] {
        flights.add_airport(code)?;
    }
    flights.add_flight_by_code("SEA", "PDX")?;
    flights.add_flight_by_code("PDX", "SFO")?;

    println!();
    for (from, to) in [("SEA", "SFO"), ("SFO", "SEA"), ("JFK", "JFK")] {
        let reachable = query.can_reach(&flights, flights.lookup(from), flights.lookup(to));
        println!("{} -> {}: {}", from, to, reachable);
    }

    // Adjacency list: A -> B, C isolated
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    adjacency.insert("A", vec!["B"]);
    adjacency.insert("B", vec![]);
    adjacency.insert("C", vec![]);

    let mut missed: Vec<_> = query.unreachable(&adjacency, &"A").into_iter().collect();
    missed.sort_unstable();
    println!("\nUnreachable from A: {:?}", missed);

    Ok(())
}
