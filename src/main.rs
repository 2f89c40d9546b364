use antsys::utils::config::Arguments;
use antsys::utils::yaml;
use antsys::{Colony, Error, Graph, Stop, Tsp};

fn main() -> Result<(), Error> {
    env_logger::init();
    let args: Arguments = argh::from_env();
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);

    let tsp = yaml::load_problem(&args.problem)?;
    let cities = tsp.cities();
    let graph = Graph::new(cities, tsp, config.graph.mode, config.graph.init_pheromone)?;
    let mut colony = Colony::new(graph, config.colony.clone(), config.seed)?;

    let stop = colony.optimize(&config.run)?;
    show_results(&colony, stop);
    Ok(())
}

fn show_results(colony: &Colony<Tsp>, stop: Stop) {
    let graph = colony.graph();
    let reason = match stop {
        Stop::Exhausted => "iteration budget exhausted",
        Stop::Stalled   => "no improvement",
    };
    println!("--- {} after {} iterations ({}) ---",
             graph.problem().name(), colony.history().len(), reason);
    match colony.best() {
        Some(best) => {
            println!("best cost {}", best.cost);
            println!("tour {:?}", graph.tour_nodes(&best.tour));
        }
        None => println!("no tour found"),
    }
    println!("history {:?}", colony.history());
}
