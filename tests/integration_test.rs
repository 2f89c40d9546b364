use antsys::utils::yaml;
use antsys::{Colony, Error, Graph, Mode, Schedule, Stop};

fn quiet(config: &antsys::Config) -> Schedule {
    Schedule { verbose: false, ..config.run.clone() }
}

#[test]
fn it_solves_rectangle() {
    let config = yaml::load_config("data/config/default.yaml").unwrap();
    let tsp = yaml::load_problem("data/problem/rectangle.yaml").unwrap();
    let graph = Graph::new(tsp.cities(), tsp, config.graph.mode,
                           config.graph.init_pheromone).unwrap();
    let mut colony = Colony::new(graph, config.colony.clone(), config.seed).unwrap();
    colony.optimize(&quiet(&config)).unwrap();

    let best = colony.best().unwrap();
    assert!((best.cost - 6.0).abs() < 1e-9);
    assert!(colony.history().len() <= 50);
    let tour: Vec<usize> = colony.graph().tour_nodes(&best.tour)
        .into_iter().copied().collect();
    let length = colony.graph().problem().tour_length(&tour).unwrap();
    assert!((length - best.cost).abs() < 1e-9);
}

#[test]
fn it_solves_grid_within_budget() {
    let config = yaml::load_config("data/config/default.yaml").unwrap();
    let tsp = yaml::load_problem("data/problem/grid.yaml").unwrap();
    let graph = Graph::complete(tsp.cities(), tsp).unwrap();
    let mut colony = Colony::new(graph, config.colony.clone(), config.seed).unwrap();
    colony.optimize(&quiet(&config)).unwrap();

    let best = colony.best().unwrap();
    assert_eq!(best.tour.len(), 6);
    let mut cities: Vec<usize> = best.tour.iter().map(|node| node.index()).collect();
    cities.sort_unstable();
    assert_eq!(cities, vec![0, 1, 2, 3, 4, 5]);
    // the perimeter of the 2x1 grid is the optimum
    assert!(best.cost >= 6.0 - 1e-9);
    assert!(best.cost <= colony.history()[0]);
}

#[test]
fn it_follows_oneway_roads() {
    let tsp = yaml::load_problem("data/problem/oneway.yaml").unwrap();
    let graph = Graph::complete(tsp.cities(), tsp).unwrap();
    assert_eq!(graph.edge_count(), 5);
    let config = yaml::load_config("data/config/default.yaml").unwrap();
    let mut colony = Colony::new(graph, config.colony.clone(), 1).unwrap();
    let stop = colony.optimize(&quiet(&config)).unwrap();

    // a single feasible cycle: the best is found at once, then nothing improves
    assert_eq!(stop, Stop::Stalled);
    assert_eq!(colony.history().len(), 11);
    assert_eq!(colony.best().unwrap().cost, 15.0);
}

#[test]
fn it_runs_in_cyclic_mode() {
    let config = yaml::load_config("data/config/cyclic.yaml").unwrap();
    assert_eq!(config.graph.mode, Mode::Cyclic);
    assert_eq!(config.graph.init_pheromone, 0.1);
    let tsp = yaml::load_problem("data/problem/grid.yaml").unwrap();
    let graph = Graph::new(tsp.cities(), tsp, config.graph.mode,
                           config.graph.init_pheromone).unwrap();
    assert_eq!(graph.edge_count(), 6);
    let mut colony = Colony::new(graph, config.colony.clone(), config.seed).unwrap();
    let stop = colony.optimize(&config.run).unwrap();

    assert_eq!(stop, Stop::Stalled);
    assert_eq!(colony.history().len(), 6);
    let best = colony.best().unwrap();
    let tour: Vec<usize> = best.tour.iter().map(|node| node.index()).collect();
    assert_eq!(tour, vec![1, 2, 3, 4, 5, 0]);
}

#[test]
fn it_reports_dead_ends() {
    let config = yaml::load_config("data/config/default.yaml").unwrap();
    let tsp = yaml::load_problem("data/problem/dead_end.yaml").unwrap();
    let graph = Graph::complete(tsp.cities(), tsp).unwrap();
    let mut colony = Colony::new(graph, config.colony.clone(), config.seed).unwrap();
    let error = colony.optimize(&quiet(&config)).unwrap_err();
    assert!(matches!(error, Error::Unreachable { .. }));
    assert!(!error.is_configuration());
}
