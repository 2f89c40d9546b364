use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::{Error, Result};
use crate::problem::tsp::{Euclidean, LandscapeEnum, Matrix, Tsp};

#[derive(Deserialize)]
struct ProblemYaml {
    name: String,
    landscape: LandscapeYaml,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum LandscapeYaml {
    Euclidean { coords: Vec<[f64; 2]> },
    Matrix { distances: Vec<Vec<Option<f64>>> },
}

pub fn load_config(path: &str) -> Result<Config> {
    let text = read(path)?;
    serde_yaml::from_str(&text)
        .map_err(|e| Error::Yaml(path.to_owned(), e))
}

pub fn load_problem(path: &str) -> Result<Tsp> {
    let text = read(path)?;
    let yaml: ProblemYaml = serde_yaml::from_str(&text)
        .map_err(|e| Error::Yaml(path.to_owned(), e))?;
    let landscape: LandscapeEnum = match yaml.landscape {
        LandscapeYaml::Euclidean { coords } => Euclidean::new(coords).into(),
        LandscapeYaml::Matrix { distances } => Matrix::new(distances)?.into(),
    };
    Ok(Tsp::new(&yaml.name, landscape))
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::Io(path.to_owned(), e))
}
