use log::debug;

/// Per-iteration report of a run: a table on stdout when verbose, debug
/// records otherwise.
pub struct Trace {
    verbose: bool,
}

impl Trace {
    pub fn new(verbose: bool) -> Self {
        if verbose {
            println!("| iter |         min        |         max        |        best        |");
        }
        Trace { verbose }
    }
    pub fn row(&self, iter: usize, min: f64, max: f64, best: f64) {
        debug!("iteration {} costs min {} max {} best {}", iter, min, max, best);
        if self.verbose {
            println!("{}", format_row(iter, min, max, best));
        }
    }
}

fn format_row(iter: usize, min: f64, max: f64, best: f64) -> String {
    format!("|{:>6}|{:>20}|{:>20}|{:>20}|", iter, min, max, best)
}
