use std::{env, error::Error, fs::File, io, io::BufReader};

use bmi_cli::{batch, config};
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    config::init_logging()?;

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| batch::DEFAULT_INPUT.to_owned());
    info!("Classifying measurements from {}", path);
    let file = File::open(&path)?;
    let entries = batch::classify_reader(BufReader::new(file))?;

    serde_json::to_writer_pretty(io::stdout().lock(), &entries)?;
    println!();
    info!("Classified {} measurements", entries.len());
    Ok(())
}
