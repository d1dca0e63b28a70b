use std::{error::Error, io};

use bmi_cli::{config, prompt, Harness};
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    config::init_logging()?;

    info!("Starting BMI demonstration");
    let mut harness = Harness::new(Box::new(prompt::stdin_prompt()));
    harness.run(&mut io::stdout().lock())?;

    info!("Done");
    Ok(())
}
