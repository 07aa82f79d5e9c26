use clap::Args;
use eyre::Result;

use super::{InputArgs, load_config};
use crate::{
    ops::{self, inputs},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = load_config(self.input.config.as_deref());
        let inputs = inputs::resolve(&self.input.inputs, self.input.exclude_patterns(&config))?;

        let report = ops::check(&inputs, &config.scalars);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
