use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use typewriter_core::Overwrite;

use super::{InputArgs, load_config};
use crate::{
    ops::{self, GenerateOptions, inputs},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Leave output files untouched when their content would not change
    #[arg(long)]
    pub skip_unchanged: bool,

    /// Preview generated declarations without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Output file (only with a single input; defaults to `<input>.types.ts`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = load_config(self.input.config.as_deref());
        let inputs = inputs::resolve(&self.input.inputs, self.input.exclude_patterns(&config))?;

        if self.output.is_some() && inputs.len() != 1 {
            bail!(
                "--output needs exactly one input, got {}",
                inputs.len()
            );
        }

        let overwrite = if self.skip_unchanged || config.generate.skip_unchanged {
            Overwrite::IfChanged
        } else {
            Overwrite::Always
        };

        let report = ops::generate(
            &inputs,
            &GenerateOptions {
                scalars: &config.scalars,
                overwrite,
                dry_run: self.dry_run,
                output: self.output.as_deref(),
            },
        );
        report.render(&mut TerminalOutput::new());

        let failed = report.failed();
        if failed > 0 {
            bail!("{} of {} schema(s) failed", failed, inputs.len());
        }

        Ok(())
    }
}
