use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{
    generate,
    shells::{Bash, Fish, Zsh},
};
use std::io;

use crate::Cli;

pub fn run(shell: String) -> Result<()> {
    let mut cmd = Cli::command();
    match shell.as_str() {
        "bash" => generate(Bash, &mut cmd, "faasctl", &mut io::stdout()),
        "zsh" => generate(Zsh, &mut cmd, "faasctl", &mut io::stdout()),
        "fish" => generate(Fish, &mut cmd, "faasctl", &mut io::stdout()),
        other => {
            eprintln!("unsupported shell '{}', choose: bash, zsh, fish", other);
            std::process::exit(1);
        }
    }
    Ok(())
}
