use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli_args::Cli;

/// Run `recvcheck completion <shell>` -- generate shell completion scripts for the given shell.
pub fn run(shell: &str) -> i32 {
    let shell = match parse_shell(shell) {
        Some(s) => s,
        None => {
            eprintln!("error: unsupported shell '{shell}'");
            eprintln!("supported: bash, zsh, fish, elvish, powershell");
            return 2;
        }
    };

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "recvcheck", &mut std::io::stdout());
    0
}

fn parse_shell(name: &str) -> Option<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "elvish" => Some(Shell::Elvish),
        "powershell" | "ps" => Some(Shell::PowerShell),
        _ => None,
    }
}
