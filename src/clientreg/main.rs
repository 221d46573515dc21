mod cli;

use clientreg::error::ClientRegError;
use colored::Colorize;

fn main() {
    if let Err(e) = cli::run() {
        match &e {
            ClientRegError::Validation(errors) => {
                eprintln!("{}", "Dados inválidos:".red());
                for (field, message) in errors.iter() {
                    eprintln!("  {}: {}", field, message);
                }
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
