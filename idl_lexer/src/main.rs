use idl_lexer::{file_processor, lexical, logging};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system
    logging::init_global_logging()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.idl> [--json]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let json_output = args.iter().skip(2).any(|a| a == "--json");

    process_single_file(&args[1], json_output)
}

fn print_help(program_name: &str) {
    println!("Identity DSL lexer v{}", env!("CARGO_PKG_VERSION"));
    println!("Tokenizes an identity/access DSL document and prints the lexeme stream");
    println!();
    println!("USAGE:");
    println!("    {} <input.idl>            # Print lexemes, one per line", program_name);
    println!("    {} <input.idl> --json     # Print lexemes as JSON", program_name);
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --json              Emit the lexeme stream as a JSON array");
    println!();
    println!("OUTPUT:");
    println!("    Success: the complete lexeme sequence, terminated by EOF");
    println!("    Failure: the sequence up to and including a single Error lexeme,");
    println!("             and a non-zero exit code");
    println!();
    println!("ENVIRONMENT:");
    println!("    IDL_LOG_LEVEL               error|warning|info|debug (default: info)");
    println!("    IDL_STRUCTURED_LOGGING      true for JSON log events");
    println!("    IDL_REQUIRE_IDL_EXTENSION   true to reject non-.idl files");
}

fn process_single_file(file_path: &str, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    logging::set_file_context(PathBuf::from(file_path));

    let file_result = match file_processor::process_file(file_path) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("FAILED: {}", error);
            std::process::exit(1);
        }
    };

    let mut lexer = lexical::Lexer::new();
    let stream = lexer.scan(&file_result.source);

    if json_output {
        let items: Vec<_> = stream.iter().collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for lexeme in &stream {
            println!("{}", lexeme);
        }
    }

    logging::clear_file_context();

    if let Some(message) = stream.error_message() {
        eprintln!("FAILED: {}", message);
        std::process::exit(1);
    }

    Ok(())
}
