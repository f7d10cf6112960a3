// MFL: command-line driver for the MFL interpreter

use std::fs;
use std::io::{self, Read};
use std::process;

use mfl::interpreter::engine::SyntaxTree;
use mfl::parser::parse::Parser;
use tracing_subscriber::EnvFilter;

/// Command-line options
struct Options {
    /// Source path, or `-` for stdin
    input: String,
    /// Print the parsed tree before running it
    show_ast: bool,
}

impl Options {
    fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input = None;
        let mut show_ast = false;

        for arg in args {
            match arg.as_str() {
                "--ast" => show_ast = true,
                flag if flag.starts_with("--") => {
                    return Err(format!("Unknown option '{}'", flag));
                }
                path if input.is_none() => input = Some(path.to_string()),
                extra => return Err(format!("Unexpected argument '{}'", extra)),
            }
        }

        let input = input.ok_or_else(|| "No input file provided".to_string())?;
        Ok(Options { input, show_ast })
    }
}

fn usage(program_name: &str) {
    eprintln!();
    eprintln!("Usage: {} [--ast] <file.mfl>", program_name);
    eprintln!("       {} [--ast] -            # read the program from stdin", program_name);
    eprintln!();
    eprintln!("Set RUST_LOG=mfl=debug (or trace) to see interpreter logs.");
}

fn read_source(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("mfl");

    let options = match Options::from_args(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            usage(program_name);
            process::exit(1);
        }
    };

    let source = match read_source(&options.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", options.input, e);
            process::exit(1);
        }
    };

    let mut tree: SyntaxTree = match Parser::new(&source).and_then(|mut parser| parser.parse()) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            process::exit(1);
        }
    };

    if options.show_ast {
        print!("{}", tree.print_tree());
    }

    match tree.run() {
        Ok(Some(value)) => println!("{}", value),
        Ok(None) => println!("(no result)"),
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            process::exit(1);
        }
    }
}
