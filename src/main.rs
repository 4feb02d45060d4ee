use std::env::args_os;

use huffman_text_codec::{run, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(_) => println!("Done"),
        Err(e) => eprintln!("Failed because of: {}", e),
    }
}
