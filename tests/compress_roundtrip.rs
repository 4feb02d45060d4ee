use huffman_text_codec::{run, CLIParser};
use std::path::PathBuf;
use std::{env, fs};

const INPUT_TEXT_PATH: &str = "tests/sample.txt";
const PAYLOAD_PATH: &str = "tests/sample.bits";
const TREE_PATH: &str = "tests/sample.tree";
const RECOVERED_TEXT_PATH: &str = "tests/sample_recovered.txt";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_path(relative: &str) -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(relative);
    root_path
}

fn cleanup() {
    for relative in [PAYLOAD_PATH, TREE_PATH, RECOVERED_TEXT_PATH] {
        let path = get_path(relative);
        if path.exists() && path.is_file() {
            fs::remove_file(path).expect("Deletion of output file failed");
        }
    }
}

#[test]
fn test_compress_then_decompress_recovers_the_input() {
    cleanup();
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "compress",
        get_path(INPUT_TEXT_PATH).to_str().unwrap(),
        get_path(PAYLOAD_PATH).to_str().unwrap(),
        "-t",
        get_path(TREE_PATH).to_str().unwrap(),
    ]);
    run(&arguments).expect("Compression failed");
    assert!(get_path(PAYLOAD_PATH).exists(), "Payload file was not created");
    assert!(get_path(TREE_PATH).exists(), "Tree file was not created");

    let payload = fs::read_to_string(get_path(PAYLOAD_PATH)).expect("Payload not readable");
    assert!(
        payload.chars().all(|bit| bit == '0' || bit == '1'),
        "Payload contains characters other than '0' and '1'"
    );

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        "decompress",
        get_path(PAYLOAD_PATH).to_str().unwrap(),
        get_path(RECOVERED_TEXT_PATH).to_str().unwrap(),
        "-t",
        get_path(TREE_PATH).to_str().unwrap(),
    ]);
    run(&arguments).expect("Decompression failed");

    let original = fs::read_to_string(get_path(INPUT_TEXT_PATH)).expect("Input not readable");
    let recovered =
        fs::read_to_string(get_path(RECOVERED_TEXT_PATH)).expect("Recovered text not readable");
    assert_eq!(recovered, original, "Round trip did not recover the input");
    cleanup();
}
