use std::{
    fs::{File, OpenOptions},
    io::{Read, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use error::Error;
use huffman::HuffmanCoder;

mod cli;
pub mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodecMode {
    Compress,
    Decompress,
}

pub struct Arguments {
    mode: CodecMode,
    input_file: PathBuf,
    output_file: PathBuf,
    tree_file: PathBuf,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_string_lossy().into_owned(), e)
        })
}

fn read_text_file(file_path: &Path) -> Result<String> {
    let mut file = open_input_file(file_path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })?;
    String::from_utf8(bytes)
        .map_err(|_| Error::InputFileNotValidUtf8(file_path.to_string_lossy().into_owned()))
}

fn compress_file(arguments: &Arguments) -> Result<()> {
    let text = read_text_file(&arguments.input_file)?;
    let mut coder = HuffmanCoder::new();
    let payload = coder.compress(&text)?;
    let serialized_tree = coder.serialize_tree()?;
    let mut payload_writer = open_output_file(&arguments.output_file)?;
    payload_writer
        .write_all(payload.as_bytes())
        .map_err(Error::FailedToWritePayload)?;
    let mut tree_writer = open_output_file(&arguments.tree_file)?;
    tree_writer
        .write_all(serialized_tree.as_bytes())
        .map_err(Error::FailedToWriteTree)?;
    log::info!(
        "compressed {} symbols into {} bits ({} tree tokens)",
        text.chars().count(),
        payload.len(),
        serialized_tree.chars().count()
    );
    Ok(())
}

fn decompress_file(arguments: &Arguments) -> Result<()> {
    let payload = read_text_file(&arguments.input_file)?;
    let serialized_tree = read_text_file(&arguments.tree_file)?;
    let mut coder = HuffmanCoder::new();
    let text = coder.decompress(&payload, &serialized_tree)?;
    let mut text_writer = open_output_file(&arguments.output_file)?;
    text_writer
        .write_all(text.as_bytes())
        .map_err(Error::FailedToWriteText)?;
    log::info!(
        "decompressed {} bits into {} symbols",
        payload.len(),
        text.chars().count()
    );
    Ok(())
}

pub fn run(arguments: &Arguments) -> Result<()> {
    match arguments.mode {
        CodecMode::Compress => compress_file(arguments),
        CodecMode::Decompress => decompress_file(arguments),
    }
}
