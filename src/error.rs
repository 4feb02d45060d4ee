use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    TreeNotBuilt,
    UndefinedSymbol(char),
    MalformedBitstream(&'static str),
    MalformedTree(&'static str),
    InputFileNotValidUtf8(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWritePayload(std::io::Error),
    FailedToWriteTree(std::io::Error),
    FailedToWriteText(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Input contains no symbols, nothing to compress")
            }
            Self::TreeNotBuilt => {
                write!(f, "No Huffman tree has been built yet, compress first")
            }
            Self::UndefinedSymbol(symbol) => {
                write!(f, "Symbol {:?} is not present in the code table", symbol)
            }
            Self::MalformedBitstream(reason) => {
                write!(f, "Malformed bitstream: {}", reason)
            }
            Self::MalformedTree(reason) => {
                write!(f, "Malformed serialized tree: {}", reason)
            }
            Self::InputFileNotValidUtf8(path) => {
                write!(f, "Input file '{}' is not valid UTF-8 text", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWritePayload(error) => {
                write!(f, "Failed to write compressed payload: {}", error)
            }
            Self::FailedToWriteTree(error) => {
                write!(f, "Failed to write serialized tree: {}", error)
            }
            Self::FailedToWriteText(error) => {
                write!(f, "Failed to write decompressed text: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}
