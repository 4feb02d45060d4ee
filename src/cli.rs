use crate::{Arguments, CodecMode};
use clap::{
    arg, builder::PossibleValue, crate_authors, crate_description, crate_name, crate_version,
    value_parser, Arg, ArgMatches, Command, ValueEnum,
};
use std::ffi::OsString;
use std::path::PathBuf;

impl ValueEnum for CodecMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Compress, Self::Decompress]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Compress => Some(PossibleValue::new("compress")),
            Self::Decompress => Some(PossibleValue::new("decompress")),
        }
    }
}

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_mode_argument(command);
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        Self::register_tree_file_argument(command)
    }

    fn register_mode_argument(command: Command) -> Command {
        command.arg(Self::create_mode_argument())
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_tree_file_argument(command: Command) -> Command {
        command.arg(Self::create_tree_file_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_mode_argument() -> Arg {
        Arg::new("mode")
            .help("Whether to compress or decompress the input file")
            .value_parser(value_parser!(CodecMode))
            .required(true)
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the input file (text to compress, or payload to decompress)")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to the output file (payload, or recovered text)")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_tree_file_argument() -> Arg {
        arg!(tree_file: -t --tree_file <FILE> "Path to the serialized tree file")
            .default_value("tree.huff")
            .value_parser(value_parser!(PathBuf))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            mode: Self::extract_mode_argument(matches),
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            tree_file: Self::extract_tree_file_argument(matches),
        }
    }

    fn extract_mode_argument(matches: &ArgMatches) -> CodecMode {
        matches
            .get_one::<CodecMode>("mode")
            .expect("Required argument mode not provided")
            .to_owned()
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_tree_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("tree_file")
            .expect("Tree file must be provided, but was unset")
            .clone()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
