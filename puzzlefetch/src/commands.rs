use crate::CLAP_STYLING;
use clap::arg;
use std::path::PathBuf;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("puzzlefetch")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("puzzlefetch")
        .styles(CLAP_STYLING)
        .about(
            "Extracts puzzle image urls from an apache logfile. With --todir, downloads \
            the images and builds an index.html.",
        )
        .arg(
            arg!(-d --"todir" <DIR>)
                .required(false)
                .help(
                    "Destination directory for downloaded images. WARNING: an existing \
                directory at this path is deleted recursively before the download starts.",
                )
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!([LOGFILE])
                .required(true)
                .help("Apache logfile to extract urls from")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}
