/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use zune_pngenc::PngEncoderOptions;

use crate::cmd_args::{ColorspaceArg, FilterArg};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:   String,
    pub output:  String,
    pub options: PngEncoderOptions
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    // required and defaulted arguments are always present after parsing
    let input = options.get_one::<String>("in").cloned().unwrap_or_default();
    let output = options.get_one::<String>("out").cloned().unwrap_or_default();
    let width = options.get_one::<usize>("width").copied().unwrap_or(0);
    let height = options.get_one::<usize>("height").copied().unwrap_or(0);

    let colorspace = options
        .get_one::<ColorspaceArg>("colorspace")
        .copied()
        .unwrap_or(ColorspaceArg::Rgb);

    let mut encoder_options =
        PngEncoderOptions::new(width, height, colorspace.to_colorspace());

    if let Some(quality) = options.get_one::<u8>("quality") {
        encoder_options = encoder_options.set_quality(*quality);
    }
    if let Some(filter) = options.get_one::<FilterArg>("filter") {
        info!("Filter: {:?}", filter);
        encoder_options = encoder_options.set_filter(filter.to_filter_choice());
    }
    if let Some(stride) = options.get_one::<usize>("stride") {
        info!("Row stride: {stride}");
        encoder_options = encoder_options.set_stride(*stride);
    }
    if options.value_source("flip") == Some(ValueSource::CommandLine) {
        info!("Flipping image vertically");
        encoder_options = encoder_options.set_flip_vertically(true);
    }
    if let Some(size) = options.get_one::<usize>("idat-size") {
        info!("Splitting IDAT at {size} bytes");
        encoder_options = encoder_options.set_idat_chunk_size(*size);
    }

    CmdOptions {
        input,
        output,
        options: encoder_options
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let flag = |name: &str| options.get_flag(name);

    let log_level = if flag("debug") {
        Level::Debug
    } else if flag("trace") {
        Level::Trace
    } else if flag("warn") {
        Level::Warn
    } else if flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
