/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use zune_core::colorspace::ColorSpace;
use zune_pngenc::{FilterChoice, FilterMethod};

/// Pixel layouts the raw input may be in
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ColorspaceArg {
    Luma,
    Rgb,
    Bgr,
    Bgra
}

impl ColorspaceArg {
    pub fn to_colorspace(self) -> ColorSpace {
        match self {
            Self::Luma => ColorSpace::Luma,
            Self::Rgb => ColorSpace::RGB,
            Self::Bgr => ColorSpace::BGR,
            Self::Bgra => ColorSpace::BGRA
        }
    }
}

impl ValueEnum for ColorspaceArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Luma, Self::Rgb, Self::Bgr, Self::Bgra]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Luma => PossibleValue::new("luma").help("One byte per pixel"),
            Self::Rgb => PossibleValue::new("rgb").help("Three bytes per pixel, red first"),
            Self::Bgr => PossibleValue::new("bgr").help("Three bytes per pixel, blue first"),
            Self::Bgra => PossibleValue::new("bgra").help("Four bytes per pixel, blue first")
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum FilterArg {
    Adaptive,
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl FilterArg {
    pub fn to_filter_choice(self) -> FilterChoice {
        match self {
            Self::Adaptive => FilterChoice::Adaptive,
            Self::None => FilterChoice::Forced(FilterMethod::None),
            Self::Sub => FilterChoice::Forced(FilterMethod::Sub),
            Self::Up => FilterChoice::Forced(FilterMethod::Up),
            Self::Average => FilterChoice::Forced(FilterMethod::Average),
            Self::Paeth => FilterChoice::Forced(FilterMethod::Paeth)
        }
    }
}

impl ValueEnum for FilterArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Adaptive,
            Self::None,
            Self::Sub,
            Self::Up,
            Self::Average,
            Self::Paeth
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Adaptive => PossibleValue::new("adaptive"),
            Self::None => PossibleValue::new("none"),
            Self::Sub => PossibleValue::new("sub"),
            Self::Up => PossibleValue::new("up"),
            Self::Average => PossibleValue::new("average"),
            Self::Paeth => PossibleValue::new("paeth")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-pngenc")
        .about("Encode raw pixels into a png file")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Raw pixel file to read data from")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Png file to write the data to")
            .required(true))
        .arg(Arg::new("width")
            .long("width")
            .help("Image width in pixels")
            .value_parser(value_parser!(usize))
            .required(true))
        .arg(Arg::new("height")
            .long("height")
            .help("Image height in pixels")
            .value_parser(value_parser!(usize))
            .required(true))
        .arg(Arg::new("colorspace")
            .long("colorspace")
            .help("Layout of the raw pixels")
            .value_parser(value_parser!(ColorspaceArg))
            .default_value("rgb"))
        .arg(Arg::new("stride")
            .long("stride")
            .help_heading("LAYOUT")
            .help("Bytes between the starts of two rows")
            .long_help("Bytes between the starts of two rows.\nDefaults to tightly packed rows")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("flip")
            .long("flip")
            .help_heading("LAYOUT")
            .action(ArgAction::SetTrue)
            .help("Store the last row first"))
        .arg(Arg::new("quality")
            .long("quality")
            .help_heading("COMPRESSION")
            .help("Match finder effort")
            .long_help("How many earlier positions are remembered per hash bucket.\nHigher values are slower but may compress better, values below 5 are treated as 5")
            .value_parser(value_parser!(u8))
            .default_value("8"))
        .arg(Arg::new("filter")
            .long("filter")
            .help_heading("COMPRESSION")
            .help("Scanline filter to use")
            .value_parser(value_parser!(FilterArg))
            .default_value("adaptive"))
        .arg(Arg::new("idat-size")
            .long("idat-size")
            .help_heading("COMPRESSION")
            .help("Split image data into IDAT chunks of at most this many bytes")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the encoding options"))
}
