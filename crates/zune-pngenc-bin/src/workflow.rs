/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use log::{info, trace};
use zune_pngenc::{PngEncodeErrors, PngEncoder};

use crate::global_options::CmdOptions;

pub enum WorkflowErrors {
    IoErrors(std::io::Error),
    EncodeErrors(PngEncodeErrors)
}

impl Debug for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => writeln!(f, "I/O error {err}"),
            Self::EncodeErrors(err) => writeln!(f, "{err:?}")
        }
    }
}

impl From<std::io::Error> for WorkflowErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<PngEncodeErrors> for WorkflowErrors {
    fn from(value: PngEncodeErrors) -> Self {
        Self::EncodeErrors(value)
    }
}

/// Read the raw pixels, encode them and write the png
pub fn encode_from_cmd(options: &CmdOptions) -> Result<(), WorkflowErrors> {
    info!("Reading raw pixels from {}", options.input);
    let pixels = std::fs::read(&options.input)?;
    trace!("Read {} bytes", pixels.len());

    let start = Instant::now();
    // encode fully before creating the output so failures leave no partial file
    let png = PngEncoder::new(&pixels, options.options).encode_to_vec()?;
    info!("Encoding took {:?}", start.elapsed());

    let mut writer = BufWriter::new(File::create(&options.output)?);
    writer.write_all(&png)?;
    writer.flush()?;

    info!("Wrote {} bytes to {}", png.len(), options.output);
    Ok(())
}
