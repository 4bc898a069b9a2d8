/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::encode_from_cmd;

mod cmd_args;
mod global_options;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    global_options::setup_logger(&options);

    let parsed_opts = global_options::parse_options(&options);

    if let Err(reason) = encode_from_cmd(&parsed_opts) {
        println!();
        error!(" Could not encode image, reason {:?}", reason);
        println!();
        exit(-1);
    }
}
