// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ecomap CLI entrypoint.
//!
//! Runs the interactive TUI over the built-in catalog. Flags only seed the
//! initial UI snapshot; nothing is read from disk and nothing is persisted.

use std::error::Error;

use ecomap::tui::{self, Tab};
use ecomap::view::ViewOptions;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--tab <map|canvas|flywheel|cra>] [--compact] [--filter <text>]\n\n\
--tab      start on the given tab (default: map)\n\
--compact  start with the compact spacing preset\n\
--filter   start with a node filter applied to the ecosystem map"
    );
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CliOptions {
    tab: Option<Tab>,
    compact: bool,
    filter: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tab" => {
                if options.tab.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.tab = Some(Tab::from_flag(&raw).ok_or(())?);
            }
            "--compact" => {
                if options.compact {
                    return Err(());
                }
                options.compact = true;
            }
            "--filter" => {
                if options.filter.is_some() {
                    return Err(());
                }
                options.filter = Some(args.next().ok_or(())?);
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "ecomap".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let view_options = ViewOptions {
            filter: options.filter.unwrap_or_default(),
            roomy_layout: !options.compact,
            ..ViewOptions::default()
        };

        tui::run(view_options, options.tab.unwrap_or(Tab::Map))
    })();

    if let Err(err) = result {
        eprintln!("ecomap: {err}");
        std::process::exit(1);
    }
}
